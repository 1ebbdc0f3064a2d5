//! # form_core
//!
//! Keeps parameter text fields and their sliders in agreement, and derives
//! validation rules from the fields' declarations.
//!
//! - [`RangeFieldController`]: a `low-high` text field and a two-handle slider
//! - [`ScalarFieldController`]: a numeric text field and a one-handle slider
//! - [`rules::build`]: declared fields to a [`RuleSet`]
//! - [`ParameterForm`]: binds a rendered form and routes [`FieldEvent`]s
//!
//! Text the user types is never an error here. Unparseable text resolves to
//! the field's bounds; out-of-range values are left for the rules to flag.
//! Only malformed declarations produce a [`FieldSpecError`].

pub mod config;
mod field;
mod form;
mod markup;
pub mod parse;
mod range;
pub mod rules;
mod scalar;

pub use config::{ConfigError, FieldDecl, FormDecl};
pub use field::{Bound, FieldKind, FieldSpec, FieldSpecError};
pub use form::{BoundController, FieldEvent, ParameterForm, SliderReading};
pub use markup::{ATTR_RANGE_END, ATTR_RANGE_START, ATTR_STEP, InputElement, MARKER_PREFIX};
pub use range::{DragRange, RangeFieldController};
pub use rules::{Constraint, FieldRule, RuleSet};
pub use scalar::{DragScalar, ScalarFieldController};
