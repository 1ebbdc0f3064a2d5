//! # input_core
//!
//! UI-agnostic text field state for parameter forms.
//!
//! This crate provides the text side of a text/slider pair:
//! - [`InputId`]: An opaque handle naming one text field
//! - [`InputValueStore`]: Central store for field values, carets and commit tracking
//! - [`InputStore`]: The narrow interface controllers write through
//!
//! ## Design Principles
//!
//! The store knows nothing about sliders, numbers or validation. It models a
//! single-line text input the way a browser does: user edits mark the value
//! dirty, programmatic writes do not, and a commit (blur or enter) reports
//! whether a `change` should fire.
//!
//! ## Example
//!
//! ```
//! use input_core::{InputId, InputValueStore};
//!
//! let mut store = InputValueStore::new();
//! let id = InputId::from_raw(7);
//!
//! store.ensure_initial(id, "20-80".to_string());
//! store.backspace(id);
//! store.insert_text(id, "5");
//!
//! assert_eq!(store.get(id), Some("20-85"));
//! assert!(store.commit(id));
//! assert!(!store.commit(id));
//! ```

mod id;
mod state;
mod store;
mod text;
mod traits;

pub use id::InputId;
pub use store::InputValueStore;
pub use traits::InputStore;

pub use text::{
    clamp_to_char_boundary, filter_single_line, next_cursor_boundary, prev_cursor_boundary,
};
