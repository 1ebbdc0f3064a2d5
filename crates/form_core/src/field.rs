//! Declared parameter fields.

use serde::{Deserialize, Serialize};
use slider_core::SliderOptions;
use std::fmt;

/// Declared kind of a parameter field.
///
/// Each kind has a class marker the page renders on its `<input>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Integer,
    Float,
    BoundedInteger,
    BoundedFloat,
    BoundedRange,
}

impl FieldKind {
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Integer,
        FieldKind::Float,
        FieldKind::BoundedInteger,
        FieldKind::BoundedFloat,
        FieldKind::BoundedRange,
    ];

    /// Class token identifying this kind in markup.
    pub const fn marker(self) -> &'static str {
        match self {
            FieldKind::Integer => "npsgdInteger",
            FieldKind::Float => "npsgdFloat",
            FieldKind::BoundedInteger => "npsgdIntegerRange",
            FieldKind::BoundedFloat => "npsgdFloatRange",
            FieldKind::BoundedRange => "npsgdRange",
        }
    }

    pub fn from_marker(marker: &str) -> Option<FieldKind> {
        Self::ALL.into_iter().find(|kind| kind.marker() == marker)
    }

    /// Bounded kinds require both `range_start` and `range_end`.
    pub const fn is_bounded(self) -> bool {
        matches!(
            self,
            FieldKind::BoundedInteger | FieldKind::BoundedFloat | FieldKind::BoundedRange
        )
    }

    pub const fn is_integer(self) -> bool {
        matches!(self, FieldKind::Integer | FieldKind::BoundedInteger)
    }
}

/// Which end of a field's bounds an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Start => f.write_str("rangeStart"),
            Bound::End => f.write_str("rangeEnd"),
        }
    }
}

/// A malformed field declaration.
///
/// These come from the declaration layer (markup or config), never from
/// user input: text the user types is resolved by fallback, not reported.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldSpecError {
    MissingName,
    MissingBound {
        field: String,
        bound: Bound,
    },
    InvalidNumber {
        field: String,
        attribute: &'static str,
        value: String,
    },
    UnknownKind {
        field: String,
        marker: String,
    },
    InvertedBounds {
        field: String,
        start: f64,
        end: f64,
    },
    NonPositiveStep {
        field: String,
        step: f64,
    },
    /// Two parameter fields in one form share a name.
    DuplicateName(String),
}

impl fmt::Display for FieldSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSpecError::MissingName => f.write_str("parameter field has no name"),
            FieldSpecError::MissingBound { field, bound } => {
                write!(f, "{field}: bounded field is missing {bound}")
            }
            FieldSpecError::InvalidNumber {
                field,
                attribute,
                value,
            } => write!(f, "{field}: {attribute} is not a number: {value:?}"),
            FieldSpecError::UnknownKind { field, marker } => {
                write!(f, "{field}: unknown parameter kind marker {marker:?}")
            }
            FieldSpecError::InvertedBounds { field, start, end } => {
                write!(f, "{field}: rangeStart {start} is greater than rangeEnd {end}")
            }
            FieldSpecError::NonPositiveStep { field, step } => {
                write!(f, "{field}: step must be positive, got {step}")
            }
            FieldSpecError::DuplicateName(name) => {
                write!(f, "parameter field {name:?} is declared twice")
            }
        }
    }
}

impl std::error::Error for FieldSpecError {}

/// One declared parameter field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub range_start: Option<f64>,
    #[serde(default)]
    pub range_end: Option<f64>,
    #[serde(default)]
    pub step: Option<f64>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            range_start: None,
            range_end: None,
            step: None,
        }
    }

    pub fn with_bounds(mut self, start: f64, end: f64) -> Self {
        self.range_start = Some(start);
        self.range_end = Some(end);
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Check the declaration-layer preconditions.
    pub fn validate(&self) -> Result<(), FieldSpecError> {
        if self.name.trim().is_empty() {
            return Err(FieldSpecError::MissingName);
        }
        if self.kind.is_bounded() {
            self.bounds()?;
        }
        if let (Some(start), Some(end)) = (self.range_start, self.range_end)
            && start > end
        {
            return Err(FieldSpecError::InvertedBounds {
                field: self.name.clone(),
                start,
                end,
            });
        }
        if let Some(step) = self.step
            && (step.is_nan() || step <= 0.0)
        {
            return Err(FieldSpecError::NonPositiveStep {
                field: self.name.clone(),
                step,
            });
        }
        Ok(())
    }

    /// Both bounds, or the first one missing.
    pub fn bounds(&self) -> Result<(f64, f64), FieldSpecError> {
        let start = self.range_start.ok_or_else(|| FieldSpecError::MissingBound {
            field: self.name.clone(),
            bound: Bound::Start,
        })?;
        let end = self.range_end.ok_or_else(|| FieldSpecError::MissingBound {
            field: self.name.clone(),
            bound: Bound::End,
        })?;
        Ok((start, end))
    }

    /// Whether the page attaches a slider to this field: always for ranges,
    /// and for bounded scalars that declare a step.
    pub fn has_slider(&self) -> bool {
        match self.kind {
            FieldKind::BoundedRange => true,
            FieldKind::BoundedInteger | FieldKind::BoundedFloat => self.step.is_some(),
            FieldKind::Integer | FieldKind::Float => false,
        }
    }

    /// Slider configuration for this field. A missing step means 1.
    pub fn slider_options(&self) -> Result<SliderOptions, FieldSpecError> {
        let (start, end) = self.bounds()?;
        Ok(SliderOptions::new(start, end, self.step.unwrap_or(1.0)))
    }
}
