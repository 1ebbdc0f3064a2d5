//! Decoding parameter fields from rendered `<input>` attributes.
//!
//! The page marks each parameter input with a class token naming its kind
//! (see [`FieldKind::marker`]) and carries bounds in `data-rangeStart`,
//! `data-rangeEnd` and `data-step`. Unbounded fields are rendered with the
//! literal `None` in those attributes.

use crate::field::{FieldKind, FieldSpec, FieldSpecError};
use crate::parse::parse_strict;
use std::sync::Arc;

pub const ATTR_RANGE_START: &str = "data-rangeStart";
pub const ATTR_RANGE_END: &str = "data-rangeEnd";
pub const ATTR_STEP: &str = "data-step";

/// Class tokens with this prefix mark parameter fields.
pub const MARKER_PREFIX: &str = "npsgd";

/// An `<input>` element as a list of attributes, in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputElement {
    pub attributes: Vec<(Arc<str>, Option<String>)>,
}

impl InputElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.push((Arc::from(name), Some(value.into())));
        self
    }

    /// First value of attribute `name`, compared ASCII case-insensitively.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_ascii_whitespace()
    }

    pub fn name(&self) -> Option<&str> {
        self.attr("name").map(str::trim).filter(|s| !s.is_empty())
    }

    /// The `value` attribute, or empty.
    pub fn value(&self) -> &str {
        self.attr("value").unwrap_or("")
    }
}

impl FieldSpec {
    /// Decode a parameter field from its `<input>`.
    ///
    /// Returns `Ok(None)` for inputs that carry no parameter marker, such as
    /// the email field or hidden inputs.
    pub fn from_element(el: &InputElement) -> Result<Option<FieldSpec>, FieldSpecError> {
        let Some(marker) = el.classes().find(|c| c.starts_with(MARKER_PREFIX)) else {
            return Ok(None);
        };
        let name = el.name().ok_or(FieldSpecError::MissingName)?;
        let kind = FieldKind::from_marker(marker).ok_or_else(|| FieldSpecError::UnknownKind {
            field: name.to_string(),
            marker: marker.to_string(),
        })?;

        let spec = FieldSpec {
            name: name.to_string(),
            kind,
            range_start: number_attr(el, name, ATTR_RANGE_START)?,
            range_end: number_attr(el, name, ATTR_RANGE_END)?,
            step: number_attr(el, name, ATTR_STEP)?,
        };
        spec.validate()?;
        Ok(Some(spec))
    }
}

fn number_attr(
    el: &InputElement,
    field: &str,
    attribute: &'static str,
) -> Result<Option<f64>, FieldSpecError> {
    let raw = el.attr(attribute).map(str::trim).unwrap_or("");
    if raw.is_empty() || raw == "None" {
        return Ok(None);
    }
    parse_strict(raw)
        .map(Some)
        .ok_or_else(|| FieldSpecError::InvalidNumber {
            field: field.to_string(),
            attribute,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Bound;

    fn range_input() -> InputElement {
        InputElement::new()
            .with_attr("type", "text")
            .with_attr("class", "npsgdRange")
            .with_attr("name", "wavelength")
            .with_attr("value", "420.5-500")
            .with_attr("data-rangestart", "400")
            .with_attr("data-rangeend", "700")
            .with_attr("data-step", "0.5")
    }

    #[test]
    fn decodes_range_field() {
        let spec = FieldSpec::from_element(&range_input())
            .expect("valid")
            .expect("parameter");

        assert_eq!(
            spec,
            FieldSpec::new("wavelength", FieldKind::BoundedRange)
                .with_bounds(400.0, 700.0)
                .with_step(0.5)
        );
    }

    #[test]
    fn none_attributes_mean_unbounded() {
        let el = InputElement::new()
            .with_attr("class", "npsgdInteger")
            .with_attr("name", "runs")
            .with_attr("data-rangeStart", "None")
            .with_attr("data-rangeEnd", "None")
            .with_attr("data-step", "None");

        let spec = FieldSpec::from_element(&el).expect("valid").expect("parameter");
        assert_eq!(spec, FieldSpec::new("runs", FieldKind::Integer));
    }

    #[test]
    fn unmarked_inputs_are_not_parameters() {
        let email = InputElement::new()
            .with_attr("type", "text")
            .with_attr("name", "email");
        assert_eq!(FieldSpec::from_element(&email), Ok(None));
    }

    #[test]
    fn marker_is_found_among_other_classes() {
        let el = InputElement::new()
            .with_attr("class", "wide npsgdFloat  required")
            .with_attr("name", "gain");
        let spec = FieldSpec::from_element(&el).expect("valid").expect("parameter");
        assert_eq!(spec.kind, FieldKind::Float);
    }

    #[test]
    fn unknown_marker_is_an_error() {
        let el = InputElement::new()
            .with_attr("class", "npsgdSelect")
            .with_attr("name", "mode");
        assert_eq!(
            FieldSpec::from_element(&el),
            Err(FieldSpecError::UnknownKind {
                field: "mode".to_string(),
                marker: "npsgdSelect".to_string(),
            })
        );
    }

    #[test]
    fn declaration_errors_are_reported() {
        let missing = InputElement::new()
            .with_attr("class", "npsgdFloatRange")
            .with_attr("name", "gain")
            .with_attr("data-rangeEnd", "3");
        assert_eq!(
            FieldSpec::from_element(&missing),
            Err(FieldSpecError::MissingBound {
                field: "gain".to_string(),
                bound: Bound::Start,
            })
        );

        let garbage = range_input().with_attr("data-step", "ignored");
        let mut el = range_input();
        el.attributes.retain(|(k, _)| !k.eq_ignore_ascii_case("data-step"));
        el.attributes.push((Arc::from("data-step"), Some("fast".to_string())));
        assert!(matches!(
            FieldSpec::from_element(&el),
            Err(FieldSpecError::InvalidNumber { attribute: ATTR_STEP, .. })
        ));
        // First occurrence wins, as in the DOM.
        assert!(FieldSpec::from_element(&garbage).is_ok());

        let nameless = InputElement::new().with_attr("class", "npsgdFloat");
        assert_eq!(
            FieldSpec::from_element(&nameless),
            Err(FieldSpecError::MissingName)
        );
    }
}
