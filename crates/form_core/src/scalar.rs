//! Text field holding one number, bound to a single-handle slider.

use crate::field::{FieldSpec, FieldSpecError};
use crate::parse::{format_scalar, try_parse};
use input_core::{InputId, InputStore};
use slider_core::ScalarSlider;

/// Keeps a numeric text field and a [`ScalarSlider`] showing the same value.
///
/// Unparseable text moves the slider to `range_start`; like the range
/// controller, the text itself is only corrected when the value is next
/// queried through [`value`](Self::value).
#[derive(Debug)]
pub struct ScalarFieldController<S> {
    spec: FieldSpec,
    fallback: f64,
    text: InputId,
    slider: S,
    stale_text: Option<String>,
}

impl<S: ScalarSlider> ScalarFieldController<S> {
    pub fn initialize<T: InputStore + ?Sized>(
        spec: FieldSpec,
        text: InputId,
        mut slider: S,
        store: &mut T,
    ) -> Result<Self, FieldSpecError> {
        let options = spec.slider_options()?;
        let fallback = options.min;

        let raw = store.get(text).unwrap_or_default();
        let value = match try_parse::<1>(raw) {
            Some([v]) => v,
            None => {
                log::debug!(
                    target: "form.scalar",
                    "{}: initial text {raw:?} is not a number, using {fallback}",
                    spec.name
                );
                fallback
            }
        };
        slider.configure(options, value);

        // Out-of-bounds text is kept as typed for validation to flag.
        let shown = if (options.min..=options.max).contains(&value) {
            format_scalar(slider.value(), options.precision())
        } else {
            value.to_string()
        };
        store.set(text, shown);

        Ok(Self {
            spec,
            fallback,
            text,
            slider,
            stale_text: None,
        })
    }

    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    pub fn text_id(&self) -> InputId {
        self.text
    }

    pub fn slider(&self) -> &S {
        &self.slider
    }

    /// The handle moved to `value`: write it into the text as the slider
    /// reported it.
    pub fn on_slider_drag<T: InputStore + ?Sized>(&mut self, value: f64, store: &mut T) {
        store.set(self.text, value.to_string());
        self.stale_text = None;
    }

    /// The text was committed: move the handle to what it says.
    pub fn on_text_changed<T: InputStore + ?Sized>(&mut self, store: &mut T) {
        let raw = store.get(self.text).unwrap_or_default();
        match try_parse::<1>(raw) {
            Some([value]) => {
                self.slider.set_value(value);
                self.stale_text = None;
            }
            None => {
                log::debug!(
                    target: "form.scalar",
                    "{}: malformed number {raw:?}, slider reset to {}",
                    self.spec.name,
                    self.fallback
                );
                self.slider.set_value(self.fallback);
                self.stale_text = Some(raw.to_string());
            }
        }
    }

    /// Drag the owned slider and mirror the move into the text.
    pub fn drag<T: InputStore + ?Sized>(&mut self, value: f64, store: &mut T) -> bool
    where
        S: DragScalar,
    {
        let Some(value) = self.slider.slide_to(value) else {
            return false;
        };
        self.on_slider_drag(value, store);
        true
    }

    /// Current slider value, correcting text the slider already replaced.
    pub fn value<T: InputStore + ?Sized>(&mut self, store: &mut T) -> f64 {
        if let Some(stale) = self.stale_text.take()
            && store.get(self.text) == Some(stale.as_str())
        {
            let precision = self.slider.options().precision();
            store.set(self.text, format_scalar(self.fallback, precision));
        }
        self.slider.value()
    }
}

/// Single-handle sliders the controller can drag itself.
pub trait DragScalar {
    fn slide_to(&mut self, value: f64) -> Option<f64>;
}

impl DragScalar for slider_core::SliderModel {
    fn slide_to(&mut self, value: f64) -> Option<f64> {
        slider_core::SliderModel::slide_to(self, value)
    }
}
