//! Text field holding a `low-high` range, bound to a dual-handle slider.

use crate::field::{FieldSpec, FieldSpecError};
use crate::parse::{format_range, try_parse};
use input_core::{InputId, InputStore};
use slider_core::{Handle, RangeSlider};

/// Keeps a range text field and a [`RangeSlider`] showing the same pair.
///
/// Either side may change the value; whichever event arrives last wins.
/// Malformed text moves the slider to the full bound range immediately but
/// leaves the text alone until the controller is next asked for the slider
/// values, so the user's input is not overwritten while they look at it.
#[derive(Debug)]
pub struct RangeFieldController<S> {
    spec: FieldSpec,
    bounds: (f64, f64),
    text: InputId,
    slider: S,
    // Malformed text the slider currently disagrees with.
    stale_text: Option<String>,
}

impl<S: RangeSlider> RangeFieldController<S> {
    /// Bind `text` to `slider`, resolving the field's current text.
    ///
    /// Fails only when `spec` lacks the bounds a slider needs.
    pub fn initialize<T: InputStore + ?Sized>(
        spec: FieldSpec,
        text: InputId,
        mut slider: S,
        store: &mut T,
    ) -> Result<Self, FieldSpecError> {
        let options = spec.slider_options()?;
        let bounds = (options.min, options.max);

        let raw = store.get(text).unwrap_or_default();
        let (low, high) = resolve(&spec.name, raw, bounds);
        slider.configure(options, (low, high));

        // In-bounds values show as the slider snapped them; out-of-bounds
        // ones stay as typed for validation to flag.
        let (slid_low, slid_high) = slider.values();
        let shown = |parsed: f64, slid: f64| {
            if (bounds.0..=bounds.1).contains(&parsed) {
                slid
            } else {
                parsed
            }
        };
        store.set(text, format_range(shown(low, slid_low), shown(high, slid_high)));

        Ok(Self {
            spec,
            bounds,
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

    /// A slider handle moved to `(low, high)`: mirror it into the text.
    pub fn on_slider_drag<T: InputStore + ?Sized>(
        &mut self,
        low: f64,
        high: f64,
        store: &mut T,
    ) {
        store.set(self.text, format_range(low, high));
        self.stale_text = None;
    }

    /// The text was committed: move both handles to what it says.
    pub fn on_text_changed<T: InputStore + ?Sized>(&mut self, store: &mut T) {
        let raw = store.get(self.text).unwrap_or_default();
        match try_parse::<2>(raw) {
            Some([low, high]) => {
                self.slider.set_values(low, high);
                self.stale_text = None;
            }
            None => {
                log::debug!(
                    target: "form.range",
                    "{}: malformed range {raw:?}, slider reset to bounds",
                    self.spec.name
                );
                self.slider.set_values(self.bounds.0, self.bounds.1);
                self.stale_text = Some(raw.to_string());
            }
        }
    }

    /// Drag one handle of the owned slider and mirror the move into the text.
    ///
    /// Returns `true` if the handle moved.
    pub fn drag<T: InputStore + ?Sized>(
        &mut self,
        handle: Handle,
        value: f64,
        store: &mut T,
    ) -> bool
    where
        S: DragRange,
    {
        let Some((low, high)) = self.slider.slide_handle(handle, value) else {
            return false;
        };
        self.on_slider_drag(low, high, store);
        true
    }

    /// Like [`drag`](Self::drag), for a pointer that has not grabbed a
    /// handle yet: the nearest one follows it.
    pub fn drag_nearest<T: InputStore + ?Sized>(&mut self, value: f64, store: &mut T) -> bool
    where
        S: DragRange,
    {
        let Some((low, high)) = self.slider.slide_nearest(value) else {
            return false;
        };
        self.on_slider_drag(low, high, store);
        true
    }

    /// Current slider values.
    ///
    /// If the text still shows malformed input the slider already replaced
    /// with the bounds, the text is rewritten to the bounds first.
    pub fn values<T: InputStore + ?Sized>(&mut self, store: &mut T) -> (f64, f64) {
        if let Some(stale) = self.stale_text.take()
            && store.get(self.text) == Some(stale.as_str())
        {
            store.set(self.text, format_range(self.bounds.0, self.bounds.1));
        }
        self.slider.values()
    }
}

/// Range sliders the controller can drag itself.
///
/// Hosts with an external widget skip this and call
/// [`RangeFieldController::on_slider_drag`] from the widget's slide event.
pub trait DragRange {
    fn slide_handle(&mut self, handle: Handle, value: f64) -> Option<(f64, f64)>;

    /// Grab the handle nearest to `value` and drag it there.
    fn slide_nearest(&mut self, value: f64) -> Option<(f64, f64)>;
}

impl DragRange for slider_core::RangeSliderModel {
    fn slide_handle(&mut self, handle: Handle, value: f64) -> Option<(f64, f64)> {
        slider_core::RangeSliderModel::slide_handle(self, handle, value)
    }

    fn slide_nearest(&mut self, value: f64) -> Option<(f64, f64)> {
        let handle = self.nearest_handle(value);
        slider_core::RangeSliderModel::slide_handle(self, handle, value)
    }
}

fn resolve(name: &str, raw: &str, bounds: (f64, f64)) -> (f64, f64) {
    match try_parse::<2>(raw) {
        Some([low, high]) => (low, high),
        None => {
            log::debug!(
                target: "form.range",
                "{name}: initial text {raw:?} is not a range, using {}-{}",
                bounds.0,
                bounds.1
            );
            bounds
        }
    }
}
