//! # slider_core
//!
//! Headless slider models: the value side of a slider widget, without any
//! rendering. Two capability traits describe what a text/slider controller
//! needs from a widget:
//! - [`ScalarSlider`]: one handle
//! - [`RangeSlider`]: two handles bounding an inclusive range
//!
//! [`SliderModel`] and [`RangeSliderModel`] implement them with the usual
//! widget rules: values are clamped to `[min, max]`, aligned to
//! `min + k * step` and rounded to the step's decimal precision. A drag on
//! one handle of a range slider cannot cross the other handle.
//!
//! Drags return the new value(s) instead of invoking a callback. The host
//! forwards them to whichever controller owns the slider.

mod model;
mod options;
mod range;

pub use model::SliderModel;
pub use options::{SliderOptions, decimal_places};
pub use range::{Handle, RangeSliderModel};

/// Single-handle slider capability.
pub trait ScalarSlider {
    /// Reset bounds, step and the handle position.
    fn configure(&mut self, options: SliderOptions, value: f64);

    fn options(&self) -> SliderOptions;

    /// Current handle position, aligned to the step grid.
    fn value(&self) -> f64;

    /// Move the handle without firing a slide.
    fn set_value(&mut self, value: f64);
}

/// Dual-handle slider capability.
pub trait RangeSlider {
    /// Reset bounds, step and both handle positions.
    fn configure(&mut self, options: SliderOptions, values: (f64, f64));

    fn options(&self) -> SliderOptions;

    /// Current `(low, high)` handle positions, aligned to the step grid.
    fn values(&self) -> (f64, f64);

    /// Move both handles without firing a slide.
    fn set_values(&mut self, low: f64, high: f64);
}
