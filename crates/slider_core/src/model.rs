//! Single-handle slider.

use crate::ScalarSlider;
use crate::options::SliderOptions;

#[derive(Clone, Debug)]
pub struct SliderModel {
    options: SliderOptions,
    value: f64,
}

impl SliderModel {
    pub fn new(options: SliderOptions, value: f64) -> Self {
        Self {
            value: options.align(value),
            options,
        }
    }

    /// Drag the handle towards `value`.
    ///
    /// Returns the new aligned value when the handle actually moved, which
    /// is when the host should fire a slide to the owning controller.
    pub fn slide_to(&mut self, value: f64) -> Option<f64> {
        let next = self.options.align(value);
        if next == self.value {
            return None;
        }
        log::trace!(target: "slider", "slide {} -> {next}", self.value);
        self.value = next;
        Some(next)
    }
}

impl Default for SliderModel {
    fn default() -> Self {
        Self::new(SliderOptions::new(0.0, 100.0, 1.0), 0.0)
    }
}

impl ScalarSlider for SliderModel {
    fn configure(&mut self, options: SliderOptions, value: f64) {
        self.options = options;
        self.value = options.align(value);
    }

    fn options(&self) -> SliderOptions {
        self.options
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn set_value(&mut self, value: f64) {
        self.value = self.options.align(value);
    }
}
