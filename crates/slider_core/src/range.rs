//! Dual-handle slider selecting an inclusive range.

use crate::RangeSlider;
use crate::options::SliderOptions;

/// Which handle of a [`RangeSliderModel`] is being dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handle {
    Low,
    High,
}

/// Two handles on one track.
///
/// Programmatic [`set_values`](RangeSlider::set_values) stores whatever pair
/// it is given (aligned, but not reordered), so a host can show an
/// out-of-order value it was told to show. Drags, on the other hand, stop a
/// handle at the other one.
#[derive(Clone, Debug)]
pub struct RangeSliderModel {
    options: SliderOptions,
    low: f64,
    high: f64,
}

impl RangeSliderModel {
    pub fn new(options: SliderOptions, low: f64, high: f64) -> Self {
        Self {
            low: options.align(low),
            high: options.align(high),
            options,
        }
    }

    /// Handle nearest to `value`. Ties go to the high handle when the
    /// pointer is above it, so two stacked handles can still be pulled apart
    /// in either direction.
    pub fn nearest_handle(&self, value: f64) -> Handle {
        let d_low = (value - self.low).abs();
        let d_high = (value - self.high).abs();
        if d_low < d_high || (d_low == d_high && value < self.high) {
            Handle::Low
        } else {
            Handle::High
        }
    }

    /// Drag `handle` towards `value`.
    ///
    /// Returns the new `(low, high)` pair when the handle moved.
    pub fn slide_handle(&mut self, handle: Handle, value: f64) -> Option<(f64, f64)> {
        let mut next = self.options.align(value);
        match handle {
            Handle::Low => {
                if next > self.high {
                    next = self.high;
                }
                if next == self.low {
                    return None;
                }
                self.low = next;
            }
            Handle::High => {
                if next < self.low {
                    next = self.low;
                }
                if next == self.high {
                    return None;
                }
                self.high = next;
            }
        }
        log::trace!(target: "slider", "slide {handle:?} -> {}-{}", self.low, self.high);
        Some((self.low, self.high))
    }
}

impl Default for RangeSliderModel {
    fn default() -> Self {
        Self::new(SliderOptions::new(0.0, 100.0, 1.0), 0.0, 100.0)
    }
}

impl RangeSlider for RangeSliderModel {
    fn configure(&mut self, options: SliderOptions, values: (f64, f64)) {
        self.options = options;
        self.low = options.align(values.0);
        self.high = options.align(values.1);
    }

    fn options(&self) -> SliderOptions {
        self.options
    }

    fn values(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    fn set_values(&mut self, low: f64, high: f64) {
        self.low = self.options.align(low);
        self.high = self.options.align(high);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percent() -> RangeSliderModel {
        RangeSliderModel::new(SliderOptions::new(0.0, 100.0, 1.0), 20.0, 80.0)
    }

    #[test]
    fn handles_cannot_cross_while_dragging() {
        let mut slider = percent();

        assert_eq!(slider.slide_handle(Handle::Low, 95.0), Some((80.0, 80.0)));
        assert_eq!(slider.slide_handle(Handle::High, 10.0), None);
        assert_eq!(slider.values(), (80.0, 80.0));
    }

    #[test]
    fn dragging_one_handle_leaves_the_other() {
        let mut slider = percent();
        assert_eq!(slider.slide_handle(Handle::High, 64.4), Some((20.0, 64.0)));
        assert_eq!(slider.slide_handle(Handle::Low, 30.0), Some((30.0, 64.0)));
    }

    #[test]
    fn nearest_handle_follows_the_pointer() {
        let slider = percent();
        assert_eq!(slider.nearest_handle(25.0), Handle::Low);
        assert_eq!(slider.nearest_handle(60.0), Handle::High);

        let mut stacked = RangeSliderModel::new(SliderOptions::new(0.0, 10.0, 1.0), 5.0, 5.0);
        assert_eq!(stacked.nearest_handle(5.0), Handle::High);
        assert_eq!(stacked.nearest_handle(4.0), Handle::Low);
        assert_eq!(stacked.slide_handle(Handle::High, 7.0), Some((5.0, 7.0)));
    }

    #[test]
    fn set_values_keeps_out_of_order_pairs() {
        let mut slider = percent();
        slider.set_values(10.0, 5.0);
        assert_eq!(slider.values(), (10.0, 5.0));
    }

    #[test]
    fn degenerate_range_does_not_panic() {
        let mut slider = RangeSliderModel::default();
        slider.configure(SliderOptions::new(3.0, 3.0, 1.0), (0.0, 9.0));
        assert_eq!(slider.values(), (3.0, 3.0));
        assert_eq!(slider.slide_handle(Handle::High, 4.0), None);
    }
}
