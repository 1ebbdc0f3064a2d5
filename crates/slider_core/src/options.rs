//! Slider bounds and step alignment.

/// Bounds and step of a slider.
///
/// A non-positive or non-finite step is treated as `1`, and `max` below `min`
/// collapses to `min`; neither configuration can make the model panic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderOptions {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderOptions {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Step actually used for alignment.
    pub fn effective_step(&self) -> f64 {
        if self.step.is_finite() && self.step > 0.0 {
            self.step
        } else {
            1.0
        }
    }

    /// Decimal places the slider reports values with: the larger of the
    /// step's and the minimum's.
    pub fn precision(&self) -> usize {
        decimal_places(self.effective_step()).max(decimal_places(self.min))
    }

    /// Largest reachable value: `max` pulled down onto the step grid.
    pub fn effective_max(&self) -> f64 {
        if self.max <= self.min {
            return self.min;
        }
        let step = self.effective_step();
        let steps = ((self.max - self.min) / step).floor();
        round_to(self.min + steps * step, self.precision())
    }

    /// Clamp `value` into range and snap it to the nearest grid point.
    ///
    /// NaN resolves to `min`.
    pub fn align(&self, value: f64) -> f64 {
        let max = self.effective_max();
        if value.is_nan() || value <= self.min {
            return self.min;
        }
        if value >= max {
            return max;
        }

        let step = self.effective_step();
        let rem = (value - self.min) % step;
        let mut aligned = value - rem;
        if rem.abs() * 2.0 >= step {
            aligned += if rem > 0.0 { step } else { -step };
        }
        round_to(aligned, self.precision()).clamp(self.min, max)
    }
}

/// Number of digits after the decimal point in the shortest rendering of `n`.
///
/// ```
/// use slider_core::decimal_places;
///
/// assert_eq!(decimal_places(1.0), 0);
/// assert_eq!(decimal_places(0.25), 2);
/// assert_eq!(decimal_places(-3.5), 1);
/// ```
pub fn decimal_places(n: f64) -> usize {
    if !n.is_finite() {
        return 0;
    }
    let s = n.to_string();
    s.split_once('.').map(|(_, frac)| frac.len()).unwrap_or(0)
}

fn round_to(value: f64, places: usize) -> f64 {
    let places = places.min(15) as i32;
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_snaps_to_nearest_step() {
        let o = SliderOptions::new(0.0, 10.0, 0.5);
        assert_eq!(o.align(3.2), 3.0);
        assert_eq!(o.align(3.3), 3.5);
        assert_eq!(o.align(3.25), 3.5);
    }

    #[test]
    fn align_clamps_out_of_range_values() {
        let o = SliderOptions::new(1.0, 5.0, 1.0);
        assert_eq!(o.align(-4.0), 1.0);
        assert_eq!(o.align(99.0), 5.0);
        assert_eq!(o.align(f64::NAN), 1.0);
    }

    #[test]
    fn align_counts_steps_from_min() {
        let o = SliderOptions::new(0.3, 2.0, 0.5);
        assert_eq!(o.align(0.9), 0.8);
        assert_eq!(o.effective_max(), 1.8);
    }

    #[test]
    fn float_steps_do_not_leak_rounding_noise() {
        let o = SliderOptions::new(0.0, 1.0, 0.1);
        assert_eq!(o.align(0.7), 0.7);
        assert_eq!(o.align(0.3), 0.3);
        assert_eq!(o.precision(), 1);
    }

    #[test]
    fn degenerate_range_pins_every_value() {
        let o = SliderOptions::new(4.0, 4.0, 1.0);
        assert_eq!(o.effective_max(), 4.0);
        assert_eq!(o.align(0.0), 4.0);
        assert_eq!(o.align(9.0), 4.0);
    }

    #[test]
    fn non_positive_step_falls_back_to_one() {
        let o = SliderOptions::new(0.0, 10.0, 0.0);
        assert_eq!(o.effective_step(), 1.0);
        assert_eq!(o.align(2.4), 2.0);

        let o = SliderOptions::new(0.0, 10.0, -2.0);
        assert_eq!(o.align(2.6), 3.0);
    }
}
