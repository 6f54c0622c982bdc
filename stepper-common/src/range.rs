use crate::format::format_value;
use crate::unit::Unit;

/// Which way a step button moves the value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Increment,
    Decrement,
}

/// Effective bounds for a stepper in a given unit.
///
/// Bounds are only enforced for [`Unit::Percent`]; in any other unit
/// `clamp` is the identity and both step directions are always enabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    unit: Unit,
    min: f64,
    max: f64,
}

impl ValueRange {
    pub const DEFAULT_MIN: f64 = 0.0;
    pub const PERCENT_MAX: f64 = 100.0;

    /// Resolve optional bounds against the unit's defaults.
    pub fn new(unit: Unit, min: Option<f64>, max: Option<f64>) -> Self {
        let default_max = if unit.is_clamped() {
            Self::PERCENT_MAX
        } else {
            f64::INFINITY
        };
        Self {
            unit,
            min: min.unwrap_or(Self::DEFAULT_MIN),
            max: max.unwrap_or(default_max),
        }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn is_clamped(&self) -> bool {
        self.unit.is_clamped()
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if self.is_clamped() {
            value.min(self.max).max(self.min)
        } else {
            value
        }
    }

    /// Whether `value` needs no clamping under this range.
    pub fn contains(&self, value: f64) -> bool {
        !self.is_clamped() || (self.min..=self.max).contains(&value)
    }

    /// Whether the step button for `direction` is disabled at `value`.
    pub fn is_blocked(&self, value: f64, direction: StepDirection) -> bool {
        if !self.is_clamped() {
            return false;
        }
        match direction {
            StepDirection::Increment => value >= self.max,
            StepDirection::Decrement => value <= self.min,
        }
    }

    /// Tooltip text naming the bound a disabled step button would violate.
    /// Empty outside percentage mode.
    pub fn limit_message(&self, direction: StepDirection) -> String {
        if !self.is_clamped() {
            return String::new();
        }
        match direction {
            StepDirection::Increment => {
                format!("Value cannot exceed {}%", format_value(self.max))
            }
            StepDirection::Decrement => {
                format!("Value cannot be less than {}%", format_value(self.min))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 9] = [-1e9, -150.0, -0.5, 0.0, 0.25, 50.0, 99.99, 100.0, 1e9];

    #[test]
    fn test_defaults_depend_on_unit() {
        let pct = ValueRange::new(Unit::Percent, None, None);
        assert_eq!((pct.min(), pct.max()), (0.0, 100.0));

        let px = ValueRange::new(Unit::Pixel, None, None);
        assert_eq!(px.min(), 0.0);
        assert!(px.max().is_infinite());
    }

    #[test]
    fn test_percent_clamp_stays_in_range_and_is_idempotent() {
        let range = ValueRange::new(Unit::Percent, Some(10.0), Some(90.0));
        for v in SAMPLES {
            let once = range.clamp(v);
            assert!((10.0..=90.0).contains(&once), "{v} clamped to {once}");
            assert_eq!(range.clamp(once), once);
        }
    }

    #[test]
    fn test_pixel_clamp_is_identity() {
        let range = ValueRange::new(Unit::Pixel, Some(0.0), Some(10.0));
        for v in SAMPLES {
            assert_eq!(range.clamp(v), v);
            assert!(range.contains(v));
        }
    }

    #[test]
    fn test_inverted_bounds_clamp_to_min() {
        let range = ValueRange::new(Unit::Percent, Some(50.0), Some(20.0));
        assert_eq!(range.clamp(30.0), 50.0);
    }

    #[test]
    fn test_blocked_at_bounds() {
        let range = ValueRange::new(Unit::Percent, None, None);
        assert!(range.is_blocked(100.0, StepDirection::Increment));
        assert!(!range.is_blocked(100.0, StepDirection::Decrement));
        assert!(range.is_blocked(0.0, StepDirection::Decrement));
        assert!(!range.is_blocked(99.5, StepDirection::Increment));
    }

    #[test]
    fn test_never_blocked_in_pixels() {
        let range = ValueRange::new(Unit::Pixel, Some(0.0), Some(10.0));
        assert!(!range.is_blocked(10.0, StepDirection::Increment));
        assert!(!range.is_blocked(-5.0, StepDirection::Decrement));
    }

    #[test]
    fn test_limit_messages() {
        let range = ValueRange::new(Unit::Percent, Some(5.0), Some(80.5));
        assert_eq!(
            range.limit_message(StepDirection::Increment),
            "Value cannot exceed 80.5%"
        );
        assert_eq!(
            range.limit_message(StepDirection::Decrement),
            "Value cannot be less than 5%"
        );

        let px = ValueRange::new(Unit::Pixel, None, None);
        assert!(px.limit_message(StepDirection::Increment).is_empty());
        assert!(px.limit_message(StepDirection::Decrement).is_empty());
    }
}
