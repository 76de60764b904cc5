use crate::clock::LightClock;
use crate::common::error::{check_positive, check_time};
use crate::common::Result;

/// Drives a clock's proper time from one value to another over a duration,
/// the way a host animates a tracked value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProperTimeRamp {
    from: f64,
    to: f64,
    duration: f64,
}

impl ProperTimeRamp {
    pub fn new(from: f64, to: f64, duration: f64) -> Result<Self> {
        Ok(Self {
            from: check_time("ramp start", from)?,
            to: check_time("ramp end", to)?,
            duration: check_positive("ramp duration", duration)?,
        })
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Proper time after `elapsed` host time. Linear; `elapsed` is clamped into [0, duration].
    pub fn sample(&self, elapsed: f64) -> f64 {
        if elapsed.is_nan() {
            return self.from;
        }
        let progress = (elapsed / self.duration).clamp(0.0, 1.0);
        if progress == 1.0 {
            // Land exactly on the target.
            return self.to;
        }
        self.from + (self.to - self.from) * progress
    }

    /// Writes the sampled value into `clock`.
    pub fn apply(&self, clock: &mut LightClock, elapsed: f64) -> Result<()> {
        clock.set_proper_time(self.sample(elapsed))
    }

    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ClockError;
    use crate::math::vec3::Vec3;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_ramp_samples_linearly() {
        let ramp = ProperTimeRamp::new(0.0, 2.0, 4.0).unwrap();
        assert_eq!(ramp.sample(0.0), 0.0);
        assert!((ramp.sample(1.0) - 0.5).abs() < EPSILON);
        assert!((ramp.sample(3.0) - 1.5).abs() < EPSILON);
        assert_eq!(ramp.sample(4.0), 2.0);
    }

    #[test]
    fn test_ramp_clamps_elapsed() {
        let ramp = ProperTimeRamp::new(1.0, 3.0, 2.0).unwrap();
        assert_eq!(ramp.sample(-5.0), 1.0);
        assert_eq!(ramp.sample(10.0), 3.0);
        assert!(ramp.is_finished(2.0));
        assert!(!ramp.is_finished(1.99));
    }

    #[test]
    fn test_ramp_can_run_backwards() {
        let ramp = ProperTimeRamp::new(3.0, 1.0, 1.0).unwrap();
        assert!((ramp.sample(0.5) - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_ramp_drives_clock() {
        let mut clock = LightClock::new(Vec3::ZERO, Vec3::xy(0.0, 4.0), 0.5).unwrap();
        let ramp = ProperTimeRamp::new(0.0, 1.0, 2.0).unwrap();
        ramp.apply(&mut clock, 0.5).unwrap();
        assert!((clock.proper_time() - 0.25).abs() < EPSILON);
        assert!(clock.marker_position().distance(Vec3::xy(0.0, 2.0)) < EPSILON);
        ramp.apply(&mut clock, 2.0).unwrap();
        assert_eq!(clock.proper_time(), 1.0);
    }

    #[test]
    fn test_ramp_rejects_bad_parameters() {
        assert!(matches!(ProperTimeRamp::new(-1.0, 1.0, 1.0), Err(ClockError::InvalidInput(_))));
        assert!(matches!(ProperTimeRamp::new(0.0, 1.0, 0.0), Err(ClockError::InvalidConfiguration(_))));
    }
}
