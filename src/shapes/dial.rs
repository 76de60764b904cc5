//! Analog clock face driven by the same proper time as a light clock.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::clock::phase::split_ratio;
use crate::common::error::{check_positive, check_time};
use crate::common::Result;
use crate::math::vec3::{Point3, Vec3};
use crate::shapes::line_segment::LineSegment;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dial {
    pub center: Point3,
    pub radius: f64,
    /// Proper time for one full turn of the hand.
    pub seconds_per_revolution: f64,
}

impl Dial {
    pub fn new(center: Point3, radius: f64, seconds_per_revolution: f64) -> Result<Self> {
        Ok(Self {
            center,
            radius: check_positive("dial radius", radius)?,
            seconds_per_revolution: check_positive("seconds per revolution", seconds_per_revolution)?,
        })
    }

    /// Fraction of the current revolution, in [0, 1).
    fn turn_fraction(&self, proper_time: f64) -> Result<f64> {
        let proper_time = check_time("proper time", proper_time)?;
        Ok(split_ratio(proper_time, self.seconds_per_revolution).1)
    }

    /// Angle swept by the hand since 12 o'clock, in [0, 2π).
    pub fn sector_sweep(&self, proper_time: f64) -> Result<f64> {
        Ok(self.turn_fraction(proper_time)? * TAU)
    }

    /// Direction of the hand in standard (counter-clockwise from +x) radians.
    /// Starts at 12 o'clock and turns clockwise.
    pub fn hand_angle(&self, proper_time: f64) -> Result<f64> {
        Ok(FRAC_PI_2 - self.sector_sweep(proper_time)?)
    }

    pub fn hand_tip(&self, proper_time: f64) -> Result<Point3> {
        let angle = self.hand_angle(proper_time)?;
        Ok(self.center + Vec3::RIGHT.rotate_z(angle) * self.radius)
    }

    /// `count` tick marks on the rim, pointing inwards, starting at 12 o'clock.
    pub fn tick_marks(&self, count: usize, length: f64) -> Vec<LineSegment> {
        (0..count)
            .map(|i| {
                let angle = FRAC_PI_2 - TAU * i as f64 / count as f64;
                let outward = Vec3::RIGHT.rotate_z(angle);
                let outer = self.center + outward * self.radius;
                LineSegment::new(outer, outer - outward * length)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ClockError;
    const EPSILON: f64 = 1e-10;

    fn dial() -> Dial {
        Dial::new(Vec3::xy(1.0, 1.0), 2.0, 4.0).unwrap()
    }

    #[test]
    fn test_hand_starts_at_twelve_and_turns_clockwise() {
        let d = dial();
        assert!(d.hand_tip(0.0).unwrap().distance(Vec3::xy(1.0, 3.0)) < EPSILON);
        assert!(d.hand_tip(1.0).unwrap().distance(Vec3::xy(3.0, 1.0)) < EPSILON);
        assert!(d.hand_tip(2.0).unwrap().distance(Vec3::xy(1.0, -1.0)) < EPSILON);
        assert!(d.hand_tip(3.0).unwrap().distance(Vec3::xy(-1.0, 1.0)) < EPSILON);
        assert!(d.hand_tip(4.0).unwrap().distance(Vec3::xy(1.0, 3.0)) < EPSILON);
    }

    #[test]
    fn test_sector_sweep_wraps() {
        let d = dial();
        assert!((d.sector_sweep(1.0).unwrap() - TAU / 4.0).abs() < EPSILON);
        assert!(d.sector_sweep(8.0).unwrap().abs() < EPSILON);
        let sweep = d.sector_sweep(7.999_999).unwrap();
        assert!(sweep >= 0.0 && sweep < TAU);
    }

    #[test]
    fn test_sector_sweep_with_overflowing_turn_count() {
        let d = Dial::new(Vec3::ZERO, 1.0, 1e-300).unwrap();
        let sweep = d.sector_sweep(1e300).unwrap();
        assert!(sweep >= 0.0 && sweep < TAU);
        assert!(d.hand_tip(1e300).unwrap().is_finite());
    }

    #[test]
    fn test_tick_marks() {
        let d = dial();
        let ticks = d.tick_marks(12, 0.25);
        assert_eq!(ticks.len(), 12);
        for tick in &ticks {
            assert!((tick.a.distance(d.center) - 2.0).abs() < EPSILON);
            assert!((tick.b.distance(d.center) - 1.75).abs() < EPSILON);
        }
        assert!(ticks[0].a.distance(Vec3::xy(1.0, 3.0)) < EPSILON);
        assert!(ticks[3].a.distance(Vec3::xy(3.0, 1.0)) < EPSILON);
    }

    #[test]
    fn test_dial_rejects_bad_input() {
        assert!(matches!(Dial::new(Vec3::ZERO, 0.0, 1.0), Err(ClockError::InvalidConfiguration(_))));
        assert!(matches!(Dial::new(Vec3::ZERO, 1.0, -1.0), Err(ClockError::InvalidConfiguration(_))));
        assert!(matches!(dial().hand_tip(-1.0), Err(ClockError::InvalidInput(_))));
    }
}
