use crate::clock::phase::{bounce_position, BouncePhase};
use crate::common::error::{check_positive, check_time};
use crate::common::{ClockError, ClockStyle, Result};
use crate::math::vec3::{Point3, Vec3};
use crate::shapes::WallPair;

/// Elapsed time on a clock's own frame. Always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ProperTime(f64);

impl ProperTime {
    pub const ZERO: ProperTime = ProperTime(0.0);

    pub fn new(value: f64) -> Result<Self> {
        Ok(Self(check_time("proper time", value)?))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Construction parameters for a [`LightClock`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClockConfig {
    pub start: Point3,
    pub end: Point3,
    /// Time for one one-way traversal between the mirrors.
    pub period: f64,
    pub style: ClockStyle,
}

impl ClockConfig {
    pub fn new(start: Point3, end: Point3, period: f64) -> Self {
        Self {
            start,
            end,
            period,
            style: ClockStyle::default(),
        }
    }

    /// Derives the period from the mirror separation and the speed of light.
    pub fn from_light_speed(start: Point3, end: Point3, light_speed: f64) -> Result<Self> {
        let light_speed = check_positive("light speed", light_speed)?;
        let separation = start.distance(end);
        if separation == 0.0 {
            return Err(ClockError::InvalidConfiguration(
                "mirrors must be separated to derive a period from the light speed".into(),
            ));
        }
        Ok(Self::new(start, end, separation / light_speed))
    }

    pub fn with_style(mut self, style: ClockStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for ClockConfig {
    /// Vertical clock two units tall, one traversal per unit of time.
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::xy(0.0, 2.0), 1.0)
    }
}

/// A photon bouncing between two fixed mirrors.
///
/// Only the proper time is stored; the photon position is derived on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct LightClock {
    pub start: Point3,
    pub end: Point3,
    pub style: ClockStyle,
    period: f64,
    proper_time: ProperTime,
}

impl LightClock {
    /// Creates a clock at proper time zero. Fails if `period` is not positive.
    pub fn new(start: Point3, end: Point3, period: f64) -> Result<Self> {
        Self::from_config(ClockConfig::new(start, end, period))
    }

    pub fn from_config(config: ClockConfig) -> Result<Self> {
        let period = check_positive("period", config.period)?;
        if !config.start.is_finite() || !config.end.is_finite() {
            return Err(ClockError::InvalidConfiguration(format!(
                "clock endpoints must be finite, got {:?} and {:?}",
                config.start, config.end
            )));
        }
        Ok(Self {
            start: config.start,
            end: config.end,
            style: config.style,
            period,
            proper_time: ProperTime::ZERO,
        })
    }

    /// Creates a clock whose photon travels between the midpoints of two walls.
    pub fn between_walls(walls: &WallPair, period: f64) -> Result<Self> {
        let path = walls.photon_path();
        Self::new(path.a, path.b, period)
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn proper_time(&self) -> f64 {
        self.proper_time.value()
    }

    /// Sets the proper time. Negative or non-finite values are rejected and
    /// leave the clock unchanged.
    pub fn set_proper_time(&mut self, value: f64) -> Result<()> {
        self.proper_time = ProperTime::new(value)?;
        Ok(())
    }

    /// Bounce phase at the current proper time.
    pub fn phase(&self) -> BouncePhase {
        // Both were validated on the way in.
        BouncePhase::from_valid(self.proper_time.value(), self.period)
    }

    /// Photon position at the current proper time.
    pub fn marker_position(&self) -> Point3 {
        self.phase().locate(self.start, self.end)
    }

    /// Photon position at an arbitrary proper time, without touching the clock.
    pub fn position_at(&self, proper_time: f64) -> Result<Point3> {
        bounce_position(self.start, self.end, proper_time, self.period)
    }

    /// Distance between the mirrors.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Number of completed round trips ("ticks") at the current proper time.
    pub fn ticks(&self) -> u64 {
        self.phase().cycles / 2
    }
}
