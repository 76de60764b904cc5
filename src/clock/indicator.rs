//! The number shown next to a clock, mirroring its proper time.

use crate::common::error::check_time;
use crate::common::Result;
use crate::math::vec3::{Point3, Vec3};

/// Where an indicator sits relative to the endpoint it follows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorAnchor {
    /// Direction from the endpoint to the indicator. Normalised on use.
    pub direction: Vec3,
    /// Distance from the endpoint.
    pub buffer: f64,
}

impl IndicatorAnchor {
    pub fn new(direction: Vec3, buffer: f64) -> Self {
        Self { direction, buffer }
    }

    /// Offset applied to the endpoint.
    pub fn offset(&self) -> Vec3 {
        self.direction.normalize() * self.buffer
    }
}

impl Default for IndicatorAnchor {
    /// Just below the endpoint.
    fn default() -> Self {
        Self::new(-Vec3::UP, 0.4)
    }
}

/// Display value plus its current on-screen position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    pub anchor: IndicatorAnchor,
    value: f64,
    position: Point3,
}

impl Indicator {
    pub fn new(anchor: IndicatorAnchor) -> Self {
        Self {
            anchor,
            value: 0.0,
            position: Vec3::ZERO,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn position(&self) -> Point3 {
        self.position
    }

    /// Formats the value with a fixed number of decimals.
    pub fn display_text(&self, decimals: usize) -> String {
        format!("{:.*}", decimals, self.value)
    }
}

impl Default for Indicator {
    fn default() -> Self {
        Self::new(IndicatorAnchor::default())
    }
}

/// Copies `proper_time` into the indicator and places it next to `clock_endpoint`.
///
/// The endpoint is read at call time; nothing about its previous location is kept.
/// On error the indicator is left untouched.
pub fn sync_indicator(indicator: &mut Indicator, clock_endpoint: Point3, proper_time: f64) -> Result<()> {
    let proper_time = check_time("proper time", proper_time)?;
    indicator.value = proper_time;
    indicator.position = clock_endpoint + indicator.anchor.offset();
    Ok(())
}
