//! The two mirrors of a light clock.

use crate::common::error::check_positive;
use crate::common::{ClockError, Result};
use crate::math::vec3::Point3;
use crate::shapes::line_segment::LineSegment;

/// Two walls facing each other across the photon path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallPair {
    pub first: LineSegment,
    pub second: LineSegment,
}

impl WallPair {
    /// Segment joining the wall midpoints; the photon travels along it.
    pub fn photon_path(&self) -> LineSegment {
        LineSegment::new(self.first.midpoint(), self.second.midpoint())
    }

    /// Distance between the walls.
    pub fn separation(&self) -> f64 {
        self.photon_path().length()
    }
}

/// Builds two walls of length `wall_length` centred on `mid_a` and `mid_b`,
/// perpendicular (in the xy plane) to the line joining them.
pub fn wall_pair(mid_a: Point3, mid_b: Point3, wall_length: f64) -> Result<WallPair> {
    let wall_length = check_positive("wall length", wall_length)?;
    let axis = mid_b - mid_a;
    let across = axis.perpendicular_xy().normalize();
    if across.magnitude_squared() == 0.0 {
        return Err(ClockError::InvalidConfiguration(format!(
            "wall midpoints must differ in the xy plane, got {:?} and {:?}",
            mid_a, mid_b
        )));
    }

    let half = across * (wall_length / 2.0);
    Ok(WallPair {
        first: LineSegment::new(mid_a - half, mid_a + half),
        second: LineSegment::new(mid_b - half, mid_b + half),
    })
}
