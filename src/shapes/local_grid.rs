//! A marker dot with a small coordinate grid around it, used to show the
//! rest frame a moving clock carries along.

use crate::common::error::check_positive;
use crate::common::{ClockError, Result};
use crate::math::vec3::{Point3, Vec3};
use crate::shapes::line_segment::LineSegment;

/// Upper bound on grid lines per axis.
pub const MAX_GRID_LINES: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalGrid {
    pub center: Point3,
    /// Half-extent of the grid before scaling.
    pub grid_size: f64,
    pub grid_spacing: f64,
    /// Applied to the whole grid about `center`.
    pub scale: f64,
}

impl LocalGrid {
    pub fn new(center: Point3, grid_size: f64, grid_spacing: f64, scale: f64) -> Result<Self> {
        if !center.is_finite() {
            return Err(ClockError::InvalidConfiguration(format!(
                "grid center must be finite, got {:?}",
                center
            )));
        }
        Ok(Self {
            center,
            grid_size: check_positive("grid size", grid_size)?,
            grid_spacing: check_positive("grid spacing", grid_spacing)?,
            scale: check_positive("grid scale", scale)?,
        })
    }

    /// Same grid centred on `center`.
    pub fn moved_to(self, center: Point3) -> Self {
        Self { center, ..self }
    }

    /// The dot at the centre of the grid.
    pub fn dot(&self) -> Point3 {
        self.center
    }

    /// Half-width of the drawn grid.
    pub fn extent(&self) -> f64 {
        self.grid_size * self.scale
    }

    /// Offsets of the grid lines along one axis: multiples of `grid_spacing`
    /// within `[-grid_size, grid_size]`, already scaled.
    fn offsets(&self) -> Result<Vec<f64>> {
        let steps = (self.grid_size / self.grid_spacing).floor();
        if !steps.is_finite() || 2.0 * steps + 1.0 > MAX_GRID_LINES as f64 {
            return Err(ClockError::InvalidConfiguration(format!(
                "grid spacing {} gives more than {} lines for size {}",
                self.grid_spacing, MAX_GRID_LINES, self.grid_size
            )));
        }
        let steps = steps as i64;
        Ok((-steps..=steps)
            .map(|k| k as f64 * self.grid_spacing * self.scale)
            .collect())
    }

    /// Vertical lines first, then horizontal ones, each spanning the full grid.
    pub fn lines(&self) -> Result<Vec<LineSegment>> {
        let extent = self.extent();
        let offsets = self.offsets()?;
        let vertical = offsets.iter().map(|&dx| {
            LineSegment::new(
                self.center + Vec3::xy(dx, -extent),
                self.center + Vec3::xy(dx, extent),
            )
        });
        let horizontal = offsets.iter().map(|&dy| {
            LineSegment::new(
                self.center + Vec3::xy(-extent, dy),
                self.center + Vec3::xy(extent, dy),
            )
        });
        Ok(vertical.chain(horizontal).collect())
    }
}

impl Default for LocalGrid {
    /// Four-by-four unit grid drawn at half size around the origin.
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            grid_size: 2.0,
            grid_spacing: 1.0,
            scale: 0.5,
        }
    }
}
