//! Cross-hatch strokes drawn behind a wall to mark it as solid.

use crate::common::error::check_positive;
use crate::common::{ClockError, Result};
use crate::shapes::line_segment::LineSegment;

/// Upper bound on the strokes a single wall may carry.
pub const MAX_HATCH_STROKES: usize = 10_000;

/// Evenly spaced strokes along `segment`.
///
/// Produces `floor(length / spacing)` strokes of length `stroke_length`, each
/// centred in its slot and rotated `angle` radians (about z) away from the
/// segment direction. Fails if that would exceed [`MAX_HATCH_STROKES`].
pub fn cross_hatch(segment: &LineSegment, angle: f64, spacing: f64, stroke_length: f64) -> Result<Vec<LineSegment>> {
    let spacing = check_positive("hatch spacing", spacing)?;
    let length = segment.length();
    let slots = (length / spacing).floor();
    if !slots.is_finite() || slots > MAX_HATCH_STROKES as f64 {
        return Err(ClockError::InvalidConfiguration(format!(
            "hatch spacing {} gives more than {} strokes on a wall of length {}",
            spacing, MAX_HATCH_STROKES, length
        )));
    }
    let count = slots as usize;
    if count == 0 {
        return Ok(Vec::new());
    }

    let along = segment.direction().normalize();
    let stroke = along.rotate_z(angle) * stroke_length;

    Ok((0..count)
        .map(|i| {
            let base = segment.a + along * (spacing * (i as f64 + 0.5));
            LineSegment::new(base, base + stroke)
        })
        .collect())
}
