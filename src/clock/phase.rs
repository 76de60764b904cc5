//! Maps a proper time onto the ping-pong motion of a photon between two mirrors.

use crate::common::error::{check_positive, check_time};
use crate::common::Result;
use crate::math::vec3::Point3;

/// Largest `f64` strictly below 1.0.
const REMAINDER_MAX: f64 = 1.0 - f64::EPSILON / 2.0;

/// Splits `value / span` into a whole part and a fraction in [0, 1).
///
/// Both inputs must be finite, `value >= 0` and `span > 0`. When the quotient
/// overflows, the whole part is `inf` and the fraction comes from
/// `value mod span`.
pub(crate) fn split_ratio(value: f64, span: f64) -> (f64, f64) {
    let ratio = value / span;
    if !ratio.is_finite() {
        let fraction = value.rem_euclid(span) / span;
        let fraction = if fraction.is_finite() { fraction } else { 0.0 };
        return (f64::INFINITY, fraction.clamp(0.0, REMAINDER_MAX));
    }
    let whole = ratio.floor();
    // `ratio - floor(ratio)` is exact, so the two parts never disagree
    // the way `floor(t / p)` and `(t % p) / p` can.
    (whole, (ratio - whole).clamp(0.0, REMAINDER_MAX))
}

/// Progress of the photon: number of completed one-way traversals and the
/// fraction of the current traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BouncePhase {
    /// Completed traversals, `floor(t / period)`. Saturates at `u64::MAX`;
    /// once the quotient overflows `f64`, parity is taken as even.
    pub cycles: u64,
    /// Fraction of the current traversal, always in [0, 1).
    pub remainder: f64,
    returning: bool,
}

impl BouncePhase {
    /// Computes the phase for `proper_time` with a one-way traversal time of `period`.
    pub fn new(proper_time: f64, period: f64) -> Result<Self> {
        let period = check_positive("period", period)?;
        let proper_time = check_time("proper time", proper_time)?;
        Ok(Self::from_valid(proper_time, period))
    }

    /// Phase for inputs that have already been validated.
    pub(crate) fn from_valid(proper_time: f64, period: f64) -> Self {
        let (whole, remainder) = split_ratio(proper_time, period);
        Self {
            cycles: whole as u64,
            remainder,
            returning: whole % 2.0 == 1.0,
        }
    }

    /// True on odd traversals, when the photon travels from `end` back to `start`.
    pub fn is_returning(&self) -> bool {
        self.returning
    }

    /// Interpolates the photon position for this phase.
    pub fn locate(&self, start: Point3, end: Point3) -> Point3 {
        if self.returning {
            end.lerp(start, self.remainder)
        } else {
            start.lerp(end, self.remainder)
        }
    }
}

/// Position of a photon bouncing between `start` and `end`, one traversal per `period`.
///
/// Pure: the same inputs always give the same point, in any evaluation order.
pub fn bounce_position(start: Point3, end: Point3, proper_time: f64, period: f64) -> Result<Point3> {
    Ok(BouncePhase::new(proper_time, period)?.locate(start, end))
}
