use std::collections::VecDeque;

use crate::math::vec3::Point3;

/// Path drawn behind a photon, with the distance it covers.
///
/// Samples must arrive in increasing time order. A sample at or before the last
/// recorded time is dropped, so re-evaluating an earlier frame never counts the
/// same stretch of path twice.
///
/// An unbounded trace keeps every sample. With [`PhotonTrace::with_max_points`]
/// the oldest samples are discarded once the limit is reached; `distance` still
/// covers the whole path recorded since the last `clear`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotonTrace {
    points: VecDeque<(f64, Point3)>,
    distance: f64,
    max_points: Option<usize>,
}

impl PhotonTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// A trace that keeps at most `max_points` samples (at least one).
    pub fn with_max_points(max_points: usize) -> Self {
        Self {
            max_points: Some(max_points.max(1)),
            ..Self::default()
        }
    }

    pub fn max_points(&self) -> Option<usize> {
        self.max_points
    }

    /// Records `point` at `time`. Returns false if the sample was dropped.
    pub fn record(&mut self, time: f64, point: Point3) -> bool {
        if !time.is_finite() {
            return false;
        }
        if let Some(&(last_time, last_point)) = self.points.back() {
            if time <= last_time {
                return false;
            }
            self.distance += last_point.distance(point);
        }
        if let Some(limit) = self.max_points {
            while self.points.len() >= limit {
                self.points.pop_front();
            }
        }
        self.points.push_back((time, point));
        true
    }

    /// Total distance along the recorded samples.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn points(&self) -> impl Iterator<Item = Point3> + '_ {
        self.points.iter().map(|&(_, p)| p)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last_time(&self) -> Option<f64> {
        self.points.back().map(|&(t, _)| t)
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.distance = 0.0;
    }
}
