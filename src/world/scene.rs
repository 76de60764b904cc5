use crate::{
    clock::{sync_indicator, BouncePhase, Indicator, IndicatorAnchor, LightClock},
    common::{error::check_time, Result},
    math::vec3::Point3,
    relativity::InertialFrame,
    timeline::PhotonTrace,
};

/// A clock placed in the scene, together with the frame it rests in and the
/// decorations the host keeps in sync with it.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneClock {
    pub clock: LightClock,
    pub frame: InertialFrame,
    pub indicator: Indicator,
    pub trace: PhotonTrace,
}

impl SceneClock {
    /// `start` endpoint in scene coordinates at `time`.
    pub fn lab_start(&self, time: f64) -> Point3 {
        self.frame.to_lab(self.clock.start, time)
    }

    /// `end` endpoint in scene coordinates at `time`.
    pub fn lab_end(&self, time: f64) -> Point3 {
        self.frame.to_lab(self.clock.end, time)
    }

    /// Photon position in scene coordinates at `time`.
    pub fn lab_marker(&self, time: f64) -> Point3 {
        self.frame.to_lab(self.clock.marker_position(), time)
    }
}

/// Everything a host needs to draw one clock for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockFrame {
    pub start: Point3,
    pub end: Point3,
    pub marker: Point3,
    pub proper_time: f64,
    pub phase: BouncePhase,
    pub indicator_value: f64,
    pub indicator_position: Point3,
    pub trace_distance: f64,
}

/// A set of light clocks sharing one coordinate time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub clocks: Vec<SceneClock>,
    time: f64,
    trace_limit: Option<usize>,
}

impl Scene {
    /// Creates an empty scene at coordinate time zero.
    pub fn new() -> Self {
        Self {
            clocks: Vec::new(),
            time: 0.0,
            trace_limit: None,
        }
    }

    /// Creates an empty scene whose clocks keep at most `max_points` trace
    /// samples each.
    pub fn with_trace_limit(max_points: usize) -> Self {
        Self {
            trace_limit: Some(max_points),
            ..Self::new()
        }
    }

    /// Adds a clock and returns its index. The clock is brought to the scene's
    /// current time before it is stored.
    pub fn add_clock(&mut self, clock: LightClock, frame: InertialFrame, anchor: IndicatorAnchor) -> Result<usize> {
        let mut entry = SceneClock {
            clock,
            frame,
            indicator: Indicator::new(anchor),
            trace: match self.trace_limit {
                Some(limit) => PhotonTrace::with_max_points(limit),
                None => PhotonTrace::new(),
            },
        };
        Self::evaluate(&mut entry, self.time)?;
        let index = self.clocks.len();
        self.clocks.push(entry);
        Ok(index)
    }

    /// Current coordinate time.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Advances the scene by `dt`. Non-positive steps are ignored.
    /// If `should_log` is true, logs each clock's state after the step.
    pub fn step(&mut self, dt: f64, should_log: bool) -> Result<()> {
        if dt.is_nan() || dt <= 0.0 {
            return Ok(());
        }
        let time = self.time + dt;
        self.seek_inner(time, should_log)
    }

    /// Re-evaluates every clock at `time`, which may be earlier than the
    /// current time. Traces only grow when time moves forward.
    pub fn seek(&mut self, time: f64) -> Result<()> {
        let time = check_time("scene time", time)?;
        self.seek_inner(time, false)
    }

    fn seek_inner(&mut self, time: f64, should_log: bool) -> Result<()> {
        for (idx, entry) in self.clocks.iter_mut().enumerate() {
            Self::evaluate(entry, time)?;
            if should_log {
                log::debug!(
                    "[Scene] t={:.3} clock {}: proper={:.3} marker={:?} trace={:.3}",
                    time,
                    idx,
                    entry.clock.proper_time(),
                    entry.lab_marker(time),
                    entry.trace.distance()
                );
            }
        }
        self.time = time;
        Ok(())
    }

    fn evaluate(entry: &mut SceneClock, time: f64) -> Result<()> {
        let proper_time = entry.frame.proper_time(time)?;
        entry.clock.set_proper_time(proper_time)?;
        let anchor = entry.lab_start(time);
        sync_indicator(&mut entry.indicator, anchor, proper_time)?;
        let marker = entry.lab_marker(time);
        let recorded = entry.trace.record(time, marker);
        if !recorded {
            log::trace!("[Scene] trace sample at t={:.3} dropped", time);
        }
        Ok(())
    }

    /// Per-clock drawing data at the current time.
    pub fn snapshot(&self) -> Vec<ClockFrame> {
        self.clocks
            .iter()
            .map(|entry| ClockFrame {
                start: entry.lab_start(self.time),
                end: entry.lab_end(self.time),
                marker: entry.lab_marker(self.time),
                proper_time: entry.clock.proper_time(),
                phase: entry.clock.phase(),
                indicator_value: entry.indicator.value(),
                indicator_position: entry.indicator.position(),
                trace_distance: entry.trace.distance(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ClockError;
    use crate::math::vec3::Vec3;
    const EPSILON: f64 = 1e-9;

    fn vertical_clock() -> LightClock {
        LightClock::new(Vec3::ZERO, Vec3::xy(0.0, 1.0), 1.0).unwrap()
    }

    #[test]
    fn test_scene_new() {
        let scene = Scene::new();
        assert!(scene.clocks.is_empty());
        assert_eq!(scene.time(), 0.0);
        assert!(scene.snapshot().is_empty());
    }

    #[test]
    fn test_add_clock_syncs_immediately() {
        let mut scene = Scene::new();
        let idx = scene
            .add_clock(vertical_clock(), InertialFrame::at_rest(1.0).unwrap(), IndicatorAnchor::new(-Vec3::UP, 0.5))
            .unwrap();
        assert_eq!(idx, 0);
        let frame = scene.snapshot()[0];
        assert_eq!(frame.marker, Vec3::ZERO);
        assert_eq!(frame.indicator_value, 0.0);
        assert!(frame.indicator_position.distance(Vec3::xy(0.0, -0.5)) < EPSILON);
    }

    #[test]
    fn test_step_ignores_non_positive_dt() {
        let mut scene = Scene::new();
        scene.add_clock(vertical_clock(), InertialFrame::at_rest(1.0).unwrap(), IndicatorAnchor::default()).unwrap();
        scene.step(0.0, false).unwrap();
        scene.step(-1.0, false).unwrap();
        scene.step(f64::NAN, false).unwrap();
        assert_eq!(scene.time(), 0.0);
    }

    #[test]
    fn test_step_rest_clock() {
        let mut scene = Scene::new();
        scene.add_clock(vertical_clock(), InertialFrame::at_rest(1.0).unwrap(), IndicatorAnchor::default()).unwrap();
        for _ in 0..5 {
            scene.step(0.1, false).unwrap();
        }
        let frame = scene.snapshot()[0];
        assert!((frame.proper_time - 0.5).abs() < EPSILON);
        assert!(frame.marker.distance(Vec3::xy(0.0, 0.5)) < EPSILON);
        assert!((frame.trace_distance - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_moving_clock_runs_slow_and_indicator_follows() {
        let mut scene = Scene::new();
        scene.add_clock(vertical_clock(), InertialFrame::at_rest(1.0).unwrap(), IndicatorAnchor::default()).unwrap();
        scene
            .add_clock(
                vertical_clock(),
                InertialFrame::new(Vec3::xy(0.6, 0.0), 1.0).unwrap(),
                IndicatorAnchor::new(-Vec3::UP, 0.5),
            )
            .unwrap();
        scene.seek(2.5).unwrap();

        let frames = scene.snapshot();
        assert!((frames[0].proper_time - 2.5).abs() < EPSILON);
        assert!((frames[1].proper_time - 2.0).abs() < EPSILON);
        // Moving endpoint has shifted by v t = 1.5.
        assert!(frames[1].start.distance(Vec3::xy(1.5, 0.0)) < EPSILON);
        assert!(frames[1].indicator_position.distance(Vec3::xy(1.5, -0.5)) < EPSILON);
        assert_eq!(frames[1].indicator_value, frames[1].proper_time);
        // Proper time 2.0 with period 1.0: back on `start`.
        assert!(frames[1].marker.distance(frames[1].start) < EPSILON);
    }

    #[test]
    fn test_seek_backwards_does_not_double_count_trace() {
        let mut scene = Scene::new();
        scene.add_clock(vertical_clock(), InertialFrame::at_rest(1.0).unwrap(), IndicatorAnchor::default()).unwrap();
        for _ in 0..10 {
            scene.step(0.1, false).unwrap();
        }
        let distance = scene.snapshot()[0].trace_distance;
        scene.seek(0.3).unwrap();
        let frame = scene.snapshot()[0];
        assert!((frame.proper_time - 0.3).abs() < EPSILON);
        assert!(frame.marker.distance(Vec3::xy(0.0, 0.3)) < EPSILON);
        assert_eq!(frame.trace_distance, distance);
    }

    #[test]
    fn test_trace_limit_bounds_long_runs() {
        let mut scene = Scene::with_trace_limit(16);
        scene.add_clock(vertical_clock(), InertialFrame::at_rest(1.0).unwrap(), IndicatorAnchor::default()).unwrap();
        for _ in 0..1000 {
            scene.step(0.01, false).unwrap();
        }
        let entry = &scene.clocks[0];
        assert_eq!(entry.trace.len(), 16);
        // Ten seconds at unit period: ten unit-length traversals, less what the
        // sampled polyline cuts off at each bounce.
        let distance = scene.snapshot()[0].trace_distance;
        assert!(distance > 9.8 && distance < 10.0 + EPSILON);
    }

    #[test]
    fn test_anchor_follows_moving_start_each_evaluation() {
        let mut scene = Scene::new();
        scene
            .add_clock(
                vertical_clock(),
                InertialFrame::new(Vec3::xy(0.5, 0.0), 1.0).unwrap(),
                IndicatorAnchor::new(-Vec3::UP, 0.5),
            )
            .unwrap();
        for step in 1..=4 {
            scene.step(0.5, false).unwrap();
            let frame = scene.snapshot()[0];
            let expected = Vec3::xy(0.25 * step as f64, -0.5);
            assert!(frame.indicator_position.distance(expected) < EPSILON);
            assert!(frame.marker.distance(frame.start + Vec3::UP * frame.phase.locate(Vec3::ZERO, Vec3::UP).y) < EPSILON);
        }
    }

    #[test]
    fn test_seek_rejects_negative_time() {
        let mut scene = Scene::new();
        assert!(matches!(scene.seek(-1.0), Err(ClockError::InvalidInput(_))));
    }
}
