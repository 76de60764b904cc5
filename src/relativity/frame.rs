use crate::common::error::{check_positive, check_time};
use crate::common::{ClockError, Result};
use crate::math::vec3::{Point3, Vec3};
use crate::relativity::lorentz::lorentz_factor;

/// An inertial frame moving at constant `velocity` relative to the scene.
///
/// Positions are mapped Galilean-style (`x + v t`); only clock rates carry
/// the relativistic correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertialFrame {
    velocity: Vec3,
    light_speed: f64,
    gamma: f64,
}

impl InertialFrame {
    /// Creates a frame. Fails if `light_speed` is not positive or `|velocity| >= light_speed`.
    pub fn new(velocity: Vec3, light_speed: f64) -> Result<Self> {
        let light_speed = check_positive("light speed", light_speed)?;
        if !velocity.is_finite() {
            return Err(ClockError::InvalidInput(format!("velocity must be finite, got {:?}", velocity)));
        }
        let gamma = lorentz_factor(velocity.magnitude(), light_speed)?;
        Ok(Self { velocity, light_speed, gamma })
    }

    /// The scene's own frame.
    pub fn at_rest(light_speed: f64) -> Result<Self> {
        Self::new(Vec3::ZERO, light_speed)
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn light_speed(&self) -> f64 {
        self.light_speed
    }

    /// Speed as a fraction of the light speed.
    pub fn beta(&self) -> f64 {
        self.velocity.magnitude() / self.light_speed
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Proper time recorded by a clock at rest in this frame after `coordinate_time`.
    pub fn proper_time(&self, coordinate_time: f64) -> Result<f64> {
        Ok(check_time("coordinate time", coordinate_time)? / self.gamma)
    }

    /// Coordinate time needed for a clock in this frame to record `proper_time`.
    pub fn coordinate_time(&self, proper_time: f64) -> Result<f64> {
        Ok(check_time("proper time", proper_time)? * self.gamma)
    }

    /// How far the frame's origin has moved after `coordinate_time`.
    pub fn displacement(&self, coordinate_time: f64) -> Vec3 {
        self.velocity * coordinate_time
    }

    /// Maps a point at rest in this frame to scene coordinates.
    pub fn to_lab(&self, point: Point3, coordinate_time: f64) -> Point3 {
        point + self.displacement(coordinate_time)
    }

    /// Maps a scene point back into this frame.
    pub fn to_rest(&self, point: Point3, coordinate_time: f64) -> Point3 {
        point - self.displacement(coordinate_time)
    }
}
