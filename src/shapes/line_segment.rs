use crate::math::vec3::{Point3, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub a: Point3,
    pub b: Point3,
}

impl LineSegment {
    pub fn new(a: Point3, b: Point3) -> Self {
        Self { a, b }
    }

    /// Calculates the length of the line segment.
    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// Returns the direction vector of the line segment (from a to b).
    pub fn direction(&self) -> Vec3 {
        self.b - self.a
    }

    pub fn midpoint(&self) -> Point3 {
        self.point_at(0.5)
    }

    /// Point at `fraction` of the way from `a` to `b`.
    pub fn point_at(&self, fraction: f64) -> Point3 {
        self.a.lerp(self.b, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_line_segment_length() {
        let line = LineSegment::new(Vec3::new(1.0, 2.0, 0.0), Vec3::new(4.0, 6.0, 0.0));
        assert!((line.length() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_line_segment_direction() {
        let line = LineSegment::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 6.0, 3.0));
        assert_eq!(line.direction(), Vec3::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn test_line_segment_midpoint_and_point_at() {
        let line = LineSegment::new(Vec3::xy(0.0, 0.0), Vec3::xy(4.0, 2.0));
        assert_eq!(line.midpoint(), Vec3::xy(2.0, 1.0));
        assert_eq!(line.point_at(0.25), Vec3::xy(1.0, 0.5));
        assert_eq!(line.point_at(1.0), line.b);
    }
}
