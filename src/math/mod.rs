pub mod vec3;

pub use vec3::{Point3, Vec3};
