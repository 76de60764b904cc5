//! Inertial reference frames and time dilation.

pub mod frame;
pub mod lorentz;

pub use frame::InertialFrame;
pub use lorentz::{dilate, lorentz_factor};
