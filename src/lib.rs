//! Light-clock model for special-relativity animations.
//!
//! A photon bounces between two mirrors as a pure function of the clock's
//! proper time. Hosts set the time (directly, through a [`ProperTimeRamp`] or
//! by stepping a [`Scene`]) and read back positions to draw.

pub mod math;
pub mod clock;
pub mod shapes;
pub mod relativity;
pub mod timeline;
pub mod world;
pub mod common;

// Re-export key types for easier use
pub use math::vec3::{Point3, Vec3};
pub use clock::{bounce_position, sync_indicator, BouncePhase, ClockConfig, Indicator, IndicatorAnchor, LightClock};
pub use shapes::{cross_hatch, wall_pair, Dial, LineSegment, LocalGrid, WallPair};
pub use relativity::{lorentz_factor, InertialFrame};
pub use timeline::{PhotonTrace, ProperTimeRamp};
pub use world::{ClockFrame, Scene};
pub use common::{ClockError, ClockStyle, Result};
