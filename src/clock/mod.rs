pub mod indicator;
pub mod light_clock;
pub mod phase;

pub use indicator::{sync_indicator, Indicator, IndicatorAnchor};
pub use light_clock::{ClockConfig, LightClock, ProperTime};
pub use phase::{bounce_position, BouncePhase};
