pub mod photon_trace;
pub mod ramp;

pub use photon_trace::PhotonTrace;
pub use ramp::ProperTimeRamp;
