pub mod scene;

pub use scene::{ClockFrame, Scene, SceneClock};
