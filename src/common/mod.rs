pub mod error;
pub mod style;

pub use error::{ClockError, Result};
pub use style::ClockStyle;
