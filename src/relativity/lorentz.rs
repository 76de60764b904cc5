use crate::common::error::{check_positive, check_time};
use crate::common::{ClockError, Result};

/// Lorentz factor `1 / sqrt(1 - v²/c²)` for a speed `v` below the light speed `c`.
pub fn lorentz_factor(speed: f64, light_speed: f64) -> Result<f64> {
    let light_speed = check_positive("light speed", light_speed)?;
    if !speed.is_finite() || speed < 0.0 || speed >= light_speed {
        return Err(ClockError::InvalidInput(format!(
            "speed must be in [0, {light_speed}), got {speed}"
        )));
    }
    let beta = speed / light_speed;
    Ok(1.0 / (1.0 - beta * beta).sqrt())
}

/// Coordinate time that elapses while a clock moving at `speed` records `proper_time`.
pub fn dilate(proper_time: f64, speed: f64, light_speed: f64) -> Result<f64> {
    let proper_time = check_time("proper time", proper_time)?;
    Ok(proper_time * lorentz_factor(speed, light_speed)?)
}
