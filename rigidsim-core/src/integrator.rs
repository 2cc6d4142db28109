use crate::body::Body;
use crate::error::SimError;

/// Reject time steps that are not finite and positive
pub fn check_dt(dt: f64) -> Result<(), SimError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidTimeStep(dt))
    }
}

/// Step bodies forward by dt using semi-implicit Euler integration.
/// Accelerations must already be computed for this step.
pub fn step<'a>(bodies: impl IntoIterator<Item = &'a mut Body>, dt: f64) -> Result<(), SimError> {
    check_dt(dt)?;

    // v += a*dt, then x += v*dt
    for body in bodies {
        body.vel += body.acc * dt;
        body.pos += body.vel * dt;
    }

    Ok(())
}
