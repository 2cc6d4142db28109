//! Force models acting on a single body
//!
//! Gravity and custom forces feed the acceleration consumed by the
//! integrator. Friction is a contact effect and acts on velocity directly,
//! once per contact event, against the part of the velocity tangent to the
//! contact normal.

use crate::body::Body;
use crate::config::DEFAULT_VELOCITY_THRESHOLD;
use crate::error::SimError;
use crate::vector::{split, Vector2D};

/// Tangential speed under which static friction holds a body in place
pub const REST_VELOCITY_THRESHOLD: f64 = DEFAULT_VELOCITY_THRESHOLD;

/// Selector value for `ForceConfig::Friction`
pub const FRICTION_SELECTOR: i32 = 1;
/// Selector value for `ForceConfig::Gravity`
pub const GRAVITY_SELECTOR: i32 = 2;

/// World-global force parameters a caller may change
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForceConfig {
    Friction { static_mu: f64, kinetic_mu: f64 },
    Gravity { g: f64 },
}

impl ForceConfig {
    /// Decode the numeric selector form: `1` = friction `(mu_s, mu_k)`,
    /// `2` = gravity `(g)`.
    pub fn from_selector(selector: i32, params: &[f64]) -> Result<Self, SimError> {
        let expected = match selector {
            FRICTION_SELECTOR => 2,
            GRAVITY_SELECTOR => 1,
            other => return Err(SimError::UnknownForceSelector(other)),
        };
        if params.len() < expected {
            return Err(SimError::MissingForceParams {
                selector,
                expected,
                got: params.len(),
            });
        }

        let config = if selector == FRICTION_SELECTOR {
            ForceConfig::Friction {
                static_mu: params[0],
                kinetic_mu: params[1],
            }
        } else {
            ForceConfig::Gravity { g: params[0] }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn selector(&self) -> i32 {
        match self {
            ForceConfig::Friction { .. } => FRICTION_SELECTOR,
            ForceConfig::Gravity { .. } => GRAVITY_SELECTOR,
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        match *self {
            ForceConfig::Friction {
                static_mu,
                kinetic_mu,
            } => {
                for (name, value) in [("static_mu", static_mu), ("kinetic_mu", kinetic_mu)] {
                    if !(value.is_finite() && (0.0..=1.0).contains(&value)) {
                        return Err(SimError::InvalidForceParam { name, value });
                    }
                }
                Ok(())
            }
            ForceConfig::Gravity { g } => {
                if g.is_finite() {
                    Ok(())
                } else {
                    Err(SimError::InvalidForceParam { name: "g", value: g })
                }
            }
        }
    }
}

/// Add downward gravitational acceleration
pub fn apply_gravity(body: &mut Body, g: f64) {
    body.acc.y += g;
}

/// Add the acceleration produced by an external force
pub fn apply_custom_force(body: &mut Body, force: Vector2D) {
    body.acc += force / body.mass;
}

/// Hold the body still along the surface once it has nearly stopped sliding
pub fn apply_static_friction(body: &mut Body, static_mu: f64, normal: Vector2D) {
    if static_mu <= 0.0 {
        return;
    }
    let (along, tangent) = split(body.vel, normal);
    if tangent.length() < REST_VELOCITY_THRESHOLD {
        body.vel = along;
    }
}

/// Scale the sliding velocity by `1 - kinetic_mu`
pub fn apply_kinetic_friction(body: &mut Body, kinetic_mu: f64, normal: Vector2D) {
    let (along, tangent) = split(body.vel, normal);
    if tangent == Vector2D::ZERO {
        return;
    }
    body.vel = along + tangent * (1.0 - kinetic_mu).clamp(0.0, 1.0);
}
