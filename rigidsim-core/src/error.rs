//! Error types for the simulator
//!
//! Every rejected call leaves the world exactly as it was; the error only
//! describes why the call was refused.

use crate::shape::ShapeKind;
use thiserror::Error;

/// Identifier chosen by the caller for each body in a world
pub type ObjectId = u32;

/// Problems building a shape from caller-supplied data
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("unknown shape tag '{0}' (expected R, C or S)")]
    UnknownTag(char),
    #[error("{kind} needs {expected} dimension(s), got {got}")]
    MissingDimensions {
        kind: ShapeKind,
        expected: usize,
        got: usize,
    },
    #[error("{kind} {name} must be positive and finite, got {value}")]
    InvalidDimension {
        kind: ShapeKind,
        name: &'static str,
        value: f64,
    },
}

/// Errors surfaced by the world façade
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("object id must be positive, got {0}")]
    InvalidId(ObjectId),
    #[error("object id {0} is already registered")]
    DuplicateId(ObjectId),
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f64),
    #[error("invalid shape: {0}")]
    Shape(#[from] ShapeError),
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),
    #[error("unknown force selector {0} (expected 1 = friction, 2 = gravity)")]
    UnknownForceSelector(i32),
    #[error("force selector {selector} needs {expected} parameter(s), got {got}")]
    MissingForceParams {
        selector: i32,
        expected: usize,
        got: usize,
    },
    #[error("invalid force parameter {name}: {value}")]
    InvalidForceParam { name: &'static str, value: f64 },
    #[error("invalid world configuration: {0}")]
    InvalidConfig(String),
    #[error("no object with id {0}")]
    NotFound(ObjectId),
    #[error("kinematic state for object {0} must be finite")]
    InvalidState(ObjectId),
    #[error("world lock poisoned by a panicking thread")]
    LockPoisoned,
}
