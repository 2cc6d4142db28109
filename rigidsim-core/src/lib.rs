pub mod body;
pub mod collision;
pub mod config;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod shape;
pub mod shared;
pub mod stability;
pub mod vector;
pub mod world;

pub use body::{Aabb, Body, ObjectState};
pub use collision::CollisionReport;
pub use config::{Bounds, WorldConfig};
pub use error::{ObjectId, ShapeError, SimError};
pub use forces::ForceConfig;
pub use shape::{Shape, ShapeKind};
pub use shared::SharedWorld;
pub use stability::StabilityDetector;
pub use vector::Vector2D;
pub use world::World;

// Test helpers module (public for integration tests)
// Always compiled - integration tests are separate crates and need access
pub mod tests;
