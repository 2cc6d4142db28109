//! Test helper utilities for simulator tests

use crate::{ObjectId, ObjectState, Shape, Vector2D, World, WorldConfig};

/// Check if two floating point values are approximately equal within tolerance
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Check both components of two vectors within tolerance
pub fn approx_eq_vec(a: Vector2D, b: Vector2D, tol: f64) -> bool {
    approx_eq(a.x, b.x, tol) && approx_eq(a.y, b.y, tol)
}

/// World with default bounds and the given gravity
pub fn world_with_gravity(g: f64) -> World {
    let config = WorldConfig {
        gravity: g,
        ..WorldConfig::default()
    };
    World::with_config(config).expect("default config with finite gravity is valid")
}

/// Add a square body and panic if the world refuses it
pub fn add_square(
    world: &mut World,
    id: ObjectId,
    mass: f64,
    pos: (f64, f64),
    vel: (f64, f64),
    side: f64,
) {
    world
        .add_object(
            id,
            mass,
            Vector2D::new(pos.0, pos.1),
            Vector2D::new(vel.0, vel.1),
            Shape::Square { side },
        )
        .expect("test body should be accepted");
}

/// Snapshot that must exist
pub fn state(world: &World, id: ObjectId) -> ObjectState {
    world
        .get_object_state(id)
        .unwrap_or_else(|| panic!("object {} should exist", id))
}

/// Run frames until the world reports rest, returning the number of frames,
/// or `None` if it is still moving after `max_frames`
pub fn run_until_rest(world: &mut World, dt: f64, max_frames: usize) -> Option<usize> {
    for frame in 1..=max_frames {
        if world.advance(dt).expect("positive dt") {
            return Some(frame);
        }
    }
    None
}
