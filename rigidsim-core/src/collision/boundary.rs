use super::{rest_allowance, settle};
use crate::body::Body;
use crate::config::WorldConfig;
use crate::vector::{split, Vector2D};
use log::trace;

/// Which of the two wall passes of a collision pass is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallPass {
    /// Bodies as the integrator left them
    Sweep,
    /// Bodies pushed into a wall by pair separation
    Correction,
}

/// Keep every body inside the world bounds. Returns the number of wall hits.
pub fn resolve_all(bodies: &mut [Body], config: &WorldConfig, dt: f64, pass: WallPass) -> usize {
    bodies
        .iter_mut()
        .map(|body| resolve(body, config, dt, pass))
        .sum()
}

/// Check the four walls independently, so a corner hit corrects both axes.
/// Walls are tested bottom, top, right, left; a body larger than the room
/// ends up flush with the top and left walls.
pub fn resolve(body: &mut Body, config: &WorldConfig, dt: f64, pass: WallPass) -> usize {
    let bounds = config.bounds;
    let extents = body.shape.extents();
    let mut hits = 0;

    if body.pos.y + extents.y > bounds.bottom() {
        body.pos.y = bounds.bottom() - extents.y;
        wall_contact(body, Vector2D::NEG_Y, config, dt, pass);
        hits += 1;
    }

    if body.pos.y < bounds.top() {
        body.pos.y = bounds.top();
        wall_contact(body, Vector2D::Y, config, dt, pass);
        hits += 1;
    }

    if body.pos.x + extents.x > bounds.right() {
        body.pos.x = bounds.right() - extents.x;
        wall_contact(body, Vector2D::NEG_X, config, dt, pass);
        hits += 1;
    }

    if body.pos.x < bounds.left() {
        body.pos.x = bounds.left();
        wall_contact(body, Vector2D::X, config, dt, pass);
        hits += 1;
    }

    hits
}

/// Velocity response for a body made flush with a wall. `normal` points from
/// the wall into the room.
fn wall_contact(
    body: &mut Body,
    normal: Vector2D,
    config: &WorldConfig,
    dt: f64,
    pass: WallPass,
) {
    let incoming = body.vel.dot(normal);

    // a neighbour pressed it here; whatever speed the separation left is not a bounce
    if pass == WallPass::Correction && incoming >= 0.0 && body.acc.dot(normal) < 0.0 {
        settle(body, normal, config);
        return;
    }

    if incoming < 0.0 {
        if -incoming <= rest_allowance(body.acc, normal, config, dt) {
            settle(body, normal, config);
            return;
        }

        let (along, tangent) = split(body.vel, normal);
        body.vel = -along * config.ground_restitution + tangent * (1.0 - config.ground_friction);
        trace!(
            "body {} bounced off wall {:?}: {:.3} -> {:.3}",
            body.id,
            normal,
            incoming,
            body.vel.dot(normal)
        );
    }

    if body.vel.dot(normal).abs() < config.velocity_threshold {
        settle(body, normal, config);
    }
}
