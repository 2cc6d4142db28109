//! Contact detection and response
//!
//! A collision pass runs in four stages:
//! 1. walls, so bodies already lying on a wall are marked resting;
//! 2. every body pair, lowest first, so resting bodies carry the ones
//!    stacked on them;
//! 3. walls again, for bodies the pair separation pushed out of bounds;
//! 4. support propagation through the resting pair contacts.

pub mod boundary;
pub mod pairwise;

use crate::body::Body;
use crate::config::WorldConfig;
use crate::forces::{apply_kinetic_friction, apply_static_friction};
use crate::vector::Vector2D;
use log::trace;

pub use boundary::WallPass;
pub use pairwise::PairContact;

/// Counts gathered during one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub wall_contacts: usize,
    pub pair_contacts: usize,
    pub resting_bodies: usize,
}

/// Resolve every wall and pair contact for the current state.
/// `dt` is the length of the step that produced this state, zero if none.
pub fn handle_collisions(bodies: &mut [Body], config: &WorldConfig, dt: f64) -> CollisionReport {
    for body in bodies.iter_mut() {
        body.resting = false;
    }

    let mut report = CollisionReport {
        wall_contacts: boundary::resolve_all(bodies, config, dt, WallPass::Sweep),
        ..Default::default()
    };

    let contacts = pairwise::resolve_all(bodies, config, dt);
    report.pair_contacts = contacts.len();

    report.wall_contacts += boundary::resolve_all(bodies, config, dt, WallPass::Correction);
    propagate_support(bodies, &contacts, config);

    report.resting_bodies = bodies.iter().filter(|b| b.resting).count();
    trace!(
        "collision pass: {} wall, {} pair, {} resting",
        report.wall_contacts,
        report.pair_contacts,
        report.resting_bodies
    );
    report
}

/// Speed along `normal` that one step of pressing acceleration accounts for.
/// Approaches slower than this are treated as resting instead of bouncing.
pub(crate) fn rest_allowance(
    pressing_acc: Vector2D,
    normal: Vector2D,
    config: &WorldConfig,
    dt: f64,
) -> f64 {
    let load = (-pressing_acc.dot(normal)).max(0.0);
    config.velocity_threshold + load * dt
}

/// Bring a body to rest against a support whose surface normal, pointing
/// toward the body, is `normal`. If the body presses into the support, the
/// support cancels that acceleration and contact friction acts on the
/// sliding velocity.
pub(crate) fn settle(body: &mut Body, normal: Vector2D, config: &WorldConfig) {
    body.vel -= normal * body.vel.dot(normal);

    let pressing = body.acc.dot(normal);
    if pressing < 0.0 {
        body.acc -= normal * pressing;
        apply_kinetic_friction(body, config.kinetic_friction, normal);
        apply_static_friction(body, config.static_friction, normal);
        body.resting = true;
    }
}

/// Mark bodies resting on top of resting bodies, bottom-up through stacks
fn propagate_support(bodies: &mut [Body], contacts: &[PairContact], config: &WorldConfig) {
    for _ in 0..bodies.len() {
        let mut changed = false;

        for contact in contacts.iter().filter(|c| c.resting) {
            // normal points from a to b
            let candidates = [
                (contact.a, contact.b, contact.normal),
                (contact.b, contact.a, -contact.normal),
            ];
            for (support, carried, normal) in candidates {
                if bodies[support].resting
                    && !bodies[carried].resting
                    && bodies[carried].acc.dot(normal) < 0.0
                {
                    settle(&mut bodies[carried], normal, config);
                    changed |= bodies[carried].resting;
                }
            }
        }

        if !changed {
            break;
        }
    }
}
