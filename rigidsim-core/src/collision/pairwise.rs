use super::{rest_allowance, settle};
use crate::body::Body;
use crate::config::WorldConfig;
use crate::vector::Vector2D;
use log::debug;

/// A resolved contact between bodies at indices `a` and `b`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairContact {
    pub a: usize,
    pub b: usize,
    /// Unit contact axis pointing from `a` to `b`
    pub normal: Vector2D,
    /// Overlap that was removed along `normal`
    pub depth: f64,
    /// Approach too slow to bounce; bodies now share their normal velocity
    pub resting: bool,
}

/// Test and resolve every body pair. O(n²), which is fine for hand-built scenes.
///
/// Pairs are visited lowest body first (largest bottom edge, ties by id), so
/// a support is settled before the bodies it carries and the outcome does
/// not depend on insertion order.
pub fn resolve_all(bodies: &mut [Body], config: &WorldConfig, dt: f64) -> Vec<PairContact> {
    let mut order: Vec<usize> = (0..bodies.len()).collect();
    order.sort_by(|&i, &j| {
        let (first, second) = (&bodies[i], &bodies[j]);
        second
            .aabb()
            .max
            .y
            .total_cmp(&first.aabb().max.y)
            .then(first.id.cmp(&second.id))
    });

    let mut contacts = Vec::new();
    for (n, &j) in order.iter().enumerate().skip(1) {
        for &i in &order[..n] {
            let (a, b) = pair_mut(bodies, i, j);
            if let Some((normal, depth, resting)) = resolve_pair(a, b, config, dt) {
                contacts.push(PairContact {
                    a: i,
                    b: j,
                    normal,
                    depth,
                    resting,
                });
            }
        }
    }

    contacts
}

fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

/// Contact axis and depth for two overlapping bodies. The axis is the one
/// with the smaller overlap, i.e. the side the bodies ran into each other on.
pub fn contact_axis(a: &Body, b: &Body) -> Option<(Vector2D, f64)> {
    let box_a = a.aabb();
    let box_b = b.aabb();
    if !box_a.overlaps(&box_b) {
        return None;
    }

    let overlap = box_a.overlap(&box_b);
    let delta = box_b.center() - box_a.center();
    let toward = |d: f64| if d >= 0.0 { 1.0 } else { -1.0 };

    if overlap.x < overlap.y {
        Some((Vector2D::new(toward(delta.x), 0.0), overlap.x))
    } else {
        Some((Vector2D::new(0.0, toward(delta.y)), overlap.y))
    }
}

/// Resolve one pair with a 1D impulse along the contact axis, then push the
/// bodies apart. Returns `(normal, depth, resting)` if they overlapped.
pub fn resolve_pair(
    a: &mut Body,
    b: &mut Body,
    config: &WorldConfig,
    dt: f64,
) -> Option<(Vector2D, f64, bool)> {
    let (normal, depth) = contact_axis(a, b)?;

    let inv_a = a.inverse_mass();
    let inv_b = b.inverse_mass();
    let approach = (b.vel - a.vel).dot(normal);

    // b pressing into a, seen from a's side of the contact
    let pressing = rest_allowance(b.acc - a.acc, normal, config, dt);
    let mut resting = approach < 0.0 && -approach <= pressing;

    if approach < 0.0 && !resting {
        let e = config.ground_restitution;
        let j = -(1.0 + e) * approach / (inv_a + inv_b);
        a.vel -= normal * (j * inv_a);
        b.vel += normal * (j * inv_b);
        debug!(
            "bodies {} and {} collided along {:?}, impulse {:.3}",
            a.id, b.id, normal, j
        );
    }

    let separating = (b.vel - a.vel).dot(normal);
    if separating.abs() < config.velocity_threshold {
        resting = true;
    }

    let supported = (a.resting, b.resting);
    if resting {
        match supported {
            // a supported body does not give way; the other one matches it,
            // and rests on it if it presses into it
            (true, false) => {
                b.vel -= normal * separating;
                if b.acc.dot(normal) < 0.0 {
                    settle(b, normal, config);
                }
            }
            (false, true) => {
                a.vel += normal * separating;
                if a.acc.dot(-normal) < 0.0 {
                    settle(a, -normal, config);
                }
            }
            (false, false) => {
                let va = a.vel.dot(normal);
                let vb = b.vel.dot(normal);
                let common = (a.mass * va + b.mass * vb) / (a.mass + b.mass);
                a.vel += normal * (common - va);
                b.vel += normal * (common - vb);
            }
            (true, true) => {}
        }
    }

    let (share_a, share_b) = match supported {
        (true, false) => (0.0, 1.0),
        (false, true) => (1.0, 0.0),
        _ => (inv_a / (inv_a + inv_b), inv_b / (inv_a + inv_b)),
    };
    a.pos -= normal * (depth * share_a);
    b.pos += normal * (depth * share_b);

    Some((normal, depth, resting))
}
