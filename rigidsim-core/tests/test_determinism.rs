//! Determinism tests - the same scene produces identical frames

use rigidsim_core::tests::test_helpers::{add_square, world_with_gravity};
use rigidsim_core::{ObjectState, Shape, Vector2D, World};

fn busy_scene() -> World {
    let mut world = world_with_gravity(9.81);
    add_square(&mut world, 1, 1.0, (0.0, -50.0), (0.0, 0.0), 40.0);
    add_square(&mut world, 2, 2.5, (300.0, 100.0), (-30.0, 5.0), 25.0);
    world
        .add_object(
            3,
            0.7,
            Vector2D::new(600.0, 200.0),
            Vector2D::new(12.0, -40.0),
            Shape::Circle { radius: 10.0 },
        )
        .unwrap();
    world
}

fn record(mut world: World, frames: usize) -> Vec<Vec<ObjectState>> {
    (0..frames)
        .map(|_| {
            world.advance(0.016).unwrap();
            world.snapshots()
        })
        .collect()
}

#[test]
fn test_repeated_runs_are_bit_identical() {
    let first = record(busy_scene(), 1500);
    let second = record(busy_scene(), 1500);
    assert_eq!(first, second, "running the same scene twice should match exactly");
}

#[test]
fn test_reset_then_rebuild_matches_fresh_world() {
    let mut world = busy_scene();
    for _ in 0..200 {
        world.advance(0.016).unwrap();
    }
    world.reset();
    assert!(world.is_empty());
    assert_eq!(world.frames(), 0);

    add_square(&mut world, 1, 1.0, (0.0, -50.0), (0.0, 0.0), 40.0);
    let mut fresh = world_with_gravity(9.81);
    add_square(&mut fresh, 1, 1.0, (0.0, -50.0), (0.0, 0.0), 40.0);

    for _ in 0..300 {
        world.advance(0.016).unwrap();
        fresh.advance(0.016).unwrap();
        assert_eq!(world.get_object_state(1), fresh.get_object_state(1));
    }
}
