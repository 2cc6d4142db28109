//! Integration law under gravity, with no contacts involved

use rigidsim_core::tests::test_helpers::{add_square, approx_eq, state, world_with_gravity};
use rigidsim_core::{SimError, Vector2D};

#[test]
fn test_single_step_follows_semi_implicit_euler() {
    for dt in [0.001, 0.016, 0.1, 0.5, 1.0] {
        let mut world = world_with_gravity(9.81);
        add_square(&mut world, 1, 2.0, (100.0, 100.0), (3.0, -2.0), 10.0);
        let before = state(&world, 1);

        world.step(dt).expect("positive dt");
        let after = state(&world, 1);

        assert!(approx_eq(after.vel_y, before.vel_y + 9.81 * dt, 1e-9), "dt = {}", dt);
        assert!(approx_eq(after.pos_y, before.pos_y + after.vel_y * dt, 1e-9), "dt = {}", dt);
        assert!(approx_eq(after.vel_x, 3.0, 1e-12));
        assert!(approx_eq(after.pos_x, 100.0 + 3.0 * dt, 1e-9));
        assert!(approx_eq(after.acc_y, 9.81, 1e-12));
        assert!(approx_eq(after.acc_x, 0.0, 1e-12));
    }
}

#[test]
fn test_gravity_is_independent_of_mass() {
    let mut world = world_with_gravity(9.81);
    add_square(&mut world, 1, 1.0, (100.0, 100.0), (0.0, 0.0), 10.0);
    add_square(&mut world, 2, 50.0, (300.0, 100.0), (0.0, 0.0), 10.0);

    for _ in 0..10 {
        world.step(0.016).unwrap();
    }

    assert!(approx_eq(state(&world, 1).pos_y, state(&world, 2).pos_y, 1e-12));
    assert!(state(&world, 1).pos_y > 100.0);
}

#[test]
fn test_non_positive_dt_is_rejected_without_side_effects() {
    let mut world = world_with_gravity(9.81);
    add_square(&mut world, 1, 1.0, (100.0, 100.0), (1.0, 1.0), 10.0);
    let before = state(&world, 1);

    for dt in [0.0, -0.016, f64::NAN, f64::INFINITY] {
        let result = world.step(dt);
        assert!(matches!(result, Err(SimError::InvalidTimeStep(_))), "dt = {}", dt);
        assert_eq!(state(&world, 1), before);
    }
    assert_eq!(world.frames(), 0);
    assert!(world.advance(0.0).is_err());
}

#[test]
fn test_custom_force_adds_to_gravity() {
    let mut world = world_with_gravity(9.81);
    add_square(&mut world, 1, 2.0, (100.0, 100.0), (0.0, 0.0), 10.0);
    world
        .set_custom_force(1, Vector2D::new(4.0, -2.0))
        .expect("body exists");

    world.step(0.5).unwrap();
    let s = state(&world, 1);

    assert!(approx_eq(s.acc_x, 2.0, 1e-12));
    assert!(approx_eq(s.acc_y, 9.81 - 1.0, 1e-12));
    assert!(approx_eq(s.vel_x, 1.0, 1e-12));

    // Clearing the force leaves only gravity on the next step
    world.set_custom_force(1, Vector2D::ZERO).unwrap();
    world.step(0.5).unwrap();
    assert!(approx_eq(state(&world, 1).acc_x, 0.0, 1e-12));
}

#[test]
fn test_impulse_changes_velocity_by_inverse_mass() {
    let mut world = world_with_gravity(0.0);
    add_square(&mut world, 1, 4.0, (100.0, 100.0), (1.0, 0.0), 10.0);

    world.apply_impulse(1, Vector2D::new(8.0, -4.0)).unwrap();
    let s = state(&world, 1);

    assert!(approx_eq(s.vel_x, 3.0, 1e-12));
    assert!(approx_eq(s.vel_y, -1.0, 1e-12));
    assert_eq!(
        world.apply_impulse(9, Vector2D::X),
        Err(SimError::NotFound(9))
    );
}
