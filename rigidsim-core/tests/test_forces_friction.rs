//! Force module: gravity and contact friction on a single body

use rigidsim_core::forces::{
    apply_gravity, apply_kinetic_friction, apply_static_friction, ForceConfig,
};
use rigidsim_core::tests::test_helpers::approx_eq;
use rigidsim_core::{Body, Shape, SimError, Vector2D};

fn body_with_velocity(vx: f64, vy: f64) -> Body {
    Body::new(
        1,
        2.0,
        Vector2D::new(10.0, 10.0),
        Vector2D::new(vx, vy),
        Shape::Square { side: 1.0 },
    )
    .unwrap()
}

#[test]
fn test_gravity_accumulates_downward() {
    let mut body = body_with_velocity(0.0, 0.0);
    apply_gravity(&mut body, 9.81);
    apply_gravity(&mut body, 1.0);
    assert!(approx_eq(body.acc.y, 10.81, 1e-12));
    assert_eq!(body.acc.x, 0.0);
}

#[test]
fn test_kinetic_friction_scales_only_the_tangent() {
    // floor normal points up (y grows downward)
    let mut body = body_with_velocity(4.0, 3.0);
    apply_kinetic_friction(&mut body, 0.3, Vector2D::NEG_Y);
    assert!(approx_eq(body.vel.x, 2.8, 1e-12));
    assert!(approx_eq(body.vel.y, 3.0, 1e-12));

    // wall normal: vertical motion is the tangent
    let mut body = body_with_velocity(4.0, 3.0);
    apply_kinetic_friction(&mut body, 0.5, Vector2D::X);
    assert!(approx_eq(body.vel.x, 4.0, 1e-12));
    assert!(approx_eq(body.vel.y, 1.5, 1e-12));
}

#[test]
fn test_kinetic_friction_never_reverses_motion() {
    let mut body = body_with_velocity(4.0, 0.0);
    apply_kinetic_friction(&mut body, 1.5, Vector2D::NEG_Y);
    assert_eq!(body.vel.x, 0.0);
}

#[test]
fn test_static_friction_holds_slow_sliding() {
    let mut body = body_with_velocity(0.08, 2.0);
    apply_static_friction(&mut body, 0.5, Vector2D::NEG_Y);
    assert_eq!(body.vel.x, 0.0);
    assert!(approx_eq(body.vel.y, 2.0, 1e-12));

    let mut fast = body_with_velocity(0.5, 0.0);
    apply_static_friction(&mut fast, 0.5, Vector2D::NEG_Y);
    assert!(approx_eq(fast.vel.x, 0.5, 1e-12));

    let mut frictionless = body_with_velocity(0.08, 0.0);
    apply_static_friction(&mut frictionless, 0.0, Vector2D::NEG_Y);
    assert!(approx_eq(frictionless.vel.x, 0.08, 1e-12));
}

#[test]
fn test_force_selectors() {
    assert_eq!(
        ForceConfig::from_selector(1, &[0.5, 0.3]),
        Ok(ForceConfig::Friction {
            static_mu: 0.5,
            kinetic_mu: 0.3
        })
    );
    assert_eq!(
        ForceConfig::from_selector(2, &[9.81, 123.0]),
        Ok(ForceConfig::Gravity { g: 9.81 })
    );
    assert_eq!(ForceConfig::Gravity { g: 1.0 }.selector(), 2);
    assert_eq!(
        ForceConfig::from_selector(0, &[1.0]),
        Err(SimError::UnknownForceSelector(0))
    );
    assert!(matches!(
        ForceConfig::from_selector(1, &[0.5, 2.0]),
        Err(SimError::InvalidForceParam {
            name: "kinetic_mu",
            ..
        })
    ));
}
