// Tests for the per-bond geometry cache, the epoch counter, and bend geometry helpers.

use glam::DVec3;
use nanoforce::geometry::{
    Bond, DEGENERATE_DIRECTION, DEGENERATE_INVERSE_LENGTH, EvaluationContext, bend_angle,
    bend_axis, bend_directions,
};

fn assert_approx_eq(actual: f64, expected: f64, tol: f64, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff < tol,
        "{msg}: expected {expected}, got {actual} (diff={diff}, tol={tol})"
    );
}

// ============================================================================
// Bond cache
// ============================================================================

#[test]
fn refresh_caches_unit_vector_and_inverse_length() {
    let mut bond = Bond::new(0, 1);
    let mut ctx = EvaluationContext::new();
    let positions = [DVec3::new(1.0, 2.0, 3.0), DVec3::new(1.0, 2.0, 153.0)];

    ctx.begin_pass();
    let r = bond.refresh(&positions, &mut ctx);
    let geometry = *bond.geometry();
    assert_approx_eq(r, 150.0, 1e-12, "length");
    assert_approx_eq(geometry.inverse_length, 1.0 / 150.0, 1e-15, "inverse length");
    assert!((geometry.unit - DVec3::Z).length() < 1e-15);
}

#[test]
fn coincident_atoms_get_the_sentinel_direction_in_either_order() {
    let mut bonds = [Bond::new(0, 1), Bond::new(1, 0)];
    let mut ctx = EvaluationContext::new();
    let p = DVec3::new(-4.0, 7.5, 0.25);
    let positions = [p, p];

    ctx.begin_pass();
    for bond in &mut bonds {
        let r = bond.refresh(&positions, &mut ctx);
        assert_eq!(r, 0.0);
        assert_eq!(bond.geometry().unit, DVec3::new(1.0, 1.0, 1.0));
        assert_eq!(bond.geometry().unit, DEGENERATE_DIRECTION);
        assert_eq!(bond.geometry().inverse_length, 1000.0);
        assert_eq!(bond.geometry().inverse_length, DEGENERATE_INVERSE_LENGTH);
    }
}

#[test]
fn nearly_coincident_atoms_are_degenerate_too() {
    let mut bond = Bond::new(0, 1);
    let mut ctx = EvaluationContext::new();
    let positions = [DVec3::ZERO, DVec3::new(0.0005, 0.0, 0.0)];

    ctx.begin_pass();
    bond.refresh(&positions, &mut ctx);
    assert_eq!(bond.geometry().inverse_length, DEGENERATE_INVERSE_LENGTH);
    assert_eq!(bond.geometry().unit, DEGENERATE_DIRECTION);
}

#[test]
fn bonds_start_stale_and_go_stale_on_the_next_pass() {
    let mut bond = Bond::new(0, 1);
    let mut ctx = EvaluationContext::new();
    let positions = [DVec3::ZERO, DVec3::X * 100.0];

    assert_eq!(ctx.epoch(), 0);
    assert!(!bond.is_fresh(&ctx));

    assert_eq!(ctx.begin_pass(), 1);
    assert!(!bond.is_fresh(&ctx));
    bond.ensure_fresh(&positions, &mut ctx);
    assert!(bond.is_fresh(&ctx));
    assert_eq!(bond.cache_epoch(), 1);

    bond.ensure_fresh(&positions, &mut ctx);
    assert_eq!(ctx.refreshes(), 1);

    assert_eq!(ctx.begin_pass(), 2);
    assert!(!bond.is_fresh(&ctx));
    bond.ensure_fresh(&positions, &mut ctx);
    assert_eq!(ctx.refreshes(), 2);
}

// ============================================================================
// Bend angle and directions
// ============================================================================

#[test]
fn bend_angle_polynomial_approximates_arccos() {
    for degrees in [90.0f64, 109.47, 120.0, 150.0, 179.0] {
        let theta = degrees.to_radians();
        let v1 = DVec3::X;
        let v2 = DVec3::new(theta.cos(), theta.sin(), 0.0);
        assert_approx_eq(bend_angle(v1, v2), theta, 3e-3, &format!("{degrees} degrees"));
    }
    assert_eq!(bend_angle(DVec3::X, -DVec3::X), std::f64::consts::PI);
}

#[test]
fn bend_directions_lie_in_the_bend_plane() {
    let v1 = DVec3::new(1.0, 0.2, -0.1).normalize();
    let v2 = DVec3::new(-0.3, 1.0, 0.4).normalize();
    let (q1, q2) = bend_directions(v1, v2);
    let normal = v1.cross(v2).normalize();

    assert_approx_eq(q1.length(), 1.0, 1e-12, "q1 is unit");
    assert_approx_eq(q2.length(), 1.0, 1e-12, "q2 is unit");
    assert_approx_eq(q1.dot(v1), 0.0, 1e-12, "q1 perpendicular to v1");
    assert_approx_eq(q2.dot(v2), 0.0, 1e-12, "q2 perpendicular to v2");
    assert_approx_eq(q1.dot(normal), 0.0, 1e-12, "q1 in plane");
    assert_approx_eq(q2.dot(normal), 0.0, 1e-12, "q2 in plane");
    // Both point away from the other bond, opening the angle.
    assert!(q1.dot(v2) < 0.0);
    assert!(q2.dot(v1) < 0.0);
}

#[test]
fn colinear_bonds_fall_back_to_a_fixed_axis() {
    let v1 = DVec3::new(0.0, 0.6, 0.8);
    let axis = bend_axis(v1, -v1);
    assert_eq!(axis, v1.cross(DVec3::X));

    let (q1, q2) = bend_directions(v1, -v1);
    assert!(q1.is_finite() && q2.is_finite());
    assert_approx_eq(q1.length(), 1.0, 1e-12, "q1 is unit");
    assert_approx_eq(q1.dot(axis), 0.0, 1e-12, "q1 perpendicular to axis");
    assert_approx_eq(q2.dot(axis), 0.0, 1e-12, "q2 perpendicular to axis");
}

#[test]
fn colinear_bonds_along_x_use_the_y_axis() {
    let axis = bend_axis(DVec3::X, DVec3::X);
    assert_eq!(axis, DVec3::X.cross(DVec3::Y));

    let (q1, q2) = bend_directions(DVec3::X, -DVec3::X);
    assert!(q1.is_finite() && q2.is_finite());
    assert_approx_eq(q1.dot(DVec3::Z), 0.0, 1e-15, "q1 perpendicular to z");
    assert_approx_eq(q2.dot(DVec3::Z), 0.0, 1e-15, "q2 perpendicular to z");
    assert_approx_eq(q1.length(), 1.0, 1e-15, "q1 is unit");
}
