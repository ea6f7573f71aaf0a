use super::*;
use approx::assert_relative_eq;
use std::f64::consts::{FRAC_PI_2, PI};

const TOL: f64 = 1e-6;

#[test]
fn rotation_quarter_turn_about_z() {
    let v = rotate_vector(DVec3::Z, FRAC_PI_2, DVec3::X);
    assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(v.y, 1.0, epsilon = 1e-12);
    assert_relative_eq!(v.z, 0.0, epsilon = 1e-12);
}

#[test]
fn rotation_axis_need_not_be_unit() {
    let v = rotate_vector(DVec3::new(0.0, 0.0, 5.0), PI, DVec3::X);
    assert_relative_eq!(v.x, -1.0, epsilon = 1e-12);
    assert_relative_eq!(v.y, 0.0, epsilon = 1e-12);
}

#[test]
fn rotation_about_zero_axis_is_identity() {
    assert_eq!(rotation_matrix(DVec3::ZERO, 1.0), DMat3::IDENTITY);
}

#[test]
fn parallel_ignores_direction_and_length() {
    assert!(are_parallel(DVec3::X, DVec3::new(-3.0, 0.0, 0.0), TOL));
    assert!(!are_parallel(DVec3::X, DVec3::Y, TOL));
    assert!(!are_parallel(DVec3::ZERO, DVec3::X, TOL));
}

#[test]
fn perpendicular_detects_orthogonal_axes() {
    assert!(are_perpendicular(DVec3::X, DVec3::new(0.0, 2.0, 0.0), TOL));
    assert!(!are_perpendicular(DVec3::X, DVec3::new(1.0, 1.0, 0.0), TOL));
}
