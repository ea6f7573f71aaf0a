//! Small numeric helpers on top of `glam`.
//!
//! Everything else (dot and cross products, normalization, matrix-vector
//! products) is used directly from `glam::DVec3` / `glam::DMat3`.

use glam::{DMat3, DVec3};

/// Rotation matrix about `axis` by `angle` radians (right-handed).
///
/// The axis does not need to be normalized. A zero axis yields the identity.
///
/// # Examples
/// ```
/// use brep_kernel::math::rotation_matrix;
/// use glam::DVec3;
///
/// let r = rotation_matrix(DVec3::Z, std::f64::consts::FRAC_PI_2);
/// let v = r * DVec3::X;
/// assert!((v - DVec3::Y).length() < 1e-12);
/// ```
pub fn rotation_matrix(axis: DVec3, angle: f64) -> DMat3 {
    match axis.try_normalize() {
        Some(unit) => DMat3::from_axis_angle(unit, angle),
        None => DMat3::IDENTITY,
    }
}

/// Rotates `v` about `axis` by `angle` radians.
pub fn rotate_vector(axis: DVec3, angle: f64, v: DVec3) -> DVec3 {
    rotation_matrix(axis, angle) * v
}

/// Whether `a` and `b` point along the same line (either direction).
pub fn are_parallel(a: DVec3, b: DVec3, tolerance: f64) -> bool {
    match (a.try_normalize(), b.try_normalize()) {
        (Some(a), Some(b)) => 1.0 - a.dot(b).abs() < tolerance,
        _ => false,
    }
}

/// Whether `a` and `b` are orthogonal.
pub fn are_perpendicular(a: DVec3, b: DVec3, tolerance: f64) -> bool {
    match (a.try_normalize(), b.try_normalize()) {
        (Some(a), Some(b)) => a.dot(b).abs() < tolerance,
        _ => false,
    }
}

#[cfg(test)]
mod tests;
