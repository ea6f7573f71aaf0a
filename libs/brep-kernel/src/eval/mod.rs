//! Parametric evaluation and derived normals.
//!
//! Curves are evaluated over `u ∈ [0, 1]` from their start point to their end
//! point. Kinds without a formula evaluate to `None`, which callers must not
//! mistake for geometry.

use std::f64::consts::FRAC_PI_2;

use glam::DVec3;
use tracing::warn;

use crate::entity::{Entity, Kind};
use crate::error::{ModelError, ModelResult};
use crate::math::{are_parallel, are_perpendicular, rotate_vector};
use crate::model::{
    arc_center, edge_point, ellipse_center, ellipse_major_point, face_loop, loop_points, Model,
};

impl Model {
    /// Position on `entity` at parameter `u`.
    ///
    /// Points ignore `u`. Lines interpolate linearly, arcs rotate about their
    /// normal and quarter-ellipse arcs follow `c + cos(u·π/2)·ca + sin(u·π/2)·cb`.
    /// Every other kind yields `Ok(None)`.
    ///
    /// # Examples
    /// ```
    /// use brep_kernel::Model;
    /// use glam::DVec3;
    ///
    /// let model = Model::new();
    /// let line = model.line_between(DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0)).unwrap();
    /// assert_eq!(model.evaluate(&line, 0.25).unwrap(), Some(DVec3::new(0.5, 0.0, 0.0)));
    /// assert_eq!(model.evaluate(&model.shell(), 0.5).unwrap(), None);
    /// ```
    pub fn evaluate(&self, entity: &Entity, u: f64) -> ModelResult<Option<DVec3>> {
        let position = match entity.kind() {
            Kind::Point => entity.position()?,
            Kind::Line => {
                let a = edge_point(entity, 0)?.position()?;
                let b = edge_point(entity, 1)?.position()?;
                a.lerp(b, u)
            }
            Kind::Arc => self.evaluate_arc(entity, u)?,
            Kind::Ellipse => self.evaluate_ellipse(entity, u)?,
            Kind::Spline
            | Kind::Plane
            | Kind::Ruled
            | Kind::Volume
            | Kind::Loop
            | Kind::Shell
            | Kind::Group => return Ok(None),
        };
        Ok(Some(position))
    }

    fn evaluate_arc(&self, arc: &Entity, u: f64) -> ModelResult<DVec3> {
        let c = arc_center(arc)?.position()?;
        let ca = edge_point(arc, 0)?.position()? - c;
        let cb = edge_point(arc, 1)?.position()? - c;
        let normal = arc_normal(arc)?.ok_or_else(|| {
            ModelError::UnsupportedGeometry(format!("{arc} has no unique plane"))
        })?;
        let cosine = ca.dot(cb) / (ca.length() * cb.length());
        let full_angle = cosine.clamp(-1.0, 1.0).acos();
        Ok(c + rotate_vector(normal, full_angle * u, ca))
    }

    fn evaluate_ellipse(&self, ellipse: &Entity, u: f64) -> ModelResult<DVec3> {
        let tolerance = self.config().axis_tolerance;
        let c = ellipse_center(ellipse)?.position()?;
        let cm = ellipse_major_point(ellipse)?.position()? - c;
        let mut a = edge_point(ellipse, 0)?.position()?;
        let mut b = edge_point(ellipse, 1)?.position()?;
        let mut u = u;
        if !are_parallel(b - c, cm, tolerance) {
            std::mem::swap(&mut a, &mut b);
            u = 1.0 - u;
        }
        let (ca, cb) = (a - c, b - c);
        if !are_parallel(cb, cm, tolerance) {
            return Err(ModelError::UnsupportedGeometry(format!(
                "only quarter ellipses are supported, and {ellipse} has no endpoint on the major axis"
            )));
        }
        if !are_perpendicular(ca, cm, tolerance) {
            return Err(ModelError::UnsupportedGeometry(format!(
                "only quarter ellipses are supported, and {ellipse} has no endpoint on the minor axis"
            )));
        }
        let angle = FRAC_PI_2 * u;
        Ok(c + angle.cos() * ca + angle.sin() * cb)
    }
}

/// Unit normal of the plane spanned by an arc, oriented by its direction.
///
/// `None` when the endpoints and center are collinear.
pub fn arc_normal(arc: &Entity) -> ModelResult<Option<DVec3>> {
    let c = arc_center(arc)?.position()?;
    let ca = edge_point(arc, 0)?.position()? - c;
    let cb = edge_point(arc, 1)?.position()? - c;
    Ok(ca.cross(cb).try_normalize())
}

/// Unit normal of a planar face from the points of its outer loop.
///
/// Takes the first loop point offset of length at least `epsilon`, crosses
/// it with each later offset and returns the first product of length at least
/// `epsilon`. `None` when the loop is degenerate. Callers without a scale of
/// their own pass `config::constants::PLANE_NORMAL_EPSILON`.
pub fn plane_normal(plane: &Entity, epsilon: f64) -> ModelResult<Option<DVec3>> {
    let points = loop_points(&face_loop(plane)?)?
        .iter()
        .map(Entity::position)
        .collect::<ModelResult<Vec<_>>>()?;
    let Some((&origin, rest)) = points.split_first() else {
        return Ok(None);
    };
    let mut offsets = rest.iter().map(|p| *p - origin);
    let Some(first) = offsets.by_ref().find(|v| v.length() >= epsilon) else {
        warn!(%plane, "plane normal requested for a collapsed loop");
        return Ok(None);
    };
    let normal = offsets
        .filter(|v| v.length() >= epsilon)
        .map(|v| first.cross(v))
        .find(|n| n.length() >= epsilon)
        .map(DVec3::normalize);
    if normal.is_none() {
        warn!(%plane, "plane normal requested for a collinear loop");
    }
    Ok(normal)
}

#[cfg(test)]
mod tests;
