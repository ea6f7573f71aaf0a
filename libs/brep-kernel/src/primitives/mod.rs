//! Canned constructors built from the core operations.
//!
//! Loops are closed and consistently oriented; faces are bounded by a single
//! outer loop; solids are built by sweeping, so their shells follow the sweep
//! layout (see [`CubeFace`]).

use std::f64::consts::FRAC_PI_2;

use glam::DVec3;

use crate::entity::{Entity, Kind, Orientation, Use};
use crate::error::{ModelError, ModelResult};
use crate::eval::arc_normal;
use crate::extrude::{extrude_edge_by, extrude_face_by};
use crate::math::rotation_matrix;
use crate::model::{add_to_group, arc_center, loop_points, volume_shell, Model};

// =============================================================================
// LOOPS
// =============================================================================

/// Full circle of four quarter arcs sharing one center point.
///
/// The first ring point sits at `center + x`; each following one is rotated a
/// quarter turn about `normal`.
///
/// # Examples
/// ```
/// use brep_kernel::primitives::circle;
/// use brep_kernel::{Kind, Model};
/// use glam::DVec3;
///
/// let model = Model::new();
/// let ring = circle(&model, DVec3::ZERO, DVec3::Z, DVec3::X).unwrap();
/// assert_eq!(ring.kind(), Kind::Loop);
/// assert!(ring.used_targets().iter().all(|arc| arc.kind() == Kind::Arc));
/// ```
pub fn circle(model: &Model, center: DVec3, normal: DVec3, x: DVec3) -> ModelResult<Entity> {
    let quarter_turn = rotation_matrix(normal, FRAC_PI_2);
    let center_point = model.point(center);
    let mut offset = x;
    let mut ring = Vec::with_capacity(4);
    for _ in 0..4 {
        ring.push(model.point(center + offset));
        offset = quarter_turn * offset;
    }
    let curve_loop = model.curve_loop();
    for i in 0..4 {
        let arc = model.arc(&ring[i], &center_point, &ring[(i + 1) % 4])?;
        curve_loop.add_use(Orientation::Forward, &arc);
    }
    Ok(curve_loop)
}

/// Full ellipse of four quarter-ellipse arcs through `center ± major` and
/// `center ± minor`.
pub fn ellipse_loop(model: &Model, center: DVec3, major: DVec3, minor: DVec3) -> ModelResult<Entity> {
    let center_point = model.point(center);
    let ring = model.points(&[center + major, center + minor, center - major, center - minor]);
    let major_point = model.point(center + major / 2.0);
    let curve_loop = model.curve_loop();
    for i in 0..4 {
        let arc = model.ellipse_arc(&ring[i], &center_point, &major_point, &ring[(i + 1) % 4])?;
        curve_loop.add_use(Orientation::Forward, &arc);
    }
    Ok(curve_loop)
}

/// Closed loop of lines through `points`, wrapping from the last to the first.
pub fn polyline(model: &Model, points: &[Entity]) -> ModelResult<Entity> {
    if points.len() < 2 {
        return Err(ModelError::UnsupportedGeometry(format!(
            "a polyline needs at least 2 points, got {}",
            points.len()
        )));
    }
    let curve_loop = model.curve_loop();
    for (i, start) in points.iter().enumerate() {
        let line = model.line(start, &points[(i + 1) % points.len()])?;
        curve_loop.add_use(Orientation::Forward, &line);
    }
    Ok(curve_loop)
}

// =============================================================================
// FACES
// =============================================================================

/// Plane surface bounded by a polyline through new points at `positions`.
pub fn polygon(model: &Model, positions: &[DVec3]) -> ModelResult<Entity> {
    model.plane(&polyline(model, &model.points(positions))?)
}

/// Parallelogram swept from the edge `origin → origin + x` along `y`.
pub fn square(model: &Model, origin: DVec3, x: DVec3, y: DVec3) -> ModelResult<Entity> {
    let edge = model.line_from(origin, x)?;
    Ok(extrude_edge_by(model, &edge, y)?.lateral)
}

/// Plane surface bounded by a [`circle`].
pub fn disk(model: &Model, center: DVec3, normal: DVec3, x: DVec3) -> ModelResult<Entity> {
    model.plane(&circle(model, center, normal, x)?)
}

/// Plane surface bounded by an [`ellipse_loop`].
pub fn elliptical_disk(model: &Model, center: DVec3, major: DVec3, minor: DVec3) -> ModelResult<Entity> {
    model.plane(&ellipse_loop(model, center, major, minor)?)
}

// =============================================================================
// SPHERES
// =============================================================================

/// Group of four ruled quarter faces capping a [`circle`] on one side.
///
/// The cap lies on the circle's normal for [`Orientation::Forward`] and
/// opposite to it for [`Orientation::Reverse`]. Each face is bounded by one
/// circle arc and two arcs running from the circle up to the cap, all sharing
/// the circle's center.
pub fn hemisphere(model: &Model, circle: &Entity, orientation: Orientation) -> ModelResult<Entity> {
    if circle.kind() != Kind::Loop {
        return Err(ModelError::wrong_kind("a loop", circle));
    }
    let rim = circle.uses();
    if rim.len() != 4 || rim.iter().any(|u| u.target.kind() != Kind::Arc) {
        return Err(ModelError::UnsupportedGeometry(format!(
            "{circle} is not a circle of four arcs"
        )));
    }
    let first_arc = &rim[0].target;
    let mut normal = arc_normal(first_arc)?.ok_or_else(|| {
        ModelError::UnsupportedGeometry(format!("{first_arc} has no unique plane"))
    })?;
    if orientation.is_reverse() {
        normal = -normal;
    }

    let ring = loop_points(circle)?;
    let center = arc_center(first_arc)?;
    let radius = ring[0].position()?.distance(center.position()?);
    let cap = model.point(center.position()? + radius * normal);
    let inward = ring
        .iter()
        .map(|p| model.arc(p, &center, &cap))
        .collect::<ModelResult<Vec<_>>>()?;

    let faces = model.group();
    for (i, u) in rim.iter().enumerate() {
        let mut sides = vec![
            Use::new(u.orientation ^ orientation, u.target.clone()),
            Use::new(Orientation::Forward ^ orientation, inward[(i + 1) % 4].clone()),
            Use::new(Orientation::Reverse ^ orientation, inward[i].clone()),
        ];
        // A flipped cycle runs through its sides backwards.
        if orientation.is_reverse() {
            sides.reverse();
        }
        let side_loop = model.curve_loop();
        for side in &sides {
            side_loop.add_use(side.orientation, &side.target);
        }
        add_to_group(&faces, &model.ruled(&side_loop)?)?;
    }
    Ok(faces)
}

/// Closed shell of eight ruled quarter faces: two [`hemisphere`]s on a
/// shared equator circle.
pub fn sphere(model: &Model, center: DVec3, normal: DVec3, x: DVec3) -> ModelResult<Entity> {
    let equator = circle(model, center, normal, x)?;
    let shell = model.shell();
    for side in [Orientation::Forward, Orientation::Reverse] {
        for face in hemisphere(model, &equator, side)?.used_targets() {
            shell.add_use(Orientation::Forward, &face);
        }
    }
    Ok(shell)
}

/// Volume bounded by a [`sphere`].
pub fn ball(model: &Model, center: DVec3, normal: DVec3, x: DVec3) -> ModelResult<Entity> {
    model.volume(&sphere(model, center, normal, x)?)
}

// =============================================================================
// CUBES
// =============================================================================

/// Faces of a [`cube`], by their position in its shell.
///
/// Named for a cube built from positive `x`, `y` and `z` axes: Bottom is the
/// base square, Top its swept copy, and the sides follow the base loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeFace {
    /// The base square (`z = 0` side).
    Bottom = 0,
    /// The swept copy of the base (`z = 1` side).
    Top = 1,
    /// Side swept from the base edge along `x` (`y = 0` side).
    Front = 2,
    /// `x = 1` side.
    Right = 3,
    /// `y = 1` side.
    Back = 4,
    /// `x = 0` side.
    Left = 5,
}

/// Parallelepiped: the [`square`] spanned by `x` and `y` at `origin`, swept
/// along `z`.
///
/// # Examples
/// ```
/// use brep_kernel::primitives::{cube, cube_face, CubeFace};
/// use brep_kernel::{volume_shell, Model, Orientation};
/// use glam::DVec3;
///
/// let model = Model::new();
/// let solid = cube(&model, DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z).unwrap();
/// let shell = volume_shell(&solid).unwrap();
/// assert_eq!(shell.use_count(), 6);
///
/// let bottom = cube_face(&solid, CubeFace::Bottom).unwrap();
/// assert_eq!(shell.orientation_of(&bottom).unwrap(), Orientation::Reverse);
/// ```
pub fn cube(model: &Model, origin: DVec3, x: DVec3, y: DVec3, z: DVec3) -> ModelResult<Entity> {
    let base = square(model, origin, x, y)?;
    Ok(extrude_face_by(model, &base, z)?.lateral)
}

/// One face of a [`cube`].
pub fn cube_face(cube: &Entity, which: CubeFace) -> ModelResult<Entity> {
    volume_shell(cube)?
        .use_at(which as usize)
        .map(|u| u.target)
        .ok_or_else(|| ModelError::missing_slot(cube, "cube face"))
}
