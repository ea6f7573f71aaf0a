//! Sweep construction.
//!
//! Sweeping climbs the dimension ladder: a point sweeps into a line, a curve
//! into a face, a loop into a band of faces, a face into a volume. Every sweep
//! returns an [`Extrusion`]: the lateral entity swept out sideways and the
//! transformed copy at the far end.
//!
//! Batch sweeps record each swept point's and curve's result index in its
//! scratch slot, so an entity shared by several parents is swept exactly once
//! and every parent wires the same lateral and end entities.

use glam::DVec3;
use tracing::debug;

use crate::closure::{closure, filter_by_dimension, filter_points};
use crate::entity::{Entity, Kind, Orientation, ScratchScope};
use crate::error::{ModelError, ModelResult};
use crate::model::{
    add_to_group, arc_center, edge_point, ellipse_center, ellipse_major_point, loop_points, Model,
};

/// Point transform driving a sweep.
pub type Transform<'a> = dyn Fn(DVec3) -> DVec3 + 'a;

/// Translation by a fixed vector, the common sweep transform.
///
/// # Examples
/// ```
/// use brep_kernel::extrude::translation;
/// use glam::DVec3;
///
/// let up = translation(DVec3::Z);
/// assert_eq!(up(DVec3::X), DVec3::new(1.0, 0.0, 1.0));
/// ```
pub fn translation(offset: DVec3) -> impl Fn(DVec3) -> DVec3 {
    move |p| p + offset
}

/// Result of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Extrusion {
    /// Entity swept out between the original and its transformed copy.
    pub lateral: Entity,
    /// Transformed copy of the original at the far end.
    pub end: Entity,
}

// =============================================================================
// SINGLE SWEEPS
// =============================================================================

/// Sweeps a point into a line ending at a transformed copy of the point.
pub fn extrude_point(model: &Model, point: &Entity, transform: &Transform<'_>) -> ModelResult<Extrusion> {
    let end = transformed_copy(model, point, transform)?;
    let lateral = model.line(point, &end)?;
    Ok(Extrusion { lateral, end })
}

/// Translation form of [`extrude_point`].
pub fn extrude_point_by(model: &Model, point: &Entity, offset: DVec3) -> ModelResult<Extrusion> {
    extrude_point(model, point, &translation(offset))
}

fn transformed_copy(model: &Model, point: &Entity, transform: &Transform<'_>) -> ModelResult<Entity> {
    let geometry = point.geometry()?;
    Ok(model.point_with_size(transform(geometry.position), geometry.size))
}

/// Sweeps a curve into a face, given the sweeps of its start (`left`) and
/// end (`right`) points.
///
/// The face boundary walks the curve forward, up the right lateral, back along
/// the end curve and down the left lateral. Curve helpers (arc and ellipse
/// centers, the ellipse major-axis point, spline control points) are copied
/// through the same transform so the end curve keeps its shape in the swept
/// frame. Lines sweep into plane surfaces, every other curve into ruled ones.
pub fn extrude_edge(
    model: &Model,
    edge: &Entity,
    transform: &Transform<'_>,
    left: &Extrusion,
    right: &Extrusion,
) -> ModelResult<Extrusion> {
    let end = match edge.kind() {
        Kind::Line => model.line(&left.end, &right.end)?,
        Kind::Arc => {
            let center = transformed_copy(model, &arc_center(edge)?, transform)?;
            model.arc(&left.end, &center, &right.end)?
        }
        Kind::Ellipse => {
            let center = transformed_copy(model, &ellipse_center(edge)?, transform)?;
            let major = transformed_copy(model, &ellipse_major_point(edge)?, transform)?;
            model.ellipse_arc(&left.end, &center, &major, &right.end)?
        }
        Kind::Spline => {
            let mut points = vec![left.end.clone()];
            for helper in edge.helpers() {
                points.push(transformed_copy(model, &helper, transform)?);
            }
            points.push(right.end.clone());
            model.spline(&points)?
        }
        Kind::Point
        | Kind::Plane
        | Kind::Ruled
        | Kind::Volume
        | Kind::Loop
        | Kind::Shell
        | Kind::Group => return Err(ModelError::wrong_kind("a curve", edge)),
    };

    let boundary = model.curve_loop();
    boundary.add_use(Orientation::Forward, edge);
    boundary.add_use(Orientation::Forward, &right.lateral);
    boundary.add_use(Orientation::Reverse, &end);
    boundary.add_use(Orientation::Reverse, &left.lateral);

    let lateral = if edge.kind() == Kind::Line {
        model.plane(&boundary)?
    } else {
        model.ruled(&boundary)?
    };
    Ok(Extrusion { lateral, end })
}

/// Translation form of [`extrude_edge`], sweeping both endpoints first.
pub fn extrude_edge_by(model: &Model, edge: &Entity, offset: DVec3) -> ModelResult<Extrusion> {
    let transform = translation(offset);
    let left = extrude_point(model, &edge_point(edge, 0)?, &transform)?;
    let right = extrude_point(model, &edge_point(edge, 1)?, &transform)?;
    extrude_edge(model, edge, &transform, &left, &right)
}

// =============================================================================
// BATCH SWEEPS
// =============================================================================

/// Sweep results for a set of points and curves, indexed through scratch.
///
/// The batch owns the scratch slots of everything it swept; dropping it
/// returns them to idle.
pub(crate) struct SweepBatch {
    scope: ScratchScope,
    points: Vec<Extrusion>,
    edges: Vec<Extrusion>,
}

impl SweepBatch {
    pub(crate) fn new() -> Self {
        Self {
            scope: ScratchScope::new(),
            points: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Sweeps each point once, recording its result index in scratch.
    pub(crate) fn extrude_points(
        &mut self,
        model: &Model,
        points: &[Entity],
        transform: &Transform<'_>,
    ) -> ModelResult<()> {
        for point in points {
            let extrusion = extrude_point(model, point, transform)?;
            self.scope.set(point, self.points.len());
            self.points.push(extrusion);
        }
        Ok(())
    }

    /// Sweeps each curve once, reusing the recorded sweeps of its endpoints.
    pub(crate) fn extrude_edges(
        &mut self,
        model: &Model,
        edges: &[Entity],
        transform: &Transform<'_>,
    ) -> ModelResult<()> {
        for edge in edges {
            let left = self.point_result(&edge_point(edge, 0)?)?;
            let right = self.point_result(&edge_point(edge, 1)?)?;
            let extrusion = extrude_edge(model, edge, transform, left, right)?;
            self.scope.set(edge, self.edges.len());
            self.edges.push(extrusion);
        }
        Ok(())
    }

    pub(crate) fn point_result(&self, point: &Entity) -> ModelResult<&Extrusion> {
        lookup(&self.scope, &self.points, point)
    }

    pub(crate) fn edge_result(&self, edge: &Entity) -> ModelResult<&Extrusion> {
        lookup(&self.scope, &self.edges, edge)
    }
}

fn lookup<'a>(
    scope: &ScratchScope,
    results: &'a [Extrusion],
    entity: &Entity,
) -> ModelResult<&'a Extrusion> {
    scope
        .get(entity)
        .and_then(|index| results.get(index))
        .ok_or_else(|| ModelError::MissingSweep(entity.to_string()))
}

/// Wires the lateral faces of an already swept loop into `shell` and builds
/// the loop at the far end.
///
/// Each lateral face enters the shell with the loop use's orientation
/// composed with `shell_orientation`; the end loop reuses the original
/// orientations on the end curves.
pub(crate) fn wire_loop_sweep(
    model: &Model,
    curve_loop: &Entity,
    shell: &Entity,
    shell_orientation: Orientation,
    batch: &SweepBatch,
) -> ModelResult<Entity> {
    let uses = curve_loop.uses();
    let end = model.curve_loop();
    for u in &uses {
        end.add_use(u.orientation, &batch.edge_result(&u.target)?.end);
    }
    for u in &uses {
        shell.add_use(
            u.orientation ^ shell_orientation,
            &batch.edge_result(&u.target)?.lateral,
        );
    }
    Ok(end)
}

// =============================================================================
// LOOP, FACE AND GROUP SWEEPS
// =============================================================================

/// Sweeps a loop into a band of lateral faces added to `shell`.
///
/// Returns the shell as the lateral entity and the new end loop.
pub fn extrude_loop(
    model: &Model,
    curve_loop: &Entity,
    transform: &Transform<'_>,
    shell: &Entity,
    shell_orientation: Orientation,
) -> ModelResult<Extrusion> {
    if shell.kind() != Kind::Shell {
        return Err(ModelError::wrong_kind("a shell", shell));
    }
    let points = loop_points(curve_loop)?;
    let edges = curve_loop.used_targets();

    let mut batch = SweepBatch::new();
    batch.extrude_points(model, &points, transform)?;
    batch.extrude_edges(model, &edges, transform)?;
    let end = wire_loop_sweep(model, curve_loop, shell, shell_orientation, &batch)?;

    debug!(%curve_loop, points = points.len(), edges = edges.len(), "swept loop");
    Ok(Extrusion {
        lateral: shell.clone(),
        end,
    })
}

/// Translation form of [`extrude_loop`] into a fresh shell.
pub fn extrude_loop_by(model: &Model, curve_loop: &Entity, offset: DVec3) -> ModelResult<Extrusion> {
    let shell = model.shell();
    extrude_loop(model, curve_loop, &translation(offset), &shell, Orientation::Forward)
}

/// Sweeps a face into a volume.
///
/// All boundary loops (outer and holes) share one batch, so every point and
/// curve of the face is swept once. The volume's shell holds the original
/// face reversed, the end face, then the lateral faces loop by loop.
///
/// # Examples
/// ```
/// use brep_kernel::extrude::{extrude_face, translation};
/// use brep_kernel::primitives::polygon;
/// use brep_kernel::{volume_shell, Kind, Model};
/// use glam::DVec3;
///
/// let model = Model::new();
/// let triangle = polygon(&model, &[DVec3::ZERO, DVec3::X, DVec3::Y]).unwrap();
/// let prism = extrude_face(&model, &triangle, &translation(DVec3::Z)).unwrap();
///
/// assert_eq!(prism.lateral.kind(), Kind::Volume);
/// assert_eq!(volume_shell(&prism.lateral).unwrap().use_count(), 5);
/// ```
pub fn extrude_face(model: &Model, face: &Entity, transform: &Transform<'_>) -> ModelResult<Extrusion> {
    if !face.kind().is_face() {
        return Err(ModelError::wrong_kind("a face", face));
    }
    let batch = sweep_boundaries(model, face, transform)?;
    sweep_face(model, face, &batch)
}

/// Translation form of [`extrude_face`].
pub fn extrude_face_by(model: &Model, face: &Entity, offset: DVec3) -> ModelResult<Extrusion> {
    extrude_face(model, face, &translation(offset))
}

/// Sweeps every face of a group into a volume, sharing one batch across the
/// whole group so that boundary shared between faces is swept once.
///
/// Returns a group of volumes and a group of end faces, in member order.
pub fn extrude_face_group(
    model: &Model,
    group: &Entity,
    transform: &Transform<'_>,
) -> ModelResult<Extrusion> {
    if group.kind() != Kind::Group {
        return Err(ModelError::wrong_kind("a group", group));
    }
    let faces = group.used_targets();
    if let Some(bad) = faces.iter().find(|f| !f.kind().is_face()) {
        return Err(ModelError::wrong_kind("a face", bad));
    }

    let batch = sweep_boundaries(model, group, transform)?;
    let volumes = model.group();
    let ends = model.group();
    for face in &faces {
        let swept = sweep_face(model, face, &batch)?;
        add_to_group(&volumes, &swept.lateral)?;
        add_to_group(&ends, &swept.end)?;
    }
    debug!(%group, faces = faces.len(), "swept face group");
    Ok(Extrusion {
        lateral: volumes,
        end: ends,
    })
}

/// Translation form of [`extrude_face_group`].
pub fn extrude_face_group_by(model: &Model, group: &Entity, offset: DVec3) -> ModelResult<Extrusion> {
    extrude_face_group(model, group, &translation(offset))
}

fn sweep_boundaries(model: &Model, root: &Entity, transform: &Transform<'_>) -> ModelResult<SweepBatch> {
    let order = closure(root, false, true);
    let points = filter_points(&order);
    let edges = filter_by_dimension(&order, 1);

    let mut batch = SweepBatch::new();
    batch.extrude_points(model, &points, transform)?;
    batch.extrude_edges(model, &edges, transform)?;
    debug!(%root, points = points.len(), edges = edges.len(), "swept boundary");
    Ok(batch)
}

fn sweep_face(model: &Model, face: &Entity, batch: &SweepBatch) -> ModelResult<Extrusion> {
    let end = model.create(face.kind());
    let shell = model.shell();
    shell.add_use(Orientation::Reverse, face);
    shell.add_use(Orientation::Forward, &end);
    for u in face.uses() {
        let end_loop = wire_loop_sweep(model, &u.target, &shell, u.orientation, batch)?;
        end.add_use(u.orientation, &end_loop);
    }
    let volume = model.volume(&shell)?;
    Ok(Extrusion { lateral: volume, end })
}
