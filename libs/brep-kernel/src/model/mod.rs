//! Modeling session context.
//!
//! A [`Model`] owns the identifier allocator and the live-entity counter for
//! one model-building session, plus the kernel configuration. All entities are
//! created through it; wiring happens on the entity handles themselves.

mod topology;

pub use topology::{
    add_hole_to_face, add_to_group, arc_center, edge_point, ellipse_center, ellipse_major_point,
    face_loop, loop_points, volume_shell,
};

use std::cell::Cell;
use std::rc::Rc;

use glam::DVec3;
use tracing::trace;

use crate::config::KernelConfig;
use crate::entity::{Entity, EntityId, Kind, Orientation, PointGeometry};
use crate::error::{ModelError, ModelResult};
use crate::extrude::{extrude_point, translation};

/// Modeling session: identifier allocator, live counter and configuration.
///
/// The allocator is interior-mutable, so constructors take `&self`; a model is
/// deliberately neither `Send` nor `Sync`.
///
/// # Examples
/// ```
/// use brep_kernel::{Kind, Model};
/// use glam::DVec3;
///
/// let model = Model::new();
/// let a = model.point(DVec3::ZERO);
/// let b = model.point(DVec3::X);
/// let line = model.line(&a, &b).unwrap();
///
/// assert_eq!(line.kind(), Kind::Line);
/// assert_eq!(line.id().0, 2);
/// assert_eq!(model.live_count(), 3);
/// ```
#[derive(Debug)]
pub struct Model {
    next_id: Cell<u64>,
    live: Rc<Cell<usize>>,
    config: KernelConfig,
}

impl Model {
    /// Creates a session with the default configuration.
    pub fn new() -> Self {
        Self::with_config(KernelConfig::default())
    }

    /// Creates a session with an explicit configuration.
    pub fn with_config(config: KernelConfig) -> Self {
        Self {
            next_id: Cell::new(0),
            live: Rc::new(Cell::new(0)),
            config,
        }
    }

    /// Configuration of this session.
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Number of entities created by this session that are still alive.
    pub fn live_count(&self) -> usize {
        self.live.get()
    }

    /// Identifier the next created entity will receive.
    pub fn peek_next_id(&self) -> EntityId {
        EntityId(self.next_id.get())
    }

    fn allocate(&self, kind: Kind, point: Option<PointGeometry>) -> Entity {
        let id = EntityId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        trace!(%id, ?kind, "created entity");
        Entity::new(id, kind, point, Rc::clone(&self.live))
    }

    // =========================================================================
    // GENERIC CONSTRUCTION
    // =========================================================================

    /// Creates an entity of `kind` with empty relation lists.
    ///
    /// A point created this way sits at the origin with the default size.
    pub fn create(&self, kind: Kind) -> Entity {
        match kind {
            Kind::Point => self.point(DVec3::ZERO),
            Kind::Line
            | Kind::Arc
            | Kind::Ellipse
            | Kind::Spline
            | Kind::Plane
            | Kind::Ruled
            | Kind::Volume
            | Kind::Loop
            | Kind::Shell
            | Kind::Group => self.allocate(kind, None),
        }
    }

    // =========================================================================
    // POINTS
    // =========================================================================

    /// Creates a point with the configured default size.
    pub fn point(&self, position: DVec3) -> Entity {
        self.point_with_size(position, self.config.default_point_size)
    }

    /// Creates a point with an explicit target mesh size.
    pub fn point_with_size(&self, position: DVec3, size: f64) -> Entity {
        self.allocate(Kind::Point, Some(PointGeometry { position, size }))
    }

    /// Creates one default-sized point per position.
    pub fn points(&self, positions: &[DVec3]) -> Vec<Entity> {
        positions.iter().map(|&p| self.point(p)).collect()
    }

    // =========================================================================
    // CURVES
    // =========================================================================

    /// Creates a line from `start` to `end`.
    pub fn line(&self, start: &Entity, end: &Entity) -> ModelResult<Entity> {
        require_points(&[start, end])?;
        let line = self.allocate(Kind::Line, None);
        line.add_use(Orientation::Forward, start);
        line.add_use(Orientation::Forward, end);
        Ok(line)
    }

    /// Creates a line from a new point at `origin` to a new point at
    /// `origin + span`.
    pub fn line_from(&self, origin: DVec3, span: DVec3) -> ModelResult<Entity> {
        let start = self.point(origin);
        Ok(extrude_point(self, &start, &translation(span))?.lateral)
    }

    /// Creates a line between two new points.
    pub fn line_between(&self, a: DVec3, b: DVec3) -> ModelResult<Entity> {
        self.line_from(a, b - a)
    }

    /// Creates a circular arc from `start` to `end` around `center`.
    pub fn arc(&self, start: &Entity, center: &Entity, end: &Entity) -> ModelResult<Entity> {
        require_points(&[start, center, end])?;
        let arc = self.allocate(Kind::Arc, None);
        arc.add_use(Orientation::Forward, start);
        arc.add_helper(center);
        arc.add_use(Orientation::Forward, end);
        Ok(arc)
    }

    /// Creates a quarter-ellipse arc. One endpoint must lie on the major axis
    /// (through `center` and `major_point`) and the other on the minor axis.
    pub fn ellipse_arc(
        &self,
        start: &Entity,
        center: &Entity,
        major_point: &Entity,
        end: &Entity,
    ) -> ModelResult<Entity> {
        require_points(&[start, center, major_point, end])?;
        let ellipse = self.allocate(Kind::Ellipse, None);
        ellipse.add_use(Orientation::Forward, start);
        ellipse.add_helper(center);
        ellipse.add_helper(major_point);
        ellipse.add_use(Orientation::Forward, end);
        Ok(ellipse)
    }

    /// Creates a spline through `points`; interior points become helpers.
    pub fn spline(&self, points: &[Entity]) -> ModelResult<Entity> {
        let (first, last) = match points {
            [first, .., last] => (first, last),
            _ => {
                return Err(ModelError::UnsupportedGeometry(format!(
                    "a spline needs at least 2 points, got {}",
                    points.len()
                )))
            }
        };
        require_points(&points.iter().collect::<Vec<_>>())?;
        let spline = self.allocate(Kind::Spline, None);
        spline.add_use(Orientation::Forward, first);
        for interior in &points[1..points.len() - 1] {
            spline.add_helper(interior);
        }
        spline.add_use(Orientation::Forward, last);
        Ok(spline)
    }

    /// Creates a spline through new default-sized points.
    pub fn spline_through(&self, positions: &[DVec3]) -> ModelResult<Entity> {
        self.spline(&self.points(positions))
    }

    // =========================================================================
    // AGGREGATES, FACES AND VOLUMES
    // =========================================================================

    /// Creates an empty loop.
    pub fn curve_loop(&self) -> Entity {
        self.allocate(Kind::Loop, None)
    }

    /// Creates an empty shell.
    pub fn shell(&self) -> Entity {
        self.allocate(Kind::Shell, None)
    }

    /// Creates an empty group.
    pub fn group(&self) -> Entity {
        self.allocate(Kind::Group, None)
    }

    /// Creates a plane surface bounded by `outer`.
    pub fn plane(&self, outer: &Entity) -> ModelResult<Entity> {
        self.face(Kind::Plane, outer)
    }

    /// Creates a ruled surface bounded by `outer`.
    pub fn ruled(&self, outer: &Entity) -> ModelResult<Entity> {
        self.face(Kind::Ruled, outer)
    }

    fn face(&self, kind: Kind, outer: &Entity) -> ModelResult<Entity> {
        if outer.kind() != Kind::Loop {
            return Err(ModelError::wrong_kind("a loop", outer));
        }
        let face = self.allocate(kind, None);
        face.add_use(Orientation::Forward, outer);
        Ok(face)
    }

    /// Creates a volume bounded by `shell`.
    pub fn volume(&self, shell: &Entity) -> ModelResult<Entity> {
        if shell.kind() != Kind::Shell {
            return Err(ModelError::wrong_kind("a shell", shell));
        }
        let volume = self.allocate(Kind::Volume, None);
        volume.add_use(Orientation::Forward, shell);
        Ok(volume)
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

fn require_points(entities: &[&Entity]) -> ModelResult<()> {
    match entities.iter().find(|e| e.kind() != Kind::Point) {
        Some(bad) => Err(ModelError::wrong_kind("a point", bad)),
        None => Ok(()),
    }
}
