//! Core entity graph data structures.
//!
//! Every geometric or topological object is an [`Entity`]: a reference-counted
//! handle to a node carrying its kind, its ordered oriented uses, its helper
//! points, its embedded entities and a transient scratch slot. Entities are
//! shared by many parents; a node lives until its last handle is dropped.

mod scratch;

pub(crate) use scratch::ScratchScope;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitXor, Not};
use std::rc::Rc;

use glam::DVec3;

use crate::error::{ModelError, ModelResult};

// =============================================================================
// KIND
// =============================================================================

/// The kind of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A position with a target mesh size.
    Point,
    /// Straight segment between two points.
    Line,
    /// Circular arc with its center as helper.
    Arc,
    /// Quarter-ellipse arc with center and major-axis point as helpers.
    Ellipse,
    /// Spline whose interior control points are helpers.
    Spline,
    /// Planar face bounded by loops.
    Plane,
    /// Ruled (bilinear / transfinite) face bounded by one loop.
    Ruled,
    /// Volume bounded by shells.
    Volume,
    /// Oriented cycle of curves.
    Loop,
    /// Oriented set of faces.
    Shell,
    /// Unstructured aggregate of arbitrary entities.
    Group,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 11] = [
        Kind::Point,
        Kind::Line,
        Kind::Arc,
        Kind::Ellipse,
        Kind::Spline,
        Kind::Plane,
        Kind::Ruled,
        Kind::Volume,
        Kind::Loop,
        Kind::Shell,
        Kind::Group,
    ];

    /// Topological dimension, `None` for aggregates (Loop, Shell, Group).
    pub fn dimension(self) -> Option<u8> {
        match self {
            Kind::Point => Some(0),
            Kind::Line | Kind::Arc | Kind::Ellipse | Kind::Spline => Some(1),
            Kind::Plane | Kind::Ruled => Some(2),
            Kind::Volume => Some(3),
            Kind::Loop | Kind::Shell | Kind::Group => None,
        }
    }

    /// Whether this kind is a dimensioned cell (point, curve, face or volume).
    pub fn is_entity(self) -> bool {
        self.dimension().is_some()
    }

    /// Whether this kind is a curve.
    pub fn is_curve(self) -> bool {
        self.dimension() == Some(1)
    }

    /// Whether this kind is a face.
    pub fn is_face(self) -> bool {
        self.dimension() == Some(2)
    }

    /// Whether this kind is a boundary aggregate (Loop or Shell).
    pub fn is_boundary(self) -> bool {
        matches!(self, Kind::Loop | Kind::Shell)
    }

    /// Statement keyword used by the script export.
    pub fn statement_name(self) -> &'static str {
        match self {
            Kind::Point => "Point",
            Kind::Line => "Line",
            Kind::Arc => "Circle",
            Kind::Ellipse => "Ellipse",
            Kind::Spline => "Spline",
            Kind::Plane => "Plane Surface",
            Kind::Ruled => "Ruled Surface",
            Kind::Volume => "Volume",
            Kind::Loop => "Line Loop",
            Kind::Shell => "Surface Loop",
            Kind::Group => "Group",
        }
    }

    /// Physical-group keyword used by the script export, `None` for aggregates.
    pub fn physical_name(self) -> Option<&'static str> {
        self.dimension().map(|dim| match dim {
            0 => "Physical Point",
            1 => "Physical Line",
            2 => "Physical Surface",
            _ => "Physical Volume",
        })
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.statement_name())
    }
}

/// Boundary aggregate kind for cells of the given dimension.
///
/// # Examples
/// ```
/// use brep_kernel::{boundary_kind_for, Kind};
/// assert_eq!(boundary_kind_for(3), Some(Kind::Shell));
/// assert_eq!(boundary_kind_for(2), Some(Kind::Loop));
/// assert_eq!(boundary_kind_for(1), None);
/// ```
pub fn boundary_kind_for(dimension: u8) -> Option<Kind> {
    match dimension {
        3 => Some(Kind::Shell),
        2 => Some(Kind::Loop),
        _ => None,
    }
}

/// Name of a dimension as used by embedding statements.
pub fn dimension_name(dimension: u8) -> &'static str {
    match dimension {
        0 => "Point",
        1 => "Line",
        2 => "Surface",
        _ => "Volume",
    }
}

// =============================================================================
// ORIENTATION
// =============================================================================

/// Orientation of a use relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Target traversed as defined.
    #[default]
    Forward,
    /// Target traversed backwards.
    Reverse,
}

impl Orientation {
    /// Composes two orientations (exclusive-or).
    ///
    /// # Examples
    /// ```
    /// use brep_kernel::Orientation::{Forward, Reverse};
    /// assert_eq!(Reverse.flip(Reverse), Forward);
    /// assert_eq!(Forward.flip(Reverse), Reverse);
    /// ```
    pub fn flip(self, other: Orientation) -> Orientation {
        Orientation::from_bit(self.is_reverse() != other.is_reverse())
    }

    /// Whether this is [`Orientation::Reverse`].
    pub fn is_reverse(self) -> bool {
        self == Orientation::Reverse
    }

    /// 0 for Forward, 1 for Reverse.
    pub fn bit(self) -> usize {
        usize::from(self.is_reverse())
    }

    /// Reverse when `reverse` is true, Forward otherwise.
    pub fn from_bit(reverse: bool) -> Orientation {
        if reverse {
            Orientation::Reverse
        } else {
            Orientation::Forward
        }
    }
}

impl Not for Orientation {
    type Output = Orientation;

    fn not(self) -> Orientation {
        self.flip(Orientation::Reverse)
    }
}

impl BitXor for Orientation {
    type Output = Orientation;

    fn bitxor(self, rhs: Orientation) -> Orientation {
        self.flip(rhs)
    }
}

// =============================================================================
// IDENTIFIERS AND PAYLOADS
// =============================================================================

/// Identifier of an entity, unique and increasing within its [`Model`](crate::Model).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Position and target mesh size carried by a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointGeometry {
    /// Location in model space.
    pub position: DVec3,
    /// Characteristic mesh length near the point.
    pub size: f64,
}

/// An oriented reference to a child entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Use {
    /// How the child is traversed.
    pub orientation: Orientation,
    /// The child entity.
    pub target: Entity,
}

impl Use {
    /// Creates a new use.
    pub fn new(orientation: Orientation, target: Entity) -> Self {
        Self {
            orientation,
            target,
        }
    }
}

// =============================================================================
// ENTITY
// =============================================================================

struct Node {
    id: EntityId,
    kind: Kind,
    point: Option<Cell<PointGeometry>>,
    uses: RefCell<Vec<Use>>,
    helpers: RefCell<Vec<Entity>>,
    embedded: RefCell<Vec<Entity>>,
    scratch: Cell<Option<usize>>,
    live: Rc<Cell<usize>>,
}

impl Drop for Node {
    fn drop(&mut self) {
        self.live.set(self.live.get().saturating_sub(1));
    }
}

/// Shared handle to an entity node.
///
/// Cloning the handle shares the node. Equality is identity: two handles are
/// equal when they refer to the same node.
#[derive(Clone)]
pub struct Entity(Rc<Node>);

impl Entity {
    pub(crate) fn new(
        id: EntityId,
        kind: Kind,
        point: Option<PointGeometry>,
        live: Rc<Cell<usize>>,
    ) -> Self {
        live.set(live.get() + 1);
        Entity(Rc::new(Node {
            id,
            kind,
            point: point.map(Cell::new),
            uses: RefCell::new(Vec::new()),
            helpers: RefCell::new(Vec::new()),
            embedded: RefCell::new(Vec::new()),
            scratch: Cell::new(None),
            live,
        }))
    }

    /// Identifier assigned at creation.
    pub fn id(&self) -> EntityId {
        self.0.id
    }

    /// Kind of this entity.
    pub fn kind(&self) -> Kind {
        self.0.kind
    }

    /// Topological dimension of this entity's kind.
    pub fn dimension(&self) -> Option<u8> {
        self.0.kind.dimension()
    }

    /// Snapshot of the ordered use list.
    pub fn uses(&self) -> Vec<Use> {
        self.0.uses.borrow().clone()
    }

    /// Number of uses.
    pub fn use_count(&self) -> usize {
        self.0.uses.borrow().len()
    }

    /// The use at `index`, if any.
    pub fn use_at(&self, index: usize) -> Option<Use> {
        self.0.uses.borrow().get(index).cloned()
    }

    /// Targets of the use list, in order.
    pub fn used_targets(&self) -> Vec<Entity> {
        self.0.uses.borrow().iter().map(|u| u.target.clone()).collect()
    }

    /// Snapshot of the helper list.
    pub fn helpers(&self) -> Vec<Entity> {
        self.0.helpers.borrow().clone()
    }

    /// Snapshot of the embedded list.
    pub fn embedded(&self) -> Vec<Entity> {
        self.0.embedded.borrow().clone()
    }

    /// Appends an oriented use of `target`.
    pub fn add_use(&self, orientation: Orientation, target: &Entity) {
        self.0
            .uses
            .borrow_mut()
            .push(Use::new(orientation, target.clone()));
    }

    /// Appends a helper reference.
    pub fn add_helper(&self, target: &Entity) {
        self.0.helpers.borrow_mut().push(target.clone());
    }

    /// Requires `target` to be meshed inside this entity.
    pub fn embed(&self, target: &Entity) {
        self.0.embedded.borrow_mut().push(target.clone());
    }

    /// Orientation of the first use of `target`.
    pub fn orientation_of(&self, target: &Entity) -> ModelResult<Orientation> {
        self.0
            .uses
            .borrow()
            .iter()
            .find(|u| u.target == *target)
            .map(|u| u.orientation)
            .ok_or_else(|| ModelError::MissingUse {
                owner: self.to_string(),
                target: target.to_string(),
            })
    }

    /// Position and size of a point.
    pub fn geometry(&self) -> ModelResult<PointGeometry> {
        self.0
            .point
            .as_ref()
            .map(Cell::get)
            .ok_or_else(|| ModelError::wrong_kind("a point", self))
    }

    /// Position of a point.
    pub fn position(&self) -> ModelResult<DVec3> {
        self.geometry().map(|g| g.position)
    }

    /// Target mesh size of a point.
    pub fn size(&self) -> ModelResult<f64> {
        self.geometry().map(|g| g.size)
    }

    /// Moves a point.
    pub fn set_position(&self, position: DVec3) -> ModelResult<()> {
        let cell = self
            .0
            .point
            .as_ref()
            .ok_or_else(|| ModelError::wrong_kind("a point", self))?;
        cell.set(PointGeometry {
            position,
            ..cell.get()
        });
        Ok(())
    }

    /// Whether the scratch slot is idle. Holds for every entity between
    /// public operations.
    pub fn is_scratch_idle(&self) -> bool {
        self.0.scratch.get().is_none()
    }

    pub(crate) fn replace_uses(&self, uses: Vec<Use>) {
        *self.0.uses.borrow_mut() = uses;
    }

    pub(crate) fn scratch(&self) -> Option<usize> {
        self.0.scratch.get()
    }

    pub(crate) fn set_scratch(&self, value: Option<usize>) {
        self.0.scratch.set(value);
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Entity {}

impl Hash for Entity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({:?} #{})", self.0.kind, self.0.id)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0.kind, self.0.id)
    }
}
