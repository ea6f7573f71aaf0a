//! Assembly boundaries and welding.
//!
//! An assembly is a group of same-dimension cells. Its exclusive boundary keeps
//! every facet used by exactly one cell and drops the facets shared between
//! cells. Welding merges one sub-assembly into another so that the facet they
//! share becomes a consistently oriented internal interface.

use std::collections::HashMap;

use tracing::debug;

use crate::entity::{boundary_kind_for, Entity, EntityId, Kind, Orientation, ScratchScope, Use};
use crate::error::{ModelError, ModelResult};
use crate::model::{add_hole_to_face, edge_point, face_loop, volume_shell, Model};

// =============================================================================
// BOUNDARY COLLECTION
// =============================================================================

/// Exclusive boundary of an assembly of cells.
///
/// Collects every oriented use from every cell's boundary aggregate, keeps the
/// uses whose facet occurs exactly once across the whole assembly (in their
/// original relative order) and wraps them in a new Shell (volumes) or Loop
/// (faces). All cells must share one dimension.
///
/// # Examples
/// ```
/// use brep_kernel::assembly::collect_assembly_boundary;
/// use brep_kernel::extrude::extrude_face_by;
/// use brep_kernel::primitives::{cube, cube_face, CubeFace};
/// use brep_kernel::{add_to_group, Kind, Model};
/// use glam::DVec3;
///
/// let model = Model::new();
/// let lower = cube(&model, DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z).unwrap();
/// let top = cube_face(&lower, CubeFace::Top).unwrap();
/// let upper = extrude_face_by(&model, &top, DVec3::Z).unwrap().lateral;
///
/// let stack = model.group();
/// add_to_group(&stack, &lower).unwrap();
/// add_to_group(&stack, &upper).unwrap();
///
/// let boundary = collect_assembly_boundary(&model, &stack).unwrap();
/// assert_eq!(boundary.kind(), Kind::Shell);
/// assert_eq!(boundary.use_count(), 10);
/// assert!(!boundary.used_targets().contains(&top));
/// ```
pub fn collect_assembly_boundary(model: &Model, assembly: &Entity) -> ModelResult<Entity> {
    if assembly.kind() != Kind::Group {
        return Err(ModelError::wrong_kind("a group", assembly));
    }
    let cells = assembly.used_targets();
    let first = cells
        .first()
        .ok_or_else(|| ModelError::EmptyAssembly(assembly.to_string()))?;
    let boundary_kind = first
        .dimension()
        .and_then(boundary_kind_for)
        .ok_or_else(|| ModelError::wrong_kind("a face or volume", first))?;
    if let Some(other) = cells.iter().find(|c| c.dimension() != first.dimension()) {
        return Err(ModelError::MixedCells {
            first: first.to_string(),
            other: other.to_string(),
        });
    }

    let mut uses = Vec::new();
    for cell in &cells {
        let outer = cell
            .use_at(0)
            .ok_or_else(|| ModelError::missing_slot(cell, "boundary"))?;
        uses.extend(outer.target.uses());
    }

    let mut tally = ScratchScope::with_capacity(uses.len());
    for u in &uses {
        tally.set(&u.target, 0);
    }
    for u in &uses {
        let count = tally.get(&u.target).unwrap_or(0);
        tally.set(&u.target, count + 1);
    }
    let boundary = model.create(boundary_kind);
    for u in &uses {
        if tally.get(&u.target) == Some(1) {
            boundary.add_use(u.orientation, &u.target);
        }
    }

    debug!(
        %assembly,
        cells = cells.len(),
        facets = uses.len(),
        kept = boundary.use_count(),
        "collected assembly boundary"
    );
    Ok(boundary)
}

// =============================================================================
// LOOP RECONSTRUCTION
// =============================================================================

/// Reorders a loop's uses into one connected, consistently oriented cycle.
///
/// Starting from the first use, each step continues from the trailing point of
/// the chain with the other curve that touches it, oriented to start there.
/// The uses must form exactly one simple closed cycle; a chain that cannot
/// continue is reported as [`ModelError::BrokenLoop`].
pub fn unscramble_loop(curve_loop: &Entity) -> ModelResult<()> {
    if curve_loop.kind() != Kind::Loop {
        return Err(ModelError::wrong_kind("a loop", curve_loop));
    }
    let uses = curve_loop.uses();
    let Some(first) = uses.first() else {
        return Ok(());
    };

    let mut by_point: HashMap<EntityId, Vec<Use>> = HashMap::new();
    for u in &uses {
        let start = edge_point(&u.target, 0)?;
        let end = edge_point(&u.target, 1)?;
        by_point
            .entry(start.id())
            .or_default()
            .push(Use::new(Orientation::Forward, u.target.clone()));
        by_point
            .entry(end.id())
            .or_default()
            .push(Use::new(Orientation::Reverse, u.target.clone()));
    }

    let mut chain = Vec::with_capacity(uses.len());
    chain.push(first.clone());
    while chain.len() < uses.len() {
        let last = &chain[chain.len() - 1];
        let trailing = edge_point(&last.target, 1 - last.orientation.bit())?;
        let next = by_point
            .get(&trailing.id())
            .and_then(|candidates| candidates.iter().find(|c| c.target != last.target))
            .cloned()
            .ok_or_else(|| ModelError::BrokenLoop {
                loop_entity: curve_loop.to_string(),
                point: trailing.to_string(),
            })?;
        chain.push(next);
    }
    curve_loop.replace_uses(chain);
    Ok(())
}

// =============================================================================
// INSERTION AND WELDING
// =============================================================================

/// Inserts `object` into `into` as an inner boundary.
///
/// A face contributes its outer loop as a hole, a volume its shell as a
/// cavity, and a group its collected assembly boundary.
pub fn insert_into(model: &Model, into: &Entity, object: &Entity) -> ModelResult<()> {
    let inner = match object.kind() {
        Kind::Plane | Kind::Ruled => {
            if !into.kind().is_face() {
                return Err(ModelError::wrong_kind("a face", into));
            }
            face_loop(object)?
        }
        Kind::Volume => {
            if into.kind() != Kind::Volume {
                return Err(ModelError::wrong_kind("a volume", into));
            }
            volume_shell(object)?
        }
        Kind::Group => {
            let boundary = collect_assembly_boundary(model, object)?;
            if into.dimension().and_then(boundary_kind_for) != Some(boundary.kind()) {
                return Err(ModelError::wrong_kind(
                    "a cell matching the assembly boundary",
                    into,
                ));
            }
            boundary
        }
        Kind::Point
        | Kind::Line
        | Kind::Arc
        | Kind::Ellipse
        | Kind::Spline
        | Kind::Loop
        | Kind::Shell => {
            return Err(ModelError::wrong_kind("a face, volume or group", object));
        }
    };
    into.add_use(Orientation::Reverse, &inner);
    Ok(())
}

/// Welds `small_face` of `small_volume` into `big_face` of `big_volume`.
///
/// The small face's outer loop becomes a hole in the big face, and the small
/// face joins the big volume's shell with the opposite of the orientation it
/// has in the small volume's shell.
pub fn weld_volume_face_into(
    model: &Model,
    big_volume: &Entity,
    small_volume: &Entity,
    big_face: &Entity,
    small_face: &Entity,
) -> ModelResult<()> {
    let interface = interface_orientation(small_volume, small_face)?;
    let big_shell = volume_shell(big_volume)?;
    insert_into(model, big_face, small_face)?;
    big_shell.add_use(interface, small_face);
    debug!(%big_volume, %small_volume, %small_face, "welded volume face");
    Ok(())
}

/// Like [`weld_volume_face_into`], and additionally plugs every hole of
/// `small_face` with a new plane surface added to the big volume's shell.
pub fn weld_plane_with_holes_into(
    model: &Model,
    big_volume: &Entity,
    small_volume: &Entity,
    big_face: &Entity,
    small_face: &Entity,
) -> ModelResult<()> {
    weld_volume_face_into(model, big_volume, small_volume, big_face, small_face)?;
    let interface = interface_orientation(small_volume, small_face)?;
    let big_shell = volume_shell(big_volume)?;
    for hole in small_face.uses().iter().skip(1) {
        let plug = model.plane(&hole.target)?;
        big_shell.add_use(interface, &plug);
    }
    Ok(())
}

/// Welds an open group of faces onto `target_face` of `volume`.
///
/// The group's open boundary is reconstructed into a loop and cut out of
/// `target_face`; every face of the group then joins the volume's shell with
/// its group orientation composed with `orientation`.
pub fn weld_half_shell_onto(
    model: &Model,
    volume: &Entity,
    target_face: &Entity,
    half_shell: &Entity,
    orientation: Orientation,
) -> ModelResult<()> {
    let shell = volume_shell(volume)?;
    let rim = collect_assembly_boundary(model, half_shell)?;
    if rim.kind() != Kind::Loop {
        return Err(ModelError::wrong_kind("a group of faces", half_shell));
    }
    unscramble_loop(&rim)?;
    add_hole_to_face(target_face, &rim)?;
    for u in half_shell.uses() {
        shell.add_use(u.orientation ^ orientation, &u.target);
    }
    debug!(%volume, %half_shell, rim = rim.use_count(), "welded half shell");
    Ok(())
}

fn interface_orientation(small_volume: &Entity, small_face: &Entity) -> ModelResult<Orientation> {
    Ok(!volume_shell(small_volume)?.orientation_of(small_face)?)
}
