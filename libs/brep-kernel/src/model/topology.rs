//! Structural accessors and wiring helpers for well-formed entities.

use crate::entity::{Entity, Kind, Orientation};
use crate::error::{ModelError, ModelResult};

/// Endpoint `index` (0 = start, 1 = end) of a curve.
pub fn edge_point(curve: &Entity, index: usize) -> ModelResult<Entity> {
    if !curve.kind().is_curve() {
        return Err(ModelError::wrong_kind("a curve", curve));
    }
    curve
        .use_at(index)
        .map(|u| u.target)
        .ok_or_else(|| ModelError::missing_slot(curve, "endpoint"))
}

/// Center helper of an arc.
pub fn arc_center(arc: &Entity) -> ModelResult<Entity> {
    if arc.kind() != Kind::Arc {
        return Err(ModelError::wrong_kind("an arc", arc));
    }
    helper(arc, 0, "center")
}

/// Center helper of an ellipse arc.
pub fn ellipse_center(ellipse: &Entity) -> ModelResult<Entity> {
    if ellipse.kind() != Kind::Ellipse {
        return Err(ModelError::wrong_kind("an ellipse", ellipse));
    }
    helper(ellipse, 0, "center")
}

/// Major-axis helper point of an ellipse arc.
pub fn ellipse_major_point(ellipse: &Entity) -> ModelResult<Entity> {
    if ellipse.kind() != Kind::Ellipse {
        return Err(ModelError::wrong_kind("an ellipse", ellipse));
    }
    helper(ellipse, 1, "major-axis point")
}

fn helper(entity: &Entity, index: usize, slot: &'static str) -> ModelResult<Entity> {
    entity
        .helpers()
        .get(index)
        .cloned()
        .ok_or_else(|| ModelError::missing_slot(entity, slot))
}

/// Outer loop of a face.
pub fn face_loop(face: &Entity) -> ModelResult<Entity> {
    if !face.kind().is_face() {
        return Err(ModelError::wrong_kind("a face", face));
    }
    face.use_at(0)
        .map(|u| u.target)
        .ok_or_else(|| ModelError::missing_slot(face, "outer loop"))
}

/// Outer shell of a volume.
pub fn volume_shell(volume: &Entity) -> ModelResult<Entity> {
    if volume.kind() != Kind::Volume {
        return Err(ModelError::wrong_kind("a volume", volume));
    }
    volume
        .use_at(0)
        .map(|u| u.target)
        .ok_or_else(|| ModelError::missing_slot(volume, "shell"))
}

/// Start point of every oriented curve in a loop, in loop order.
pub fn loop_points(curve_loop: &Entity) -> ModelResult<Vec<Entity>> {
    if curve_loop.kind() != Kind::Loop {
        return Err(ModelError::wrong_kind("a loop", curve_loop));
    }
    curve_loop
        .uses()
        .iter()
        .map(|u| edge_point(&u.target, u.orientation.bit()))
        .collect()
}

/// Adds `member` to `group`.
pub fn add_to_group(group: &Entity, member: &Entity) -> ModelResult<()> {
    if group.kind() != Kind::Group {
        return Err(ModelError::wrong_kind("a group", group));
    }
    group.add_use(Orientation::Forward, member);
    Ok(())
}

/// Cuts `hole` out of `face`.
pub fn add_hole_to_face(face: &Entity, hole: &Entity) -> ModelResult<()> {
    if !face.kind().is_face() {
        return Err(ModelError::wrong_kind("a face", face));
    }
    if hole.kind() != Kind::Loop {
        return Err(ModelError::wrong_kind("a loop", hole));
    }
    face.add_use(Orientation::Reverse, hole);
    Ok(())
}
