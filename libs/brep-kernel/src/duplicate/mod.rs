//! Deep copies and rigid placement of closures.

use glam::{DMat3, DVec3};
use tracing::debug;

use crate::closure::closure;
use crate::entity::{Entity, Kind, ScratchScope};
use crate::error::{ModelError, ModelResult};
use crate::model::Model;

/// Clones everything reachable from `root` (uses, helpers and embedded) and
/// returns the clone of `root`.
///
/// Points keep their position and size; every other entity is cloned by kind
/// and rewired to the clones of its dependencies with the same orientations,
/// so the copy is isomorphic to the original and shares nothing with it.
///
/// # Examples
/// ```
/// use brep_kernel::primitives::square;
/// use brep_kernel::{closure, copy_closure, Model};
/// use glam::DVec3;
///
/// let model = Model::new();
/// let face = square(&model, DVec3::ZERO, DVec3::X, DVec3::Y).unwrap();
/// let copy = copy_closure(&model, &face).unwrap();
///
/// assert_ne!(copy, face);
/// assert_eq!(closure(&copy, true, true).len(), closure(&face, true, true).len());
/// ```
pub fn copy_closure(model: &Model, root: &Entity) -> ModelResult<Entity> {
    let order = closure(root, true, true);
    let mut scope = ScratchScope::with_capacity(order.len());
    for (index, entity) in order.iter().enumerate() {
        scope.set(entity, index);
    }

    let mut clones: Vec<Entity> = Vec::with_capacity(order.len());
    for (index, original) in order.iter().enumerate() {
        let copy = match original.kind() {
            Kind::Point => {
                let geometry = original.geometry()?;
                model.point_with_size(geometry.position, geometry.size)
            }
            kind => model.create(kind),
        };
        for helper in original.helpers() {
            copy.add_helper(clone_of(&scope, &clones, index, original, &helper)?);
        }
        for u in original.uses() {
            copy.add_use(u.orientation, clone_of(&scope, &clones, index, original, &u.target)?);
        }
        for inner in original.embedded() {
            copy.embed(clone_of(&scope, &clones, index, original, &inner)?);
        }
        clones.push(copy);
    }

    debug!(%root, size = clones.len(), "copied closure");
    clones
        .pop()
        .ok_or_else(|| ModelError::missing_slot(root, "clone"))
}

/// Clone of `dependency`, which must already have been copied.
fn clone_of<'a>(
    scope: &ScratchScope,
    clones: &'a [Entity],
    index: usize,
    owner: &Entity,
    dependency: &Entity,
) -> ModelResult<&'a Entity> {
    scope
        .get(dependency)
        .filter(|&position| position < index)
        .and_then(|position| clones.get(position))
        .ok_or_else(|| ModelError::OrderingViolation {
            entity: owner.to_string(),
            dependency: dependency.to_string(),
        })
}

/// Moves every point reachable from `root` to `linear · position + translation`.
///
/// Curves, faces and volumes follow their points.
pub fn transform_closure(root: &Entity, linear: DMat3, translation: DVec3) -> ModelResult<()> {
    let points = closure(root, true, true)
        .into_iter()
        .filter(|e| e.kind() == Kind::Point);
    for point in points {
        point.set_position(linear * point.position()? + translation)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
