//! Dependency-ordered reachability.
//!
//! [`closure`] collects every entity reachable from a root through the
//! selected relations, each exactly once, ordered so that every entity appears
//! after all entities it depends on. Export and duplication both rely on that
//! order.

use std::collections::VecDeque;

use tracing::debug;

use crate::entity::{Entity, Kind, ScratchScope};

/// Entities reachable from `root`, children before parents.
///
/// Uses are always followed; helpers and embedded entities only on request.
/// Discovery is breadth-first with visited marks kept in scratch. A second
/// breadth-first pass places each entity only once all of its referrers in
/// the closure are placed, and that order is reversed before returning, so
/// every relation target precedes its referrer even when an entity is reached
/// along paths of different lengths.
///
/// # Examples
/// ```
/// use brep_kernel::{closure, Model};
/// use glam::DVec3;
///
/// let model = Model::new();
/// let a = model.point(DVec3::ZERO);
/// let b = model.point(DVec3::X);
/// let line = model.line(&a, &b).unwrap();
///
/// let order = closure(&line, false, false);
/// assert_eq!(order, vec![b, a, line]);
/// ```
pub fn closure(root: &Entity, include_helpers: bool, include_embedded: bool) -> Vec<Entity> {
    let children = |entity: &Entity| {
        let mut out = entity.used_targets();
        if include_helpers {
            out.extend(entity.helpers());
        }
        if include_embedded {
            out.extend(entity.embedded());
        }
        out
    };

    let mut scope = ScratchScope::new();
    scope.mark(root);
    let mut discovered = vec![root.clone()];
    let mut next = 0;
    while let Some(current) = discovered.get(next).cloned() {
        next += 1;
        for child in children(&current) {
            if scope.mark(&child) {
                discovered.push(child);
            }
        }
    }

    // Referrer counts within the closure.
    for entity in &discovered {
        scope.set(entity, 0);
    }
    for entity in &discovered {
        for child in children(entity) {
            let referrers = scope.get(&child).unwrap_or(0);
            scope.set(&child, referrers + 1);
        }
    }

    let mut order = Vec::with_capacity(discovered.len());
    let mut queue = VecDeque::from([root.clone()]);
    while let Some(current) = queue.pop_front() {
        for child in children(&current) {
            let remaining = scope.get(&child).unwrap_or(1).saturating_sub(1);
            scope.set(&child, remaining);
            if remaining == 0 {
                queue.push_back(child);
            }
        }
        order.push(current);
    }

    debug!(root = %root, size = scope.len(), "computed closure");
    order.reverse();
    order
}

/// Entities of topological dimension `dimension`, order preserved.
pub fn filter_by_dimension(entities: &[Entity], dimension: u8) -> Vec<Entity> {
    entities
        .iter()
        .filter(|e| e.dimension() == Some(dimension))
        .cloned()
        .collect()
}

/// Points only, order preserved.
pub fn filter_points(entities: &[Entity]) -> Vec<Entity> {
    entities
        .iter()
        .filter(|e| e.kind() == Kind::Point)
        .cloned()
        .collect()
}

/// Number of entities with topological dimension `dimension`.
pub fn count_of_dimension(entities: &[Entity], dimension: u8) -> usize {
    entities
        .iter()
        .filter(|e| e.dimension() == Some(dimension))
        .count()
}
