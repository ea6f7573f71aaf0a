//! Checked-out scratch slots.
//!
//! Graph algorithms need O(1) per-entity working state (visited marks, tally
//! counters, result indices). That state lives in each entity's scratch slot,
//! and a [`ScratchScope`] owns every slot it writes: dropping the scope returns
//! them all to idle, on every exit path including `?` returns.

use super::Entity;

/// Tracks the scratch slots written by one traversal.
///
/// Only one scope may be active over any given entity at a time.
#[derive(Default)]
pub(crate) struct ScratchScope {
    touched: Vec<Entity>,
}

impl ScratchScope {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            touched: Vec::with_capacity(capacity),
        }
    }

    /// Current value of `entity`'s slot.
    pub(crate) fn get(&self, entity: &Entity) -> Option<usize> {
        entity.scratch()
    }

    /// Writes `value` into `entity`'s slot.
    pub(crate) fn set(&mut self, entity: &Entity, value: usize) {
        if entity.scratch().is_none() {
            self.touched.push(entity.clone());
        }
        entity.set_scratch(Some(value));
    }

    /// Marks `entity` as visited. Returns false if it already was.
    pub(crate) fn mark(&mut self, entity: &Entity) -> bool {
        if entity.scratch().is_some() {
            return false;
        }
        self.set(entity, 1);
        true
    }

    /// Number of slots held by this scope.
    pub(crate) fn len(&self) -> usize {
        self.touched.len()
    }
}

impl Drop for ScratchScope {
    fn drop(&mut self) {
        for entity in self.touched.drain(..) {
            entity.set_scratch(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Kind, Model};

    #[test]
    fn drop_restores_idle_slots() {
        let model = Model::new();
        let a = model.create(Kind::Line);
        let b = model.create(Kind::Line);
        {
            let mut scope = ScratchScope::new();
            scope.set(&a, 3);
            scope.set(&a, 4);
            assert!(scope.mark(&b));
            assert!(!scope.mark(&b));
            assert_eq!(scope.get(&a), Some(4));
            assert_eq!(scope.len(), 2);
        }
        assert!(a.is_scratch_idle());
        assert!(b.is_scratch_idle());
    }

    #[test]
    fn early_return_restores_idle_slots() {
        fn fails(entity: &Entity) -> Result<(), ()> {
            let mut scope = ScratchScope::new();
            scope.set(entity, 7);
            Err(())
        }
        let model = Model::new();
        let a = model.create(Kind::Shell);
        assert!(fails(&a).is_err());
        assert!(a.is_scratch_idle());
    }
}
