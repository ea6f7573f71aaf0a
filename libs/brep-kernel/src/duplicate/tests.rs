//! Tests for closure copies and transforms.

use super::*;
use crate::closure::filter_points;
use crate::primitives::{circle, cube, disk};
use crate::Orientation;
use approx::assert_relative_eq;
use std::collections::{HashMap, HashSet};
use std::f64::consts::FRAC_PI_2;

/// A disk with an embedded point, so all three relations are present.
fn sample(model: &Model) -> Entity {
    let face = disk(model, DVec3::ZERO, DVec3::Z, DVec3::X).unwrap();
    face.embed(&model.point_with_size(DVec3::new(0.2, 0.1, 0.0), 0.02));
    face
}

#[test]
fn test_copy_is_isomorphic() {
    let model = Model::new();
    let face = sample(&model);
    let copy = copy_closure(&model, &face).unwrap();

    let originals = closure(&face, true, true);
    let clones = closure(&copy, true, true);
    assert_eq!(originals.len(), clones.len());

    let map: HashMap<_, _> = originals
        .iter()
        .map(Entity::id)
        .zip(clones.iter().cloned())
        .collect();
    let image = |e: &Entity| map[&e.id()].clone();
    for (original, clone) in originals.iter().zip(&clones) {
        assert_eq!(original.kind(), clone.kind());
        let mapped: Vec<_> = original
            .uses()
            .into_iter()
            .map(|u| crate::Use::new(u.orientation, image(&u.target)))
            .collect();
        assert_eq!(clone.uses(), mapped);
        assert_eq!(
            clone.helpers(),
            original.helpers().iter().map(image).collect::<Vec<_>>()
        );
        assert_eq!(
            clone.embedded(),
            original.embedded().iter().map(image).collect::<Vec<_>>()
        );
    }
}

#[test]
fn test_copy_preserves_points_and_ids_are_fresh() {
    let model = Model::new();
    let face = sample(&model);
    let before = model.peek_next_id();
    let copy = copy_closure(&model, &face).unwrap();

    let originals = closure(&face, true, true);
    let clones = closure(&copy, true, true);
    let original_ids: HashSet<_> = originals.iter().map(Entity::id).collect();
    assert!(clones.iter().all(|c| !original_ids.contains(&c.id())));
    assert!(clones.iter().all(|c| c.id() >= before));

    for (a, b) in filter_points(&originals).iter().zip(filter_points(&clones)) {
        assert_eq!(a.geometry().unwrap(), b.geometry().unwrap());
    }
    assert_eq!(copy.embedded()[0].size().unwrap(), 0.02);
}

#[test]
fn test_copy_is_independent() {
    let model = Model::new();
    let face = sample(&model);
    let copy = copy_closure(&model, &face).unwrap();

    copy.add_use(Orientation::Reverse, &circle(&model, DVec3::ZERO, DVec3::Z, DVec3::X * 0.5).unwrap());
    transform_closure(&copy, DMat3::IDENTITY, DVec3::Z).unwrap();

    assert_eq!(face.use_count(), 1);
    assert!(filter_points(&closure(&face, true, true))
        .iter()
        .all(|p| p.position().unwrap().z == 0.0));
}

#[test]
fn test_copy_restores_scratch() {
    let model = Model::new();
    let face = sample(&model);
    copy_closure(&model, &face).unwrap();
    assert!(closure(&face, true, true).iter().all(Entity::is_scratch_idle));
}

#[test]
fn test_transform_moves_each_point_once() {
    let model = Model::new();
    let solid = cube(&model, DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z).unwrap();
    let points = filter_points(&closure(&solid, true, true));
    let before: Vec<_> = points.iter().map(|p| p.position().unwrap()).collect();

    transform_closure(&solid, DMat3::IDENTITY, DVec3::new(5.0, 0.0, 0.0)).unwrap();

    for (p, old) in points.iter().zip(before) {
        assert_eq!(p.position().unwrap(), old + DVec3::new(5.0, 0.0, 0.0));
    }
}

#[test]
fn test_transform_rotates_helpers() {
    let model = Model::new();
    let face = disk(&model, DVec3::X * 2.0, DVec3::Z, DVec3::X).unwrap();
    let quarter = DMat3::from_rotation_z(FRAC_PI_2);

    transform_closure(&face, quarter, DVec3::ZERO).unwrap();

    let arc = crate::face_loop(&face).unwrap().use_at(0).unwrap().target;
    let center = crate::arc_center(&arc).unwrap().position().unwrap();
    assert_relative_eq!(center.distance(DVec3::Y * 2.0), 0.0, epsilon = 1e-12);
}
