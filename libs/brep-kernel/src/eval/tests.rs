//! Tests for parametric evaluation and normals.

use super::*;
use crate::primitives::{circle, ellipse_loop, polygon, square};
use ::config::constants::PLANE_NORMAL_EPSILON;
use approx::assert_relative_eq;
use std::f64::consts::FRAC_1_SQRT_2;

fn eval(model: &Model, entity: &Entity, u: f64) -> DVec3 {
    model.evaluate(entity, u).unwrap().unwrap()
}

#[test]
fn test_point_ignores_parameter() {
    let model = Model::new();
    let p = model.point(DVec3::new(1.0, 2.0, 3.0));
    assert_eq!(eval(&model, &p, 0.7), DVec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_line_interpolates() {
    let model = Model::new();
    let line = model
        .line_between(DVec3::new(1.0, 0.0, 0.0), DVec3::new(1.0, 4.0, 2.0))
        .unwrap();
    assert_eq!(eval(&model, &line, 0.0), DVec3::new(1.0, 0.0, 0.0));
    assert_eq!(eval(&model, &line, 1.0), DVec3::new(1.0, 4.0, 2.0));
    assert_relative_eq!(eval(&model, &line, 0.5).y, 2.0);
}

#[test]
fn test_arc_is_offset_by_its_center() {
    let model = Model::new();
    let c = DVec3::new(3.0, -1.0, 2.0);
    let start = model.point(c + DVec3::X);
    let center = model.point(c);
    let end = model.point(c + DVec3::Y);
    let arc = model.arc(&start, &center, &end).unwrap();

    let start_pos = eval(&model, &arc, 0.0);
    let middle = eval(&model, &arc, 0.5);
    let end_pos = eval(&model, &arc, 1.0);

    assert_relative_eq!(start_pos.distance(c + DVec3::X), 0.0, epsilon = 1e-12);
    assert_relative_eq!(middle.x, c.x + FRAC_1_SQRT_2, epsilon = 1e-12);
    assert_relative_eq!(middle.y, c.y + FRAC_1_SQRT_2, epsilon = 1e-12);
    assert_relative_eq!(middle.z, c.z, epsilon = 1e-12);
    assert_relative_eq!(end_pos.distance(c + DVec3::Y), 0.0, epsilon = 1e-12);
}

#[test]
fn test_circle_arcs_stay_on_circle() {
    let model = Model::new();
    let ring = circle(&model, DVec3::ZERO, DVec3::Z, DVec3::X * 2.0).unwrap();
    for arc in ring.used_targets() {
        for step in 0..=4 {
            let p = eval(&model, &arc, f64::from(step) / 4.0);
            assert_relative_eq!(p.length(), 2.0, epsilon = 1e-12);
            assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_ellipse_swaps_to_major_axis_endpoint() {
    let model = Model::new();
    let major = DVec3::X * 2.0;
    let minor = DVec3::Y;
    let ring = ellipse_loop(&model, DVec3::ZERO, major, minor).unwrap();
    let first = ring.use_at(0).unwrap().target;

    assert_relative_eq!(eval(&model, &first, 0.0).distance(major), 0.0, epsilon = 1e-12);
    assert_relative_eq!(eval(&model, &first, 1.0).distance(minor), 0.0, epsilon = 1e-12);
    let middle = eval(&model, &first, 0.5);
    assert_relative_eq!(middle.x, 2.0 * FRAC_1_SQRT_2, epsilon = 1e-12);
    assert_relative_eq!(middle.y, FRAC_1_SQRT_2, epsilon = 1e-12);

    for arc in ring.used_targets() {
        let p = eval(&model, &arc, 0.3);
        assert_relative_eq!((p.x / 2.0).powi(2) + p.y.powi(2), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_ellipse_off_axis_is_unsupported() {
    let model = Model::new();
    let pts = model.points(&[
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::ZERO,
        DVec3::X,
        DVec3::new(-1.0, 1.0, 0.0),
    ]);
    let ellipse = model.ellipse_arc(&pts[0], &pts[1], &pts[2], &pts[3]).unwrap();

    let err = model.evaluate(&ellipse, 0.5).unwrap_err();
    assert!(matches!(err, ModelError::UnsupportedGeometry(_)));
    assert!(err.to_string().contains("major axis"));
}

#[test]
fn test_ellipse_without_minor_endpoint_is_unsupported() {
    let model = Model::new();
    let pts = model.points(&[
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::ZERO,
        DVec3::X,
        DVec3::X * 2.0,
    ]);
    let ellipse = model.ellipse_arc(&pts[0], &pts[1], &pts[2], &pts[3]).unwrap();

    let err = model.evaluate(&ellipse, 0.5).unwrap_err();
    assert!(err.to_string().contains("minor axis"));
}

#[test]
fn test_unrepresentable_kinds_yield_none() {
    let model = Model::new();
    let spline = model
        .spline_through(&[DVec3::ZERO, DVec3::X, DVec3::new(2.0, 1.0, 0.0)])
        .unwrap();
    let face = square(&model, DVec3::ZERO, DVec3::X, DVec3::Y).unwrap();

    assert_eq!(model.evaluate(&spline, 0.5).unwrap(), None);
    assert_eq!(model.evaluate(&face, 0.5).unwrap(), None);
    assert_eq!(model.evaluate(&model.group(), 0.5).unwrap(), None);
}

#[test]
fn test_arc_normal() {
    let model = Model::new();
    let ring = circle(&model, DVec3::ZERO, DVec3::Z, DVec3::X).unwrap();
    for arc in ring.used_targets() {
        let n = arc_normal(&arc).unwrap().unwrap();
        assert_relative_eq!(n.distance(DVec3::Z), 0.0, epsilon = 1e-12);
    }

    let center = model.point(DVec3::ZERO);
    let half = model
        .arc(&model.point(DVec3::X), &center, &model.point(-DVec3::X))
        .unwrap();
    assert_eq!(arc_normal(&half).unwrap(), None);
    assert!(model.evaluate(&half, 0.5).is_err());
}

#[test]
fn test_plane_normal() {
    let model = Model::new();
    let face = square(&model, DVec3::ZERO, DVec3::X, DVec3::Y).unwrap();
    let n = plane_normal(&face, PLANE_NORMAL_EPSILON).unwrap().unwrap();
    assert_relative_eq!(n.distance(DVec3::Z), 0.0, epsilon = 1e-12);

    let tilted = polygon(&model, &[DVec3::ZERO, DVec3::ZERO, DVec3::Y, DVec3::Z * 2.0]).unwrap();
    let n = plane_normal(&tilted, PLANE_NORMAL_EPSILON).unwrap().unwrap();
    assert_relative_eq!(n.distance(DVec3::X), 0.0, epsilon = 1e-12);
}

#[test]
fn test_plane_normal_degenerate_and_wrong_kind() {
    let model = Model::new();
    let collinear = polygon(&model, &[DVec3::ZERO, DVec3::X, DVec3::X * 2.0]).unwrap();
    assert_eq!(plane_normal(&collinear, PLANE_NORMAL_EPSILON).unwrap(), None);

    let line = model.line_between(DVec3::ZERO, DVec3::X).unwrap();
    assert!(plane_normal(&line, PLANE_NORMAL_EPSILON).is_err());
}
