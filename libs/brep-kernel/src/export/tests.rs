//! Tests for the script and boundary-model writers.

use super::*;
use crate::primitives::{cube, polygon};
use crate::{Model, Orientation};
use glam::DVec3;
use std::fs;

#[test]
fn test_point_statement_is_exact() {
    let model = Model::new();
    let p = model.point_with_size(DVec3::new(1.0, 2.0, 3.0), 0.5);
    assert_eq!(
        statement_string(&p).unwrap(),
        "Point(0) = {1.000000,2.000000,3.000000,0.500000};\n"
    );
    assert_eq!(
        geo_string(&p).unwrap(),
        "Point(0) = {1.000000,2.000000,3.000000,0.500000};\nPhysical Point(0) = {0};\n"
    );
}

#[test]
fn test_line_script() {
    let model = Model::new();
    let line = model.line_between(DVec3::ZERO, DVec3::X).unwrap();
    let expected = "\
Point(1) = {1.000000,0.000000,0.000000,0.100000};
Point(0) = {0.000000,0.000000,0.000000,0.100000};
Line(2) = {0,1};
Physical Point(1) = {1};
Physical Point(0) = {0};
Physical Line(2) = {2};
";
    assert_eq!(geo_string(&line).unwrap(), expected);
}

#[test]
fn test_curve_statements_list_helpers_between_endpoints() {
    let model = Model::new();
    let pts = model.points(&[DVec3::X, DVec3::ZERO, DVec3::Y, DVec3::new(0.5, 0.0, 0.0)]);
    let arc = model.arc(&pts[0], &pts[1], &pts[2]).unwrap();
    let ellipse = model.ellipse_arc(&pts[0], &pts[1], &pts[3], &pts[2]).unwrap();
    let spline = model.spline(&pts).unwrap();

    assert_eq!(statement_string(&arc).unwrap(), "Circle(4) = {0,1,2};\n");
    assert_eq!(statement_string(&ellipse).unwrap(), "Ellipse(5) = {0,1,3,2};\n");
    assert_eq!(statement_string(&spline).unwrap(), "Spline(6) = {0,1,2,3};\n");
}

#[test]
fn test_boundary_statements_negate_reversed_uses() {
    let model = Model::new();
    let pts = model.points(&[DVec3::ZERO, DVec3::X, DVec3::Y]);
    let a = model.line(&pts[0], &pts[1]).unwrap();
    let b = model.line(&pts[2], &pts[1]).unwrap();
    let c = model.line(&pts[2], &pts[0]).unwrap();
    let lp = model.curve_loop();
    lp.add_use(Orientation::Forward, &a);
    lp.add_use(Orientation::Reverse, &b);
    lp.add_use(Orientation::Forward, &c);
    let face = model.plane(&lp).unwrap();
    let hole = model.curve_loop();
    face.add_use(Orientation::Reverse, &hole);

    assert_eq!(statement_string(&lp).unwrap(), "Line Loop(6) = {3,-4,5};\n");
    assert_eq!(statement_string(&face).unwrap(), "Plane Surface(7) = {6,8};\n");
}

#[test]
fn test_embedded_statements_follow_parent() {
    let model = Model::new();
    let face = polygon(&model, &[DVec3::ZERO, DVec3::X, DVec3::Y]).unwrap();
    let inside = model.point(DVec3::new(0.2, 0.2, 0.0));
    face.embed(&inside);

    let statement = statement_string(&face).unwrap();
    assert_eq!(
        statement,
        format!("Plane Surface({0}) = {{3}};\nPoint{{{1}}} In Surface{{{0}}};\n", face.id(), inside.id())
    );

    let script = geo_string(&face).unwrap();
    assert!(script.find(&format!("Point({})", inside.id())).unwrap() < script.find("In Surface").unwrap());
    assert!(script.contains(&format!("Physical Point({0}) = {{{0}}};", inside.id())));
}

#[test]
fn test_groups_are_skipped_but_members_tagged() {
    let model = Model::new();
    let line = model.line_between(DVec3::ZERO, DVec3::X).unwrap();
    let group = model.group();
    crate::add_to_group(&group, &line).unwrap();

    let script = geo_string(&group).unwrap();
    assert!(!script.contains("Group"));
    assert!(script.contains("Physical Line(2) = {2};\n"));
    assert_eq!(statement_string(&group).unwrap(), "");
}

#[test]
fn test_helpers_are_not_tagged() {
    let model = Model::new();
    let pts = model.points(&[DVec3::X, DVec3::ZERO, DVec3::Y]);
    let arc = model.arc(&pts[0], &pts[1], &pts[2]).unwrap();

    let script = geo_string(&arc).unwrap();
    assert!(script.contains("Point(1) = "));
    assert!(!script.contains("Physical Point(1)"));
    assert!(script.contains("Physical Point(0) = {0};"));
}

#[test]
fn test_dmg_line() {
    let model = Model::new();
    let line = model.line_between(DVec3::ZERO, DVec3::X).unwrap();
    let expected = "\
0 0 1 2
0 0 0
0 0 0
1 1.000000 0.000000 0.000000
0 0.000000 0.000000 0.000000
2 0 1
";
    assert_eq!(dmg_string(&line).unwrap(), expected);
}

#[test]
fn test_dmg_face_record() {
    let model = Model::new();
    let face = polygon(&model, &[DVec3::ZERO, DVec3::X, DVec3::Y]).unwrap();
    let text = dmg_string(&face).unwrap();

    assert!(text.starts_with("0 1 3 3\n0 0 0\n0 0 0\n"));
    assert!(text.ends_with("7 1\n 3\n  4 1\n  5 1\n  6 1\n"));
}

#[test]
fn test_dmg_cube_counts_and_flips() {
    let model = Model::new();
    let solid = cube(&model, DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z).unwrap();
    let text = dmg_string(&solid).unwrap();

    assert!(text.starts_with("1 6 12 8\n"));
    let volume_record = text
        .split_once(&format!("\n{} 1\n", solid.id()))
        .map(|(_, rest)| rest)
        .unwrap();
    let mut lines = volume_record.lines();
    assert_eq!(lines.next(), Some(" 6"));
    let flips: Vec<_> = lines
        .take(6)
        .map(|l| l.rsplit(' ').next().unwrap())
        .collect();
    // Base reversed, top forward, then the sides in base-loop orientation.
    assert_eq!(flips, ["0", "1", "1", "1", "0", "0"]);
}

#[test]
fn test_writes_files() {
    let model = Model::new();
    let face = polygon(&model, &[DVec3::ZERO, DVec3::X, DVec3::Y]).unwrap();
    let dir = std::env::temp_dir();
    let geo_path = dir.join(format!("brep-kernel-{}.geo", std::process::id()));
    let dmg_path = dir.join(format!("brep-kernel-{}.dmg", std::process::id()));

    write_closure_to_geo(&face, &geo_path).unwrap();
    write_closure_to_dmg(&face, &dmg_path).unwrap();

    assert_eq!(fs::read_to_string(&geo_path).unwrap(), geo_string(&face).unwrap());
    assert_eq!(fs::read_to_string(&dmg_path).unwrap(), dmg_string(&face).unwrap());
    fs::remove_file(geo_path).unwrap();
    fs::remove_file(dmg_path).unwrap();
}

#[test]
fn test_write_to_missing_directory_is_io_error() {
    let model = Model::new();
    let p = model.point(DVec3::ZERO);
    let path = std::env::temp_dir().join("brep-kernel-missing-dir").join("out.geo");
    assert!(matches!(
        write_closure_to_geo(&p, path),
        Err(crate::ModelError::Io(_))
    ));
}
