//! # B-rep Kernel
//!
//! Topological boundary-representation modeling for mesh-generation input.
//!
//! ## Architecture
//!
//! ```text
//! Model (ids, config) → Entity graph → closure / sweeps / welding / copies → .geo + .dmg
//! ```
//!
//! Every object is an [`Entity`]: a shared handle whose node records its
//! [`Kind`], an ordered list of oriented [`Use`]s of lower-dimensional
//! entities, helper points and embedded entities. Higher-level operations
//! build new entities and wire them into the existing graph; nothing is ever
//! copied implicitly.
//!
//! ## Example
//!
//! ```rust
//! use brep_kernel::export::geo_string;
//! use brep_kernel::extrude::extrude_face_by;
//! use brep_kernel::primitives::square;
//! use brep_kernel::{volume_shell, Kind, Model};
//! use glam::DVec3;
//!
//! let model = Model::new();
//! let base = square(&model, DVec3::ZERO, DVec3::X, DVec3::Y).unwrap();
//! let block = extrude_face_by(&model, &base, DVec3::Z).unwrap();
//!
//! assert_eq!(block.lateral.kind(), Kind::Volume);
//! assert_eq!(volume_shell(&block.lateral).unwrap().use_count(), 6);
//! assert!(geo_string(&block.lateral).unwrap().contains("Surface Loop("));
//! ```
//!
//! ## Design Principles
//!
//! - **Shared topology**: entities are reference counted and shared by every
//!   parent that uses them
//! - **Scoped scratch**: traversals keep per-entity working state in a scratch
//!   slot that is always idle again when an operation returns
//! - **Explicit errors**: malformed input is reported as a [`ModelError`]

pub mod assembly;
pub mod closure;
pub mod config;
pub mod duplicate;
pub mod entity;
pub mod error;
pub mod eval;
pub mod export;
pub mod extrude;
pub mod math;
pub mod model;
pub mod primitives;

// Re-export public API
pub use assembly::{
    collect_assembly_boundary, insert_into, unscramble_loop, weld_half_shell_onto,
    weld_plane_with_holes_into, weld_volume_face_into,
};
pub use closure::{closure, count_of_dimension, filter_by_dimension, filter_points};
pub use duplicate::{copy_closure, transform_closure};
pub use entity::{
    boundary_kind_for, dimension_name, Entity, EntityId, Kind, Orientation, PointGeometry, Use,
};
pub use error::{ModelError, ModelResult};
pub use eval::{arc_normal, plane_normal};
pub use extrude::{
    extrude_edge, extrude_edge_by, extrude_face, extrude_face_by, extrude_face_group,
    extrude_face_group_by, extrude_loop, extrude_loop_by, extrude_point, extrude_point_by,
    translation, Extrusion, Transform,
};
pub use model::{
    add_hole_to_face, add_to_group, arc_center, edge_point, ellipse_center, ellipse_major_point,
    face_loop, loop_points, volume_shell, Model,
};
