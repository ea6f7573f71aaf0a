//! # Config Crate
//!
//! Centralized configuration constants for the B-rep modeling kernel.
//! Default discretization sizes, geometric tolerances and export precision
//! are defined here so that the kernel never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{AXIS_TOLERANCE, DEFAULT_POINT_SIZE};
//!
//! // Points created without an explicit size use the default mesh size
//! let size: Option<f64> = None;
//! assert_eq!(size.unwrap_or(DEFAULT_POINT_SIZE), 0.1);
//!
//! // Axis alignment checks compare against AXIS_TOLERANCE
//! let cosine: f64 = 1.0 - 1e-9;
//! assert!(1.0 - cosine.abs() < AXIS_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Mesher Compatible**: Defaults match what the downstream mesher expects
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
