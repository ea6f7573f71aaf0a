//! Textual export for the mesher.
//!
//! Two formats are written from a closure, children before parents:
//!
//! - [`geo`]: the mesher's script language, one statement per entity followed
//!   by physical-group tags for every dimensioned entity
//! - [`dmg`]: the boundary-model format, a count header and one record per
//!   point, curve, face and volume
//!
//! Floating-point values are written with [`EXPORT_PRECISION`] decimals.

pub mod dmg;
pub mod geo;

pub use dmg::{dmg_string, write_closure_to_dmg, write_dmg};
pub use geo::{geo_string, statement_string, write_closure_to_geo, write_geo, write_statement};

use std::fmt;

use ::config::constants::EXPORT_PRECISION;

use crate::error::ModelResult;

/// Fixed-point rendering of a coordinate or size.
struct Fixed(f64);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", EXPORT_PRECISION, self.0)
    }
}

/// Collects the output of a writer-based export into a string.
fn render(write: impl FnOnce(&mut Vec<u8>) -> ModelResult<()>) -> ModelResult<String> {
    let mut buffer = Vec::new();
    write(&mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests;
