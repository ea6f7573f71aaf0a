//! Boundary-model export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use super::{render, Fixed};
use crate::closure::{closure, count_of_dimension, filter_by_dimension};
use crate::entity::{Entity, Kind};
use crate::error::ModelResult;
use crate::model::edge_point;

/// Writes the boundary model of everything reachable from `root` through uses
/// and embedded entities.
///
/// The header counts volumes, faces, curves and points, followed by two
/// placeholder lines. Records follow by ascending dimension:
///
/// ```text
/// point   id x y z
/// curve   id start end
/// cell    id boundary-count
///          use-count            (per boundary)
///           sub-id flipped      (per use; 1 for a forward use)
/// ```
pub fn write_dmg<W: Write>(writer: &mut W, root: &Entity) -> ModelResult<()> {
    let order = closure(root, false, true);
    writeln!(
        writer,
        "{} {} {} {}",
        count_of_dimension(&order, 3),
        count_of_dimension(&order, 2),
        count_of_dimension(&order, 1),
        count_of_dimension(&order, 0)
    )?;
    writeln!(writer, "0 0 0")?;
    writeln!(writer, "0 0 0")?;
    for dimension in 0..=3 {
        for entity in filter_by_dimension(&order, dimension) {
            write_record(writer, &entity)?;
        }
    }
    Ok(())
}

fn write_record<W: Write>(writer: &mut W, entity: &Entity) -> ModelResult<()> {
    let id = entity.id();
    match entity.kind() {
        Kind::Point => {
            let p = entity.position()?;
            writeln!(writer, "{id} {} {} {}", Fixed(p.x), Fixed(p.y), Fixed(p.z))?;
        }
        Kind::Line | Kind::Arc | Kind::Ellipse | Kind::Spline => {
            writeln!(
                writer,
                "{id} {} {}",
                edge_point(entity, 0)?.id(),
                edge_point(entity, 1)?.id()
            )?;
        }
        Kind::Plane | Kind::Ruled | Kind::Volume => {
            let boundaries = entity.uses();
            writeln!(writer, "{id} {}", boundaries.len())?;
            for boundary in &boundaries {
                let sides = boundary.target.uses();
                writeln!(writer, " {}", sides.len())?;
                for side in &sides {
                    writeln!(writer, "  {} {}", side.target.id(), (!side.orientation).bit())?;
                }
            }
        }
        Kind::Loop | Kind::Shell | Kind::Group => {}
    }
    Ok(())
}

/// Boundary model for everything reachable from `root` as a string.
pub fn dmg_string(root: &Entity) -> ModelResult<String> {
    render(|buffer| write_dmg(buffer, root))
}

/// Writes the boundary model for `root` to a file.
pub fn write_closure_to_dmg<P: AsRef<Path>>(root: &Entity, path: P) -> ModelResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_dmg(&mut writer, root)?;
    writer.flush()?;
    debug!(%root, path = %path.display(), "wrote boundary model");
    Ok(())
}
