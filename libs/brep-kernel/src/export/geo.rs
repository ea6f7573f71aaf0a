//! Script export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use super::{render, Fixed};
use crate::closure::closure;
use crate::entity::{dimension_name, Entity, Kind};
use crate::error::ModelResult;
use crate::model::{arc_center, edge_point, ellipse_center, ellipse_major_point};

/// Writes the script for everything reachable from `root`.
///
/// The statement pass covers uses, helpers and embedded entities; the
/// physical pass tags every dimensioned entity reachable through uses and
/// embedded entities.
pub fn write_geo<W: Write>(writer: &mut W, root: &Entity) -> ModelResult<()> {
    for entity in closure(root, true, true) {
        write_statement(writer, &entity)?;
    }
    for entity in closure(root, false, true) {
        if let Some(name) = entity.kind().physical_name() {
            writeln!(writer, "{name}({id}) = {{{id}}};", id = entity.id())?;
        }
    }
    Ok(())
}

/// Writes the defining statement of one entity, followed by its embedding
/// statements. Groups produce nothing.
///
/// # Examples
/// ```
/// use brep_kernel::export::statement_string;
/// use brep_kernel::Model;
/// use glam::DVec3;
///
/// let model = Model::new();
/// let p = model.point_with_size(DVec3::new(1.0, 2.0, 3.0), 0.5);
/// assert_eq!(
///     statement_string(&p).unwrap(),
///     "Point(0) = {1.000000,2.000000,3.000000,0.500000};\n"
/// );
/// ```
pub fn write_statement<W: Write>(writer: &mut W, entity: &Entity) -> ModelResult<()> {
    let kind = entity.kind();
    let id = entity.id();
    match kind {
        Kind::Point => {
            let g = entity.geometry()?;
            writeln!(
                writer,
                "Point({id}) = {{{},{},{},{}}};",
                Fixed(g.position.x),
                Fixed(g.position.y),
                Fixed(g.position.z),
                Fixed(g.size)
            )?;
        }
        Kind::Arc => {
            writeln!(
                writer,
                "{kind}({id}) = {{{},{},{}}};",
                edge_point(entity, 0)?.id(),
                arc_center(entity)?.id(),
                edge_point(entity, 1)?.id()
            )?;
        }
        Kind::Ellipse => {
            writeln!(
                writer,
                "{kind}({id}) = {{{},{},{},{}}};",
                edge_point(entity, 0)?.id(),
                ellipse_center(entity)?.id(),
                ellipse_major_point(entity)?.id(),
                edge_point(entity, 1)?.id()
            )?;
        }
        Kind::Spline => {
            let mut ids = vec![edge_point(entity, 0)?.id().to_string()];
            ids.extend(entity.helpers().iter().map(|h| h.id().to_string()));
            ids.push(edge_point(entity, 1)?.id().to_string());
            writeln!(writer, "{kind}({id}) = {{{}}};", ids.join(","))?;
        }
        Kind::Line | Kind::Plane | Kind::Ruled | Kind::Volume | Kind::Loop | Kind::Shell => {
            let ids: Vec<String> = entity
                .uses()
                .iter()
                .map(|u| {
                    if kind.is_boundary() && u.orientation.is_reverse() {
                        format!("-{}", u.target.id())
                    } else {
                        u.target.id().to_string()
                    }
                })
                .collect();
            writeln!(writer, "{kind}({id}) = {{{}}};", ids.join(","))?;
        }
        Kind::Group => return Ok(()),
    }

    if let Some(outer) = entity.dimension() {
        for inner in entity.embedded() {
            if let Some(inner_dimension) = inner.dimension() {
                writeln!(
                    writer,
                    "{}{{{}}} In {}{{{id}}};",
                    dimension_name(inner_dimension),
                    inner.id(),
                    dimension_name(outer)
                )?;
            }
        }
    }
    Ok(())
}

/// Statement of one entity as a string.
pub fn statement_string(entity: &Entity) -> ModelResult<String> {
    render(|buffer| write_statement(buffer, entity))
}

/// Script for everything reachable from `root` as a string.
///
/// # Examples
/// ```
/// use brep_kernel::export::geo_string;
/// use brep_kernel::Model;
/// use glam::DVec3;
///
/// let model = Model::new();
/// let line = model.line_between(DVec3::ZERO, DVec3::X).unwrap();
/// let script = geo_string(&line).unwrap();
/// assert!(script.contains("Line(2) = {0,1};\n"));
/// assert!(script.ends_with("Physical Line(2) = {2};\n"));
/// ```
pub fn geo_string(root: &Entity) -> ModelResult<String> {
    render(|buffer| write_geo(buffer, root))
}

/// Writes the script for `root` to a file.
pub fn write_closure_to_geo<P: AsRef<Path>>(root: &Entity, path: P) -> ModelResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_geo(&mut writer, root)?;
    writer.flush()?;
    debug!(%root, path = %path.display(), "wrote script");
    Ok(())
}
