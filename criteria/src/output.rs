//! Rendering of grouped criteria.
//!
//! The text format is read line by line by the localization shell pipeline,
//! so it must not change:
//!
//! ```text
//! [PROJECT: menu]
//! key=^Hello$,source=^Hello$,project=^menu$,datatype=^string$
//! [PROJECT: core]
//! key=^K1$,source=^A\+B$,project=^core$,datatype=^string$
//! ```

use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::logs::log_info;
use crate::transform::CriteriaMap;

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `[PROJECT: ...]` markers followed by criteria lines
    #[default]
    Text,
    /// JSON array of `{ "project", "criteria" }` objects
    Json,
}

/// Marker line that opens a project block.
pub fn project_marker(project: &str) -> String {
    format!("[PROJECT: {}]", project)
}

/// Write the criteria map in text form.
pub fn write_text<W: Write>(map: &CriteriaMap, out: &mut W) -> io::Result<()> {
    for project in map.iter() {
        writeln!(out, "{}", project_marker(&project.project))?;
        for criteria in &project.criteria {
            writeln!(out, "{}", criteria)?;
        }
    }
    Ok(())
}

/// Write the criteria map as pretty JSON.
pub fn write_json<W: Write>(map: &CriteriaMap, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, map)?;
    writeln!(out)
}

/// Write the criteria map in `format`.
pub fn write_criteria<W: Write>(map: &CriteriaMap, format: OutputFormat, out: &mut W) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(map, out),
        OutputFormat::Json => write_json(map, out),
    }
}

/// Render the criteria map to a string.
pub fn render(map: &CriteriaMap, format: OutputFormat) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_criteria(map, format, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write to `path`, or to stdout when `None`.
pub fn write_output(map: &CriteriaMap, format: OutputFormat, path: Option<&Path>) -> io::Result<()> {
    match path {
        Some(p) => {
            let mut out = BufWriter::new(File::create(p)?);
            write_criteria(map, format, &mut out)?;
            out.flush()?;
            log_info(format!("criteria written to {}", p.display()));
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_criteria(map, format, &mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}
