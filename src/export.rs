//! Tabular export of document contents
//!
//! Flattens the point sequences of a [`Document`] into rows of a fixed
//! seven-column schema and serializes them as CSV to any destination the
//! caller supplies.

use crate::document::Document;
use crate::error::Result;
use crate::types::{Path, Waypoint};
use std::io::Write;
use time::format_description::well_known::Rfc3339;

/// Column headers of the fixed row schema
const FIELDS: [&str; 7] = [
    "type",
    "latitude",
    "longitude",
    "elevation",
    "time",
    "name",
    "description",
];

/// CSV export sink with per-category toggles
///
/// Flattens standalone waypoints, tracks and routes into `W`/`T`/`R` rows.
/// Each included non-empty category starts with a header row; each sequence
/// is followed by a blank-row delimiter. Output is a pure function of the
/// document and the toggles, so repeated exports are byte-identical.
///
/// # Example
///
/// ```
/// use gpx_metrics::{CsvExporter, Document};
///
/// let document = Document::new();
/// let mut buffer = Vec::new();
/// CsvExporter::new()
///     .with_routes(false)
///     .write_to(&document, &mut buffer)?;
/// # Ok::<(), gpx_metrics::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CsvExporter {
    include_waypoints: bool,
    include_tracks: bool,
    include_routes: bool,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvExporter {
    /// Create an exporter with all three categories included
    pub fn new() -> Self {
        Self {
            include_waypoints: true,
            include_tracks: true,
            include_routes: true,
        }
    }

    /// Toggle the standalone-waypoint category
    ///
    /// Returns `&mut self` to allow method chaining.
    pub fn with_waypoints(&mut self, include: bool) -> &mut Self {
        self.include_waypoints = include;
        self
    }

    /// Toggle the track category
    ///
    /// Returns `&mut self` to allow method chaining.
    pub fn with_tracks(&mut self, include: bool) -> &mut Self {
        self.include_tracks = include;
        self
    }

    /// Toggle the route category
    ///
    /// Returns `&mut self` to allow method chaining.
    pub fn with_routes(&mut self, include: bool) -> &mut Self {
        self.include_routes = include;
        self
    }

    /// Serialize the selected categories of `document` to `dest`
    ///
    /// A category toggled off, or empty in the document, contributes neither
    /// header nor rows.
    pub fn write_to<W: Write>(&self, document: &Document, dest: W) -> Result<()> {
        // record lengths differ between data rows and the blank delimiter
        let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(dest);

        if self.include_waypoints && !document.waypoints.is_empty() {
            writer.write_record(FIELDS)?;
            for point in &document.waypoints {
                writer.write_record(record("W", point)?)?;
            }
            write_blank_row(&mut writer)?;
        }

        if self.include_tracks && !document.tracks.is_empty() {
            writer.write_record(FIELDS)?;
            for track in &document.tracks {
                write_path(&mut writer, "T", track)?;
            }
        }

        if self.include_routes && !document.routes.is_empty() {
            writer.write_record(FIELDS)?;
            for route in &document.routes {
                write_path(&mut writer, "R", route)?;
            }
        }

        writer.flush()?;
        Ok(())
    }
}

/// Write one sequence's rows followed by the blank-row delimiter
fn write_path<W: Write>(writer: &mut csv::Writer<W>, letter: &str, path: &Path) -> Result<()> {
    for point in path.points() {
        writer.write_record(record(letter, point)?)?;
    }
    write_blank_row(writer)
}

/// Flatten one point into the fixed row schema
fn record(letter: &str, point: &Waypoint) -> Result<[String; 7]> {
    Ok([
        letter.to_string(),
        point.latitude.to_string(),
        point.longitude.to_string(),
        point.elevation.to_string(),
        point.time.format(&Rfc3339)?,
        point.name.clone(),
        point.description.clone(),
    ])
}

/// A single empty field serializes as an empty line
fn write_blank_row<W: Write>(writer: &mut csv::Writer<W>) -> Result<()> {
    writer.write_record([""])?;
    Ok(())
}
