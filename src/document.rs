//! Document assembly from parsed GPX data
//!
//! The XML work is delegated entirely to the `gpx` crate; this module only
//! maps its parsed records into the crate's own model. No cross-validation
//! between waypoints, tracks and routes is performed at assembly time.

use crate::error::Result;
use crate::types::{Path, PointKind, Waypoint};
use std::io::Read;

/// A GPX document: standalone waypoints plus tracks and routes
///
/// Tracks and routes are both open paths; route points carry the
/// [`PointKind::RoutePoint`] tag to stay distinct in identity. Read-mostly
/// after assembly.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub waypoints: Vec<Waypoint>,
    pub tracks: Vec<Path>,
    pub routes: Vec<Path>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse GPX from any `Read` source and assemble a document
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::from_gpx(&gpx::read(reader)?))
    }

    /// Assemble a document from an already-parsed GPX value
    ///
    /// Standalone waypoints keep coordinates and name only. Each source
    /// track becomes one open path with all segment points appended in
    /// order; each source route becomes one open path of route points. The
    /// path description is tagged with the source sequence number to
    /// preserve provenance.
    pub fn from_gpx(gpx: &gpx::Gpx) -> Self {
        let waypoints = gpx
            .waypoints
            .iter()
            .map(|source| {
                let position = source.point();
                let mut point = Waypoint::new(position.y(), position.x());
                if let Some(name) = &source.name {
                    point.name = name.clone();
                }
                warn_out_of_range(&point);
                point
            })
            .collect();

        let tracks = gpx
            .tracks
            .iter()
            .map(|track| {
                let mut path = Path::open(
                    track.name.clone().unwrap_or_default(),
                    sequence_tag(track.number),
                );
                for segment in &track.segments {
                    for source in &segment.points {
                        path.append(assemble_point(source, PointKind::TrackPoint));
                    }
                }
                path
            })
            .collect();

        let routes = gpx
            .routes
            .iter()
            .map(|route| {
                let mut path = Path::open(
                    route.name.clone().unwrap_or_default(),
                    sequence_tag(route.number),
                );
                for source in &route.points {
                    path.append(assemble_point(source, PointKind::RoutePoint));
                }
                path
            })
            .collect();

        Self {
            waypoints,
            tracks,
            routes,
        }
    }
}

/// Build a path point from a parsed GPX waypoint
fn assemble_point(source: &gpx::Waypoint, kind: PointKind) -> Waypoint {
    let position = source.point();
    let mut point = Waypoint::new(position.y(), position.x());
    point.kind = kind;
    if let Some(elevation) = source.elevation {
        point.elevation = elevation.round() as i32;
    }
    if let Some(time) = source.time.clone() {
        point.time = time.into();
    }
    warn_out_of_range(&point);
    point
}

/// Out-of-range coordinates are accepted but worth a trace
fn warn_out_of_range(point: &Waypoint) {
    if !(-90.0..=90.0).contains(&point.latitude) || !(-180.0..=180.0).contains(&point.longitude) {
        tracing::warn!(
            "Accepting coordinate outside WGS84 bounds: ({}, {})",
            point.latitude,
            point.longitude
        );
    }
}

/// Provenance tag for the path description, e.g. "number: 3"
fn sequence_tag(number: Option<u32>) -> String {
    match number {
        Some(number) => format!("number: {number}"),
        None => String::new(),
    }
}
