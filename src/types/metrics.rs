//! Aggregation operations over path edges
//!
//! Everything here is built solely on [`Path::edges`], so open and closed
//! paths share the same code; the topology difference is fully absorbed by
//! edge generation.

use crate::error::{Error, Result};
use crate::types::{Edge, Path, Waypoint};

impl Edge<'_> {
    /// Great-circle length of this edge in metres
    pub fn length_m(&self) -> f64 {
        self.from.distance_m(self.to)
    }
}

impl Path {
    /// Per-edge great-circle distances in metres, in edge order
    pub fn edge_distances_m(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges().map(|edge| edge.length_m())
    }

    /// Total great-circle length of the path in metres
    ///
    /// The sum of [`Path::edge_distances_m`]; 0.0 for a path with fewer than
    /// two points. For a closed path this includes the wrap-around edge.
    pub fn total_distance_m(&self) -> f64 {
        self.edge_distances_m().sum()
    }

    /// Great-circle distance from an external point to the path's last point
    ///
    /// The terminal point is the last element in traversal order regardless
    /// of topology. Fails with [`Error::EmptySequence`] if the path has no
    /// points.
    pub fn distance_to_end_m(&self, point: &Waypoint) -> Result<f64> {
        let last = self.points().last().ok_or(Error::EmptySequence)?;
        Ok(point.distance_m(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    fn equator_track(degrees: usize) -> Path {
        let mut track = Path::open("equator", "");
        for i in 0..=degrees {
            track.append(Waypoint::new(0.0, i as f64));
        }
        track
    }

    #[test]
    fn test_total_distance_along_equator() {
        // Each one-degree hop is R * pi / 180
        let track = equator_track(3);
        let total = track.total_distance_m();
        assert!((total - 3.0 * 111_195.0).abs() < 3.0, "got {total}");
    }

    #[test]
    fn test_total_distance_of_degenerate_paths() {
        let mut track = Path::open("", "");
        assert_eq!(track.total_distance_m(), 0.0);

        track.append(Waypoint::new(12.0, 34.0));
        assert_eq!(track.total_distance_m(), 0.0);

        let mut region = Path::closed("", "");
        region.append(Waypoint::new(12.0, 34.0));
        assert_eq!(region.total_distance_m(), 0.0);
    }

    #[test]
    fn test_total_is_sum_of_edge_distances() {
        let track = equator_track(5);
        let sum: f64 = track.edge_distances_m().sum();
        assert_eq!(track.total_distance_m(), sum);
    }

    #[test]
    fn test_edge_distances_in_edge_order() {
        let mut track = Path::open("", "");
        track.set(vec![
            Waypoint::new(0.0, 0.0),
            Waypoint::new(0.0, 1.0),
            Waypoint::new(0.0, 3.0),
        ]);

        let distances: Vec<f64> = track.edge_distances_m().collect();
        assert_eq!(distances.len(), 2);
        // the second hop spans two degrees, the first one
        assert!(distances[1] > distances[0]);
    }

    #[test]
    fn test_closed_path_includes_wrap_edge() {
        let points = vec![
            Waypoint::new(0.0, 0.0),
            Waypoint::new(0.0, 1.0),
            Waypoint::new(1.0, 1.0),
        ];
        let mut track = Path::open("", "");
        track.set(points.clone());
        let mut region = Path::closed("", "");
        region.set(points);

        assert_eq!(track.edge_distances_m().count(), 2);
        assert_eq!(region.edge_distances_m().count(), 3);
        assert!(region.total_distance_m() > track.total_distance_m());
    }

    #[test]
    fn test_distance_to_end() {
        let mut track = Path::open("", "");
        track.set(vec![Waypoint::new(0.0, 0.0), Waypoint::new(0.0, 1.0)]);

        let external = Waypoint::new(0.0, 2.0);
        let distance = assert_ok!(track.distance_to_end_m(&external));
        assert!((distance - 111_195.0).abs() < 1.0, "got {distance}");
    }

    #[test]
    fn test_distance_to_end_of_empty_path_fails() {
        let track = Path::open("", "");
        let external = Waypoint::new(0.0, 0.0);
        assert_err!(track.distance_to_end_m(&external));
    }
}
