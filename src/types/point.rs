use time::OffsetDateTime;

/// Mean Earth radius in metres
///
/// Spherical-earth approximation shared by all great-circle math in this
/// crate. Distances derived from it are surface distances, not 3-D ones.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two coordinate pairs in metres
///
/// Implements the haversine formula on a sphere of [`EARTH_RADIUS_M`].
/// Inputs are degrees; any finite inputs produce a finite, non-negative
/// result. Coordinates outside the WGS84 domain are not rejected.
pub fn haversine_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // rounding can push `a` marginally above 1 for antipodal pairs
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Role tag distinguishing where a point originated
///
/// Route points and track points are structurally identical; the tag keeps
/// them distinct in identity only. It never changes distance behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointKind {
    /// Standalone point, not part of an ordered path
    #[default]
    Waypoint,
    /// Point recorded along a traversed track
    TrackPoint,
    /// Point of a planned route
    RoutePoint,
}

/// A geographic point with optional metadata
///
/// Latitude and longitude are degrees. They are not validated or clamped;
/// out-of-range values propagate into distance computations unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    /// Latitude in degrees, conventionally within [-90, 90]
    pub latitude: f64,
    /// Longitude in degrees, conventionally within [-180, 180]
    pub longitude: f64,
    /// Elevation in whole metres above sea level
    pub elevation: i32,
    /// Creation or recording time
    pub time: OffsetDateTime,
    /// Optional display name (empty if unset)
    pub name: String,
    /// Optional free-form description (empty if unset)
    pub description: String,
    /// Origin role of the point
    pub kind: PointKind,
}

impl Waypoint {
    /// Create a waypoint at the given coordinates
    ///
    /// Elevation defaults to 0, the timestamp to the current UTC time at the
    /// moment of this call, and name/description to empty strings.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation: 0,
            time: OffsetDateTime::now_utc(),
            name: String::new(),
            description: String::new(),
            kind: PointKind::default(),
        }
    }

    /// Overwrite the position of the point
    ///
    /// Replaces latitude, longitude and elevation in place. Timestamp, name
    /// and description are left untouched.
    pub fn set_position(&mut self, latitude: f64, longitude: f64, elevation: i32) {
        self.latitude = latitude;
        self.longitude = longitude;
        self.elevation = elevation;
    }

    /// Great-circle distance to another waypoint in metres
    ///
    /// Only latitude and longitude participate; elevation, time and metadata
    /// are ignored. Symmetric, and zero exactly when both coordinate pairs
    /// are identical.
    pub fn distance_m(&self, other: &Waypoint) -> f64 {
        haversine_m(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}
