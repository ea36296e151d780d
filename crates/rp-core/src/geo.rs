//! Geographic coordinate type and the distance function between two points.
//!
//! `WayPoint` uses `f64` latitude/longitude.  Distances are great-circle
//! kilometres on a spherical Earth, which is the unit every link weight in
//! the planner is expressed in.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WayPoint {
    pub lat: f64,
    pub lon: f64,
}

impl WayPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Both components are finite numbers.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Finite, with latitude in `[-90, 90]` and longitude in `[-180, 180]`.
    pub fn is_valid(self) -> bool {
        self.is_finite() && self.lat.abs() <= 90.0 && self.lon.abs() <= 180.0
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Symmetric and non-negative; `p.distance_km(p) == 0.0`.
    pub fn distance_km(self, other: WayPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// `true` if `self` lies strictly inside the axis-aligned rectangle
    /// spanned by `a` and `b`.  Points on any edge of the rectangle are
    /// outside.
    #[inline]
    pub fn strictly_between(self, a: WayPoint, b: WayPoint) -> bool {
        let (min_lat, max_lat) = (a.lat.min(b.lat), a.lat.max(b.lat));
        let (min_lon, max_lon) = (a.lon.min(b.lon), a.lon.max(b.lon));
        self.lat > min_lat && self.lat < max_lat && self.lon > min_lon && self.lon < max_lon
    }
}

impl std::fmt::Display for WayPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
