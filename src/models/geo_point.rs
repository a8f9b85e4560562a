//! Named geographic coordinate.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// A named point on the globe, in degrees.
///
/// The name is used for rendering routes and must be unique among the points
/// of one optimization run. Coordinates are validated at construction so the
/// distance model never sees a value that would turn into `NaN`.
///
/// # Examples
///
/// ```
/// use u_courier::models::GeoPoint;
///
/// let p = GeoPoint::new("r1", 12.934533, 77.626579).unwrap();
/// assert_eq!(p.name(), "r1");
/// assert!(GeoPoint::new("bad", 12.0, 181.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeoPointRecord")]
pub struct GeoPoint {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a point, rejecting out-of-range or non-finite coordinates.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Result<Self> {
        let name = name.into();
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lon_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
        if !lat_ok || !lon_ok {
            return Err(RoutingError::InvalidCoordinate {
                name,
                latitude,
                longitude,
            });
        }
        Ok(Self {
            name,
            latitude,
            longitude,
        })
    }

    /// Display name of this point.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another point in kilometers.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        crate::distance::distance(self, other)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Unvalidated wire form; deserialization funnels through [`GeoPoint::new`].
#[derive(Deserialize)]
struct GeoPointRecord {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl TryFrom<GeoPointRecord> for GeoPoint {
    type Error = RoutingError;

    fn try_from(record: GeoPointRecord) -> Result<Self> {
        GeoPoint::new(record.name, record.latitude, record.longitude)
    }
}
