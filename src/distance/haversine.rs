//! Great-circle distance and travel time.
//!
//! # Formula
//!
//! ```text
//! a = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)
//! c = 2 · atan2(√a, √(1−a))
//! d = R · c
//! ```
//!
//! with φ latitude and λ longitude in radians and R = 6371 km. Straight-line
//! distance over the sphere stands in for road distance.

use crate::error::{Result, RoutingError};
use crate::models::GeoPoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Courier speed assumed when none is configured, km/h.
pub const DEFAULT_SPEED_KMH: f64 = 20.0;

/// Haversine distance between two points in kilometers.
///
/// Zero for identical coordinates and symmetric in its arguments.
///
/// # Examples
///
/// ```
/// use u_courier::models::GeoPoint;
/// use u_courier::distance::distance;
///
/// let a = GeoPoint::new("a", 0.0, 0.0).unwrap();
/// let b = GeoPoint::new("b", 0.0, 1.0).unwrap();
/// // One degree of longitude on the equator
/// assert!((distance(&a, &b) - 111.195).abs() < 1e-3);
/// assert_eq!(distance(&a, &a), 0.0);
/// ```
pub fn distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lon1 = a.longitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let lon2 = b.longitude().to_radians();

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    // Rounding can push `h` just past 1 for near-antipodal points.
    let h = ((dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2))
        .min(1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Hours needed to cover `distance_km` at `speed_kmh`.
///
/// Returns [`RoutingError::InvalidConfiguration`] when the speed is not a
/// finite positive number.
///
/// # Examples
///
/// ```
/// use u_courier::distance::{travel_time, DEFAULT_SPEED_KMH};
///
/// assert_eq!(travel_time(10.0, DEFAULT_SPEED_KMH).unwrap(), 0.5);
/// assert!(travel_time(10.0, 0.0).is_err());
/// ```
pub fn travel_time(distance_km: f64, speed_kmh: f64) -> Result<f64> {
    check_speed(speed_kmh)?;
    Ok(distance_km / speed_kmh)
}

/// Validates a courier speed.
pub(crate) fn check_speed(speed_kmh: f64) -> Result<()> {
    if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
        return Err(RoutingError::InvalidConfiguration(format!(
            "speed must be a finite positive number of km/h, got {speed_kmh}"
        )));
    }
    Ok(())
}
