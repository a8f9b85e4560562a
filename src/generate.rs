//! Reproducible random delivery instances.
//!
//! Points are scattered uniformly in a square of `±spread_deg` around a
//! center. Useful for benchmarks and property tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, RoutingError};
use crate::instance::DeliveryInstance;
use crate::models::{GeoPoint, Order};

/// Builds an instance with `order_count` orders around `(center_lat, center_lon)`.
///
/// Point names are `start`, `r{i}` and `c{i}` (1-based). Preparation delays
/// are drawn from `[0, max_prep_hours]`. The same seed always gives the same
/// instance. Coordinates are clamped into valid latitude/longitude ranges.
///
/// # Examples
///
/// ```
/// use u_courier::generate::random_instance;
///
/// let a = random_instance(3, (12.93, 77.62), 0.01, 0.5, 42).unwrap();
/// let b = random_instance(3, (12.93, 77.62), 0.01, 0.5, 42).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.orders.len(), 3);
/// assert_eq!(a.orders[0].restaurant().name(), "r1");
/// ```
pub fn random_instance(
    order_count: usize,
    center: (f64, f64),
    spread_deg: f64,
    max_prep_hours: f64,
    seed: u64,
) -> Result<DeliveryInstance> {
    if !spread_deg.is_finite() || spread_deg < 0.0 {
        return Err(RoutingError::InvalidConfiguration(format!(
            "spread must be a finite, non-negative number of degrees, got {spread_deg}"
        )));
    }
    if !max_prep_hours.is_finite() || max_prep_hours < 0.0 {
        return Err(RoutingError::InvalidPreparationTime {
            value: max_prep_hours,
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let point = |name: String, rng: &mut StdRng| {
        let lat = center.0 + rng.random_range(-1.0..=1.0f64) * spread_deg;
        let lon = center.1 + rng.random_range(-1.0..=1.0f64) * spread_deg;
        GeoPoint::new(name, lat.clamp(-90.0, 90.0), lon.clamp(-180.0, 180.0))
    };

    let start = point("start".to_string(), &mut rng)?;
    let mut orders = Vec::with_capacity(order_count);
    for i in 1..=order_count {
        let restaurant = point(format!("r{i}"), &mut rng)?;
        let consumer = point(format!("c{i}"), &mut rng)?;
        let prep = rng.random_range(0.0..=1.0f64) * max_prep_hours;
        orders.push(Order::new(restaurant, consumer, prep)?);
    }
    Ok(DeliveryInstance::new(start, orders))
}
