//! Delivery order: a pickup bound to a drop-off.

use serde::{Deserialize, Serialize};

use super::GeoPoint;
use crate::error::{Result, RoutingError};

/// A single delivery job.
///
/// The courier must visit `restaurant` before `consumer`. The preparation
/// delay (hours) is the time the order needs before it can be collected.
///
/// # Examples
///
/// ```
/// use u_courier::models::{GeoPoint, Order};
///
/// let r = GeoPoint::new("r1", 12.934533, 77.626579).unwrap();
/// let c = GeoPoint::new("c1", 12.935800, 77.619234).unwrap();
/// let order = Order::new(r, c, 0.5).unwrap();
/// assert_eq!(order.restaurant().name(), "r1");
/// assert_eq!(order.preparation_time(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrderRecord")]
pub struct Order {
    restaurant: GeoPoint,
    consumer: GeoPoint,
    preparation_time: f64,
}

impl Order {
    /// Creates an order, rejecting negative or non-finite preparation time.
    ///
    /// Pickup and drop-off are expected to be distinct locations; this is
    /// not checked.
    pub fn new(restaurant: GeoPoint, consumer: GeoPoint, preparation_time: f64) -> Result<Self> {
        if !preparation_time.is_finite() || preparation_time < 0.0 {
            return Err(RoutingError::InvalidPreparationTime {
                value: preparation_time,
            });
        }
        Ok(Self {
            restaurant,
            consumer,
            preparation_time,
        })
    }

    /// Pickup location.
    pub fn restaurant(&self) -> &GeoPoint {
        &self.restaurant
    }

    /// Drop-off location.
    pub fn consumer(&self) -> &GeoPoint {
        &self.consumer
    }

    /// Preparation delay in hours.
    pub fn preparation_time(&self) -> f64 {
        self.preparation_time
    }
}

#[derive(Deserialize)]
struct OrderRecord {
    restaurant: GeoPoint,
    consumer: GeoPoint,
    preparation_time: f64,
}

impl TryFrom<OrderRecord> for Order {
    type Error = RoutingError;

    fn try_from(record: OrderRecord) -> Result<Self> {
        Order::new(record.restaurant, record.consumer, record.preparation_time)
    }
}
