//! Delivery instances: a start location plus its orders.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{GeoPoint, Order};
use crate::optimizer::ensure_unique_names;

/// Input of one search, loadable from JSON.
///
/// Points and orders are validated while parsing.
///
/// # Examples
///
/// ```
/// use u_courier::instance::DeliveryInstance;
///
/// let json = r#"{
///     "start": {"name": "start", "latitude": 12.935192, "longitude": 77.624480},
///     "orders": [{
///         "restaurant": {"name": "r1", "latitude": 12.934533, "longitude": 77.626579},
///         "consumer": {"name": "c1", "latitude": 12.935800, "longitude": 77.619234},
///         "preparation_time": 0.5
///     }]
/// }"#;
/// let instance = DeliveryInstance::from_json(json).unwrap();
/// assert_eq!(instance.orders.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryInstance {
    /// Courier's starting location.
    pub start: GeoPoint,
    /// Orders to fulfil, in input order.
    pub orders: Vec<Order>,
}

impl DeliveryInstance {
    /// Creates an instance.
    pub fn new(start: GeoPoint, orders: Vec<Order>) -> Self {
        Self { start, orders }
    }

    /// Parses an instance and checks point names are unique.
    pub fn from_json(json: &str) -> Result<Self> {
        let instance: Self = serde_json::from_str(json)?;
        instance.validate_names()?;
        Ok(instance)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects instances where two points share a name.
    pub fn validate_names(&self) -> Result<()> {
        ensure_unique_names(&self.start, &self.orders)
    }

    /// Two-order Bangalore sample: a courier near two restaurants, each with
    /// a nearby consumer.
    pub fn sample() -> Result<Self> {
        let start = GeoPoint::new("delivery_executive", 12.935192, 77.624480)?;
        let r1 = GeoPoint::new("r1", 12.934533, 77.626579)?;
        let r2 = GeoPoint::new("r2", 12.927923, 77.627107)?;
        let c1 = GeoPoint::new("c1", 12.935800, 77.619234)?;
        let c2 = GeoPoint::new("c2", 12.929327, 77.620556)?;
        Ok(Self::new(
            start,
            vec![Order::new(r1, c1, 0.5)?, Order::new(r2, c2, 0.4)?],
        ))
    }
}
