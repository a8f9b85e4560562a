//! Domain model types for courier routing.
//!
//! Provides the value types a search works on: named geographic points,
//! orders binding a pickup to a drop-off, and the route a search returns.

mod geo_point;
mod order;
mod route;

pub use geo_point::GeoPoint;
pub use order::Order;
pub use route::{BestRoute, ROUTE_SEPARATOR};
