//! # u-courier
//!
//! Exact minimum-time routing for a single courier serving a batch of
//! pickup-and-delivery orders. Every order's pickup must come before its
//! drop-off; the route cost is haversine travel time plus preparation delay.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (GeoPoint, Order, BestRoute)
//! - [`distance`] — Haversine distance, travel time, travel-time matrix
//! - [`enumeration`] — Pickup-before-drop-off sequence enumeration
//! - [`evaluation`] — Route time evaluation
//! - [`optimizer`] — Exhaustive and branch-and-bound route search
//! - [`config`] — Optimizer settings
//! - [`instance`] — JSON-loadable delivery instances
//! - [`generate`] — Reproducible random instances
//!
//! ## Scaling
//!
//! N orders admit `(2N)! / 2^N` legal sequences. The search is exact and
//! exhaustive, so it is meant for a handful of concurrent orders.

pub mod config;
pub mod distance;
pub mod enumeration;
pub mod error;
pub mod evaluation;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod generate;
pub mod instance;
pub mod models;
pub mod optimizer;

pub use error::{Result, RoutingError};
