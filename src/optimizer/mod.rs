//! Exact route search.
//!
//! - [`RouteOptimizer`] — Configured search returning a [`BestRoute`](crate::models::BestRoute)
//! - [`find_best_route`] — Default-configured search returning `(route, hours)`

mod search;

pub use search::{ensure_unique_names, find_best_route, RouteOptimizer};
