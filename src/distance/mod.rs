//! Distance and travel time.
//!
//! Provides the haversine distance model and a dense travel-time matrix
//! built from it for the points of one search.

mod haversine;
mod matrix;

pub(crate) use haversine::check_speed;
pub use haversine::{distance, travel_time, DEFAULT_SPEED_KMH, EARTH_RADIUS_KM};
pub use matrix::TravelTimeMatrix;
