//! Result of a route search.

use serde::{Deserialize, Serialize};

/// Separator used when rendering a route as a single line.
pub const ROUTE_SEPARATOR: &str = " -> ";

/// The winning stop sequence and its total time.
///
/// `stops` holds point names in visiting order, starting with the courier's
/// start location.
///
/// # Examples
///
/// ```
/// use u_courier::models::BestRoute;
///
/// let route = BestRoute::new(vec!["start".into(), "r1".into(), "c1".into()], 0.5234);
/// assert_eq!(route.route_string(), "start -> r1 -> c1");
/// assert_eq!(route.to_string(), "start -> r1 -> c1 (0.52 hours)");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestRoute {
    stops: Vec<String>,
    total_time: f64,
}

impl BestRoute {
    /// Creates a route result.
    pub fn new(stops: Vec<String>, total_time: f64) -> Self {
        Self { stops, total_time }
    }

    /// Point names in visiting order, start included.
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// Total elapsed time in hours.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Number of stops after the start location.
    pub fn num_stops(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// Stop names joined by `" -> "`.
    pub fn route_string(&self) -> String {
        self.stops.join(ROUTE_SEPARATOR)
    }

    /// Splits into the `(route string, total time)` pair.
    pub fn into_parts(self) -> (String, f64) {
        let route = self.route_string();
        (route, self.total_time)
    }
}

impl std::fmt::Display for BestRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.2} hours)", self.route_string(), self.total_time)
    }
}
