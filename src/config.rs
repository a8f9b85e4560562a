//! Optimizer settings.

use serde::{Deserialize, Serialize};

use crate::distance::{check_speed, DEFAULT_SPEED_KMH};
use crate::error::{Result, RoutingError};

/// Order count above which exhaustive search stops being practical.
///
/// Crossing it only logs a warning; set
/// [`OptimizerConfig::with_max_orders`] to refuse such inputs instead.
pub const PRACTICAL_ORDER_LIMIT: usize = 8;

/// How the optimizer walks the legal sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Evaluate every legal sequence.
    #[default]
    Exhaustive,
    /// Abandon a branch once its partial time reaches the best complete
    /// time. Returns the same route and time as [`Exhaustive`](Self::Exhaustive).
    BranchAndBound,
}

/// Settings for [`RouteOptimizer`](crate::optimizer::RouteOptimizer).
///
/// # Examples
///
/// ```
/// use u_courier::config::{OptimizerConfig, SearchStrategy};
///
/// let cfg = OptimizerConfig::default()
///     .with_speed_kmh(25.0)
///     .with_search(SearchStrategy::BranchAndBound)
///     .with_max_orders(6);
/// assert_eq!(cfg.speed_kmh(), 25.0);
/// assert!(cfg.validate().is_ok());
///
/// let parsed: OptimizerConfig = serde_json::from_str(r#"{"search": "branch_and_bound"}"#).unwrap();
/// assert_eq!(parsed.speed_kmh(), 20.0);
/// assert_eq!(parsed.search(), SearchStrategy::BranchAndBound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    speed_kmh: f64,
    search: SearchStrategy,
    max_orders: Option<usize>,
}

impl OptimizerConfig {
    /// Sets the courier speed in km/h.
    pub fn with_speed_kmh(mut self, speed_kmh: f64) -> Self {
        self.speed_kmh = speed_kmh;
        self
    }

    /// Sets the search strategy.
    pub fn with_search(mut self, search: SearchStrategy) -> Self {
        self.search = search;
        self
    }

    /// Refuses runs with more than `limit` orders.
    pub fn with_max_orders(mut self, limit: usize) -> Self {
        self.max_orders = Some(limit);
        self
    }

    /// Courier speed in km/h.
    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    /// Search strategy.
    pub fn search(&self) -> SearchStrategy {
        self.search
    }

    /// Maximum accepted order count, if any.
    pub fn max_orders(&self) -> Option<usize> {
        self.max_orders
    }

    /// Checks the speed and order cap.
    pub fn validate(&self) -> Result<()> {
        check_speed(self.speed_kmh)?;
        if self.max_orders == Some(0) {
            return Err(RoutingError::InvalidConfiguration(
                "max_orders must be greater than zero when supplied".into(),
            ));
        }
        Ok(())
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            search: SearchStrategy::Exhaustive,
            max_orders: None,
        }
    }
}
