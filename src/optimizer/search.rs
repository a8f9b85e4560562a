//! Minimum-time route search over all legal stop sequences.
//!
//! # Algorithm
//!
//! The legal sequences are walked depth-first (see
//! [`walk_legal_sequences`]). Each extension adds one transition to a running
//! total through [`RouteCostEvaluator::accumulate`], using a travel-time
//! matrix precomputed for the start location and every stop, so a complete
//! sequence's total equals what [`RouteCostEvaluator::total_time`] returns for
//! `[start] + sequence`. The best total is replaced only on a strictly smaller
//! value, so the first sequence in enumeration order wins ties.
//!
//! With [`SearchStrategy::BranchAndBound`] a branch is dropped as soon as its
//! running total is `>=` the best complete total. All addends are
//! non-negative, so no completion of such a branch could replace the best
//! one, and the result is identical to the exhaustive walk.
//!
//! # Limitations
//!
//! Runtime is proportional to `(2N)! / 2^N`. There is no timeout or
//! cancellation hook; a call runs to completion.

use std::collections::HashSet;

use tracing::{debug, trace, warn};

use crate::config::{OptimizerConfig, SearchStrategy, PRACTICAL_ORDER_LIMIT};
use crate::distance::TravelTimeMatrix;
use crate::enumeration::{
    legal_sequence_count, slot_points, walk_legal_sequences, SequenceVisitor, Stop,
};
use crate::error::{Result, RoutingError};
use crate::evaluation::RouteCostEvaluator;
use crate::models::{BestRoute, GeoPoint, Order};

/// Finds the minimum-time route for one courier.
///
/// # Examples
///
/// ```
/// use u_courier::models::{GeoPoint, Order};
/// use u_courier::optimizer::RouteOptimizer;
///
/// let start = GeoPoint::new("delivery_executive", 12.935192, 77.624480).unwrap();
/// let r1 = GeoPoint::new("r1", 12.934533, 77.626579).unwrap();
/// let r2 = GeoPoint::new("r2", 12.927923, 77.627107).unwrap();
/// let c1 = GeoPoint::new("c1", 12.935800, 77.619234).unwrap();
/// let c2 = GeoPoint::new("c2", 12.929327, 77.620556).unwrap();
/// let orders = vec![
///     Order::new(r1, c1, 0.5).unwrap(),
///     Order::new(r2, c2, 0.4).unwrap(),
/// ];
///
/// let best = RouteOptimizer::default().find_best_route(&start, &orders).unwrap();
/// assert_eq!(best.route_string(), "delivery_executive -> r1 -> r2 -> c2 -> c1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    config: OptimizerConfig,
}

impl RouteOptimizer {
    /// Creates an optimizer, validating the configuration.
    pub fn new(config: OptimizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Searches every legal sequence and returns the fastest.
    ///
    /// With no orders the route is the start location alone with zero time.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::DuplicatePointName`] if two points share a name
    /// - [`RoutingError::TooManyOrders`] if a configured cap is exceeded
    /// - [`RoutingError::InvalidConfiguration`] for a non-positive speed
    pub fn find_best_route(&self, start: &GeoPoint, orders: &[Order]) -> Result<BestRoute> {
        ensure_unique_names(start, orders)?;

        let n = orders.len();
        if let Some(limit) = self.config.max_orders() {
            if n > limit {
                return Err(RoutingError::TooManyOrders { orders: n, limit });
            }
        }
        if n > PRACTICAL_ORDER_LIMIT {
            warn!(
                orders = n,
                limit = PRACTICAL_ORDER_LIMIT,
                "exhaustive route search over this many orders may not finish in practical time"
            );
        }
        debug!(
            orders = n,
            sequences = ?legal_sequence_count(n),
            strategy = ?self.config.search(),
            "starting route search"
        );

        let preparation_times: Vec<f64> = orders.iter().map(Order::preparation_time).collect();
        let evaluator = RouteCostEvaluator::new(&preparation_times, self.config.speed_kmh())?;
        let times = TravelTimeMatrix::from_points(&slot_points(start, orders), evaluator.speed_kmh())?;

        let mut search = BestSequence::new(
            evaluator,
            &times,
            self.config.search() == SearchStrategy::BranchAndBound,
        );
        walk_legal_sequences(n, &mut search);

        debug!(
            evaluated = search.evaluated,
            pruned = search.pruned,
            total_time = search.best_time,
            "route search finished"
        );

        let mut stops = Vec::with_capacity(1 + 2 * n);
        stops.push(start.name().to_string());
        stops.extend(
            search
                .best
                .iter()
                .map(|stop| stop.point(orders).name().to_string()),
        );
        Ok(BestRoute::new(stops, search.best_time))
    }
}

/// Finds the best route with default settings.
///
/// Returns the `" -> "` joined route (start first) and its total time in
/// hours.
///
/// # Examples
///
/// ```
/// use u_courier::models::GeoPoint;
/// use u_courier::optimizer::find_best_route;
///
/// let start = GeoPoint::new("start", 12.935192, 77.624480).unwrap();
/// let (route, time) = find_best_route(&start, &[]).unwrap();
/// assert_eq!(route, "start");
/// assert_eq!(time, 0.0);
/// ```
pub fn find_best_route(start: &GeoPoint, orders: &[Order]) -> Result<(String, f64)> {
    Ok(RouteOptimizer::default()
        .find_best_route(start, orders)?
        .into_parts())
}

/// Rejects runs where two points share a name.
pub fn ensure_unique_names(start: &GeoPoint, orders: &[Order]) -> Result<()> {
    let mut seen = HashSet::with_capacity(1 + 2 * orders.len());
    let points = std::iter::once(start)
        .chain(orders.iter().flat_map(|o| [o.restaurant(), o.consumer()]));
    for point in points {
        if !seen.insert(point.name()) {
            return Err(RoutingError::DuplicatePointName(point.name().to_string()));
        }
    }
    Ok(())
}

/// Tracks running totals along the walk and keeps the best complete sequence.
struct BestSequence<'a> {
    evaluator: RouteCostEvaluator<'a>,
    times: &'a TravelTimeMatrix,
    prune: bool,
    /// Running total after each placed stop; `totals[0]` is the start.
    totals: Vec<f64>,
    best: Vec<Stop>,
    best_time: f64,
    evaluated: u64,
    pruned: u64,
}

impl<'a> BestSequence<'a> {
    fn new(evaluator: RouteCostEvaluator<'a>, times: &'a TravelTimeMatrix, prune: bool) -> Self {
        let mut totals = Vec::with_capacity(times.size());
        totals.push(0.0);
        Self {
            evaluator,
            times,
            prune,
            totals,
            best: Vec::new(),
            best_time: f64::INFINITY,
            evaluated: 0,
            pruned: 0,
        }
    }
}

impl SequenceVisitor for BestSequence<'_> {
    fn enter(&mut self, partial: &[Stop], stop: Stop) -> bool {
        let from = partial.last().map_or(0, Stop::slot);
        let so_far = self.totals[partial.len()];
        let total =
            self.evaluator
                .accumulate(so_far, partial.len(), self.times.get(from, stop.slot()));
        if self.prune && total >= self.best_time {
            self.pruned += 1;
            return false;
        }
        self.totals.push(total);
        true
    }

    fn leave(&mut self, _partial: &[Stop], _stop: Stop) {
        self.totals.pop();
    }

    fn complete(&mut self, sequence: &[Stop]) {
        self.evaluated += 1;
        let total = self.totals[sequence.len()];
        if total < self.best_time {
            trace!(total_time = total, evaluated = self.evaluated, "improved route");
            self.best_time = total;
            self.best.clear();
            self.best.extend_from_slice(sequence);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumeration::enumerate_routes;

    fn p(name: &str, lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(name, lat, lon).expect("valid")
    }

    fn two_orders(pt1: f64, pt2: f64) -> (GeoPoint, Vec<Order>) {
        let start = p("delivery_executive", 12.935192, 77.62448);
        let orders = vec![
            Order::new(p("r1", 12.934533, 77.626579), p("c1", 12.9358, 77.619234), pt1)
                .expect("valid"),
            Order::new(p("r2", 12.927923, 77.627107), p("c2", 12.929327, 77.620556), pt2)
                .expect("valid"),
        ];
        (start, orders)
    }

    #[test]
    fn test_empty_orders() {
        let start = p("start", 12.935192, 77.62448);
        let best = RouteOptimizer::default()
            .find_best_route(&start, &[])
            .expect("valid");
        assert_eq!(best.stops(), &["start".to_string()]);
        assert_eq!(best.total_time(), 0.0);
    }

    #[test]
    fn test_single_order() {
        let start = p("start", 12.935192, 77.62448);
        let orders = vec![
            Order::new(p("r1", 12.934533, 77.626579), p("c1", 12.9358, 77.619234), 0.5)
                .expect("valid"),
        ];
        let (route, time) = find_best_route(&start, &orders).expect("valid");
        assert_eq!(route, "start -> r1 -> c1");
        assert!(time > 0.5);
    }

    #[test]
    fn test_two_orders_reference() {
        let (start, orders) = two_orders(0.5, 0.4);
        let (route, _) = find_best_route(&start, &orders).expect("valid");
        assert_eq!(route, "delivery_executive -> r1 -> r2 -> c2 -> c1");
    }

    #[test]
    fn test_total_matches_evaluator() {
        let (start, orders) = two_orders(0.5, 0.4);
        let best = RouteOptimizer::default()
            .find_best_route(&start, &orders)
            .expect("valid");
        let prep = [0.5, 0.4];
        let eval = RouteCostEvaluator::new(&prep, 20.0).expect("valid");
        let winner = enumerate_routes(&orders)
            .find(|seq| {
                seq.iter().map(|pt| pt.name()).collect::<Vec<_>>()
                    == best.stops()[1..].iter().map(String::as_str).collect::<Vec<_>>()
            })
            .expect("winner is enumerated");
        let direct = eval.total_time(std::iter::once(&start).chain(winner));
        assert_eq!(best.total_time(), direct);
    }

    #[test]
    fn test_minimum_over_all_sequences() {
        let (start, orders) = two_orders(0.5, 0.4);
        let best = RouteOptimizer::default()
            .find_best_route(&start, &orders)
            .expect("valid");
        let prep = [0.5, 0.4];
        let eval = RouteCostEvaluator::new(&prep, 20.0).expect("valid");
        for seq in enumerate_routes(&orders) {
            let t = eval.total_time(std::iter::once(&start).chain(seq));
            assert!(best.total_time() <= t);
        }
    }

    #[test]
    fn test_branch_and_bound_agrees() {
        let (start, orders) = two_orders(0.5, 1.0);
        let exhaustive = RouteOptimizer::default()
            .find_best_route(&start, &orders)
            .expect("valid");
        let bnb = RouteOptimizer::new(
            OptimizerConfig::default().with_search(SearchStrategy::BranchAndBound),
        )
        .expect("valid config")
        .find_best_route(&start, &orders)
        .expect("valid");
        assert_eq!(exhaustive, bnb);
    }

    #[test]
    fn test_ties_keep_first_sequence() {
        // Every point at the same spot: all sequences cost the same, so the
        // first one enumerated must win.
        let start = p("s", 10.0, 10.0);
        let orders = vec![
            Order::new(p("r1", 10.0, 10.0), p("c1", 10.0, 10.0), 0.1).expect("valid"),
            Order::new(p("r2", 10.0, 10.0), p("c2", 10.0, 10.0), 0.2).expect("valid"),
        ];
        let (route, _) = find_best_route(&start, &orders).expect("valid");
        assert_eq!(route, "s -> r1 -> r2 -> c1 -> c2");

        let bnb = RouteOptimizer::new(
            OptimizerConfig::default().with_search(SearchStrategy::BranchAndBound),
        )
        .expect("valid config")
        .find_best_route(&start, &orders)
        .expect("valid");
        assert_eq!(bnb.route_string(), "s -> r1 -> r2 -> c1 -> c2");
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let start = p("r1", 12.0, 77.0);
        let orders =
            vec![Order::new(p("r1", 12.1, 77.0), p("c1", 12.2, 77.0), 0.0).expect("valid")];
        assert!(matches!(
            find_best_route(&start, &orders),
            Err(RoutingError::DuplicatePointName(name)) if name == "r1"
        ));
    }

    #[test]
    fn test_max_orders_enforced() {
        let (start, orders) = two_orders(0.5, 0.4);
        let optimizer =
            RouteOptimizer::new(OptimizerConfig::default().with_max_orders(1)).expect("valid");
        assert!(matches!(
            optimizer.find_best_route(&start, &orders),
            Err(RoutingError::TooManyOrders {
                orders: 2,
                limit: 1
            })
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(RouteOptimizer::new(OptimizerConfig::default().with_speed_kmh(-1.0)).is_err());
    }

    #[test]
    fn test_idempotent() {
        let (start, orders) = two_orders(0.5, 0.4);
        let opt = RouteOptimizer::default();
        let a = opt.find_best_route(&start, &orders).expect("valid");
        let b = opt.find_best_route(&start, &orders).expect("valid");
        assert_eq!(a, b);
    }
}
