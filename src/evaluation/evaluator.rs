//! Route time evaluation.
//!
//! # Cost model
//!
//! A route `[s0, s1, ..., sk]` starts at `s0`. For each transition
//! `s(i-1) -> s(i)` the evaluator first adds `preparation_times[i-1]` when
//! that index exists, then the travel time `distance / speed`. Preparation
//! delays are therefore keyed by transition position, not by the order that
//! owns the stop: with a start plus 2N stops and N delays, the first N
//! transitions each carry one delay and every delay is counted exactly once.

use crate::distance::{check_speed, distance};
use crate::error::Result;
use crate::models::GeoPoint;

/// One transition of an evaluated route.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    /// Name of the point being left.
    pub from: String,
    /// Name of the point being reached.
    pub to: String,
    /// Preparation delay charged on this transition (hours).
    pub preparation: f64,
    /// Travel time of this transition (hours).
    pub travel: f64,
    /// Elapsed time once `to` is reached (hours).
    pub elapsed: f64,
}

/// Computes total elapsed time for concrete stop sequences.
///
/// # Examples
///
/// ```
/// use u_courier::models::GeoPoint;
/// use u_courier::evaluation::RouteCostEvaluator;
///
/// let start = GeoPoint::new("start", 0.0, 0.0).unwrap();
/// let r = GeoPoint::new("r1", 0.0, 0.0).unwrap();
/// let c = GeoPoint::new("c1", 0.0, 1.0).unwrap();
///
/// let prep = [0.5];
/// let evaluator = RouteCostEvaluator::new(&prep, 20.0).unwrap();
/// let total = evaluator.total_time([&start, &r, &c]);
/// // 0.5 h preparation + ~111.2 km at 20 km/h
/// assert!((total - (0.5 + 111.195 / 20.0)).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteCostEvaluator<'a> {
    preparation_times: &'a [f64],
    speed_kmh: f64,
}

impl<'a> RouteCostEvaluator<'a> {
    /// Creates an evaluator for the given delays (input order) and speed.
    ///
    /// Fails with `InvalidConfiguration` for a non-positive speed.
    pub fn new(preparation_times: &'a [f64], speed_kmh: f64) -> Result<Self> {
        check_speed(speed_kmh)?;
        Ok(Self {
            preparation_times,
            speed_kmh,
        })
    }

    /// Preparation delays, positionally indexed.
    pub fn preparation_times(&self) -> &'a [f64] {
        self.preparation_times
    }

    /// Courier speed in km/h.
    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    /// Preparation delay charged on transition `step` (0-based).
    pub fn preparation_at(&self, step: usize) -> f64 {
        self.preparation_times.get(step).copied().unwrap_or(0.0)
    }

    /// Travel time between two points in hours.
    pub fn travel(&self, from: &GeoPoint, to: &GeoPoint) -> f64 {
        distance(from, to) / self.speed_kmh
    }

    /// Adds transition `step` to a running total.
    ///
    /// The delay and the travel time are added one after the other, so a
    /// total built with this method matches [`total_time`](Self::total_time)
    /// to the last bit.
    pub fn accumulate(&self, total: f64, step: usize, travel: f64) -> f64 {
        let mut total = total;
        if let Some(prep) = self.preparation_times.get(step) {
            total += prep;
        }
        total + travel
    }

    /// Total time for a full sequence, start location first.
    ///
    /// Sequences of zero or one point cost nothing.
    pub fn total_time<'p, I>(&self, full_sequence: I) -> f64
    where
        I: IntoIterator<Item = &'p GeoPoint>,
    {
        let mut points = full_sequence.into_iter();
        let Some(mut current) = points.next() else {
            return 0.0;
        };
        let mut total = 0.0;
        for (step, next) in points.enumerate() {
            total = self.accumulate(total, step, self.travel(current, next));
            current = next;
        }
        total
    }

    /// Per-transition breakdown of a full sequence.
    pub fn legs(&self, full_sequence: &[&GeoPoint]) -> Vec<Leg> {
        let mut elapsed = 0.0;
        full_sequence
            .windows(2)
            .enumerate()
            .map(|(step, pair)| {
                let travel = self.travel(pair[0], pair[1]);
                elapsed = self.accumulate(elapsed, step, travel);
                Leg {
                    from: pair[0].name().to_string(),
                    to: pair[1].name().to_string(),
                    preparation: self.preparation_at(step),
                    travel,
                    elapsed,
                }
            })
            .collect()
    }
}

/// Total time for `full_sequence` with the given delays and speed.
///
/// Convenience wrapper over [`RouteCostEvaluator`].
pub fn total_time(
    full_sequence: &[&GeoPoint],
    preparation_times: &[f64],
    speed_kmh: f64,
) -> Result<f64> {
    let evaluator = RouteCostEvaluator::new(preparation_times, speed_kmh)?;
    Ok(evaluator.total_time(full_sequence.iter().copied()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{travel_time, DEFAULT_SPEED_KMH};
    use crate::error::RoutingError;

    fn p(name: &str, lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(name, lat, lon).expect("valid")
    }

    fn sample() -> (GeoPoint, GeoPoint, GeoPoint, GeoPoint, GeoPoint) {
        (
            p("delivery_executive", 12.935192, 77.62448),
            p("r1", 12.934533, 77.626579),
            p("r2", 12.927923, 77.627107),
            p("c1", 12.9358, 77.619234),
            p("c2", 12.929327, 77.620556),
        )
    }

    #[test]
    fn test_empty_and_single() {
        let eval = RouteCostEvaluator::new(&[0.5], DEFAULT_SPEED_KMH).expect("valid");
        assert_eq!(eval.total_time(std::iter::empty()), 0.0);
        let (s, ..) = sample();
        assert_eq!(eval.total_time([&s]), 0.0);
    }

    #[test]
    fn test_single_order_total() {
        let (s, r1, _, c1, _) = sample();
        let prep = [0.5];
        let eval = RouteCostEvaluator::new(&prep, DEFAULT_SPEED_KMH).expect("valid");
        let total = eval.total_time([&s, &r1, &c1]);
        let expected = 0.5
            + travel_time(distance(&s, &r1), 20.0).expect("valid")
            + travel_time(distance(&r1, &c1), 20.0).expect("valid");
        assert!((total - expected).abs() < 1e-12);
    }

    #[test]
    fn test_preparation_is_positional() {
        // Delays go on the first N transitions whichever order owns the stop.
        let (s, r1, r2, c1, c2) = sample();
        let prep = [0.5, 0.4];
        let eval = RouteCostEvaluator::new(&prep, DEFAULT_SPEED_KMH).expect("valid");
        let legs = eval.legs(&[&s, &r2, &c2, &r1, &c1]);
        let charged: Vec<f64> = legs.iter().map(|l| l.preparation).collect();
        assert_eq!(charged, vec![0.5, 0.4, 0.0, 0.0]);
    }

    #[test]
    fn test_every_delay_counted_once() {
        let (s, r1, r2, c1, c2) = sample();
        let prep = [0.5, 0.4];
        let eval = RouteCostEvaluator::new(&prep, DEFAULT_SPEED_KMH).expect("valid");
        let no_prep = RouteCostEvaluator::new(&[], DEFAULT_SPEED_KMH).expect("valid");
        let route = [&s, &r1, &r2, &c2, &c1];
        let diff = eval.total_time(route) - no_prep.total_time(route);
        assert!((diff - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_short_sequence_drops_extra_delays() {
        let (s, r1, ..) = sample();
        let eval = RouteCostEvaluator::new(&[0.5, 0.4, 0.3], DEFAULT_SPEED_KMH).expect("valid");
        let total = eval.total_time([&s, &r1]);
        assert!((total - (0.5 + eval.travel(&s, &r1))).abs() < 1e-12);
    }

    #[test]
    fn test_legs_elapsed_matches_total() {
        let (s, r1, r2, c1, c2) = sample();
        let prep = [0.5, 0.4];
        let eval = RouteCostEvaluator::new(&prep, DEFAULT_SPEED_KMH).expect("valid");
        let route = [&s, &r1, &r2, &c2, &c1];
        let legs = eval.legs(&route);
        assert_eq!(legs.len(), 4);
        assert_eq!(legs[0].from, "delivery_executive");
        assert_eq!(legs[3].to, "c1");
        assert_eq!(
            legs.last().expect("non-empty").elapsed,
            eval.total_time(route)
        );
    }

    #[test]
    fn test_invalid_speed() {
        assert!(matches!(
            RouteCostEvaluator::new(&[], 0.0),
            Err(RoutingError::InvalidConfiguration(_))
        ));
        let (s, r1, ..) = sample();
        assert!(total_time(&[&s, &r1], &[], -5.0).is_err());
    }

    #[test]
    fn test_free_function_matches_evaluator() {
        let (s, r1, _, c1, _) = sample();
        let prep = [0.25];
        let eval = RouteCostEvaluator::new(&prep, 30.0).expect("valid");
        let via_fn = total_time(&[&s, &r1, &c1], &prep, 30.0).expect("valid");
        assert_eq!(via_fn, eval.total_time([&s, &r1, &c1]));
    }
}
