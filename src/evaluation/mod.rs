//! Route time evaluation.

mod evaluator;

pub use evaluator::{total_time, Leg, RouteCostEvaluator};
