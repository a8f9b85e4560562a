//! Precedence-constrained stop sequence enumeration.
//!
//! # Algorithm
//!
//! Depth-first backtracking over a single partial sequence. At each depth the
//! candidates are tried in a fixed order: every pickup not yet placed (input
//! order), then every drop-off whose pickup is already placed and which is
//! not yet placed itself (input order). A candidate is appended, the search
//! descends, and the placement is undone on the way back. Illegal orderings
//! are never built, so no post-hoc filtering is needed.
//!
//! # Complexity
//!
//! For N orders there are `(2N)! / 2^N` legal sequences: 1, 6, 90, 2520,
//! 113400, 7484400 for N = 1..=6, and about 8.2e10 at N = 8. Exhaustive
//! search is only practical for a handful of concurrent orders.

use super::Stop;
use crate::models::{GeoPoint, Order};

/// Number of legal sequences for `order_count` orders, `(2N)! / 2^N`.
///
/// Computed as the product of `k * (2k - 1)` for `k = 1..=N`. Returns `None`
/// on overflow.
///
/// # Examples
///
/// ```
/// use u_courier::enumeration::legal_sequence_count;
///
/// assert_eq!(legal_sequence_count(0), Some(1));
/// assert_eq!(legal_sequence_count(2), Some(6));
/// assert_eq!(legal_sequence_count(3), Some(90));
/// ```
pub fn legal_sequence_count(order_count: usize) -> Option<u128> {
    (1..=order_count as u128).try_fold(1u128, |acc, k| acc.checked_mul(k * (2 * k - 1)))
}

/// Callbacks driven by [`walk_legal_sequences`].
pub trait SequenceVisitor {
    /// Called before `stop` is appended to `partial`.
    ///
    /// Returning `false` skips `stop` and everything below it.
    fn enter(&mut self, partial: &[Stop], stop: Stop) -> bool;

    /// Called after the subtree under `stop` is exhausted and `stop` has been
    /// removed again; `partial` is the sequence as it was before `enter`.
    fn leave(&mut self, partial: &[Stop], stop: Stop);

    /// Called for each complete legal sequence.
    fn complete(&mut self, sequence: &[Stop]);
}

/// Partial sequence plus the placed pickup/drop-off marks.
#[derive(Debug, Clone)]
struct SearchState {
    order_count: usize,
    sequence: Vec<Stop>,
    picked: Vec<bool>,
    delivered: Vec<bool>,
}

impl SearchState {
    fn new(order_count: usize) -> Self {
        Self {
            order_count,
            sequence: Vec::with_capacity(2 * order_count),
            picked: vec![false; order_count],
            delivered: vec![false; order_count],
        }
    }

    fn target_len(&self) -> usize {
        2 * self.order_count
    }

    fn is_complete(&self) -> bool {
        self.sequence.len() == self.target_len()
    }

    /// Candidate `c` in branching order: pickups first, then drop-offs.
    fn candidate(&self, c: usize) -> Stop {
        if c < self.order_count {
            Stop::pickup(c)
        } else {
            Stop::dropoff(c - self.order_count)
        }
    }

    fn is_legal(&self, stop: Stop) -> bool {
        if stop.is_pickup() {
            !self.picked[stop.order]
        } else {
            self.picked[stop.order] && !self.delivered[stop.order]
        }
    }

    fn place(&mut self, stop: Stop) {
        if stop.is_pickup() {
            self.picked[stop.order] = true;
        } else {
            self.delivered[stop.order] = true;
        }
        self.sequence.push(stop);
    }

    fn undo(&mut self) -> Option<Stop> {
        let stop = self.sequence.pop()?;
        if stop.is_pickup() {
            self.picked[stop.order] = false;
        } else {
            self.delivered[stop.order] = false;
        }
        Some(stop)
    }

    fn extend<V: SequenceVisitor>(&mut self, visitor: &mut V) {
        if self.is_complete() {
            visitor.complete(&self.sequence);
            return;
        }
        for c in 0..self.target_len() {
            let stop = self.candidate(c);
            if !self.is_legal(stop) || !visitor.enter(&self.sequence, stop) {
                continue;
            }
            self.place(stop);
            self.extend(visitor);
            self.undo();
            visitor.leave(&self.sequence, stop);
        }
    }
}

/// Drives `visitor` over every legal sequence for `order_count` orders.
///
/// Sequences are reported in the same order [`LegalSequences`] yields them.
/// Zero orders report a single empty sequence.
///
/// # Examples
///
/// ```
/// use u_courier::enumeration::{walk_legal_sequences, SequenceVisitor, Stop};
///
/// struct Count(usize);
/// impl SequenceVisitor for Count {
///     fn enter(&mut self, _: &[Stop], _: Stop) -> bool { true }
///     fn leave(&mut self, _: &[Stop], _: Stop) {}
///     fn complete(&mut self, _: &[Stop]) { self.0 += 1; }
/// }
///
/// let mut count = Count(0);
/// walk_legal_sequences(3, &mut count);
/// assert_eq!(count.0, 90);
/// ```
pub fn walk_legal_sequences<V: SequenceVisitor>(order_count: usize, visitor: &mut V) {
    SearchState::new(order_count).extend(visitor);
}

/// Lazy iterator over every legal stop sequence.
///
/// Uses an explicit cursor stack in place of recursion so each sequence is
/// produced on demand.
///
/// # Examples
///
/// ```
/// use u_courier::enumeration::{LegalSequences, Stop};
///
/// let seqs: Vec<Vec<Stop>> = LegalSequences::new(1).collect();
/// assert_eq!(seqs, vec![vec![Stop::pickup(0), Stop::dropoff(0)]]);
/// assert_eq!(LegalSequences::new(2).count(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct LegalSequences {
    state: SearchState,
    /// Next candidate index to try at each depth.
    cursors: Vec<usize>,
    exhausted: bool,
}

impl LegalSequences {
    /// Enumerates sequences for `order_count` orders.
    pub fn new(order_count: usize) -> Self {
        Self {
            state: SearchState::new(order_count),
            cursors: Vec::with_capacity(2 * order_count),
            exhausted: false,
        }
    }
}

impl Iterator for LegalSequences {
    type Item = Vec<Stop>;

    fn next(&mut self) -> Option<Vec<Stop>> {
        if self.exhausted {
            return None;
        }
        if self.state.target_len() == 0 {
            self.exhausted = true;
            return Some(Vec::new());
        }

        loop {
            if self.state.is_complete() {
                let out = self.state.sequence.clone();
                self.state.undo();
                return Some(out);
            }

            let depth = self.state.sequence.len();
            if self.cursors.len() == depth {
                self.cursors.push(0);
            }

            let from = self.cursors[depth];
            let next = (from..self.state.target_len())
                .find(|&c| self.state.is_legal(self.state.candidate(c)));

            match next {
                Some(c) => {
                    self.cursors[depth] = c + 1;
                    let stop = self.state.candidate(c);
                    self.state.place(stop);
                }
                None => {
                    self.cursors.pop();
                    if self.state.undo().is_none() {
                        self.exhausted = true;
                        return None;
                    }
                }
            }
        }
    }
}

/// Every legal visiting order over the pickups and drop-offs of `orders`,
/// as point references. The start location is not included.
///
/// # Examples
///
/// ```
/// use u_courier::models::{GeoPoint, Order};
/// use u_courier::enumeration::enumerate_routes;
///
/// let r = GeoPoint::new("r1", 12.93, 77.62).unwrap();
/// let c = GeoPoint::new("c1", 12.94, 77.61).unwrap();
/// let orders = vec![Order::new(r, c, 0.5).unwrap()];
///
/// let routes: Vec<Vec<&GeoPoint>> = enumerate_routes(&orders).collect();
/// assert_eq!(routes.len(), 1);
/// assert_eq!(routes[0][0].name(), "r1");
/// assert_eq!(routes[0][1].name(), "c1");
/// ```
pub fn enumerate_routes(orders: &[Order]) -> impl Iterator<Item = Vec<&GeoPoint>> + '_ {
    LegalSequences::new(orders.len())
        .map(move |seq| seq.iter().map(|stop| stop.point(orders)).collect())
}
