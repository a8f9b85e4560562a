//! Stop addressing independent of coordinates.

use crate::models::{GeoPoint, Order};

/// Whether a stop collects or delivers an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopKind {
    /// Collect the order at its restaurant.
    Pickup,
    /// Hand the order over at its consumer.
    Dropoff,
}

/// One visit in a stop sequence, identified by the owning order's index.
///
/// # Examples
///
/// ```
/// use u_courier::enumeration::{Stop, StopKind};
///
/// let s = Stop::dropoff(1);
/// assert_eq!(s.order, 1);
/// assert_eq!(s.kind, StopKind::Dropoff);
/// // Slot 0 is the start location; order i owns slots 2i+1 and 2i+2.
/// assert_eq!(s.slot(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stop {
    /// Index of the owning order in the input list.
    pub order: usize,
    /// Pickup or drop-off.
    pub kind: StopKind,
}

impl Stop {
    /// Pickup of order `order`.
    pub fn pickup(order: usize) -> Self {
        Self {
            order,
            kind: StopKind::Pickup,
        }
    }

    /// Drop-off of order `order`.
    pub fn dropoff(order: usize) -> Self {
        Self {
            order,
            kind: StopKind::Dropoff,
        }
    }

    /// Returns `true` for a pickup stop.
    pub fn is_pickup(&self) -> bool {
        self.kind == StopKind::Pickup
    }

    /// Location of this stop.
    ///
    /// # Panics
    ///
    /// Panics if `self.order` is out of bounds for `orders`.
    pub fn point<'a>(&self, orders: &'a [Order]) -> &'a GeoPoint {
        let order = &orders[self.order];
        match self.kind {
            StopKind::Pickup => order.restaurant(),
            StopKind::Dropoff => order.consumer(),
        }
    }

    /// Index of this stop in a point list laid out as
    /// `[start, pickup 0, dropoff 0, pickup 1, dropoff 1, ...]`.
    pub fn slot(&self) -> usize {
        match self.kind {
            StopKind::Pickup => 2 * self.order + 1,
            StopKind::Dropoff => 2 * self.order + 2,
        }
    }
}

/// Lays out `[start, pickup 0, dropoff 0, ...]` to match [`Stop::slot`].
pub fn slot_points<'a>(start: &'a GeoPoint, orders: &'a [Order]) -> Vec<&'a GeoPoint> {
    let mut points = Vec::with_capacity(1 + 2 * orders.len());
    points.push(start);
    for order in orders {
        points.push(order.restaurant());
        points.push(order.consumer());
    }
    points
}
