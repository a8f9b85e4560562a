//! Dense travel-time matrix over the points of one search.

use super::{distance, travel_time};
use crate::error::Result;
use crate::models::GeoPoint;

/// A dense n×n travel-time matrix (hours) stored in row-major order.
///
/// Each entry is `travel_time(distance(from, to), speed)`, so a lookup gives
/// bit-for-bit the value the on-the-fly computation would give. Both
/// directions are computed rather than mirrored.
///
/// # Examples
///
/// ```
/// use u_courier::models::GeoPoint;
/// use u_courier::distance::TravelTimeMatrix;
///
/// let a = GeoPoint::new("a", 0.0, 0.0).unwrap();
/// let b = GeoPoint::new("b", 0.0, 1.0).unwrap();
/// let tm = TravelTimeMatrix::from_points(&[&a, &b], 20.0).unwrap();
/// assert_eq!(tm.size(), 2);
/// assert_eq!(tm.get(0, 0), 0.0);
/// assert!((tm.get(0, 1) - 111.195 / 20.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct TravelTimeMatrix {
    data: Vec<f64>,
    size: usize,
}

impl TravelTimeMatrix {
    /// Creates a matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes travel times between every ordered pair of `points`.
    ///
    /// Fails if `speed_kmh` is not a finite positive number.
    pub fn from_points(points: &[&GeoPoint], speed_kmh: f64) -> Result<Self> {
        let n = points.len();
        let mut tm = Self::new(n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    tm.set(i, j, travel_time(distance(points[i], points[j]), speed_kmh)?);
                }
            }
        }
        Ok(tm)
    }

    /// Returns the travel time from slot `from` to slot `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the travel time from slot `from` to slot `to`.
    pub fn set(&mut self, from: usize, to: usize, hours: f64) {
        self.data[from * self.size + to] = hours;
    }

    /// Number of points in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new("start", 12.935192, 77.62448).expect("valid"),
            GeoPoint::new("r1", 12.934533, 77.626579).expect("valid"),
            GeoPoint::new("c1", 12.9358, 77.619234).expect("valid"),
        ]
    }

    #[test]
    fn test_from_points_matches_direct_computation() {
        let pts = sample_points();
        let refs: Vec<&GeoPoint> = pts.iter().collect();
        let tm = TravelTimeMatrix::from_points(&refs, 20.0).expect("valid speed");
        assert_eq!(tm.size(), 3);
        for i in 0..3 {
            assert_eq!(tm.get(i, i), 0.0);
            for j in 0..3 {
                if i != j {
                    let direct = travel_time(distance(&pts[i], &pts[j]), 20.0).expect("valid");
                    assert_eq!(tm.get(i, j), direct);
                }
            }
        }
    }

    #[test]
    fn test_symmetric() {
        let pts = sample_points();
        let refs: Vec<&GeoPoint> = pts.iter().collect();
        let tm = TravelTimeMatrix::from_points(&refs, 20.0).expect("valid speed");
        assert!(tm.is_symmetric(1e-12));
    }

    #[test]
    fn test_invalid_speed() {
        let pts = sample_points();
        let refs: Vec<&GeoPoint> = pts.iter().collect();
        assert!(TravelTimeMatrix::from_points(&refs, 0.0).is_err());
    }

    #[test]
    fn test_set_get() {
        let mut tm = TravelTimeMatrix::new(2);
        tm.set(0, 1, 0.75);
        assert_eq!(tm.get(0, 1), 0.75);
        assert_eq!(tm.get(1, 0), 0.0);
        assert!(!tm.is_symmetric(1e-10));
    }

    #[test]
    fn test_empty() {
        let tm = TravelTimeMatrix::from_points(&[], 20.0).expect("valid speed");
        assert_eq!(tm.size(), 0);
    }
}
