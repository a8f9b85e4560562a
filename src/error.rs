//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors raised while building inputs or running a route search.
///
/// # Examples
///
/// ```
/// use u_courier::models::GeoPoint;
/// use u_courier::RoutingError;
///
/// let err = GeoPoint::new("pole", 91.0, 0.0).unwrap_err();
/// assert!(matches!(err, RoutingError::InvalidCoordinate { .. }));
/// ```
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Latitude outside [-90, 90], longitude outside [-180, 180], or a
    /// non-finite component.
    #[error("invalid coordinate for `{name}`: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate {
        /// Name of the offending point.
        name: String,
        /// Latitude in degrees as supplied.
        latitude: f64,
        /// Longitude in degrees as supplied.
        longitude: f64,
    },

    /// A preparation delay that is negative or not finite.
    #[error("preparation time must be a finite, non-negative number of hours, got {value}")]
    InvalidPreparationTime {
        /// The rejected delay in hours.
        value: f64,
    },

    /// Optimizer settings that cannot produce a meaningful result.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Two points in one run share a name, so the rendered route would be
    /// ambiguous.
    #[error("point name `{0}` is used by more than one location")]
    DuplicatePointName(String),

    /// The configured order cap was exceeded.
    #[error("{orders} orders exceed the configured exhaustive search limit of {limit}")]
    TooManyOrders {
        /// Number of orders supplied.
        orders: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// A delivery instance could not be parsed.
    #[error("malformed delivery instance: {0}")]
    Instance(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RoutingError>;
