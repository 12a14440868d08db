//! Core domain traits for the kiosk router.
//!
//! Kept minimal so callers can route their own point types and plug in
//! alternative cost sources.

use crate::matrix::DistanceMatrix;

/// A named stop on a route.
pub trait Stop {
    fn name(&self) -> &str;

    /// Location coordinates (lat, lng) in degrees.
    fn location(&self) -> (f64, f64);
}

/// Provides a symmetric distance matrix for a set of locations.
///
/// The matrix is indexed by the provided location order.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> DistanceMatrix;
}
