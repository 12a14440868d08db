//! Haversine distance matrix provider.
//!
//! Uses great-circle distance between kiosks as the routing cost.

use crate::matrix::DistanceMatrix;
use crate::traits::DistanceMatrixProvider;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two (lat, lng) points in degrees.
///
/// The result is in the unit of `radius`. Inputs are not validated; a
/// non-finite coordinate yields NaN.
pub fn haversine(from: (f64, f64), to: (f64, f64), radius: f64) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    radius * c
}

/// Great-circle distance in kilometers.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    haversine(from, to, EARTH_RADIUS_KM)
}

/// Haversine-based distance matrix provider.
#[derive(Debug, Clone)]
pub struct HaversineMatrix {
    /// Sphere radius; its unit is the unit of every matrix entry.
    pub radius: f64,
}

impl Default for HaversineMatrix {
    fn default() -> Self {
        Self {
            radius: EARTH_RADIUS_KM,
        }
    }
}

impl HaversineMatrix {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> DistanceMatrix {
        let n = locations.len();
        let mut matrix = DistanceMatrix::zeros(n);

        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate().skip(i + 1) {
                matrix.set_symmetric(i, j, haversine(*from, *to, self.radius));
            }
        }

        matrix
    }
}
