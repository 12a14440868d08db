//! Dense distance matrix.

use tracing::info;

use crate::Result;
use crate::haversine::HaversineMatrix;
use crate::kiosk::KioskSet;
use crate::solver::RouteOptions;
use crate::traits::DistanceMatrixProvider;

/// Square table of pairwise distances, indexed by point position.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// An n×n matrix of zeros.
    pub fn zeros(n: usize) -> Self {
        Self {
            rows: vec![vec![0.0; n]; n],
        }
    }

    /// Wraps explicit rows. Returns `None` unless every row has one entry per row.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let n = rows.len();
        if rows.iter().any(|row| row.len() != n) {
            return None;
        }
        Some(Self { rows })
    }

    /// Distance from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.rows[from][to]
    }

    pub(crate) fn set_symmetric(&mut self, i: usize, j: usize, distance: f64) {
        self.rows[i][j] = distance;
        self.rows[j][i] = distance;
    }

    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        let n = self.len();
        (0..n).all(|i| (i + 1..n).all(|j| (self.rows[i][j] - self.rows[j][i]).abs() <= tolerance))
    }
}

/// Builds the great-circle matrix for a kiosk set.
///
/// Coordinates are validated first when `options.validate_coordinates` is set.
pub fn build_distance_matrix(kiosks: &KioskSet, options: &RouteOptions) -> Result<DistanceMatrix> {
    if options.validate_coordinates {
        kiosks.validate()?;
    }

    let provider = HaversineMatrix::new(options.earth_radius_km);
    let matrix = provider.matrix_for(&kiosks.locations());
    info!(points = matrix.len(), "built distance matrix");

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RouteError;
    use crate::kiosk::Kiosk;

    fn square() -> KioskSet {
        KioskSet::new(vec![
            Kiosk::new("a", 0.0, 0.0),
            Kiosk::new("b", 0.0, 1.0),
            Kiosk::new("c", 1.0, 1.0),
            Kiosk::new("d", 1.0, 0.0),
        ])
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).is_none());
        assert!(DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).is_some());
    }

    #[test]
    fn test_is_symmetric_detects_asymmetry() {
        let matrix = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 0.0]]).unwrap();
        assert!(!matrix.is_symmetric(1e-9));
        assert!(matrix.is_symmetric(1.0));
    }

    #[test]
    fn test_build_symmetric_zero_diagonal() {
        let matrix = build_distance_matrix(&square(), &RouteOptions::default()).unwrap();

        assert_eq!(matrix.len(), 4);
        assert!(matrix.is_symmetric(1e-9));
        for i in 0..matrix.len() {
            assert_eq!(matrix.get(i, i), 0.0);
            for j in 0..matrix.len() {
                assert!(matrix.get(i, j) >= 0.0);
            }
        }
    }

    #[test]
    fn test_build_rejects_out_of_range_coordinate() {
        let kiosks = KioskSet::new(vec![Kiosk::new("a", 0.0, 0.0), Kiosk::new("bad", 91.0, 0.0)]);
        let err = build_distance_matrix(&kiosks, &RouteOptions::default()).unwrap_err();
        assert!(matches!(err, RouteError::InvalidCoordinate { ref name, .. } if name == "bad"));
    }

    #[test]
    fn test_build_skips_validation_when_disabled() {
        let kiosks = KioskSet::new(vec![Kiosk::new("a", 0.0, 0.0), Kiosk::new("bad", 91.0, 0.0)]);
        let options = RouteOptions {
            validate_coordinates: false,
            ..RouteOptions::default()
        };
        let matrix = build_distance_matrix(&kiosks, &options).unwrap();
        assert_eq!(matrix.len(), 2);
    }

    #[test]
    fn test_radius_from_options() {
        let options = RouteOptions {
            earth_radius_km: 1.0,
            ..RouteOptions::default()
        };
        let matrix = build_distance_matrix(&square(), &options).unwrap();
        assert!((matrix.get(0, 3) - 1.0_f64.to_radians()).abs() < 1e-12);
    }
}
