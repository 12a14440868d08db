//! Closed tours over matrix indices.

use crate::matrix::DistanceMatrix;
use crate::{Result, RouteError};

/// Sum of consecutive edge costs along `route`.
///
/// The loop is not closed here; include the return-to-start index in the
/// sequence to count the closing edge.
pub fn calculate_distance(route: &[usize], matrix: &DistanceMatrix) -> f64 {
    route
        .windows(2)
        .map(|edge| matrix.get(edge[0], edge[1]))
        .sum()
}

/// An ordered visiting sequence of point indices.
///
/// Operations that change the order return a new `Route`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stops: Vec<usize>,
}

impl Route {
    pub fn new(stops: Vec<usize>) -> Self {
        Self { stops }
    }

    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    pub fn into_stops(self) -> Vec<usize> {
        self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn cost(&self, matrix: &DistanceMatrix) -> f64 {
        calculate_distance(&self.stops, matrix)
    }

    /// True when the route starts and ends at the same stop.
    pub fn is_closed(&self) -> bool {
        match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => self.stops.len() > 1 && first == last,
            _ => false,
        }
    }

    /// True when the route is closed and visits each of `0..n` exactly once
    /// before returning to the start.
    pub fn is_tour_of(&self, n: usize) -> bool {
        if !self.is_closed() || self.stops.len() != n + 1 {
            return false;
        }
        let mut seen = vec![false; n];
        for &stop in &self.stops[..n] {
            if stop >= n || seen[stop] {
                return false;
            }
            seen[stop] = true;
        }
        true
    }

    /// Reverses the stops in positions `i..=k`, leaving the prefix and suffix
    /// untouched.
    ///
    /// Requires `i < len - 1` and `i < k < len`.
    pub fn reverse_segment(&self, i: usize, k: usize) -> Result<Route> {
        let len = self.stops.len();
        if len < 2 || i >= len - 1 || k <= i || k >= len {
            return Err(RouteError::SegmentOutOfBounds { i, k, len });
        }

        let mut stops = Vec::with_capacity(len);
        stops.extend_from_slice(&self.stops[..i]);
        stops.extend(self.stops[i..=k].iter().rev());
        stops.extend_from_slice(&self.stops[k + 1..]);

        if stops.len() != len {
            return Err(RouteError::invariant(format!(
                "reversing [{i}, {k}] changed route length from {len} to {}",
                stops.len()
            )));
        }

        Ok(Route { stops })
    }

    /// Fails unless every stop indexes into a matrix of `n` points.
    pub(crate) fn check_bounds(&self, n: usize) -> Result<()> {
        match self.stops.iter().find(|&&stop| stop >= n) {
            Some(stop) => Err(RouteError::invariant(format!(
                "stop {stop} is outside a matrix of {n} points"
            ))),
            None => Ok(()),
        }
    }
}

impl From<Vec<usize>> for Route {
    fn from(stops: Vec<usize>) -> Self {
        Self::new(stops)
    }
}
