//! Human-readable rendering of a route.
//!
//! Stops are resolved to kiosk names when the itinerary is built, so
//! formatting never fails.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::route::Route;
use crate::{Result, RouteError};

/// A route with its stops resolved to names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    stops: Vec<String>,
    total_distance: f64,
    unit: String,
}

impl Itinerary {
    /// Resolves each stop of `route` against `names`.
    pub fn new<S: AsRef<str>>(route: &Route, total_distance: f64, names: &[S]) -> Result<Self> {
        let stops = route
            .stops()
            .iter()
            .map(|&stop| {
                names
                    .get(stop)
                    .map(|name| name.as_ref().to_string())
                    .ok_or_else(|| RouteError::invariant(format!("stop {stop} has no kiosk name")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            stops,
            total_distance,
            unit: "km".to_string(),
        })
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The route to be followed:")?;
        write!(f, "Route")?;
        for stop in &self.stops {
            write!(f, " -> {stop}")?;
        }
        writeln!(f)?;
        write!(f, "Total Distance = {:.3} {}", self.total_distance, self.unit)
    }
}
