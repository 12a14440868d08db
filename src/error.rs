//! Error type shared by every stage of the routing pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("kiosk {name:?} has an invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate {
        name: String,
        latitude: f64,
        longitude: f64,
    },
    #[error("no unvisited node reachable from node {from}")]
    NoUnvisitedNode { from: usize },
    #[error("no kiosk named {0:?}")]
    NotFound(String),
    #[error("kiosk name {name:?} matches {count} records")]
    AmbiguousName { name: String, count: usize },
    #[error("segment [{i}, {k}] is out of bounds for a route of length {len}")]
    SegmentOutOfBounds { i: usize, k: usize, len: usize },
    #[error("route invariant violated: {0}")]
    InvariantViolation(String),
    #[error("no kiosks to route")]
    EmptyInput,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RouteError>;

impl RouteError {
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation(message.into())
    }
}
