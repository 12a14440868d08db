//! kiosk-route core
//!
//! Great-circle routing over a fixed set of kiosks: distance matrix,
//! nearest-neighbor construction and 2-opt improvement.

pub mod error;
pub mod traits;
pub mod haversine;
pub mod matrix;
pub mod route;
pub mod kiosk;
pub mod solver;
pub mod itinerary;

pub use error::{Result, RouteError};
