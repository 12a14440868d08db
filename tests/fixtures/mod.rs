//! Test fixtures for kiosk-route.
//!
//! Provides realistic kiosk sites around the Las Vegas Strip and Henderson
//! (coordinates from OpenStreetMap) plus small synthetic layouts.

pub mod kiosk_locations;

pub use kiosk_locations::*;
