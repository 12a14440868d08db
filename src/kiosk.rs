//! Kiosk records and name lookup.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::traits::Stop;
use crate::{Result, RouteError};

/// A named kiosk location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kiosk {
    pub name: String,
    /// Latitude in decimal degrees.
    #[serde(alias = "latitude (N)")]
    pub latitude: f64,
    /// Longitude in decimal degrees.
    #[serde(alias = "longitude (N)")]
    pub longitude: f64,
}

impl Kiosk {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Fails unless latitude is in [-90, 90] and longitude in [-180, 180].
    pub fn validate(&self) -> Result<()> {
        let lat_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        let lng_ok = self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);
        if lat_ok && lng_ok {
            Ok(())
        } else {
            Err(RouteError::InvalidCoordinate {
                name: self.name.clone(),
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

impl Stop for Kiosk {
    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// The ordered kiosk table. A kiosk's position is its matrix index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KioskSet {
    kiosks: Vec<Kiosk>,
}

impl KioskSet {
    pub fn new(kiosks: Vec<Kiosk>) -> Self {
        Self { kiosks }
    }

    /// Reads a JSON array of kiosk records.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let set: Self = serde_json::from_reader(reader)?;
        debug!(kiosks = set.len(), "loaded kiosk table");
        Ok(set)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let set: Self = serde_json::from_str(json)?;
        debug!(kiosks = set.len(), "loaded kiosk table");
        Ok(set)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn kiosks(&self) -> &[Kiosk] {
        &self.kiosks
    }

    pub fn get(&self, index: usize) -> Option<&Kiosk> {
        self.kiosks.get(index)
    }

    pub fn len(&self) -> usize {
        self.kiosks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kiosks.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.kiosks.iter().map(Stop::name).collect()
    }

    pub fn locations(&self) -> Vec<(f64, f64)> {
        self.kiosks.iter().map(Stop::location).collect()
    }

    /// Coordinate of the single kiosk called `name`.
    pub fn lookup(&self, name: &str) -> Result<(f64, f64)> {
        let mut matches = self.kiosks.iter().filter(|kiosk| kiosk.name == name);
        let Some(first) = matches.next() else {
            return Err(RouteError::NotFound(name.to_string()));
        };

        let extra = matches.count();
        if extra > 0 {
            return Err(RouteError::AmbiguousName {
                name: name.to_string(),
                count: extra + 1,
            });
        }

        Ok(first.location())
    }

    /// Validates every kiosk's coordinate.
    pub fn validate(&self) -> Result<()> {
        self.kiosks.iter().try_for_each(Kiosk::validate)
    }
}

impl From<Vec<Kiosk>> for KioskSet {
    fn from(kiosks: Vec<Kiosk>) -> Self {
        Self::new(kiosks)
    }
}
