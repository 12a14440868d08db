//! Kiosk sites for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. The first entry of each set is
//! used as the depot.

#![allow(dead_code)]

use kiosk_route::kiosk::{Kiosk, KioskSet};

/// A named kiosk site.
#[derive(Debug, Clone)]
pub struct Site {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Site {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn kiosk(&self) -> Kiosk {
        Kiosk::new(self.name, self.lat, self.lng)
    }
}

// ============================================================================
// Strip kiosks (north to south)
// ============================================================================

pub const STRIP_KIOSKS: &[Site] = &[
    Site::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Site::new("Sinatra", 36.1300035, -115.1654850),
    Site::new("Public House", 36.1219193, -115.1689317),
    Site::new("Ruth's Chris Steak House", 36.1193113, -115.1722630),
    Site::new("Brooklyn Bowl", 36.1175388, -115.1695094),
    Site::new("Caesars Palace", 36.1162, -115.1745),
    Site::new("Bellagio", 36.1126, -115.1767),
    Site::new("Gordon Ramsay BurGR", 36.1107195, -115.1720818),
    Site::new("Hard Rock Cafe", 36.1041592, -115.1722166),
    Site::new("MGM Grand", 36.1023654, -115.1688720),
    Site::new("Charlie Palmer Steak", 36.0910624, -115.1743364),
];

// ============================================================================
// Henderson / East kiosks
// ============================================================================

pub const EAST_KIOSKS: &[Site] = &[
    Site::new("Longhorn Casino", 36.1070664, -115.0591256),
    Site::new("Sunset Station Area", 36.0614, -115.0631),
    Site::new("Green Valley Ranch Area", 36.0308, -115.0825),
    Site::new("Islander's Grill", 36.0335058, -114.9856162),
    Site::new("Naga", 36.0137634, -114.9928676),
    Site::new("I Love Sushi Henderson", 35.9916660, -115.1028343),
];

pub fn kiosk_set(sites: &[Site]) -> KioskSet {
    KioskSet::new(sites.iter().map(Site::kiosk).collect())
}

/// Strip and east kiosks, depot first.
pub fn all_kiosks() -> KioskSet {
    let sites: Vec<Site> = STRIP_KIOSKS.iter().chain(EAST_KIOSKS).cloned().collect();
    kiosk_set(&sites)
}

/// Corners of a one-degree square at the equator: (0,0), (0,1), (1,1), (1,0).
pub fn unit_square() -> KioskSet {
    KioskSet::new(vec![
        Kiosk::new("SW", 0.0, 0.0),
        Kiosk::new("SE", 0.0, 1.0),
        Kiosk::new("NE", 1.0, 1.0),
        Kiosk::new("NW", 1.0, 0.0),
    ])
}
