//! Geografische Grundtypen: Punkt (Lat/Lon), Bounding-Box und Großkreis-Distanz.

use serde::{Deserialize, Serialize};

/// Mittlerer Erdradius in Metern (identisch mit dem Radius der Leaflet-Distanz).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geografischer Punkt in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lon: f64,
}

impl GeoPoint {
    /// Erstellt einen neuen Punkt.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Großkreis-Distanz (Haversine) zu einem anderen Punkt in Metern.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let d_phi = (other.lat - self.lat).to_radians();
        let d_lambda = (other.lon - self.lon).to_radians();

        let a = (d_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }
}

/// Summiert die Großkreis-Distanzen aufeinanderfolgender Punkte.
///
/// Weniger als zwei Punkte ergeben 0.0.
pub fn path_length(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .sum()
}

/// Achsenparallele Bounding-Box, immer normalisiert (SW <= NE komponentenweise).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    /// Süd-West-Ecke (minimale Lat/Lon)
    pub south_west: GeoPoint,
    /// Nord-Ost-Ecke (maximale Lat/Lon)
    pub north_east: GeoPoint,
}

impl GeoBounds {
    /// Baut eine normalisierte Box aus zwei beliebigen Ecken.
    ///
    /// Die Reihenfolge der Ecken spielt keine Rolle.
    pub fn from_corners(a: GeoPoint, b: GeoPoint) -> Self {
        Self {
            south_west: GeoPoint::new(a.lat.min(b.lat), a.lon.min(b.lon)),
            north_east: GeoPoint::new(a.lat.max(b.lat), a.lon.max(b.lon)),
        }
    }

    /// Baut eine Box aus `[sw_lat, sw_lon, ne_lat, ne_lon]`, ebenfalls normalisiert.
    pub fn from_rect(rect: [f64; 4]) -> Self {
        Self::from_corners(
            GeoPoint::new(rect[0], rect[1]),
            GeoPoint::new(rect[2], rect[3]),
        )
    }

    /// Liefert die Ecken als `[sw_lat, sw_lon, ne_lat, ne_lon]` (Backend-Format).
    pub fn to_rect(&self) -> [f64; 4] {
        [
            self.south_west.lat,
            self.south_west.lon,
            self.north_east.lat,
            self.north_east.lon,
        ]
    }

    /// Nord-West-Ecke.
    pub fn north_west(&self) -> GeoPoint {
        GeoPoint::new(self.north_east.lat, self.south_west.lon)
    }

    /// Süd-Ost-Ecke.
    pub fn south_east(&self) -> GeoPoint {
        GeoPoint::new(self.south_west.lat, self.north_east.lon)
    }

    /// Mittelpunkt der Box.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lon + self.north_east.lon) / 2.0,
        )
    }

    /// Prüft, ob ein Punkt in der Box liegt (Ränder inklusive).
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lon >= self.south_west.lon
            && point.lon <= self.north_east.lon
    }

    /// `true`, wenn die Box keine Fläche hat (Breite oder Höhe null).
    pub fn is_degenerate(&self) -> bool {
        self.south_west.lat == self.north_east.lat || self.south_west.lon == self.north_east.lon
    }
}
