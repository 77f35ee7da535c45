//! Positions-Marker (Points of Interest), rein clientseitig.

use super::geo::GeoPoint;

/// Ein vom Benutzer gesetzter Positions-Marker.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionMark {
    /// Zeitbasierte, eindeutige ID
    pub id: String,
    /// Anzeigename
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Eigenschaften-Formular ist freigeschaltet
    pub is_editing: bool,
}

impl PositionMark {
    /// Erstellt einen neuen Marker (nicht im Edit-Zustand).
    pub fn new(id: String, name: String, lat: f64, lon: f64) -> Self {
        Self {
            id,
            name,
            lat,
            lon,
            is_editing: false,
        }
    }

    /// Position als `GeoPoint`.
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}
