//! Abgeschlossene Distanzmessungen.

use super::geo::{path_length, GeoPoint};

/// Eine unveränderliche Messung entlang einer Punktfolge.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub id: String,
    /// "Measurement N" (laufend ab 1)
    pub name: String,
    /// Summe der Großkreis-Distanzen in Metern
    pub distance: f64,
    pub points: Vec<GeoPoint>,
}

impl Measurement {
    /// Erstellt eine Messung und berechnet die Distanz aus den Punkten.
    pub fn new(id: String, name: String, points: Vec<GeoPoint>) -> Self {
        Self {
            id,
            name,
            distance: path_length(&points),
            points,
        }
    }

    /// Distanz für die Listenanzeige, z.B. `"150.00 m"`.
    pub fn distance_label(&self) -> String {
        format!("{:.2} m", self.distance)
    }
}
