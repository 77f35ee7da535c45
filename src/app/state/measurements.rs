use crate::core::{GeoPoint, Measurement, TimeIdGenerator};

/// Append-only Liste abgeschlossener Messungen.
#[derive(Debug, Default)]
pub struct MeasurementStore {
    measurements: Vec<Measurement>,
    ids: TimeIdGenerator,
    /// In der Liste hervorgehobene Messung
    pub selected_id: Option<String>,
}

impl MeasurementStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            measurements: Vec::new(),
            ids: TimeIdGenerator::new(),
            selected_id: None,
        }
    }

    /// Alle Messungen in Erstellungsreihenfolge.
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Legt eine Messung aus der Punktfolge an ("Measurement N", N ab 1).
    pub fn commit(&mut self, points: Vec<GeoPoint>) -> &Measurement {
        let name = format!("Measurement {}", self.measurements.len() + 1);
        let measurement = Measurement::new(self.ids.next_id(), name, points);
        self.measurements.push(measurement);
        &self.measurements[self.measurements.len() - 1]
    }
}
