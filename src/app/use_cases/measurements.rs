//! Use-Case-Funktionen für Messungen.

use crate::app::AppState;
use crate::core::GeoPoint;

/// Schließt eine Messung aus der Punktfolge ab.
pub fn commit(state: &mut AppState, points: Vec<GeoPoint>) {
    let measurement = state.measurements.commit(points);
    let summary = format!("{}: {}", measurement.name, measurement.distance_label());
    log::info!("Messung abgeschlossen: {}", summary);
    state.ui.status_message = Some(summary);
}

/// Hebt eine Messung hervor (oder hebt die Hervorhebung auf).
pub fn select(state: &mut AppState, measurement_id: Option<String>) {
    state.measurements.selected_id = measurement_id;
}
