//! Handler für Positions-Marker.

use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert einen Marker.
pub fn select(state: &mut AppState, mark_id: Option<String>) {
    use_cases::positions::select(state, mark_id);
}

/// Schaltet das Formular eines Markers frei oder sperrt es.
pub fn set_editing(state: &mut AppState, mark_id: &str, editing: bool) {
    use_cases::positions::set_editing(state, mark_id, editing);
}

/// Speichert Name und Koordinaten.
pub fn edit(
    state: &mut AppState,
    mark_id: &str,
    name: &str,
    lat: f64,
    lon: f64,
) -> anyhow::Result<()> {
    use_cases::positions::edit(state, mark_id, name, lat, lon)
}

/// Verwirft Formular-Änderungen.
pub fn cancel_edit(state: &mut AppState, mark_id: &str) {
    use_cases::positions::cancel_edit(state, mark_id);
}

/// Entfernt einen Marker.
pub fn delete(state: &mut AppState, mark_id: &str) {
    use_cases::positions::delete(state, mark_id);
}

/// Selektiert einen Marker und merkt das Anfahren vor.
pub fn localize(state: &mut AppState, mark_id: String) {
    use_cases::positions::localize(state, mark_id);
}
