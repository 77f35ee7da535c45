//! Handler für Zonen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ZoneType;

/// Fordert die Zonenliste neu an.
pub fn reload(state: &mut AppState) {
    use_cases::zones::reload(state);
}

/// Selektiert eine Zone.
pub fn select(state: &mut AppState, zone_id: Option<String>) {
    use_cases::zones::select(state, zone_id);
}

/// Schaltet das Formular einer Zone frei oder sperrt es.
pub fn set_editing(state: &mut AppState, zone_id: &str, editing: bool) {
    use_cases::zones::set_editing(state, zone_id, editing);
}

/// Fordert das Speichern von Name und Typ an.
pub fn edit(state: &mut AppState, zone_id: String, name: String, zone_type: ZoneType) {
    use_cases::zones::request_edit(state, zone_id, name, zone_type);
}

/// Verwirft Formular-Änderungen bzw. eine unbestätigte Zone.
pub fn cancel_edit(state: &mut AppState, zone_id: String) {
    use_cases::zones::cancel_edit(state, zone_id);
}

/// Fordert das Löschen an.
pub fn delete(state: &mut AppState, zone_id: String) {
    use_cases::zones::request_delete(state, zone_id);
}

/// Fordert neue Wetterdaten an.
pub fn refresh(state: &mut AppState, zone_id: String) {
    use_cases::zones::request_refresh(state, zone_id);
}

/// Selektiert eine Zone und merkt das Einpassen vor.
pub fn localize(state: &mut AppState, zone_id: String) {
    use_cases::zones::localize(state, zone_id);
}
