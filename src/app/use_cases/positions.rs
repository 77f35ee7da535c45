//! Use-Case-Funktionen für Positions-Marker (nur clientseitig).

use super::mode;
use crate::app::{AppState, InteractionMode};
use crate::core::GeoPoint;

/// Legt einen Marker mit dem Standardnamen an der Position an.
pub fn add(state: &mut AppState, pos: GeoPoint) -> String {
    let name = state.options.new_position_name.clone();
    let id = state.positions.add(&name, pos.lat, pos.lon);
    log::info!("Position {} bei ({:.6}, {:.6}) angelegt", id, pos.lat, pos.lon);
    id
}

/// Selektiert einen Marker (oder hebt die Selektion auf).
///
/// Beendet einen aktiven Positions-Erstellungsmodus.
pub fn select(state: &mut AppState, mark_id: Option<String>) {
    state.positions.selected_id = mark_id;
    sync_form(state);
    if state.mode.is_creating_position() {
        mode::set_mode(state, InteractionMode::Idle);
    }
}

/// Setzt das lokale Edit-Flag eines Markers.
pub fn set_editing(state: &mut AppState, mark_id: &str, editing: bool) {
    if !state.positions.set_editing(mark_id, editing) {
        log::warn!("Position {} existiert nicht", mark_id);
        return;
    }
    if state.ui.position_form.mark_id.as_deref() == Some(mark_id) {
        sync_form(state);
    }
}

/// Überschreibt Name und Koordinaten eines Markers.
///
/// Koordinaten außerhalb von ±90°/±180° werden mit einem Fehler abgewiesen,
/// der Marker bleibt dann unverändert im Edit-Zustand.
pub fn edit(
    state: &mut AppState,
    mark_id: &str,
    name: &str,
    lat: f64,
    lon: f64,
) -> anyhow::Result<()> {
    if !(lat.is_finite() && lon.is_finite() && lat.abs() <= 90.0 && lon.abs() <= 180.0) {
        anyhow::bail!("Invalid coordinates: {lat}, {lon}");
    }
    if !state.positions.edit(mark_id, name, lat, lon) {
        log::warn!("Position {} existiert nicht", mark_id);
        return Ok(());
    }
    state.positions.set_editing(mark_id, false);
    state.ui.last_error = None;
    if state.ui.position_form.mark_id.as_deref() == Some(mark_id) {
        sync_form(state);
    }
    log::info!("Position {} gespeichert", mark_id);
    Ok(())
}

/// Verwirft das Formular und stellt die gespeicherten Werte wieder her.
pub fn cancel_edit(state: &mut AppState, mark_id: &str) {
    if !state.positions.set_editing(mark_id, false) {
        log::warn!("Position {} existiert nicht", mark_id);
    }
    sync_form(state);
}

/// Entfernt einen Marker.
pub fn delete(state: &mut AppState, mark_id: &str) {
    if state.positions.delete(mark_id).is_none() {
        log::warn!("Position {} existiert nicht", mark_id);
        return;
    }
    sync_form(state);
    log::info!("Position {} gelöscht", mark_id);
}

/// Selektiert einen Marker und fordert das Schwenken der Kamera an.
pub fn localize(state: &mut AppState, mark_id: String) {
    select(state, Some(mark_id));
    state.positions.localizing = true;
}

fn sync_form(state: &mut AppState) {
    match state.positions.selected_mark() {
        Some(mark) => state.ui.position_form.load(mark),
        None => state.ui.position_form.clear(),
    }
}
