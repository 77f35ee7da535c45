//! Use-Case-Funktionen für Zonen.
//!
//! Mutierende Backend-Operationen laufen zweistufig: `request_*` reiht den
//! Aufruf ein, `on_*` übernimmt die erfolgreiche Antwort. Fehlschläge lassen
//! den lokalen Zustand unverändert.

use super::mode;
use crate::app::tools::GestureTool;
use crate::app::{AppState, InteractionMode};
use crate::backend::{BackendCall, CreateZoneRequest};
use crate::core::{GeoBounds, ZoneRecord, ZoneType};

/// Fordert die Zonenliste an.
pub fn reload(state: &mut AppState) {
    state.backend.enqueue(BackendCall::ListZones);
}

/// Fordert das Anlegen einer Zone mit Standardname und Typ `empty` an.
pub fn request_create(state: &mut AppState, bounds: GeoBounds) {
    let request = CreateZoneRequest::new(&bounds, state.options.new_zone_name.clone(), ZoneType::Empty);
    log::info!("Neue Zone angefordert: {:?}", request.zone_rect);
    state.backend.enqueue(BackendCall::CreateZone(request));
}

/// Fordert das Speichern von Name und Typ an.
pub fn request_edit(state: &mut AppState, zone_id: String, name: String, zone_type: ZoneType) {
    if state.zones.get(&zone_id).is_none() {
        log::warn!("Speichern verworfen: Zone {} ist nicht editierbar", zone_id);
        return;
    }
    state.backend.enqueue(BackendCall::EditZone {
        zone_id,
        zone_name: name,
        zone_type,
    });
}

/// Fordert das Löschen einer Zone an.
pub fn request_delete(state: &mut AppState, zone_id: String) {
    if state.zones.get(&zone_id).is_none() {
        log::warn!("Löschen verworfen: Zone {} unbekannt", zone_id);
        return;
    }
    let already_pending = state.backend.has_pending(
        |call| matches!(call, BackendCall::DeleteZone { zone_id: id } if *id == zone_id),
    );
    if already_pending {
        log::debug!("Löschen von Zone {} läuft bereits", zone_id);
        return;
    }
    state.backend.enqueue(BackendCall::DeleteZone { zone_id });
}

/// Fordert neue Wetterdaten für eine Zone an.
pub fn request_refresh(state: &mut AppState, zone_id: String) {
    if state.zones.get(&zone_id).is_none() {
        log::warn!("Aktualisieren verworfen: Zone {} unbekannt", zone_id);
        return;
    }
    state.backend.enqueue(BackendCall::RefreshZone { zone_id });
}

/// Selektiert eine Zone (oder hebt die Selektion auf).
///
/// Beendet einen aktiven Zonen-Erstellungsmodus.
pub fn select(state: &mut AppState, zone_id: Option<String>) {
    state.zones.selected_id = zone_id;
    sync_form(state);
    if state.mode.is_creating_zone() {
        mode::set_mode(state, InteractionMode::Idle);
    }
}

/// Setzt das lokale Edit-Flag einer Zone.
pub fn set_editing(state: &mut AppState, zone_id: &str, editing: bool) {
    if !state.zones.set_editing(zone_id, editing) {
        log::warn!("Zone {} ist nicht editierbar", zone_id);
        return;
    }
    if state.ui.zone_form.zone_id.as_deref() == Some(zone_id) {
        sync_form(state);
    }
}

/// Verwirft das Formular einer Zone.
///
/// Eine noch unbestätigte neue Zone wird gelöscht, bei bestehenden Zonen
/// werden die gespeicherten Werte wiederhergestellt.
pub fn cancel_edit(state: &mut AppState, zone_id: String) {
    let Some(zone) = state.zones.get(&zone_id) else {
        log::warn!("Abbrechen verworfen: Zone {} unbekannt", zone_id);
        return;
    };

    if zone.is_creating {
        log::info!("Unbestätigte Zone {} wird verworfen", zone_id);
        request_delete(state, zone_id);
    } else {
        if zone.is_editing {
            state.zones.set_editing(&zone_id, false);
        }
        sync_form(state);
    }
}

/// Selektiert eine Zone und fordert die Kamera-Ausrichtung an.
pub fn localize(state: &mut AppState, zone_id: String) {
    select(state, Some(zone_id));
    state.zones.localizing = true;
}

/// Übernimmt die geladene Zonenliste.
pub fn on_listed(state: &mut AppState, records: Vec<ZoneRecord>) {
    state.zones.replace_all(records);
    sync_form(state);
    log::info!("{} Zonen geladen", state.zones.len());
}

/// Übernimmt eine neu angelegte Zone und selektiert sie.
///
/// Der Erstellungsmodus bleibt aktiv, bis die Zone gespeichert oder verworfen wird.
pub fn on_created(state: &mut AppState, record: ZoneRecord) {
    let id = state.zones.insert_created(record);
    state.gestures.zone.on_commit_settled(true);
    state.zones.selected_id = Some(id.clone());
    sync_form(state);
    log::info!("Zone {} angelegt", id);
}

/// Übernimmt gespeicherte Änderungen.
pub fn on_edited(state: &mut AppState, zone_id: String, record: ZoneRecord) {
    if !state.zones.apply_edit(&zone_id, record) {
        log::warn!("Gespeicherte Zone {} nicht mehr vorhanden", zone_id);
        return;
    }
    log::info!("Zone {} gespeichert", zone_id);
    if state.mode.is_creating_zone() {
        mode::set_mode(state, InteractionMode::Idle);
    }
    select(state, Some(zone_id));
}

/// Entfernt eine gelöschte Zone.
pub fn on_deleted(state: &mut AppState, zone_id: &str) {
    if state.zones.remove(zone_id).is_none() {
        log::warn!("Gelöschte Zone {} war lokal nicht vorhanden", zone_id);
    }
    sync_form(state);
    if state.mode.is_creating_zone() {
        mode::set_mode(state, InteractionMode::Idle);
    }
    log::info!("Zone {} gelöscht", zone_id);
}

/// Übernimmt neue Wetterdaten; Edit-Flags bleiben erhalten.
///
/// Ein offenes Formular der Zone behält ungespeicherte Eingaben.
pub fn on_refreshed(state: &mut AppState, zone_id: &str, record: ZoneRecord) {
    if !state.zones.apply_refresh(zone_id, record) {
        log::warn!("Aktualisierte Zone {} nicht mehr vorhanden", zone_id);
        return;
    }
    let editing = state
        .zones
        .get(zone_id)
        .is_some_and(|zone| zone.is_editing || zone.is_creating);
    if !editing && state.ui.zone_form.zone_id.as_deref() == Some(zone_id) {
        sync_form(state);
    }
}

/// Lädt das Formular aus der selektierten Zone (oder leert es).
fn sync_form(state: &mut AppState) {
    match state.zones.selected_zone() {
        Some(zone) => state.ui.zone_form.load(&zone),
        None => state.ui.zone_form.clear(),
    }
}
