//! Routing der Zeigerereignisse an das Tool des aktiven Modus und
//! Übernahme abgeschlossener Gesten in die Stores.

use super::{measurements, mode, positions, zones};
use crate::app::tools::{GestureAction, GestureCommit, GestureTool};
use crate::app::{AppState, InteractionMode};
use crate::core::GeoPoint;

/// Maustaste gedrückt.
///
/// Im Zonen-Modus wird kein neues Rechteck begonnen, solange eine neue
/// Zone unbestätigt ist oder ihr Anlegen noch läuft.
pub fn press(state: &mut AppState, pos: GeoPoint) {
    if state.mode.is_creating_zone() && state.zone_creation_blocked() {
        log::debug!("Zonen-Rechteck gesperrt: neue Zone noch nicht abgeschlossen");
        return;
    }
    route(state, "press", |tool| tool.on_press(pos));
}

/// Maus bewegt.
pub fn move_to(state: &mut AppState, pos: GeoPoint) {
    route(state, "move", |tool| tool.on_move(pos));
}

/// Maustaste losgelassen.
pub fn release(state: &mut AppState, pos: GeoPoint) {
    route(state, "release", |tool| tool.on_release(pos));
}

/// Einfacher Klick.
pub fn click(state: &mut AppState, pos: GeoPoint) {
    route(state, "click", |tool| tool.on_click(pos));
}

fn route(
    state: &mut AppState,
    event: &str,
    handle: impl FnOnce(&mut dyn GestureTool) -> GestureAction,
) {
    let Some(tool) = state.gestures.tool_mut(state.mode) else {
        log::debug!("Gesten-Ereignis '{}' ohne aktiven Erstellungsmodus", event);
        return;
    };
    let action = handle(&mut *tool);
    log::debug!("{}-Tool: {} -> {:?}", tool.name(), event, action);

    if let GestureAction::Commit(commit) = action {
        apply_commit(state, commit);
    }
}

/// Übernimmt das Ergebnis einer abgeschlossenen Geste.
fn apply_commit(state: &mut AppState, commit: GestureCommit) {
    match commit {
        GestureCommit::Zone(bounds) => zones::request_create(state, bounds),
        GestureCommit::Position(pos) => {
            positions::add(state, pos);
            mode::set_mode(state, InteractionMode::Idle);
        }
        GestureCommit::Measurement(points) => {
            measurements::commit(state, points);
            mode::set_mode(state, InteractionMode::Idle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendCall;

    #[test]
    fn zone_release_enqueues_create_with_normalized_rect() {
        let mut state = AppState::new();
        mode::set_mode(&mut state, InteractionMode::CreatingZone);

        press(&mut state, GeoPoint::new(48.95, 21.1));
        move_to(&mut state, GeoPoint::new(48.92, 21.15));
        release(&mut state, GeoPoint::new(48.9, 21.2));

        let outbox = state.backend.outbox();
        assert_eq!(outbox.len(), 1);
        let BackendCall::CreateZone(request) = &outbox[0].call else {
            panic!("CreateZone erwartet, war {:?}", outbox[0].call);
        };
        assert_eq!(request.zone_rect, [48.9, 21.1, 48.95, 21.2]);
        assert_eq!(request.zone_name, "New Zone");
        // Modus bleibt bis zur Bestätigung aktiv
        assert!(state.mode.is_creating_zone());
    }

    #[test]
    fn position_click_adds_mark_and_ends_mode() {
        let mut state = AppState::new();
        mode::set_mode(&mut state, InteractionMode::CreatingPosition);

        click(&mut state, GeoPoint::new(48.93, 21.17));

        assert_eq!(state.positions.len(), 1);
        let mark = state.positions.marks().values().next().expect("Marker");
        assert_eq!(mark.name, "New Position");
        assert_eq!((mark.lat, mark.lon), (48.93, 21.17));
        assert!(state.mode.is_idle());
        assert!(state.view.native.all_enabled());
    }

    #[test]
    fn measurement_release_commits_and_ends_mode() {
        let mut state = AppState::new();
        mode::set_mode(&mut state, InteractionMode::CreatingMeasurement);

        press(&mut state, GeoPoint::new(48.9, 21.1));
        release(&mut state, GeoPoint::new(48.91, 21.1));

        assert_eq!(state.measurements.len(), 1);
        assert_eq!(state.measurements.measurements()[0].name, "Measurement 1");
        assert!(state.mode.is_idle());
    }

    #[test]
    fn unconfirmed_zone_blocks_rectangles_across_mode_changes() {
        let mut state = AppState::new();
        mode::set_mode(&mut state, InteractionMode::CreatingZone);
        press(&mut state, GeoPoint::new(48.9, 21.1));
        release(&mut state, GeoPoint::new(48.95, 21.2));

        // Anlegen läuft noch: Moduswechsel löst die Tool-Sperre, der Store-Zustand nicht
        mode::set_mode(&mut state, InteractionMode::Idle);
        mode::set_mode(&mut state, InteractionMode::CreatingZone);
        press(&mut state, GeoPoint::new(48.8, 21.0));
        assert!(state.gestures.zone.overlay().is_none());
        assert_eq!(state.backend.outbox().len(), 1);
        assert_eq!(
            state.gesture_status(),
            Some("Save or cancel the new zone first")
        );
    }

    #[test]
    fn events_without_mode_are_ignored() {
        let mut state = AppState::new();
        press(&mut state, GeoPoint::new(48.9, 21.1));
        click(&mut state, GeoPoint::new(48.9, 21.1));

        assert!(state.backend.outbox().is_empty());
        assert!(state.positions.is_empty());
    }
}
