//! Übernahme von Backend-Antworten in den AppState.

use super::zones;
use crate::app::tools::GestureTool;
use crate::app::AppState;
use crate::backend::{BackendCall, BackendOutcome, BackendReply};

/// Wendet eine Backend-Antwort an.
///
/// Fehler werden geloggt und als `last_error` angezeigt; der lokale Zustand
/// bleibt dann unverändert. Ein fehlgeschlagenes Anlegen gibt die Sperre
/// des Zonen-Tools wieder frei.
pub fn apply(state: &mut AppState, reply: BackendReply) {
    if !state.backend.complete(reply.request_id) {
        log::warn!(
            "Antwort auf unbekannten Backend-Request #{} verworfen",
            reply.request_id
        );
        return;
    }

    let outcome = match reply.result {
        Ok(outcome) => outcome,
        Err(message) => {
            log::error!("Backend-Request #{} fehlgeschlagen: {}", reply.request_id, message);
            if matches!(reply.call, BackendCall::CreateZone(_)) {
                state.gestures.zone.on_commit_settled(false);
            }
            state.ui.last_error = Some(message);
            return;
        }
    };

    state.ui.last_error = None;
    match (reply.call, outcome) {
        (BackendCall::ListZones, BackendOutcome::Zones(records)) => {
            zones::on_listed(state, records)
        }
        (BackendCall::CreateZone(_), BackendOutcome::Zone(record)) => {
            zones::on_created(state, record)
        }
        (BackendCall::EditZone { zone_id, .. }, BackendOutcome::Zone(record)) => {
            zones::on_edited(state, zone_id, record)
        }
        (BackendCall::DeleteZone { zone_id }, BackendOutcome::Deleted) => {
            zones::on_deleted(state, &zone_id)
        }
        (BackendCall::RefreshZone { zone_id }, BackendOutcome::Zone(record)) => {
            zones::on_refreshed(state, &zone_id, record)
        }
        (call, outcome) => {
            log::warn!("Unerwartete Antwort {:?} auf {:?}", outcome, call);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::{gesture, mode};
    use crate::app::InteractionMode;
    use crate::core::GeoPoint;

    #[test]
    fn failed_create_releases_latch_and_reports_error() {
        let mut state = AppState::new();
        mode::set_mode(&mut state, InteractionMode::CreatingZone);
        gesture::press(&mut state, GeoPoint::new(48.9, 21.1));
        gesture::release(&mut state, GeoPoint::new(48.95, 21.2));
        let request = state.backend.take_outbox().remove(0);
        assert!(state.gestures.zone.is_awaiting_accept());

        apply(
            &mut state,
            BackendReply {
                request_id: request.id,
                call: request.call,
                result: Err("backend down".into()),
            },
        );

        assert!(!state.gestures.zone.is_awaiting_accept());
        assert!(state.zones.is_empty());
        assert_eq!(state.ui.last_error.as_deref(), Some("backend down"));
        assert_eq!(state.backend.pending_count(), 0);
        // Neue Geste ist wieder möglich
        gesture::press(&mut state, GeoPoint::new(48.9, 21.1));
        assert!(state.gestures.zone.overlay().is_some());
    }

    #[test]
    fn unknown_request_is_ignored() {
        let mut state = AppState::new();
        apply(
            &mut state,
            BackendReply {
                request_id: 42,
                call: BackendCall::ListZones,
                result: Ok(BackendOutcome::Zones(Vec::new())),
            },
        );

        assert!(state.ui.last_error.is_none());
        assert!(state.zones.is_empty());
    }
}
