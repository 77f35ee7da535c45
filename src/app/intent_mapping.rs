//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier sitzt das Gating nach Interaktionsmodus: Zeigerereignisse gehen nur
//! in einem Erstellungsmodus an die Gesten, native Kamera-Interaktionen nur,
//! solange sie nicht ausgesetzt sind.

use super::use_cases::pick::{pick_at, MapPick};
use super::{AppCommand, AppIntent, AppState, InteractionMode};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let creating = !state.mode.is_idle();
    let native = state.view.native;

    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ZonesReloadRequested => vec![AppCommand::ReloadZones],

        AppIntent::CreationModeToggled { mode } => vec![AppCommand::ToggleMode { mode }],
        AppIntent::CancelModeRequested => {
            if creating {
                vec![AppCommand::SetMode {
                    mode: InteractionMode::Idle,
                }]
            } else {
                vec![]
            }
        }

        AppIntent::MapPointerPressed { pos } if creating => vec![AppCommand::GesturePress { pos }],
        AppIntent::MapPointerMoved { pos } if creating => vec![AppCommand::GestureMove { pos }],
        AppIntent::MapPointerReleased { pos } if creating => {
            vec![AppCommand::GestureRelease { pos }]
        }
        AppIntent::MapPointerPressed { .. }
        | AppIntent::MapPointerMoved { .. }
        | AppIntent::MapPointerReleased { .. } => vec![],
        AppIntent::MapClicked { pos } => {
            if creating {
                return vec![AppCommand::GestureClick { pos }];
            }
            match pick_at(state, pos) {
                Some(MapPick::Position(mark_id)) => vec![AppCommand::SelectPosition {
                    mark_id: Some(mark_id),
                }],
                Some(MapPick::Zone(zone_id)) => vec![AppCommand::SelectZone {
                    zone_id: Some(zone_id),
                }],
                None => vec![],
            }
        }

        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPanned { delta_px } if native.dragging => {
            vec![AppCommand::PanCamera { delta_px }]
        }
        AppIntent::ScrollZoomed { steps, focus_px } if native.scroll_zoom => {
            vec![AppCommand::ZoomCamera { steps, focus_px }]
        }
        AppIntent::MapDoubleClicked { focus_px } if native.double_click_zoom => {
            vec![AppCommand::ZoomCamera {
                steps: 1.0,
                focus_px,
            }]
        }
        AppIntent::CameraPanned { .. }
        | AppIntent::ScrollZoomed { .. }
        | AppIntent::MapDoubleClicked { .. } => vec![],

        AppIntent::ZoneSelected { zone_id } => vec![AppCommand::SelectZone { zone_id }],
        AppIntent::ZoneEditingToggled { zone_id } => match state.zones.get(&zone_id) {
            Some(zone) => vec![AppCommand::SetZoneEditing {
                editing: !zone.is_editing,
                zone_id,
            }],
            None => {
                log::warn!("Zone {} ist nicht editierbar", zone_id);
                vec![]
            }
        },
        AppIntent::ZoneSaveRequested {
            zone_id,
            name,
            zone_type,
        } => vec![AppCommand::EditZone {
            zone_id,
            name,
            zone_type,
        }],
        AppIntent::ZoneEditCancelled { zone_id } => vec![AppCommand::CancelZoneEdit { zone_id }],
        AppIntent::ZoneDeleteRequested { zone_id } => vec![AppCommand::DeleteZone { zone_id }],
        AppIntent::ZoneRefreshRequested { zone_id } => vec![AppCommand::RefreshZone { zone_id }],
        AppIntent::ZoneLocalizeRequested { zone_id } => vec![
            AppCommand::LocalizeZone { zone_id },
            AppCommand::ApplyLocalizeRequests,
        ],

        AppIntent::PositionSelected { mark_id } => vec![AppCommand::SelectPosition { mark_id }],
        AppIntent::PositionEditingToggled { mark_id } => match state.positions.get(&mark_id) {
            Some(mark) => vec![AppCommand::SetPositionEditing {
                editing: !mark.is_editing,
                mark_id,
            }],
            None => {
                log::warn!("Position {} existiert nicht", mark_id);
                vec![]
            }
        },
        AppIntent::PositionSaveRequested {
            mark_id,
            name,
            lat,
            lon,
        } => vec![AppCommand::EditPosition {
            mark_id,
            name,
            lat,
            lon,
        }],
        AppIntent::PositionEditCancelled { mark_id } => {
            vec![AppCommand::CancelPositionEdit { mark_id }]
        }
        AppIntent::PositionDeleteRequested { mark_id } => {
            vec![AppCommand::DeletePosition { mark_id }]
        }
        AppIntent::PositionLocalizeRequested { mark_id } => vec![
            AppCommand::LocalizePosition { mark_id },
            AppCommand::ApplyLocalizeRequests,
        ],

        AppIntent::MeasurementSelected { measurement_id } => {
            vec![AppCommand::SelectMeasurement { measurement_id }]
        }

        AppIntent::BackendReplied { reply } => vec![AppCommand::ApplyBackendReply { reply }],
    }
}
