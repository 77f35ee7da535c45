mod common;

use approx::assert_relative_eq;
use common::{drag, pump, record, send, MockZoneBackend};
use zone_map_editor::backend::BackendReply;
use zone_map_editor::core::geo::EARTH_RADIUS_M;
use zone_map_editor::{
    AppCommand, AppController, AppIntent, AppState, CameraCommand, GeoBounds, GeoPoint,
    InteractionMode, ZoneType,
};

const SW: GeoPoint = GeoPoint::new(48.9, 21.1);
const NE: GeoPoint = GeoPoint::new(48.95, 21.2);

fn draw_zone(controller: &mut AppController, state: &mut AppState) {
    send(
        controller,
        state,
        vec![AppIntent::CreationModeToggled {
            mode: InteractionMode::CreatingZone,
        }],
    );
    send(controller, state, drag(SW, NE));
}

#[test]
fn test_zone_lifecycle_draw_create_edit() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let backend = MockZoneBackend::new();

    draw_zone(&mut controller, &mut state);
    pump(&mut controller, &mut state, &backend);

    let zone = state.zones.get("z1").expect("Zone z1 sollte angelegt sein");
    assert_eq!(zone.name, "New Zone");
    assert_eq!(zone.zone_type, ZoneType::Empty);
    assert!(zone.is_creating && zone.is_editing);
    assert_eq!(zone.bounds, GeoBounds::from_corners(SW, NE));
    assert_eq!(state.zones.selected_id.as_deref(), Some("z1"));
    assert!(state.mode.is_creating_zone());

    send(
        &mut controller,
        &mut state,
        vec![AppIntent::ZoneSaveRequested {
            zone_id: "z1".into(),
            name: "Storm Cell".into(),
            zone_type: ZoneType::Wind,
        }],
    );
    pump(&mut controller, &mut state, &backend);

    let zone = state.zones.get("z1").expect("Zone z1 vorhanden");
    assert!(!zone.is_creating && !zone.is_editing);
    assert_eq!(zone.name, "Storm Cell");
    assert_eq!(zone.zone_type, ZoneType::Wind);
    assert!(state.mode.is_idle());
    assert!(state.view.native.all_enabled());
    assert_eq!(state.ui.zone_form.name, "Storm Cell");
    assert_eq!(backend.stored()[0].name, "Storm Cell");
}

#[test]
fn test_zone_create_then_cancel_removes_zone() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let backend = MockZoneBackend::new();

    draw_zone(&mut controller, &mut state);
    pump(&mut controller, &mut state, &backend);
    assert!(state.zones.get("z1").is_some());

    send(
        &mut controller,
        &mut state,
        vec![AppIntent::ZoneEditCancelled {
            zone_id: "z1".into(),
        }],
    );
    pump(&mut controller, &mut state, &backend);

    assert!(state.zones.get("z1").is_none());
    assert!(state.zones.selected_id.is_none());
    assert!(state.mode.is_idle());
    assert!(backend.stored().is_empty());
}

#[test]
fn test_latch_blocks_second_rectangle_until_accept() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let backend = MockZoneBackend::new();

    draw_zone(&mut controller, &mut state);
    pump(&mut controller, &mut state, &backend);

    send(
        &mut controller,
        &mut state,
        drag(GeoPoint::new(48.8, 21.0), GeoPoint::new(48.85, 21.05)),
    );

    assert!(state.backend.outbox().is_empty());
    assert_eq!(state.zones.len(), 1);
    assert!(state.gesture_status().is_some());
}

#[test]
fn test_failed_create_reports_error_and_allows_retry() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    draw_zone(&mut controller, &mut state);
    pump(
        &mut controller,
        &mut state,
        &MockZoneBackend::failing("backend unavailable"),
    );

    assert!(state.zones.is_empty());
    assert_eq!(state.ui.last_error.as_deref(), Some("backend unavailable"));
    assert!(state.mode.is_creating_zone());

    let backend = MockZoneBackend::new();
    send(&mut controller, &mut state, drag(SW, NE));
    pump(&mut controller, &mut state, &backend);

    assert!(state.zones.get("z1").is_some());
    assert!(state.ui.last_error.is_none());
}

#[test]
fn test_zero_area_rectangle_is_discarded() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(
        &mut controller,
        &mut state,
        vec![AppIntent::CreationModeToggled {
            mode: InteractionMode::CreatingZone,
        }],
    );
    send(&mut controller, &mut state, drag(SW, SW));

    assert!(state.backend.outbox().is_empty());
}

#[test]
fn test_reload_keeps_local_edit_flags() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let backend = MockZoneBackend::with_zones(vec![record(
        "a",
        "Alpha",
        ZoneType::Rain,
        [48.9, 21.1, 48.95, 21.2],
    )]);

    send(&mut controller, &mut state, vec![AppIntent::ZonesReloadRequested]);
    pump(&mut controller, &mut state, &backend);
    send(
        &mut controller,
        &mut state,
        vec![
            AppIntent::ZoneSelected {
                zone_id: Some("a".into()),
            },
            AppIntent::ZoneEditingToggled {
                zone_id: "a".into(),
            },
            AppIntent::ZonesReloadRequested,
        ],
    );
    pump(&mut controller, &mut state, &backend);

    let zone = state.zones.get("a").expect("Zone a");
    assert!(zone.is_editing);
    assert_eq!(state.zones.selected_id.as_deref(), Some("a"));
}

#[test]
fn test_refresh_updates_payload() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let backend = MockZoneBackend::with_zones(vec![record(
        "a",
        "Alpha",
        ZoneType::Wind,
        [48.9, 21.1, 48.95, 21.2],
    )]);
    send(&mut controller, &mut state, vec![AppIntent::ZonesReloadRequested]);
    pump(&mut controller, &mut state, &backend);

    send(
        &mut controller,
        &mut state,
        vec![AppIntent::ZoneRefreshRequested {
            zone_id: "a".into(),
        }],
    );
    pump(&mut controller, &mut state, &backend);

    let payload = state
        .zones
        .get("a")
        .and_then(|z| z.payload.as_ref())
        .expect("Payload nach Refresh");
    assert_eq!(payload["wind_speed"], serde_json::json!(12.5));
}

#[test]
fn test_localize_zone_is_one_shot_and_retriggerable() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let backend = MockZoneBackend::with_zones(vec![record(
        "a",
        "Alpha",
        ZoneType::Wind,
        [48.9, 21.1, 48.95, 21.2],
    )]);
    send(
        &mut controller,
        &mut state,
        vec![
            AppIntent::ViewportResized {
                size: [1280.0, 720.0],
            },
            AppIntent::ZonesReloadRequested,
        ],
    );
    pump(&mut controller, &mut state, &backend);

    let localize = || AppIntent::ZoneLocalizeRequested {
        zone_id: "a".into(),
    };
    send(&mut controller, &mut state, vec![localize()]);

    assert_eq!(state.zones.selected_id.as_deref(), Some("a"));
    assert!(!state.zones.localizing);
    assert_eq!(state.view.camera_command_count, 1);
    assert_eq!(
        state.view.last_camera_command,
        Some(CameraCommand::FitBounds {
            bounds: GeoBounds::from_corners(SW, NE),
            padding_px: 200.0,
        })
    );

    send(&mut controller, &mut state, vec![localize()]);
    assert_eq!(state.view.camera_command_count, 2);

    let commands: Vec<_> = state
        .command_log
        .entries()
        .iter()
        .filter(|c| {
            matches!(
                c,
                AppCommand::LocalizeZone { .. } | AppCommand::ApplyLocalizeRequests
            )
        })
        .collect();
    assert_eq!(commands.len(), 4);
}

#[test]
fn test_position_mode_excludes_zone_mode() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(
        &mut controller,
        &mut state,
        vec![
            AppIntent::CreationModeToggled {
                mode: InteractionMode::CreatingZone,
            },
            AppIntent::CreationModeToggled {
                mode: InteractionMode::CreatingPosition,
            },
        ],
    );

    assert!(!state.mode.is_creating_zone());
    assert!(state.mode.is_creating_position());

    // Ein Klick legt genau einen Marker an, kein Zonen-Request
    send(
        &mut controller,
        &mut state,
        vec![AppIntent::MapClicked {
            pos: GeoPoint::new(48.93, 21.17),
        }],
    );
    assert_eq!(state.positions.len(), 1);
    assert!(state.backend.outbox().is_empty());
    assert!(state.mode.is_idle());
}

#[test]
fn test_position_edit_and_localize() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    send(
        &mut controller,
        &mut state,
        vec![
            AppIntent::CreationModeToggled {
                mode: InteractionMode::CreatingPosition,
            },
            AppIntent::MapClicked {
                pos: GeoPoint::new(48.93, 21.17),
            },
        ],
    );
    let mark_id = state
        .positions
        .marks()
        .keys()
        .next()
        .cloned()
        .expect("Marker angelegt");

    send(
        &mut controller,
        &mut state,
        vec![
            AppIntent::PositionEditingToggled {
                mark_id: mark_id.clone(),
            },
            AppIntent::PositionSaveRequested {
                mark_id: mark_id.clone(),
                name: "Weather Station".into(),
                lat: 48.94,
                lon: 21.18,
            },
            AppIntent::PositionLocalizeRequested {
                mark_id: mark_id.clone(),
            },
        ],
    );

    let mark = state.positions.get(&mark_id).expect("Marker");
    assert_eq!(mark.name, "Weather Station");
    assert!(!mark.is_editing);
    assert_eq!(
        state.view.last_camera_command,
        Some(CameraCommand::PanTo {
            target: GeoPoint::new(48.94, 21.18),
            animate: true,
        })
    );
}

#[test]
fn test_measurement_distance_and_name() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    // Entlang eines Meridians entspricht ein Breitengrad R·π/180 Metern
    let meters_per_degree = EARTH_RADIUS_M.to_radians();
    let p0 = GeoPoint::new(48.9, 21.1);
    let p1 = GeoPoint::new(48.9 + 100.0 / meters_per_degree, 21.1);

    send(
        &mut controller,
        &mut state,
        vec![AppIntent::CreationModeToggled {
            mode: InteractionMode::CreatingMeasurement,
        }],
    );
    send(&mut controller, &mut state, drag(p0, p1));

    let measurement = &state.measurements.measurements()[0];
    assert_eq!(measurement.name, "Measurement 1");
    assert_relative_eq!(measurement.distance, 100.0, epsilon = 1e-6);
    assert!(state.mode.is_idle());
}

#[test]
fn test_native_interactions_suspended_while_creating() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    send(
        &mut controller,
        &mut state,
        vec![
            AppIntent::ViewportResized {
                size: [1280.0, 720.0],
            },
            AppIntent::CreationModeToggled {
                mode: InteractionMode::CreatingMeasurement,
            },
        ],
    );
    let center = state.view.camera.center;
    let zoom = state.view.camera.zoom;

    send(
        &mut controller,
        &mut state,
        vec![
            AppIntent::CameraPanned {
                delta_px: [50.0, 20.0],
            },
            AppIntent::ScrollZoomed {
                steps: 1.0,
                focus_px: [640.0, 360.0],
            },
            AppIntent::MapDoubleClicked {
                focus_px: [640.0, 360.0],
            },
        ],
    );
    assert_eq!(state.view.camera.center, center);
    assert_eq!(state.view.camera.zoom, zoom);

    send(&mut controller, &mut state, vec![AppIntent::CancelModeRequested]);
    send(
        &mut controller,
        &mut state,
        vec![AppIntent::ScrollZoomed {
            steps: 1.0,
            focus_px: [640.0, 360.0],
        }],
    );
    assert_relative_eq!(state.view.camera.zoom, zoom + 1.0);
}

#[test]
fn test_unconfirmed_zone_blocks_new_rectangle_after_mode_toggle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let backend = MockZoneBackend::new();

    draw_zone(&mut controller, &mut state);
    pump(&mut controller, &mut state, &backend);
    send(&mut controller, &mut state, vec![AppIntent::CancelModeRequested]);

    // z1 ist weder gespeichert noch verworfen
    draw_zone(&mut controller, &mut state);
    pump(&mut controller, &mut state, &backend);

    let creating: Vec<_> = state
        .zones
        .zones()
        .values()
        .filter(|zone| zone.is_creating)
        .map(|zone| zone.id.clone())
        .collect();
    assert_eq!(creating, vec!["z1".to_string()]);
    assert_eq!(backend.stored().len(), 1);

    // Nach dem Speichern ist ein neues Rechteck wieder möglich
    send(
        &mut controller,
        &mut state,
        vec![AppIntent::ZoneSaveRequested {
            zone_id: "z1".into(),
            name: "Storm Cell".into(),
            zone_type: ZoneType::Wind,
        }],
    );
    pump(&mut controller, &mut state, &backend);
    draw_zone(&mut controller, &mut state);
    pump(&mut controller, &mut state, &backend);

    assert!(state.zones.get("z2").is_some_and(|zone| zone.is_creating));
}

#[test]
fn test_double_cancel_sends_single_delete() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let backend = MockZoneBackend::new();

    draw_zone(&mut controller, &mut state);
    pump(&mut controller, &mut state, &backend);

    let cancel = || AppIntent::ZoneEditCancelled {
        zone_id: "z1".into(),
    };
    send(&mut controller, &mut state, vec![cancel(), cancel()]);
    assert_eq!(state.backend.outbox().len(), 1);

    pump(&mut controller, &mut state, &backend);
    assert!(state.zones.get("z1").is_none());
    assert!(state.ui.last_error.is_none());
}

#[test]
fn test_failed_edit_keeps_edit_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    draw_zone(&mut controller, &mut state);
    pump(&mut controller, &mut state, &MockZoneBackend::new());

    send(
        &mut controller,
        &mut state,
        vec![AppIntent::ZoneSaveRequested {
            zone_id: "z1".into(),
            name: "Storm Cell".into(),
            zone_type: ZoneType::Wind,
        }],
    );
    pump(
        &mut controller,
        &mut state,
        &MockZoneBackend::failing("backend unavailable"),
    );

    let zone = state.zones.get("z1").expect("Zone z1 bleibt");
    assert!(zone.is_creating && zone.is_editing);
    assert_eq!(zone.name, "New Zone");
    assert!(state.mode.is_creating_zone());
    assert_eq!(state.ui.last_error.as_deref(), Some("backend unavailable"));
}

#[test]
fn test_failed_delete_keeps_zone() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let backend = MockZoneBackend::with_zones(vec![record(
        "a",
        "Alpha",
        ZoneType::Rain,
        [48.9, 21.1, 48.95, 21.2],
    )]);
    send(&mut controller, &mut state, vec![AppIntent::ZonesReloadRequested]);
    pump(&mut controller, &mut state, &backend);

    send(
        &mut controller,
        &mut state,
        vec![AppIntent::ZoneDeleteRequested {
            zone_id: "a".into(),
        }],
    );
    pump(
        &mut controller,
        &mut state,
        &MockZoneBackend::failing("backend unavailable"),
    );

    assert!(state.zones.get("a").is_some());
    assert_eq!(state.ui.last_error.as_deref(), Some("backend unavailable"));
    assert_eq!(state.backend.pending_count(), 0);
}

#[test]
fn test_unsent_requests_settle_as_failures() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    draw_zone(&mut controller, &mut state);
    for request in state.backend.take_outbox() {
        send(
            &mut controller,
            &mut state,
            vec![AppIntent::BackendReplied {
                reply: BackendReply::failed(request, "worker gone"),
            }],
        );
    }

    assert_eq!(state.backend.pending_count(), 0);
    assert_eq!(state.ui.last_error.as_deref(), Some("worker gone"));

    // Zonen-Sperre ist wieder frei
    send(&mut controller, &mut state, drag(SW, NE));
    assert_eq!(state.backend.outbox().len(), 1);
}

#[test]
fn test_invalid_position_edit_is_rejected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    send(
        &mut controller,
        &mut state,
        vec![
            AppIntent::CreationModeToggled {
                mode: InteractionMode::CreatingPosition,
            },
            AppIntent::MapClicked {
                pos: GeoPoint::new(48.93, 21.17),
            },
        ],
    );
    let mark_id = state
        .positions
        .marks()
        .keys()
        .next()
        .cloned()
        .expect("Marker angelegt");

    let result = controller.handle_intent(
        &mut state,
        AppIntent::PositionSaveRequested {
            mark_id: mark_id.clone(),
            name: "Nowhere".into(),
            lat: 91.0,
            lon: 21.17,
        },
    );

    assert!(result.is_err());
    let mark = state.positions.get(&mark_id).expect("Marker");
    assert_eq!(mark.name, "New Position");
    assert_eq!(mark.lat, 48.93);
}
