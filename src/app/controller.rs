//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::app::request_exit(state),
            AppCommand::ReloadZones => handlers::zones::reload(state),

            // === Modi ===
            AppCommand::SetMode { mode } => handlers::mode::set_mode(state, mode),
            AppCommand::ToggleMode { mode } => handlers::mode::toggle_mode(state, mode),

            // === Gesten ===
            AppCommand::GesturePress { pos } => handlers::gesture::press(state, pos),
            AppCommand::GestureMove { pos } => handlers::gesture::move_to(state, pos),
            AppCommand::GestureRelease { pos } => handlers::gesture::release(state, pos),
            AppCommand::GestureClick { pos } => handlers::gesture::click(state, pos),

            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta_px } => handlers::view::pan(state, delta_px),
            AppCommand::ZoomCamera { steps, focus_px } => {
                handlers::view::zoom(state, steps, focus_px)
            }
            AppCommand::ApplyLocalizeRequests => handlers::view::apply_localize_requests(state),

            // === Zonen ===
            AppCommand::SelectZone { zone_id } => handlers::zones::select(state, zone_id),
            AppCommand::SetZoneEditing { zone_id, editing } => {
                handlers::zones::set_editing(state, &zone_id, editing)
            }
            AppCommand::EditZone {
                zone_id,
                name,
                zone_type,
            } => handlers::zones::edit(state, zone_id, name, zone_type),
            AppCommand::CancelZoneEdit { zone_id } => handlers::zones::cancel_edit(state, zone_id),
            AppCommand::DeleteZone { zone_id } => handlers::zones::delete(state, zone_id),
            AppCommand::RefreshZone { zone_id } => handlers::zones::refresh(state, zone_id),
            AppCommand::LocalizeZone { zone_id } => handlers::zones::localize(state, zone_id),

            // === Positionen ===
            AppCommand::SelectPosition { mark_id } => handlers::positions::select(state, mark_id),
            AppCommand::SetPositionEditing { mark_id, editing } => {
                handlers::positions::set_editing(state, &mark_id, editing)
            }
            AppCommand::EditPosition {
                mark_id,
                name,
                lat,
                lon,
            } => handlers::positions::edit(state, &mark_id, &name, lat, lon)?,
            AppCommand::CancelPositionEdit { mark_id } => {
                handlers::positions::cancel_edit(state, &mark_id)
            }
            AppCommand::DeletePosition { mark_id } => handlers::positions::delete(state, &mark_id),
            AppCommand::LocalizePosition { mark_id } => {
                handlers::positions::localize(state, mark_id)
            }

            // === Messungen ===
            AppCommand::SelectMeasurement { measurement_id } => {
                handlers::measurements::select(state, measurement_id)
            }

            // === Backend ===
            AppCommand::ApplyBackendReply { reply } => handlers::backend::apply_reply(state, reply),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
