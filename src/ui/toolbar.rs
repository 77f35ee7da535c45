//! Toolbar für die Auswahl des Interaktionsmodus.

use crate::app::{AppIntent, AppState, InteractionMode};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.mode;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Mode:");
            ui.separator();

            for (mode, shortcut) in [
                (InteractionMode::CreatingZone, "Z"),
                (InteractionMode::CreatingPosition, "P"),
                (InteractionMode::CreatingMeasurement, "M"),
            ] {
                let button = egui::Button::new(format!("{} ({})", mode.label(), shortcut))
                    .selected(active == mode);
                if ui.add(button).clicked() {
                    events.push(AppIntent::CreationModeToggled { mode });
                }
            }

            ui.separator();

            if ui.button("⟳ Reload zones (R)").clicked() {
                events.push(AppIntent::ZonesReloadRequested);
            }

            if let Some(status) = state.gesture_status() {
                ui.separator();
                ui.label(status);
                if ui.button("Cancel (Esc)").clicked() {
                    events.push(AppIntent::CancelModeRequested);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                }
            });
        });
    });

    events
}
