//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Zones: {} | Positions: {} | Measurements: {}",
                state.zones.len(),
                state.positions.len(),
                state.measurements.len()
            ));

            ui.separator();

            let camera = &state.view.camera;
            ui.label(format!(
                "Zoom: {:.1} | Center: ({:.5}, {:.5})",
                camera.zoom, camera.center.lat, camera.center.lon
            ));

            ui.separator();

            ui.label(format!("Mode: {}", state.mode));

            let pending = state.backend.pending_count();
            if pending > 0 {
                ui.separator();
                ui.spinner();
                ui.label(format!("Backend: {} pending", pending));
            }

            if let Some(ref error) = state.ui.last_error {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", error)).color(egui::Color32::RED));
            } else if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
