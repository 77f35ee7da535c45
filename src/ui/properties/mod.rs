//! Eigenschaften-Panel (rechts): Zonen, Positionen und Messungen.

mod measurements;
mod positions;
mod zones;

use crate::app::{AppIntent, AppState};

/// Rendert das Eigenschaften-Panel und gibt erzeugte Events zurück.
///
/// Formularfelder werden direkt im `UiState` bearbeitet; gespeichert wird
/// erst über die erzeugten Intents.
pub fn render_properties_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(300.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::CollapsingHeader::new(format!("Zones ({})", state.zones.len()))
                    .default_open(true)
                    .show(ui, |ui| zones::render_zones_section(ui, state, &mut events));

                egui::CollapsingHeader::new(format!("Positions ({})", state.positions.len()))
                    .default_open(true)
                    .show(ui, |ui| positions::render_positions_section(ui, state, &mut events));

                egui::CollapsingHeader::new(format!(
                    "Measurements ({})",
                    state.measurements.len()
                ))
                .default_open(true)
                .show(ui, |ui| {
                    measurements::render_measurements_section(ui, state, &mut events)
                });
            });
        });

    events
}
