//! Liste abgeschlossener Messungen.

use crate::app::{AppIntent, AppState};

pub(super) fn render_measurements_section(
    ui: &mut egui::Ui,
    state: &AppState,
    events: &mut Vec<AppIntent>,
) {
    if state.measurements.is_empty() {
        ui.label("Press M and drag on the map to measure");
        return;
    }

    let selected_id = state.measurements.selected_id.as_deref();
    for measurement in state.measurements.measurements() {
        let is_selected = selected_id == Some(measurement.id.as_str());
        let text = format!("{}: {}", measurement.name, measurement.distance_label());
        if ui.selectable_label(is_selected, text).clicked() {
            let measurement_id = if is_selected {
                None
            } else {
                Some(measurement.id.clone())
            };
            events.push(AppIntent::MeasurementSelected { measurement_id });
        }
    }
}
