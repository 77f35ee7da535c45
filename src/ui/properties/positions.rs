//! Positions-Liste und Positions-Formular.

use crate::app::{AppIntent, AppState};

pub(super) fn render_positions_section(
    ui: &mut egui::Ui,
    state: &mut AppState,
    events: &mut Vec<AppIntent>,
) {
    if state.positions.is_empty() {
        ui.label("No positions placed");
    }

    let selected_id = state.positions.selected_id.as_deref();
    for mark in state.positions.marks().values() {
        ui.horizontal(|ui| {
            let is_selected = selected_id == Some(mark.id.as_str());
            if ui.selectable_label(is_selected, &mark.name).clicked() {
                let mark_id = if is_selected {
                    None
                } else {
                    Some(mark.id.clone())
                };
                events.push(AppIntent::PositionSelected { mark_id });
            }
            if ui.small_button("⌖").on_hover_text("Localize").clicked() {
                events.push(AppIntent::PositionLocalizeRequested {
                    mark_id: mark.id.clone(),
                });
            }
        });
    }

    let Some(mark) = state.positions.selected_mark() else {
        return;
    };
    let mark_id = mark.id.clone();
    let editable = mark.is_editing;

    ui.separator();
    let form = &mut state.ui.position_form;
    ui.add_enabled_ui(editable, |ui| {
        egui::Grid::new("position_form").num_columns(2).show(ui, |ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut form.name);
            ui.end_row();
            ui.label("Latitude:");
            ui.add(egui::DragValue::new(&mut form.lat).speed(0.0001).max_decimals(6));
            ui.end_row();
            ui.label("Longitude:");
            ui.add(egui::DragValue::new(&mut form.lon).speed(0.0001).max_decimals(6));
            ui.end_row();
        });
    });

    ui.horizontal(|ui| {
        if editable {
            if ui.button("Save").clicked() {
                events.push(AppIntent::PositionSaveRequested {
                    mark_id: mark_id.clone(),
                    name: form.name.clone(),
                    lat: form.lat,
                    lon: form.lon,
                });
            }
            if ui.button("Cancel").clicked() {
                events.push(AppIntent::PositionEditCancelled {
                    mark_id: mark_id.clone(),
                });
            }
        } else if ui.button("Edit").clicked() {
            events.push(AppIntent::PositionEditingToggled {
                mark_id: mark_id.clone(),
            });
        }
        if ui.button("🗑 Delete").clicked() {
            events.push(AppIntent::PositionDeleteRequested { mark_id });
        }
    });
}
