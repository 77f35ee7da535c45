//! Zonen-Liste und Zonen-Formular.

use crate::app::{AppIntent, AppState};
use crate::core::{Zone, ZoneType};

pub(super) fn render_zones_section(
    ui: &mut egui::Ui,
    state: &mut AppState,
    events: &mut Vec<AppIntent>,
) {
    if state.zones.is_empty() {
        ui.label("No zones loaded");
    }

    let selected_id = state.zones.selected_id.clone();
    for (zone, is_sub_zone) in state.zones.expanded_rows() {
        let indent = if is_sub_zone { 16.0 } else { 0.0 };
        render_zone_row(ui, &zone, selected_id.as_deref(), indent, events);
    }

    let Some(selected) = state.zones.selected_zone() else {
        return;
    };
    ui.separator();
    render_zone_form(ui, state, &selected, events);
}

fn render_zone_row(
    ui: &mut egui::Ui,
    zone: &Zone,
    selected_id: Option<&str>,
    indent: f32,
    events: &mut Vec<AppIntent>,
) {
    ui.horizontal(|ui| {
        ui.add_space(indent);
        let is_selected = selected_id == Some(zone.id.as_str());
        let mut text = egui::RichText::new(format!("{} [{}]", zone.name, zone.zone_type));
        if !zone.active {
            text = text.weak();
        }
        if ui.selectable_label(is_selected, text).clicked() {
            let zone_id = if is_selected {
                None
            } else {
                Some(zone.id.clone())
            };
            events.push(AppIntent::ZoneSelected { zone_id });
        }
        if ui.small_button("⌖").on_hover_text("Localize").clicked() {
            events.push(AppIntent::ZoneLocalizeRequested {
                zone_id: zone.id.clone(),
            });
        }
    });
}

fn render_zone_form(
    ui: &mut egui::Ui,
    state: &mut AppState,
    selected: &Zone,
    events: &mut Vec<AppIntent>,
) {
    // Unterzonen existieren nur in der expandierten Sicht und sind nicht editierbar
    let Some(zone) = state.zones.get(&selected.id) else {
        ui.label(format!("{} (part of an auto group)", selected.name));
        render_corners(ui, selected);
        render_payload(ui, selected);
        return;
    };
    let editable = zone.is_editing || zone.is_creating;
    let is_creating = zone.is_creating;
    let zone_id = zone.id.clone();

    let form = &mut state.ui.zone_form;
    ui.add_enabled_ui(editable, |ui| {
        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut form.name);
        });
        ui.horizontal(|ui| {
            ui.label("Type:");
            egui::ComboBox::from_id_salt("zone_type")
                .selected_text(form.zone_type.as_str())
                .show_ui(ui, |ui| {
                    for zone_type in ZoneType::ALL {
                        ui.selectable_value(&mut form.zone_type, zone_type, zone_type.as_str());
                    }
                });
        });
    });

    ui.horizontal(|ui| {
        if editable {
            if ui.button("Save").clicked() {
                events.push(AppIntent::ZoneSaveRequested {
                    zone_id: zone_id.clone(),
                    name: form.name.clone(),
                    zone_type: form.zone_type,
                });
            }
            if ui.button("Cancel").clicked() {
                events.push(AppIntent::ZoneEditCancelled {
                    zone_id: zone_id.clone(),
                });
            }
        } else if ui.button("Edit").clicked() {
            events.push(AppIntent::ZoneEditingToggled {
                zone_id: zone_id.clone(),
            });
        }

        if !is_creating {
            if ui.button("Refresh").clicked() {
                events.push(AppIntent::ZoneRefreshRequested {
                    zone_id: zone_id.clone(),
                });
            }
            if ui.button("🗑 Delete").clicked() {
                events.push(AppIntent::ZoneDeleteRequested { zone_id });
            }
        }
    });

    render_corners(ui, selected);
    render_payload(ui, selected);
}

/// Zeigt die Eckkoordinaten schreibgeschützt an.
fn render_corners(ui: &mut egui::Ui, zone: &Zone) {
    let sw = zone.bounds.south_west;
    let ne = zone.bounds.north_east;
    ui.label(format!("SW: {:.6}, {:.6}", sw.lat, sw.lon));
    ui.label(format!("NE: {:.6}, {:.6}", ne.lat, ne.lon));
}

/// Zeigt die Payload-Felder (ohne Unterzonen-Liste) schreibgeschützt an.
fn render_payload(ui: &mut egui::Ui, zone: &Zone) {
    let Some(payload) = &zone.payload else {
        return;
    };
    egui::CollapsingHeader::new("Data")
        .id_salt(("zone_payload", &zone.id))
        .show(ui, |ui| {
            egui::Grid::new(("payload_grid", &zone.id))
                .num_columns(2)
                .show(ui, |ui| {
                    for (key, value) in payload {
                        if key == crate::core::zone::SUB_ZONES_KEY {
                            continue;
                        }
                        ui.label(key);
                        ui.label(value.to_string());
                        ui.end_row();
                    }
                });
        });
}
