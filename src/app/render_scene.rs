//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{RenderScene, ZoneShape, ZoneStyle};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Zonen stammen aus der expandierten Sicht (Auto-Group-Unterzonen inklusive);
/// die selektierte Zone wird zuletzt gezeichnet und liegt damit oben.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let selected_id = state.zones.selected_id.as_deref();

    let mut zones: Vec<ZoneShape> = state
        .zones
        .expanded()
        .into_values()
        .map(|zone| ZoneShape {
            style: ZoneStyle::classify(
                selected_id == Some(zone.id.as_str()),
                zone.active,
                zone.zone_type,
            ),
            id: zone.id,
            name: zone.name,
            bounds: zone.bounds,
        })
        .collect();
    // Stabil: relative Reihenfolge der übrigen Zonen bleibt erhalten
    zones.sort_by_key(|shape| shape.style == ZoneStyle::Selected);

    let overlay = state
        .gestures
        .tool(state.mode)
        .and_then(|tool| tool.overlay());

    RenderScene {
        zones,
        marks: state.positions.marks().values().cloned().collect(),
        selected_mark_id: state.positions.selected_id.clone(),
        measurements: state.measurements.measurements().to_vec(),
        selected_measurement_id: state.measurements.selected_id.clone(),
        overlay,
        camera: state.view.camera.clone(),
        viewport_size,
        options: state.options.clone(),
    }
}
