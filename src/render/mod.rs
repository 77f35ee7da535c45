//! Zeichnet eine `RenderScene` mit dem egui-Painter in den Karten-Viewport.

mod marker_renderer;
mod overlay_renderer;
mod types;
mod zone_renderer;

pub use crate::shared::RenderScene;
use types::RenderContext;

/// Hintergrundfarbe des Viewports (ohne Kacheln).
const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(24, 28, 34);

/// Zeichnet eine komplette Szene.
///
/// Reihenfolge: Zonen, Messungen, Marker, Live-Vorschau.
pub fn render_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    painter.rect_filled(rect, 0.0, BACKGROUND);

    let ctx = RenderContext::new(painter, rect, scene);
    zone_renderer::render_zones(&ctx, &scene.zones);
    overlay_renderer::render_measurements(
        &ctx,
        &scene.measurements,
        scene.selected_measurement_id.as_deref(),
    );
    marker_renderer::render_marks(&ctx, &scene.marks, scene.selected_mark_id.as_deref());
    if let Some(overlay) = &scene.overlay {
        overlay_renderer::render_overlay(&ctx, overlay);
    }
}
