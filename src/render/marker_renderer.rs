//! Positions-Marker als Kreise mit Beschriftung.

use super::types::{color32, RenderContext};
use crate::core::PositionMark;

pub(crate) fn render_marks(ctx: &RenderContext, marks: &[PositionMark], selected_id: Option<&str>) {
    let radius = ctx.options.marker_radius_px;
    for mark in marks {
        let center = ctx.to_screen(mark.position());
        if !ctx.rect.expand(radius).contains(center) {
            continue;
        }

        let color = if selected_id == Some(mark.id.as_str()) {
            ctx.options.marker_color_selected
        } else {
            ctx.options.marker_color
        };
        ctx.painter.circle(
            center,
            radius,
            color32(color),
            egui::Stroke::new(1.5, egui::Color32::WHITE),
        );
        ctx.painter.text(
            center + egui::vec2(radius + 3.0, 0.0),
            egui::Align2::LEFT_CENTER,
            &mark.name,
            egui::FontId::proportional(12.0),
            egui::Color32::WHITE,
        );
    }
}
