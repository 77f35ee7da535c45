//! Zonen als Rechtecke mit stilabhängiger Füllung.

use super::types::{color32, RenderContext};
use crate::shared::ZoneShape;

pub(crate) fn render_zones(ctx: &RenderContext, zones: &[ZoneShape]) {
    for zone in zones {
        let rect = egui::Rect::from_two_pos(
            ctx.to_screen(zone.bounds.north_west()),
            ctx.to_screen(zone.bounds.south_east()),
        );
        if !rect.intersects(ctx.rect) {
            continue;
        }

        let fill = zone
            .style
            .fill_color(ctx.options)
            .map(color32)
            .unwrap_or(egui::Color32::TRANSPARENT);
        let stroke = ctx.stroke(zone.style.stroke_color(ctx.options));
        ctx.painter
            .rect(rect, 0.0, fill, stroke, egui::StrokeKind::Middle);

        ctx.painter.text(
            rect.left_top() + egui::vec2(4.0, 4.0),
            egui::Align2::LEFT_TOP,
            &zone.name,
            egui::FontId::proportional(12.0),
            stroke.color,
        );
    }
}
