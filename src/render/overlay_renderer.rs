//! Messlinien und die Live-Vorschau der aktiven Geste.

use super::types::{color32, RenderContext};
use crate::core::Measurement;
use crate::shared::Overlay;

const LABEL_OFFSET: egui::Vec2 = egui::vec2(6.0, -6.0);

pub(crate) fn render_measurements(
    ctx: &RenderContext,
    measurements: &[Measurement],
    selected_id: Option<&str>,
) {
    for measurement in measurements {
        let points: Vec<egui::Pos2> = measurement
            .points
            .iter()
            .map(|p| ctx.to_screen(*p))
            .collect();
        let Some(&last) = points.last() else {
            continue;
        };
        let mut stroke = ctx.stroke(ctx.options.measurement_color);
        if selected_id == Some(measurement.id.as_str()) {
            stroke.width *= 2.0;
        }
        ctx.painter.add(egui::Shape::line(points, stroke));
        ctx.painter.text(
            last + LABEL_OFFSET,
            egui::Align2::LEFT_BOTTOM,
            measurement.distance_label(),
            egui::FontId::proportional(12.0),
            stroke.color,
        );
    }
}

pub(crate) fn render_overlay(ctx: &RenderContext, overlay: &Overlay) {
    let stroke = ctx.stroke(ctx.options.overlay_color);
    match *overlay {
        Overlay::Rectangle(bounds) => {
            let rect = egui::Rect::from_two_pos(
                ctx.to_screen(bounds.north_west()),
                ctx.to_screen(bounds.south_east()),
            );
            let [r, g, b, _] = ctx.options.overlay_color;
            let fill = color32([r, g, b, ctx.options.zone_fill_opacity]);
            ctx.painter
                .rect(rect, 0.0, fill, stroke, egui::StrokeKind::Middle);
        }
        Overlay::Line { from, to } => {
            let end = ctx.to_screen(to);
            ctx.painter.line_segment([ctx.to_screen(from), end], stroke);
            ctx.painter.text(
                end + LABEL_OFFSET,
                egui::Align2::LEFT_BOTTOM,
                format!("{:.2} m", from.distance_to(&to)),
                egui::FontId::proportional(12.0),
                stroke.color,
            );
        }
    }
}
