//! Gemeinsamer Zeichen-Kontext der Teil-Renderer.

use crate::core::{GeoPoint, MapCamera};
use crate::shared::{EditorOptions, RenderScene};
use glam::DVec2;

pub(crate) struct RenderContext<'a> {
    pub painter: &'a egui::Painter,
    pub rect: egui::Rect,
    pub camera: &'a MapCamera,
    pub viewport: DVec2,
    pub options: &'a EditorOptions,
}

impl<'a> RenderContext<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect, scene: &'a RenderScene) -> Self {
        Self {
            painter,
            rect,
            camera: &scene.camera,
            viewport: DVec2::new(f64::from(rect.width()), f64::from(rect.height())),
            options: &scene.options,
        }
    }

    /// Geo-Punkt → absolute Bildschirmposition.
    pub fn to_screen(&self, point: GeoPoint) -> egui::Pos2 {
        let local = self.camera.geo_to_screen(point, self.viewport);
        self.rect.min + egui::vec2(local.x as f32, local.y as f32)
    }

    pub fn stroke(&self, color: [f32; 4]) -> egui::Stroke {
        egui::Stroke::new(self.options.stroke_width_px, color32(color))
    }
}

/// RGBA (0..1) → `Color32`.
pub fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}
