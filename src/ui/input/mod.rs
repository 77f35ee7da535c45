//! Viewport-Input-Handling: Maus-Events, Drag, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks` — Klick-Events (Einfach-/Doppel-Klick)
//! - `drag_primary` — Drag-Start/-Ende (Kamera-Pan oder Geste)
//! - `pointer_delta` — Pan-Deltas und Zeigerbewegung während aktiver Drags
//! - `zoom` — Scroll-Zoom auf Mausposition
//!
//! Das Gating nach Interaktionsmodus passiert im Intent-Mapping; hier wird
//! nur entschieden, welche Rohereignisse überhaupt entstehen.

mod clicks;
mod drag_primary;
mod pointer_delta;
mod zoom;

use super::keyboard;
use crate::app::{AppIntent, InteractionMode};
use crate::core::{GeoPoint, MapCamera};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Modus des primären (Links-)Drags im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrimaryDragMode {
    #[default]
    None,
    CameraPan,
    /// Drag gehört der Geste des aktiven Erstellungsmodus
    Gesture,
}

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub camera: &'a MapCamera,
    pub mode: InteractionMode,
    pub options: &'a EditorOptions,
}

impl ViewportContext<'_> {
    /// Rechnet eine Bildschirmposition in Geo-Koordinaten um.
    pub(crate) fn screen_to_geo(&self, pointer_pos: egui::Pos2) -> GeoPoint {
        let local = self.local_px(pointer_pos);
        self.camera.screen_to_geo(
            DVec2::new(f64::from(local[0]), f64::from(local[1])),
            DVec2::new(
                f64::from(self.viewport_size[0]),
                f64::from(self.viewport_size[1]),
            ),
        )
    }

    /// Position relativ zur linken oberen Viewport-Ecke.
    pub(crate) fn local_px(&self, pointer_pos: egui::Pos2) -> [f32; 2] {
        let local = pointer_pos - self.response.rect.min;
        [local.x, local.y]
    }
}

/// Verwaltet den Input-Zustand für das Viewport (Drag, Scroll)
#[derive(Default)]
pub struct InputState {
    pub(crate) primary_drag_mode: PrimaryDragMode,
    /// Zuletzt gemeldete Zeigerposition während einer Geste
    last_gesture_pos: Option<egui::Pos2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_drag_mode: PrimaryDragMode::None,
            last_gesture_pos: None,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-
    /// und Drag-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &MapCamera,
        mode: InteractionMode,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera,
            mode,
            options,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(keyboard::collect_keyboard_intents(ui, mode));

        self.handle_drag_start(&ctx, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_drag_end(&ctx, &mut events);
        self.handle_clicks(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}
