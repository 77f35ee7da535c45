//! Drag-Start/-Ende: Kamera-Pan im Navigationsmodus, Geste in Erstellungsmodi.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Erkennt Drag-Beginn und bestimmt den Drag-Modus.
    pub(crate) fn handle_drag_start(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        if ctx.mode.is_idle() {
            self.primary_drag_mode = PrimaryDragMode::CameraPan;
            return;
        }

        // press_origin() liefert die exakte Klickposition (vor Drag-Schwelle)
        let press_pos = ctx
            .ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| ctx.response.interact_pointer_pos());
        if let Some(pointer_pos) = press_pos {
            events.push(AppIntent::MapPointerPressed {
                pos: ctx.screen_to_geo(pointer_pos),
            });
            self.last_gesture_pos = Some(pointer_pos);
        }
        self.primary_drag_mode = PrimaryDragMode::Gesture;
    }

    /// Beendet den aktiven Drag.
    pub(crate) fn handle_drag_end(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_stopped_by(egui::PointerButton::Primary) {
            return;
        }

        if self.primary_drag_mode == PrimaryDragMode::Gesture {
            let release_pos = ctx
                .ui
                .input(|i| i.pointer.interact_pos())
                .or(self.last_gesture_pos);
            if let Some(pointer_pos) = release_pos {
                events.push(AppIntent::MapPointerReleased {
                    pos: ctx.screen_to_geo(pointer_pos),
                });
            }
        }

        self.primary_drag_mode = PrimaryDragMode::None;
        self.last_gesture_pos = None;
    }
}
