//! Pointer-Delta-Verarbeitung: Kamera-Pan und Gesten-Bewegung.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Maus-Bewegungs-Deltas für Kamera-Pan und Live-Vorschau.
    pub(crate) fn handle_pointer_delta(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        if ctx.response.dragged_by(egui::PointerButton::Primary) {
            match self.primary_drag_mode {
                PrimaryDragMode::Gesture => {
                    if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                        events.push(AppIntent::MapPointerMoved {
                            pos: ctx.screen_to_geo(pointer_pos),
                        });
                        self.last_gesture_pos = Some(pointer_pos);
                    }
                }
                PrimaryDragMode::CameraPan | PrimaryDragMode::None => {
                    events.push(AppIntent::CameraPanned {
                        delta_px: [pointer_delta.x, pointer_delta.y],
                    });
                }
            }
        } else if ctx.response.dragged_by(egui::PointerButton::Middle)
            || ctx.response.dragged_by(egui::PointerButton::Secondary)
        {
            events.push(AppIntent::CameraPanned {
                delta_px: [pointer_delta.x, pointer_delta.y],
            });
        }
    }
}
