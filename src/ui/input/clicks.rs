//! Klick-Events: Einfach- und Doppel-Klick.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Einfach- und Doppelklick-Events im Viewport.
    pub(crate) fn handle_clicks(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if ctx.response.double_clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                events.push(AppIntent::MapDoubleClicked {
                    focus_px: ctx.local_px(pointer_pos),
                });
            }
            self.primary_drag_mode = PrimaryDragMode::None;
        } else if ctx.response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                events.push(AppIntent::MapClicked {
                    pos: ctx.screen_to_geo(pointer_pos),
                });
            }
            self.primary_drag_mode = PrimaryDragMode::None;
        }
    }
}
