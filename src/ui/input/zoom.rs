//! Scroll-Zoom auf Mausposition.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Scroll-Zoom auf die aktuelle Mausposition.
    ///
    /// Eine Rasten-Bewegung entspricht `scroll_zoom_step` Zoom-Stufen.
    pub(crate) fn handle_scroll_zoom(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.hovered() {
            return;
        }
        let scroll = ctx.ui.input(|i| i.raw_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let step = ctx.options.scroll_zoom_step;
        let steps = if scroll > 0.0 { step } else { -step };
        let focus_px = ctx
            .response
            .hover_pos()
            .map(|pos| ctx.local_px(pos))
            .unwrap_or([ctx.viewport_size[0] / 2.0, ctx.viewport_size[1] / 2.0]);
        events.push(AppIntent::ScrollZoomed { steps, focus_px });
    }
}
