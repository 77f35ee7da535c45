//! Zonen-Rechteck: Press setzt den Anker, Move zieht die Gegenecke,
//! Release übergibt die normalisierte Box an das Backend.
//!
//! Nach einem Commit sperrt das Tool weitere Rechtecke, bis der
//! Erstellungsmodus verlassen wird oder das Backend ablehnt.

use super::{GestureAction, GestureCommit, GestureTool};
use crate::core::{GeoBounds, GeoPoint};
use crate::shared::Overlay;

/// Statustext, solange eine neue Zone auf Bestätigung wartet.
pub(crate) const PENDING_ZONE_STATUS: &str = "Save or cancel the new zone first";

/// Phase des Rechteck-Drags.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) enum RectPhase {
    #[default]
    Idle,
    Dragging {
        anchor: GeoPoint,
        current: GeoPoint,
    },
}

/// Zonen-Rechteck-Tool
#[derive(Debug, Default)]
pub struct ZoneRectTool {
    pub(crate) phase: RectPhase,
    /// Warte-auf-Bestätigung: ein Rechteck wurde übergeben, die neue Zone ist noch offen
    awaiting_accept: bool,
}

impl ZoneRectTool {
    /// Erstellt ein neues Tool im Ruhezustand.
    pub fn new() -> Self {
        Self {
            phase: RectPhase::Idle,
            awaiting_accept: false,
        }
    }

    /// `true`, solange eine übergebene Zone auf Bestätigung wartet.
    pub fn is_awaiting_accept(&self) -> bool {
        self.awaiting_accept
    }

    /// `true`, während ein Rechteck aufgezogen wird.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, RectPhase::Dragging { .. })
    }
}

impl GestureTool for ZoneRectTool {
    fn name(&self) -> &str {
        "Zone"
    }

    fn status_text(&self) -> &str {
        if self.awaiting_accept {
            PENDING_ZONE_STATUS
        } else if self.is_dragging() {
            "Release to create the zone"
        } else {
            "Drag to draw a zone"
        }
    }

    fn on_press(&mut self, pos: GeoPoint) -> GestureAction {
        if self.awaiting_accept {
            log::debug!("Zonen-Rechteck gesperrt: vorherige Zone noch offen");
            return GestureAction::Ignored;
        }
        if self.is_dragging() {
            return GestureAction::Ignored;
        }
        self.phase = RectPhase::Dragging {
            anchor: pos,
            current: pos,
        };
        GestureAction::Updated
    }

    fn on_move(&mut self, pos: GeoPoint) -> GestureAction {
        match &mut self.phase {
            RectPhase::Dragging { current, .. } => {
                *current = pos;
                GestureAction::Updated
            }
            RectPhase::Idle => GestureAction::Ignored,
        }
    }

    fn on_release(&mut self, pos: GeoPoint) -> GestureAction {
        let RectPhase::Dragging { anchor, .. } = self.phase else {
            return GestureAction::Ignored;
        };
        self.phase = RectPhase::Idle;

        let bounds = GeoBounds::from_corners(anchor, pos);
        if bounds.is_degenerate() {
            log::debug!("Zonen-Rechteck ohne Fläche verworfen");
            return GestureAction::Updated;
        }
        self.awaiting_accept = true;
        GestureAction::Commit(GestureCommit::Zone(bounds))
    }

    fn overlay(&self) -> Option<Overlay> {
        match self.phase {
            RectPhase::Dragging { anchor, current } => {
                Some(Overlay::Rectangle(GeoBounds::from_corners(anchor, current)))
            }
            RectPhase::Idle => None,
        }
    }

    fn has_pending_input(&self) -> bool {
        self.awaiting_accept || self.is_dragging()
    }

    fn detach(&mut self) {
        self.phase = RectPhase::Idle;
        self.awaiting_accept = false;
    }

    fn on_commit_settled(&mut self, accepted: bool) {
        if !accepted {
            self.awaiting_accept = false;
        }
    }
}

#[cfg(test)]
mod tests;
