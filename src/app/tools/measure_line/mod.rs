//! Messlinie: Press setzt den Startpunkt, Move zieht den Endpunkt mit,
//! Release schließt die Messung mit beiden Endpunkten ab.

use super::{GestureAction, GestureCommit, GestureTool};
use crate::core::GeoPoint;
use crate::shared::Overlay;

/// Phase der Messung.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) enum LinePhase {
    #[default]
    Idle,
    Dragging {
        start: GeoPoint,
        end: GeoPoint,
    },
}

/// Mess-Tool
#[derive(Debug, Default)]
pub struct MeasureLineTool {
    pub(crate) phase: LinePhase,
}

impl MeasureLineTool {
    /// Erstellt ein neues Mess-Tool im Ruhezustand.
    pub fn new() -> Self {
        Self {
            phase: LinePhase::Idle,
        }
    }

    /// Aktuelle Länge der Live-Strecke in Metern (0.0 ohne Drag).
    pub fn live_distance(&self) -> f64 {
        match self.phase {
            LinePhase::Dragging { start, end } => start.distance_to(&end),
            LinePhase::Idle => 0.0,
        }
    }
}

impl GestureTool for MeasureLineTool {
    fn name(&self) -> &str {
        "Measure"
    }

    fn status_text(&self) -> &str {
        match self.phase {
            LinePhase::Idle => "Drag to measure a distance",
            LinePhase::Dragging { .. } => "Release to finish the measurement",
        }
    }

    fn on_press(&mut self, pos: GeoPoint) -> GestureAction {
        if matches!(self.phase, LinePhase::Dragging { .. }) {
            return GestureAction::Ignored;
        }
        self.phase = LinePhase::Dragging {
            start: pos,
            end: pos,
        };
        GestureAction::Updated
    }

    fn on_move(&mut self, pos: GeoPoint) -> GestureAction {
        match &mut self.phase {
            LinePhase::Dragging { end, .. } => {
                *end = pos;
                GestureAction::Updated
            }
            LinePhase::Idle => GestureAction::Ignored,
        }
    }

    fn on_release(&mut self, pos: GeoPoint) -> GestureAction {
        let LinePhase::Dragging { start, .. } = self.phase else {
            return GestureAction::Ignored;
        };
        self.phase = LinePhase::Idle;
        GestureAction::Commit(GestureCommit::Measurement(vec![start, pos]))
    }

    fn overlay(&self) -> Option<Overlay> {
        match self.phase {
            LinePhase::Dragging { start, end } => Some(Overlay::Line {
                from: start,
                to: end,
            }),
            LinePhase::Idle => None,
        }
    }

    fn has_pending_input(&self) -> bool {
        matches!(self.phase, LinePhase::Dragging { .. })
    }

    fn detach(&mut self) {
        self.phase = LinePhase::Idle;
    }
}
