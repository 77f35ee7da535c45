//! Positions-Marker: der nächste einfache Klick setzt den Marker.

use super::{GestureAction, GestureCommit, GestureTool};
use crate::core::GeoPoint;

/// Positions-Tool (einmalig, ohne Drag-Zustand)
#[derive(Debug, Default)]
pub struct PositionPlaceTool;

impl PositionPlaceTool {
    /// Erstellt ein neues Positions-Tool.
    pub fn new() -> Self {
        Self
    }
}

impl GestureTool for PositionPlaceTool {
    fn name(&self) -> &str {
        "Position"
    }

    fn status_text(&self) -> &str {
        "Click on the map to place a position"
    }

    fn on_click(&mut self, pos: GeoPoint) -> GestureAction {
        GestureAction::Commit(GestureCommit::Position(pos))
    }

    fn detach(&mut self) {}
}
