//! Trait-basierte Gesten-Zustandsautomaten für die Erstellungsmodi.
//!
//! Jede Geste implementiert den `GestureTool`-Trait und gehört genau einem
//! `InteractionMode`. Tools erzeugen reine Daten (`GestureCommit`),
//! die Mutation erfolgt zentral in `handlers::gesture`.

/// GestureTool-Trait — Schnittstelle für alle Gesten.
mod gesture_tool;
/// Messlinie: Press setzt Start, Release schließt die Messung ab.
pub mod measure_line;
/// Positions-Marker: ein Klick setzt den Marker.
pub mod position_place;
/// Zonen-Rechteck mit Warte-auf-Bestätigung-Sperre.
pub mod zone_rect;

pub use gesture_tool::GestureTool;
pub use measure_line::MeasureLineTool;
pub use position_place::PositionPlaceTool;
pub use zone_rect::ZoneRectTool;

use super::state::InteractionMode;
use crate::core::{GeoBounds, GeoPoint};

/// Abgeschlossene Geste als reine Daten.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureCommit {
    /// Rechteck für eine neue Zone (normalisiert)
    Zone(GeoBounds),
    /// Position eines neuen Markers
    Position(GeoPoint),
    /// Punktfolge einer neuen Messung
    Measurement(Vec<GeoPoint>),
}

/// Rückgabe der Gesten-Callbacks — steuert den Ablauf im Handler.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureAction {
    /// Ereignis passt nicht zum aktuellen Zustand
    Ignored,
    /// Interner Zustand bzw. Vorschau geändert
    Updated,
    /// Geste abgeschlossen, Ergebnis übernehmen
    Commit(GestureCommit),
}

/// Hält je ein Tool pro Erstellungsmodus und routet nach Modus.
#[derive(Debug, Default)]
pub struct GestureSet {
    pub zone: ZoneRectTool,
    pub position: PositionPlaceTool,
    pub measure: MeasureLineTool,
}

impl GestureSet {
    /// Erstellt alle Tools im Ruhezustand.
    pub fn new() -> Self {
        Self {
            zone: ZoneRectTool::new(),
            position: PositionPlaceTool::new(),
            measure: MeasureLineTool::new(),
        }
    }

    /// Tool des Modus (None für `Idle`).
    pub fn tool(&self, mode: InteractionMode) -> Option<&dyn GestureTool> {
        match mode {
            InteractionMode::Idle => None,
            InteractionMode::CreatingZone => Some(&self.zone),
            InteractionMode::CreatingPosition => Some(&self.position),
            InteractionMode::CreatingMeasurement => Some(&self.measure),
        }
    }

    /// Mutables Tool des Modus (None für `Idle`).
    pub fn tool_mut(&mut self, mode: InteractionMode) -> Option<&mut dyn GestureTool> {
        match mode {
            InteractionMode::Idle => None,
            InteractionMode::CreatingZone => Some(&mut self.zone),
            InteractionMode::CreatingPosition => Some(&mut self.position),
            InteractionMode::CreatingMeasurement => Some(&mut self.measure),
        }
    }
}
