//! Render-Szene als expliziter Übergabevertrag zwischen App und Kartenansicht.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{GeoBounds, GeoPoint, MapCamera, Measurement, PositionMark, ZoneType};

/// Live-Vorschau einer laufenden Geste.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay {
    /// Rechteck beim Aufziehen einer Zone
    Rectangle(GeoBounds),
    /// Strecke beim Messen
    Line { from: GeoPoint, to: GeoPoint },
}

/// Darstellungsvariante einer Zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneStyle {
    /// Selektierte Zone (hervorgehoben)
    Selected,
    /// Inaktive Zone (gedämpft)
    Inactive,
    /// Auto-Group: nur Umriss, keine Füllung
    GroupOutline,
    Normal,
}

impl ZoneStyle {
    /// Wählt den Stil. Reihenfolge: selektiert, inaktiv, Auto-Group, normal.
    pub fn classify(selected: bool, active: bool, zone_type: ZoneType) -> Self {
        if selected {
            ZoneStyle::Selected
        } else if !active {
            ZoneStyle::Inactive
        } else if zone_type == ZoneType::AutoGroup {
            ZoneStyle::GroupOutline
        } else {
            ZoneStyle::Normal
        }
    }

    /// Umrissfarbe aus den Optionen.
    pub fn stroke_color(&self, options: &EditorOptions) -> [f32; 4] {
        match self {
            ZoneStyle::Selected => options.zone_color_selected,
            ZoneStyle::Inactive => options.zone_color_inactive,
            ZoneStyle::GroupOutline => options.zone_color_auto_group,
            ZoneStyle::Normal => options.zone_color_default,
        }
    }

    /// Füllfarbe (None = nur Umriss).
    pub fn fill_color(&self, options: &EditorOptions) -> Option<[f32; 4]> {
        if *self == ZoneStyle::GroupOutline {
            return None;
        }
        let [r, g, b, _] = self.stroke_color(options);
        Some([r, g, b, options.zone_fill_opacity])
    }
}

/// Eine darzustellende Zone aus der expandierten Sicht.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneShape {
    pub id: String,
    pub name: String,
    pub bounds: GeoBounds,
    pub style: ZoneStyle,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Zonen inklusive Auto-Group-Unterzonen, selektierte zuletzt
    pub zones: Vec<ZoneShape>,
    /// Positions-Marker
    pub marks: Vec<PositionMark>,
    /// Selektierter Marker
    pub selected_mark_id: Option<String>,
    /// Abgeschlossene Messungen
    pub measurements: Vec<Measurement>,
    /// Hervorgehobene Messung
    pub selected_measurement_id: Option<String>,
    /// Live-Vorschau der aktiven Geste
    pub overlay: Option<Overlay>,
    /// Kamera-Zustand für diesen Frame
    pub camera: MapCamera,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
            && self.marks.is_empty()
            && self.measurements.is_empty()
            && self.overlay.is_none()
    }
}
