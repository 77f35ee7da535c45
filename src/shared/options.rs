//! Zentrale Konfiguration für den Zone Map Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Backend ─────────────────────────────────────────────────────────

/// Basis-URL des Zonen-Backends.
pub const BACKEND_URL: &str = "http://localhost:8001/";

// ── Kamera ──────────────────────────────────────────────────────────

/// Startmittelpunkt der Karte (Lat, Lon).
pub const START_CENTER: [f64; 2] = [48.946518848754174, 21.16296710612785];
/// Start-Zoom-Level.
pub const START_ZOOM: f64 = 13.0;
/// Rand in Pixeln beim Ausrichten auf eine Zone.
pub const FIT_BOUNDS_PADDING_PX: f64 = 200.0;
/// Zoom-Stufen pro Mausrad-Raste.
pub const SCROLL_ZOOM_STEP: f64 = 0.5;

// ── Erstellung ──────────────────────────────────────────────────────

/// Vorbelegter Name neuer Zonen.
pub const NEW_ZONE_NAME: &str = "New Zone";
/// Vorbelegter Name neuer Positions-Marker.
pub const NEW_POSITION_NAME: &str = "New Position";

// ── Darstellung ─────────────────────────────────────────────────────

/// Farbe normaler Zonen (RGBA: Blau).
pub const ZONE_COLOR_DEFAULT: [f32; 4] = [0.2, 0.4, 1.0, 1.0];
/// Farbe der selektierten Zone (RGBA: Rot).
pub const ZONE_COLOR_SELECTED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe inaktiver Zonen (RGBA: Grau).
pub const ZONE_COLOR_INACTIVE: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
/// Umrissfarbe von Auto-Groups (RGBA: Grün).
pub const ZONE_COLOR_AUTO_GROUP: [f32; 4] = [0.0, 0.8, 0.0, 1.0];
/// Deckkraft der Zonen-Füllung.
pub const ZONE_FILL_OPACITY: f32 = 0.2;
/// Farbe der Positions-Marker (RGBA: Orange).
pub const MARKER_COLOR: [f32; 4] = [1.0, 0.55, 0.0, 1.0];
/// Farbe des selektierten Markers (RGBA: Rot).
pub const MARKER_COLOR_SELECTED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Marker-Radius in Pixeln (auch Klick-Radius).
pub const MARKER_RADIUS_PX: f32 = 7.0;
/// Farbe der Messlinien (RGBA: Magenta).
pub const MEASUREMENT_COLOR: [f32; 4] = [0.9, 0.1, 0.9, 1.0];
/// Farbe der Live-Vorschau beim Aufziehen (RGBA: Gelb).
pub const OVERLAY_COLOR: [f32; 4] = [1.0, 0.85, 0.0, 1.0];
/// Linienstärke für Umrisse, Messlinien und Vorschau in Pixeln.
pub const STROKE_WIDTH_PX: f32 = 2.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `zone_map_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Backend ─────────────────────────────────────────────────
    /// Basis-URL des Zonen-Backends (mit abschließendem `/`)
    pub backend_url: String,

    // ── Kamera ──────────────────────────────────────────────────
    /// Startmittelpunkt [Lat, Lon]
    pub start_center: [f64; 2],
    /// Start-Zoom-Level
    pub start_zoom: f64,
    /// Rand in Pixeln beim Ausrichten auf eine Zone
    pub fit_bounds_padding_px: f64,
    /// Zoom-Stufen pro Mausrad-Raste
    pub scroll_zoom_step: f64,

    // ── Erstellung ──────────────────────────────────────────────
    /// Name neuer Zonen
    pub new_zone_name: String,
    /// Name neuer Positions-Marker
    pub new_position_name: String,

    // ── Zonen ───────────────────────────────────────────────────
    pub zone_color_default: [f32; 4],
    pub zone_color_selected: [f32; 4],
    pub zone_color_inactive: [f32; 4],
    pub zone_color_auto_group: [f32; 4],
    /// Deckkraft der Füllung (0.0 = keine Füllung)
    pub zone_fill_opacity: f32,

    // ── Marker & Linien ─────────────────────────────────────────
    pub marker_color: [f32; 4],
    pub marker_color_selected: [f32; 4],
    /// Marker-Radius in Pixeln
    pub marker_radius_px: f32,
    pub measurement_color: [f32; 4],
    pub overlay_color: [f32; 4],
    /// Linienstärke in Pixeln
    pub stroke_width_px: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            backend_url: BACKEND_URL.to_string(),

            start_center: START_CENTER,
            start_zoom: START_ZOOM,
            fit_bounds_padding_px: FIT_BOUNDS_PADDING_PX,
            scroll_zoom_step: SCROLL_ZOOM_STEP,

            new_zone_name: NEW_ZONE_NAME.to_string(),
            new_position_name: NEW_POSITION_NAME.to_string(),

            zone_color_default: ZONE_COLOR_DEFAULT,
            zone_color_selected: ZONE_COLOR_SELECTED,
            zone_color_inactive: ZONE_COLOR_INACTIVE,
            zone_color_auto_group: ZONE_COLOR_AUTO_GROUP,
            zone_fill_opacity: ZONE_FILL_OPACITY,

            marker_color: MARKER_COLOR,
            marker_color_selected: MARKER_COLOR_SELECTED,
            marker_radius_px: MARKER_RADIUS_PX,
            measurement_color: MEASUREMENT_COLOR,
            overlay_color: OVERLAY_COLOR,
            stroke_width_px: STROKE_WIDTH_PX,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("zone_map_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("zone_map_editor.toml")
    }
}
