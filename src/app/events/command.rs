use crate::app::state::InteractionMode;
use crate::backend::BackendReply;
use crate::core::{GeoPoint, ZoneType};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,
    /// `list_zones` anfordern
    ReloadZones,

    // ── Modi ────────────────────────────────────────────────────
    /// Modus setzen (altes Tool wird gelöst)
    SetMode { mode: InteractionMode },
    /// Modus umschalten: aktiv → Idle, sonst aktivieren
    ToggleMode { mode: InteractionMode },

    // ── Gesten (an das Tool des aktiven Modus) ──────────────────
    GesturePress { pos: GeoPoint },
    GestureMove { pos: GeoPoint },
    GestureRelease { pos: GeoPoint },
    GestureClick { pos: GeoPoint },

    // ── Kamera ──────────────────────────────────────────────────
    SetViewportSize { size: [f32; 2] },
    PanCamera { delta_px: [f32; 2] },
    ZoomCamera { steps: f64, focus_px: [f32; 2] },
    /// Offene Localize-Anforderungen in Kamera-Befehle umsetzen
    ApplyLocalizeRequests,

    // ── Zonen ───────────────────────────────────────────────────
    SelectZone { zone_id: Option<String> },
    SetZoneEditing { zone_id: String, editing: bool },
    EditZone {
        zone_id: String,
        name: String,
        zone_type: ZoneType,
    },
    CancelZoneEdit { zone_id: String },
    DeleteZone { zone_id: String },
    RefreshZone { zone_id: String },
    LocalizeZone { zone_id: String },

    // ── Positionen ──────────────────────────────────────────────
    SelectPosition { mark_id: Option<String> },
    SetPositionEditing { mark_id: String, editing: bool },
    EditPosition {
        mark_id: String,
        name: String,
        lat: f64,
        lon: f64,
    },
    CancelPositionEdit { mark_id: String },
    DeletePosition { mark_id: String },
    LocalizePosition { mark_id: String },

    // ── Messungen ───────────────────────────────────────────────
    SelectMeasurement { measurement_id: Option<String> },

    // ── Backend ─────────────────────────────────────────────────
    ApplyBackendReply { reply: BackendReply },
}
