use crate::app::state::InteractionMode;
use crate::backend::BackendReply;
use crate::core::{GeoPoint, ZoneType};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Zonen neu vom Backend laden
    ZonesReloadRequested,

    // ── Modi ────────────────────────────────────────────────────
    /// Erstellungsmodus umschalten (Toolbar-Button)
    CreationModeToggled { mode: InteractionMode },
    /// Aktiven Modus verlassen (Escape)
    CancelModeRequested,

    // ── Karten-Zeigerereignisse (Geo-Koordinaten) ───────────────
    /// Primäre Maustaste auf der Karte gedrückt
    MapPointerPressed { pos: GeoPoint },
    /// Maus über der Karte bewegt
    MapPointerMoved { pos: GeoPoint },
    /// Primäre Maustaste losgelassen
    MapPointerReleased { pos: GeoPoint },
    /// Einfacher Klick ohne Drag
    MapClicked { pos: GeoPoint },

    // ── Native Kamera-Interaktion ───────────────────────────────
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Karte mit der Maus verschoben (Pixel-Delta)
    CameraPanned { delta_px: [f32; 2] },
    /// Mausrad-Zoom um `steps` Stufen auf Bildschirmpunkt
    ScrollZoomed { steps: f64, focus_px: [f32; 2] },
    /// Doppelklick auf die Karte
    MapDoubleClicked { focus_px: [f32; 2] },

    // ── Zonen ───────────────────────────────────────────────────
    /// Zone in Liste oder Karte gewählt (None = Selektion aufheben)
    ZoneSelected { zone_id: Option<String> },
    /// Edit-Modus einer Zone umschalten
    ZoneEditingToggled { zone_id: String },
    /// Formular speichern
    ZoneSaveRequested {
        zone_id: String,
        name: String,
        zone_type: ZoneType,
    },
    /// Formular verwerfen (neue Zonen werden gelöscht)
    ZoneEditCancelled { zone_id: String },
    /// Zone löschen
    ZoneDeleteRequested { zone_id: String },
    /// Wetterdaten einer Zone neu abrufen
    ZoneRefreshRequested { zone_id: String },
    /// Karte auf Zone ausrichten
    ZoneLocalizeRequested { zone_id: String },

    // ── Positionen ──────────────────────────────────────────────
    /// Marker gewählt (None = Selektion aufheben)
    PositionSelected { mark_id: Option<String> },
    /// Edit-Modus eines Markers umschalten
    PositionEditingToggled { mark_id: String },
    /// Formular speichern
    PositionSaveRequested {
        mark_id: String,
        name: String,
        lat: f64,
        lon: f64,
    },
    /// Formular verwerfen
    PositionEditCancelled { mark_id: String },
    /// Marker löschen
    PositionDeleteRequested { mark_id: String },
    /// Karte auf Marker schwenken
    PositionLocalizeRequested { mark_id: String },

    // ── Messungen ───────────────────────────────────────────────
    /// Messung in der Liste hervorheben
    MeasurementSelected { measurement_id: Option<String> },

    // ── System ──────────────────────────────────────────────────
    /// Antwort des Backend-Workers
    BackendReplied { reply: BackendReply },
}
