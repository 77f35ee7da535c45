use crate::app::tools::{zone_rect, GestureSet};
use crate::backend::BackendCall;
use crate::app::CommandLog;
use crate::core::GeoPoint;
use crate::shared::EditorOptions;

use super::{
    BackendQueue, InteractionMode, MeasurementStore, PositionStore, UiState, ViewState, ZoneStore,
};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Zonen (autoritativ, Backend-gestützt)
    pub zones: ZoneStore,
    /// Positions-Marker (nur clientseitig)
    pub positions: PositionStore,
    /// Abgeschlossene Messungen
    pub measurements: MeasurementStore,
    /// Aktiver Interaktionsmodus
    pub mode: InteractionMode,
    /// Gesten-Zustandsautomaten, einer pro Erstellungsmodus
    pub gestures: GestureSet,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Ausstehende Backend-Aufrufe
    pub backend: BackendQueue,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State; Startausschnitt kommt aus den Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let [lat, lon] = options.start_center;
        Self {
            zones: ZoneStore::new(),
            positions: PositionStore::new(),
            measurements: MeasurementStore::new(),
            mode: InteractionMode::Idle,
            gestures: GestureSet::new(),
            view: ViewState::new(GeoPoint::new(lat, lon), options.start_zoom),
            ui: UiState::new(),
            backend: BackendQueue::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Statustext des aktiven Gesten-Werkzeugs (None im Idle-Modus).
    pub fn gesture_status(&self) -> Option<&str> {
        if self.mode.is_creating_zone() && self.zone_creation_blocked() {
            return Some(zone_rect::PENDING_ZONE_STATUS);
        }
        self.gestures.tool(self.mode).map(|tool| tool.status_text())
    }

    /// `true`, solange eine neue Zone unbestätigt ist oder ihr Anlegen noch läuft.
    ///
    /// Es gibt höchstens eine Zone mit `is_creating`; weitere Rechtecke
    /// werden bis dahin abgewiesen, auch über Moduswechsel hinweg.
    pub fn zone_creation_blocked(&self) -> bool {
        self.zones.creating_zone_id().is_some()
            || self
                .backend
                .has_pending(|call| matches!(call, BackendCall::CreateZone(_)))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
