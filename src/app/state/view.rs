use crate::core::{CameraCommand, GeoPoint, MapCamera};
use glam::DVec2;

use super::InteractionMode;

/// Native Karten-Interaktionen, die ein Erstellungsmodus aussetzt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeInteractions {
    /// Karte mit der Maus verschieben
    pub dragging: bool,
    /// Mausrad-Zoom
    pub scroll_zoom: bool,
    /// Zoom per Doppelklick
    pub double_click_zoom: bool,
}

impl NativeInteractions {
    /// Alle Interaktionen aktiv.
    pub const ENABLED: Self = Self {
        dragging: true,
        scroll_zoom: true,
        double_click_zoom: true,
    };

    /// Alle Interaktionen ausgesetzt.
    pub const SUSPENDED: Self = Self {
        dragging: false,
        scroll_zoom: false,
        double_click_zoom: false,
    };

    /// Zustand, der zu einem Modus gehört: ausgesetzt genau dann, wenn nicht `Idle`.
    pub fn for_mode(mode: InteractionMode) -> Self {
        if mode.is_idle() {
            Self::ENABLED
        } else {
            Self::SUSPENDED
        }
    }

    /// `true`, wenn alle drei Interaktionen aktiv sind.
    pub fn all_enabled(&self) -> bool {
        *self == Self::ENABLED
    }
}

impl Default for NativeInteractions {
    fn default() -> Self {
        Self::ENABLED
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct ViewState {
    /// Karten-Kamera
    pub camera: MapCamera,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Freigegebene native Interaktionen
    pub native: NativeInteractions,
    /// Zuletzt ausgeführter Kamera-Befehl
    pub last_camera_command: Option<CameraCommand>,
    /// Anzahl ausgeführter Kamera-Befehle seit Start
    pub camera_command_count: u64,
}

impl ViewState {
    /// Erstellt den View-Zustand mit Startausschnitt.
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self {
            camera: MapCamera::new(center, zoom),
            viewport_size: [0.0, 0.0],
            native: NativeInteractions::ENABLED,
            last_camera_command: None,
            camera_command_count: 0,
        }
    }

    /// Viewport-Größe als `DVec2` für Kamera-Berechnungen.
    pub fn viewport(&self) -> DVec2 {
        DVec2::new(self.viewport_size[0] as f64, self.viewport_size[1] as f64)
    }

    /// Führt einen Kamera-Befehl aus und merkt ihn sich.
    pub fn issue_camera_command(&mut self, command: CameraCommand) {
        let viewport = self.viewport();
        self.camera.apply(&command, viewport);
        self.last_camera_command = Some(command);
        self.camera_command_count = self.camera_command_count.saturating_add(1);
    }
}
