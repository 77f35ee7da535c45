//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use glam::DVec2;

/// Aktualisiert die Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Verschiebt den Ausschnitt um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta_px: [f32; 2]) {
    let delta = DVec2::new(f64::from(delta_px[0]), f64::from(delta_px[1]));
    state.view.camera.pan_pixels(delta);
}

/// Zoomt um `steps` Stufen zum Fokuspunkt (Bildschirmkoordinaten).
pub fn zoom(state: &mut AppState, steps: f64, focus_px: [f32; 2]) {
    let focus = DVec2::new(f64::from(focus_px[0]), f64::from(focus_px[1]));
    let viewport = state.view.viewport();
    state.view.camera.zoom_towards(steps, focus, viewport);
}

/// Führt einen Schritt einer laufenden Pan-Animation aus.
///
/// Gibt `true` zurück, solange weitere Frames benötigt werden.
pub fn advance_animation(state: &mut AppState, dt_seconds: f64) -> bool {
    state.view.camera.step_animation(dt_seconds)
}
