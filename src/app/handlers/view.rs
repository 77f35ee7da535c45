//! Handler für Kamera und Viewport.

use crate::app::use_cases;
use crate::app::AppState;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::camera::set_viewport_size(state, size);
}

/// Verschiebt die Kamera um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta_px: [f32; 2]) {
    use_cases::camera::pan(state, delta_px);
}

/// Zoomt stufenweise zum Fokuspunkt.
pub fn zoom(state: &mut AppState, steps: f64, focus_px: [f32; 2]) {
    use_cases::camera::zoom(state, steps, focus_px);
}

/// Setzt vorgemerkte Localize-Anforderungen in Kamera-Befehle um.
pub fn apply_localize_requests(state: &mut AppState) {
    use_cases::localize::apply(state);
}
