//! Handler für die Anwendungssteuerung.

use crate::app::AppState;

/// Markiert die Anwendung zum Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
