//! Handler für den Interaktionsmodus.

use crate::app::use_cases;
use crate::app::{AppState, InteractionMode};

/// Setzt den Modus direkt.
pub fn set_mode(state: &mut AppState, mode: InteractionMode) {
    use_cases::mode::set_mode(state, mode);
}

/// Schaltet einen Modus um (Toolbar-Toggle).
pub fn toggle_mode(state: &mut AppState, mode: InteractionMode) {
    use_cases::mode::toggle_mode(state, mode);
}
