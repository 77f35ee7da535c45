//! Handler für Messungen.

use crate::app::use_cases;
use crate::app::AppState;

/// Hebt eine Messung hervor.
pub fn select(state: &mut AppState, measurement_id: Option<String>) {
    use_cases::measurements::select(state, measurement_id);
}
