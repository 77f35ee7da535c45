//! Use-Case-Funktionen für den Interaktionsmodus.

use crate::app::state::NativeInteractions;
use crate::app::{AppState, InteractionMode};

/// Setzt den Interaktionsmodus.
///
/// Das Tool des bisherigen Modus wird gelöst (Live-Vorschau verworfen,
/// Sperren gelöst), native Interaktionen folgen dem neuen Modus.
pub fn set_mode(state: &mut AppState, mode: InteractionMode) {
    let previous = state.mode;
    if previous == mode {
        return;
    }

    if let Some(tool) = state.gestures.tool_mut(previous) {
        tool.detach();
    }
    state.mode = mode;
    state.view.native = NativeInteractions::for_mode(mode);

    log::info!("Interaktionsmodus: {} -> {}", previous, mode);
}

/// Schaltet einen Modus um: ist er aktiv, zurück zu `Idle`, sonst aktivieren.
pub fn toggle_mode(state: &mut AppState, mode: InteractionMode) {
    if state.mode == mode {
        set_mode(state, InteractionMode::Idle);
    } else {
        set_mode(state, mode);
    }
}
