//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tasten und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, InteractionMode};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Solange ein Textfeld den Fokus hat, werden nur Escape-Ereignisse ausgewertet.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, mode: InteractionMode) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (key_escape, key_z, key_p, key_m, key_r, modifiers) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::P),
            i.key_pressed(egui::Key::M),
            i.key_pressed(egui::Key::R),
            i.modifiers,
        )
    });

    if key_escape && !mode.is_idle() {
        events.push(AppIntent::CancelModeRequested);
    }

    if ui.ctx().wants_keyboard_input() || modifiers.any() {
        return events;
    }

    if key_z {
        events.push(AppIntent::CreationModeToggled {
            mode: InteractionMode::CreatingZone,
        });
    }
    if key_p {
        events.push(AppIntent::CreationModeToggled {
            mode: InteractionMode::CreatingPosition,
        });
    }
    if key_m {
        events.push(AppIntent::CreationModeToggled {
            mode: InteractionMode::CreatingMeasurement,
        });
    }
    if key_r {
        events.push(AppIntent::ZonesReloadRequested);
    }

    events
}
