//! GestureTool-Trait — Schnittstelle für alle Gesten-Zustandsautomaten.

use crate::core::GeoPoint;
use crate::shared::Overlay;

use super::GestureAction;

/// Schnittstelle für die Gesten der Erstellungsmodi (Zone, Position, Messung).
///
/// Tools sind zustandsbehaftet (Press → Move → Release) und erzeugen
/// Live-Vorschau sowie ein `GestureCommit` als reine Daten. Die Mutation
/// der Stores erfolgt zentral im Gesten-Handler.
pub trait GestureTool {
    /// Anzeigename für Logs
    fn name(&self) -> &str;

    /// Statustext für Toolbar/Status-Bar (z.B. "Drag to draw a zone")
    fn status_text(&self) -> &str;

    /// Maustaste gedrückt.
    fn on_press(&mut self, _pos: GeoPoint) -> GestureAction {
        GestureAction::Ignored
    }

    /// Maus bewegt (bei gedrückter Taste oder ohne).
    fn on_move(&mut self, _pos: GeoPoint) -> GestureAction {
        GestureAction::Ignored
    }

    /// Maustaste losgelassen.
    fn on_release(&mut self, _pos: GeoPoint) -> GestureAction {
        GestureAction::Ignored
    }

    /// Einfacher Klick ohne Drag.
    fn on_click(&mut self, _pos: GeoPoint) -> GestureAction {
        GestureAction::Ignored
    }

    /// Live-Vorschau der laufenden Geste.
    fn overlay(&self) -> Option<Overlay> {
        None
    }

    /// Hat das Tool angefangene Eingaben (Drag läuft oder Bestätigung ausstehend)?
    fn has_pending_input(&self) -> bool {
        false
    }

    /// Tool vom Eingabestrom lösen (Moduswechsel): Vorschau verwerfen, Sperren lösen.
    fn detach(&mut self);

    /// Rückmeldung, ob ein Commit angenommen wurde (z.B. Backend-Antwort).
    fn on_commit_settled(&mut self, _accepted: bool) {}
}
