//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod app;
pub mod backend;
pub mod gesture;
pub mod measurements;
pub mod mode;
pub mod positions;
pub mod view;
pub mod zones;
