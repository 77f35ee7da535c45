//! Zeitbasierte ID-Vergabe für clientseitige Objekte.

use std::time::{SystemTime, UNIX_EPOCH};

/// Vergibt IDs aus dem Unix-Zeitstempel in Millisekunden.
///
/// Innerhalb derselben Millisekunde wird hochgezählt, die IDs bleiben
/// dadurch streng monoton und eindeutig.
#[derive(Debug, Default)]
pub struct TimeIdGenerator {
    last: u128,
}

impl TimeIdGenerator {
    /// Erstellt einen neuen Generator.
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Nächste eindeutige ID.
    pub fn next_id(&mut self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        self.last = now.max(self.last + 1);
        self.last.to_string()
    }
}
