use std::fmt;

/// Aktiver Interaktionsmodus der Karte. Es ist immer genau ein Modus aktiv.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionMode {
    /// Keine Erstellung aktiv, die Karte verhält sich nativ (Pan, Zoom)
    #[default]
    Idle,
    /// Rechteck für eine neue Zone aufziehen
    CreatingZone,
    /// Nächster Klick setzt einen Positions-Marker
    CreatingPosition,
    /// Strecke für eine Messung aufziehen
    CreatingMeasurement,
}

impl InteractionMode {
    /// Alle Erstellungsmodi in Toolbar-Reihenfolge.
    pub const CREATION_MODES: [InteractionMode; 3] = [
        InteractionMode::CreatingZone,
        InteractionMode::CreatingPosition,
        InteractionMode::CreatingMeasurement,
    ];

    pub fn is_idle(self) -> bool {
        self == InteractionMode::Idle
    }

    pub fn is_creating_zone(self) -> bool {
        self == InteractionMode::CreatingZone
    }

    pub fn is_creating_position(self) -> bool {
        self == InteractionMode::CreatingPosition
    }

    pub fn is_creating_measure(self) -> bool {
        self == InteractionMode::CreatingMeasurement
    }

    /// Anzeigename für Toolbar und Status-Bar.
    pub fn label(self) -> &'static str {
        match self {
            InteractionMode::Idle => "Navigate",
            InteractionMode::CreatingZone => "Draw Zone",
            InteractionMode::CreatingPosition => "Place Position",
            InteractionMode::CreatingMeasurement => "Measure",
        }
    }
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::InteractionMode;

    #[test]
    fn test_exactly_one_flag_per_mode() {
        for mode in InteractionMode::CREATION_MODES {
            let flags = [
                mode.is_creating_zone(),
                mode.is_creating_position(),
                mode.is_creating_measure(),
            ];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1);
            assert!(!mode.is_idle());
        }

        let idle = InteractionMode::default();
        assert!(idle.is_idle());
        assert!(!idle.is_creating_zone() && !idle.is_creating_position());
        assert!(!idle.is_creating_measure());
    }
}
