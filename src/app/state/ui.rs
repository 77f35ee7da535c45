use crate::core::{PositionMark, Zone, ZoneType};

/// Eingabefelder des Zonen-Eigenschaften-Panels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneForm {
    /// Zone, auf die sich das Formular bezieht
    pub zone_id: Option<String>,
    pub name: String,
    pub zone_type: ZoneType,
}

impl ZoneForm {
    /// Übernimmt die gespeicherten Werte einer Zone.
    pub fn load(&mut self, zone: &Zone) {
        self.zone_id = Some(zone.id.clone());
        self.name = zone.name.clone();
        self.zone_type = zone.zone_type;
    }

    /// Leert das Formular.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Eingabefelder des Positions-Panels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionForm {
    pub mark_id: Option<String>,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl PositionForm {
    /// Übernimmt die gespeicherten Werte eines Markers.
    pub fn load(&mut self, mark: &PositionMark) {
        self.mark_id = Some(mark.id.clone());
        self.name = mark.name.clone();
        self.lat = mark.lat;
        self.lon = mark.lon;
    }

    /// Leert das Formular.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Formular der selektierten Zone
    pub zone_form: ZoneForm,
    /// Formular des selektierten Markers
    pub position_form: PositionForm,
    /// Letzter Backend- oder Eingabefehler (Status-Bar)
    pub last_error: Option<String>,
    /// Statusnachricht für die Status-Bar
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
