use crate::core::{expand_zones, Zone, ZoneMap, ZoneRecord};

/// Autoritative Zonen-Sammlung mit Selektion und Localize-Flag.
///
/// Reine Datenhaltung: Backend-Aufrufe und Modus-Seiteneffekte liegen in
/// `use_cases::zones`.
#[derive(Debug, Default)]
pub struct ZoneStore {
    zones: ZoneMap,
    /// Aktuell selektierte Zone (kann auch eine Auto-Group-Unterzone sein)
    pub selected_id: Option<String>,
    /// Einmal-Anforderung: Kamera auf die selektierte Zone ausrichten
    pub localizing: bool,
}

impl ZoneStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            zones: ZoneMap::new(),
            selected_id: None,
            localizing: false,
        }
    }

    /// Read-only Sicht auf die autoritativen Zonen.
    pub fn zones(&self) -> &ZoneMap {
        &self.zones
    }

    /// Gibt eine autoritative Zone zurück.
    pub fn get(&self, id: &str) -> Option<&Zone> {
        self.zones.get(id)
    }

    /// Anzahl autoritativer Zonen.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// `true`, wenn keine Zone vorhanden ist.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// ID der noch unbestätigten neuen Zone, falls vorhanden.
    pub fn creating_zone_id(&self) -> Option<&str> {
        self.zones
            .values()
            .find(|zone| zone.is_creating)
            .map(|zone| zone.id.as_str())
    }

    /// Expandierte Sicht inklusive Auto-Group-Unterzonen, bei jedem Aufruf neu berechnet.
    pub fn expanded(&self) -> ZoneMap {
        expand_zones(&self.zones)
    }

    /// Expandierte Sicht in Listenreihenfolge: jede Zone, gefolgt von ihren
    /// Unterzonen. Jede ID erscheint genau einmal; `true` markiert Unterzonen.
    pub fn expanded_rows(&self) -> Vec<(Zone, bool)> {
        let mut expanded = self.expanded();
        let mut rows = Vec::with_capacity(expanded.len());
        for zone in self.zones.values() {
            if let Some(entry) = expanded.shift_remove(&zone.id) {
                rows.push((entry, false));
            }
            for record in zone.sub_zone_records() {
                if let Some(sub_zone) = expanded.shift_remove(&record.id) {
                    rows.push((sub_zone, true));
                }
            }
        }
        rows
    }

    /// Selektierte Zone aus der expandierten Sicht.
    pub fn selected_zone(&self) -> Option<Zone> {
        let id = self.selected_id.as_deref()?;
        self.expanded().shift_remove(id)
    }

    /// Ersetzt alle Zonen durch die Backend-Liste.
    ///
    /// Edit-/Create-Flags bereits bekannter Zonen bleiben erhalten, eine
    /// Selektion auf eine nicht mehr vorhandene Zone wird aufgehoben.
    pub fn replace_all(&mut self, records: Vec<ZoneRecord>) {
        let previous = std::mem::take(&mut self.zones);
        self.zones = records
            .into_iter()
            .map(|record| {
                let mut zone = Zone::from_record(record);
                if let Some(old) = previous.get(&zone.id) {
                    zone.is_editing = old.is_editing;
                    zone.is_creating = old.is_creating;
                }
                (zone.id.clone(), zone)
            })
            .collect();

        if let Some(id) = self.selected_id.as_deref() {
            if !self.expanded().contains_key(id) {
                self.selected_id = None;
            }
        }
    }

    /// Fügt eine frisch erzeugte Zone ein (Create- und Edit-Zustand aktiv).
    pub fn insert_created(&mut self, record: ZoneRecord) -> String {
        let mut zone = Zone::from_record(record);
        zone.is_creating = true;
        zone.is_editing = true;
        let id = zone.id.clone();
        self.zones.insert(id.clone(), zone);
        id
    }

    /// Übernimmt ein bestätigtes Edit und beendet Create-/Edit-Zustand.
    ///
    /// Gibt `false` zurück, wenn die Zone nicht (mehr) existiert.
    pub fn apply_edit(&mut self, id: &str, record: ZoneRecord) -> bool {
        let Some(zone) = self.zones.get_mut(id) else {
            return false;
        };
        zone.apply_record(record);
        zone.is_editing = false;
        zone.is_creating = false;
        true
    }

    /// Übernimmt neue Backend-Daten (Payload, Name, Typ), Edit-Flags bleiben.
    pub fn apply_refresh(&mut self, id: &str, record: ZoneRecord) -> bool {
        let Some(zone) = self.zones.get_mut(id) else {
            return false;
        };
        zone.apply_record(record);
        true
    }

    /// Entfernt eine Zone; eine Selektion auf sie wird aufgehoben.
    pub fn remove(&mut self, id: &str) -> Option<Zone> {
        let removed = self.zones.shift_remove(id);
        if removed.is_some() && self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
        removed
    }

    /// Setzt das lokale Edit-Flag ohne Backend-Aufruf.
    pub fn set_editing(&mut self, id: &str, editing: bool) -> bool {
        let Some(zone) = self.zones.get_mut(id) else {
            return false;
        };
        zone.is_editing = editing;
        true
    }
}
