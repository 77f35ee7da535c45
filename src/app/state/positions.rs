use crate::core::{PositionMark, TimeIdGenerator};
use indexmap::IndexMap;

/// Autoritative Sammlung der Positions-Marker (nur clientseitig).
#[derive(Debug, Default)]
pub struct PositionStore {
    marks: IndexMap<String, PositionMark>,
    ids: TimeIdGenerator,
    /// Aktuell selektierter Marker
    pub selected_id: Option<String>,
    /// Einmal-Anforderung: Kamera auf den selektierten Marker schwenken
    pub localizing: bool,
}

impl PositionStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            marks: IndexMap::new(),
            ids: TimeIdGenerator::new(),
            selected_id: None,
            localizing: false,
        }
    }

    /// Read-only Sicht auf alle Marker in Einfügereihenfolge.
    pub fn marks(&self) -> &IndexMap<String, PositionMark> {
        &self.marks
    }

    pub fn get(&self, id: &str) -> Option<&PositionMark> {
        self.marks.get(id)
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Selektierter Marker, falls die ID noch existiert.
    pub fn selected_mark(&self) -> Option<&PositionMark> {
        self.selected_id.as_deref().and_then(|id| self.marks.get(id))
    }

    /// Legt einen Marker mit zeitbasierter ID an und gibt die ID zurück.
    pub fn add(&mut self, name: &str, lat: f64, lon: f64) -> String {
        let id = self.ids.next_id();
        self.marks.insert(
            id.clone(),
            PositionMark::new(id.clone(), name.to_string(), lat, lon),
        );
        id
    }

    /// Überschreibt Name und Position. `false`, wenn die ID unbekannt ist.
    pub fn edit(&mut self, id: &str, name: &str, lat: f64, lon: f64) -> bool {
        let Some(mark) = self.marks.get_mut(id) else {
            return false;
        };
        mark.name = name.to_string();
        mark.lat = lat;
        mark.lon = lon;
        true
    }

    /// Entfernt einen Marker; eine Selektion auf ihn wird aufgehoben.
    pub fn delete(&mut self, id: &str) -> Option<PositionMark> {
        let removed = self.marks.shift_remove(id);
        if removed.is_some() && self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
        removed
    }

    /// Setzt das lokale Edit-Flag.
    pub fn set_editing(&mut self, id: &str, editing: bool) -> bool {
        let Some(mark) = self.marks.get_mut(id) else {
            return false;
        };
        mark.is_editing = editing;
        true
    }
}
