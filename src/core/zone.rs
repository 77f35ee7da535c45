//! Zonen: Domänenmodell, Backend-Datensatz und expandierte Sicht mit Auto-Group-Unterzonen.

use super::geo::GeoBounds;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Autoritative Zonen-Sammlung: Zonen-ID → Zone (Einfügereihenfolge bleibt erhalten).
pub type ZoneMap = IndexMap<String, Zone>;

/// Payload-Schlüssel, unter dem eine Auto-Group ihre Unterzonen mitliefert.
pub const SUB_ZONES_KEY: &str = "zones";

/// Kategorie einer Zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneType {
    /// Ohne Wetterdaten
    #[default]
    Empty,
    Wind,
    Rain,
    Visibility,
    Temperature,
    /// Bündelt mehrere Unterzonen im Payload
    AutoGroup,
}

impl ZoneType {
    /// Alle Typen in Anzeige-Reihenfolge.
    pub const ALL: [ZoneType; 6] = [
        ZoneType::Empty,
        ZoneType::Wind,
        ZoneType::Rain,
        ZoneType::Visibility,
        ZoneType::Temperature,
        ZoneType::AutoGroup,
    ];

    /// Wire-Name, wie ihn das Backend erwartet.
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneType::Empty => "empty",
            ZoneType::Wind => "wind",
            ZoneType::Rain => "rain",
            ZoneType::Visibility => "visibility",
            ZoneType::Temperature => "temperature",
            ZoneType::AutoGroup => "auto_group",
        }
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_active() -> bool {
    true
}

/// Zonen-Datensatz im Format des Backends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub id: String,
    pub name: String,
    pub zone_type: ZoneType,
    #[serde(default = "default_active")]
    pub active: bool,
    pub bbox: GeoBounds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

/// Eine Zone im Editor.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    /// Eindeutige ID (vom Backend vergeben)
    pub id: String,
    /// Anzeigename
    pub name: String,
    /// Normalisierte Ausdehnung
    pub bounds: GeoBounds,
    /// Aktiv-Flag aus dem Backend (inaktive Zonen werden gedämpft dargestellt)
    pub active: bool,
    /// Eigenschaften-Formular ist freigeschaltet
    pub is_editing: bool,
    /// Neu gezeichnet, aber noch nicht bestätigt
    pub is_creating: bool,
    /// Kategorie
    pub zone_type: ZoneType,
    /// Optionale Zusatzdaten (Wetterwerte, Auto-Group-Unterzonen, …)
    pub payload: Option<Map<String, Value>>,
}

impl Zone {
    /// Baut eine Zone aus einem Backend-Datensatz. Edit-Flags sind zurückgesetzt.
    pub fn from_record(record: ZoneRecord) -> Self {
        Self {
            bounds: GeoBounds::from_corners(record.bbox.south_west, record.bbox.north_east),
            payload: payload_object(&record.id, record.payload),
            id: record.id,
            name: record.name,
            active: record.active,
            is_editing: false,
            is_creating: false,
            zone_type: record.zone_type,
        }
    }

    /// Übernimmt Name, Typ, Aktiv-Flag und Payload aus einem Backend-Datensatz.
    ///
    /// Ausdehnung und Edit-Flags bleiben unverändert.
    pub fn apply_record(&mut self, record: ZoneRecord) {
        self.payload = payload_object(&record.id, record.payload);
        self.name = record.name;
        self.zone_type = record.zone_type;
        self.active = record.active;
    }

    /// Unterzonen-Datensätze einer Auto-Group (leer für alle anderen Typen).
    ///
    /// Nicht lesbare Einträge werden mit Warnung übersprungen.
    pub fn sub_zone_records(&self) -> Vec<ZoneRecord> {
        if self.zone_type != ZoneType::AutoGroup {
            return Vec::new();
        }
        let Some(entries) = self
            .payload
            .as_ref()
            .and_then(|p| p.get(SUB_ZONES_KEY))
            .and_then(Value::as_array)
        else {
            return Vec::new();
        };

        entries
            .iter()
            .filter_map(|entry| match serde_json::from_value(entry.clone()) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("Unterzone in Auto-Group {} nicht lesbar: {}", self.id, e);
                    None
                }
            })
            .collect()
    }
}

/// Reduziert einen Payload auf ein JSON-Objekt; andere Werte werden verworfen.
fn payload_object(zone_id: &str, payload: Option<Value>) -> Option<Map<String, Value>> {
    match payload {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map),
        Some(other) => {
            log::warn!(
                "Payload von Zone {} ist kein Objekt und wird ignoriert: {}",
                zone_id,
                other
            );
            None
        }
    }
}

/// Berechnet die expandierte Zonen-Sicht.
///
/// Enthält alle Zonen der Eingabe plus je einen Eintrag pro Auto-Group-Unterzone,
/// geschlüsselt mit der ID der Unterzone. Unterzonen sind nie im Edit-/Create-Zustand.
/// Die Eingabe wird nicht verändert; das Ergebnis wird bei jedem Aufruf neu gebaut.
pub fn expand_zones(zones: &ZoneMap) -> ZoneMap {
    let mut expanded = zones.clone();
    for zone in zones.values() {
        for record in zone.sub_zone_records() {
            let sub_zone = Zone::from_record(record);
            expanded.insert(sub_zone.id.clone(), sub_zone);
        }
    }
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoPoint;
    use serde_json::json;

    fn record(id: &str, zone_type: ZoneType) -> ZoneRecord {
        ZoneRecord {
            id: id.to_string(),
            name: format!("Zone {id}"),
            zone_type,
            active: true,
            bbox: GeoBounds::from_rect([48.9, 21.1, 48.95, 21.2]),
            payload: None,
        }
    }

    fn sub_zone_json(id: &str) -> Value {
        json!({
            "id": id,
            "name": format!("grp_{id}"),
            "zone_type": "rain",
            "active": false,
            "bbox": {
                "south_west": {"lat": 48.91, "lon": 21.11},
                "north_east": {"lat": 48.92, "lon": 21.12}
            }
        })
    }

    fn auto_group(id: &str, sub_ids: &[&str]) -> Zone {
        let mut rec = record(id, ZoneType::AutoGroup);
        let subs: Vec<Value> = sub_ids.iter().map(|s| sub_zone_json(s)).collect();
        rec.payload = Some(json!({ "sampling_size": 1000, "zones": subs }));
        Zone::from_record(rec)
    }

    #[test]
    fn test_record_parses_backend_json() {
        let value = json!({
            "id": "z1",
            "name": "New Zone",
            "zone_type": "empty",
            "bbox": {
                "south_west": {"lat": 48.95, "lon": 21.2},
                "north_east": {"lat": 48.9, "lon": 21.1}
            }
        });
        let rec: ZoneRecord = serde_json::from_value(value).expect("Datensatz lesbar");
        assert!(rec.active);

        let zone = Zone::from_record(rec);
        assert_eq!(zone.bounds.south_west, GeoPoint::new(48.9, 21.1));
        assert!(!zone.is_creating && !zone.is_editing);
        assert!(zone.payload.is_none());
    }

    #[test]
    fn test_expand_adds_one_entry_per_sub_zone() {
        let mut zones = ZoneMap::new();
        zones.insert("plain".into(), Zone::from_record(record("plain", ZoneType::Wind)));
        let group = auto_group("grp", &["s1", "s2", "s3"]);
        zones.insert(group.id.clone(), group);

        let expanded = expand_zones(&zones);

        assert_eq!(expanded.len(), zones.len() + 3);
        assert!(expanded.contains_key("grp"));
        for id in ["s1", "s2", "s3"] {
            let sub = &expanded[id];
            assert_eq!(sub.zone_type, ZoneType::Rain);
            assert!(!sub.active);
            assert!(!sub.is_editing && !sub.is_creating);
        }
        // Quelle bleibt unverändert
        assert_eq!(zones.len(), 2);
    }

    #[test]
    fn test_expand_without_groups_is_identity() {
        let mut zones = ZoneMap::new();
        zones.insert("a".into(), Zone::from_record(record("a", ZoneType::Wind)));
        zones.insert("b".into(), Zone::from_record(record("b", ZoneType::Empty)));

        let once = expand_zones(&zones);
        assert_eq!(once, zones);
        assert_eq!(expand_zones(&once), once);
    }

    #[test]
    fn test_expand_is_stable_when_applied_twice() {
        let mut zones = ZoneMap::new();
        let group = auto_group("grp", &["s1", "s2"]);
        zones.insert(group.id.clone(), group);

        let once = expand_zones(&zones);
        assert_eq!(expand_zones(&once), once);
    }

    #[test]
    fn test_broken_sub_zone_is_skipped() {
        let mut rec = record("grp", ZoneType::AutoGroup);
        rec.payload = Some(json!({ "zones": [sub_zone_json("ok"), {"name": "ohne id"}] }));
        let zone = Zone::from_record(rec);

        assert_eq!(zone.sub_zone_records().len(), 1);
    }

    #[test]
    fn test_non_group_payload_zones_are_not_expanded() {
        let mut rec = record("w", ZoneType::Wind);
        rec.payload = Some(json!({ "zones": [sub_zone_json("hidden")] }));
        let mut zones = ZoneMap::new();
        zones.insert("w".into(), Zone::from_record(rec));

        assert_eq!(expand_zones(&zones).len(), 1);
    }

    #[test]
    fn test_zone_type_wire_names() {
        assert_eq!(ZoneType::AutoGroup.as_str(), "auto_group");
        let parsed: ZoneType = serde_json::from_value(json!("visibility")).expect("gültig");
        assert_eq!(parsed, ZoneType::Visibility);
    }
}
