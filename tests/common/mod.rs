//! Gemeinsame Test-Helfer: In-Memory-Backend und synchrones Abarbeiten der Outbox.

#![allow(dead_code)]

use std::sync::Mutex;
use zone_map_editor::app::AppController;
use zone_map_editor::backend::{execute, CreateZoneRequest, ZoneBackend};
use zone_map_editor::{AppIntent, AppState, GeoBounds, GeoPoint, ZoneRecord, ZoneType};

/// In-Memory-Backend mit fortlaufenden IDs `z1`, `z2`, …
#[derive(Default)]
pub struct MockZoneBackend {
    zones: Mutex<Vec<ZoneRecord>>,
    next_id: Mutex<u32>,
    /// Alle Aufrufe schlagen mit dieser Meldung fehl
    pub fail_with: Option<String>,
}

impl MockZoneBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_zones(records: Vec<ZoneRecord>) -> Self {
        Self {
            zones: Mutex::new(records),
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Vec<ZoneRecord> {
        self.zones.lock().expect("Mock-Lock").clone()
    }

    fn check(&self) -> anyhow::Result<()> {
        match &self.fail_with {
            Some(message) => anyhow::bail!("{message}"),
            None => Ok(()),
        }
    }

    fn update(
        &self,
        zone_id: &str,
        apply: impl FnOnce(&mut ZoneRecord),
    ) -> anyhow::Result<ZoneRecord> {
        let mut zones = self.zones.lock().expect("Mock-Lock");
        let record = zones
            .iter_mut()
            .find(|z| z.id == zone_id)
            .ok_or_else(|| anyhow::anyhow!("Zone {zone_id} not found"))?;
        apply(record);
        Ok(record.clone())
    }
}

impl ZoneBackend for MockZoneBackend {
    fn list_zones(&self) -> anyhow::Result<Vec<ZoneRecord>> {
        self.check()?;
        Ok(self.stored())
    }

    fn create_zone(&self, request: &CreateZoneRequest) -> anyhow::Result<ZoneRecord> {
        self.check()?;
        let mut next_id = self.next_id.lock().expect("Mock-Lock");
        *next_id += 1;
        let record = ZoneRecord {
            id: format!("z{}", *next_id),
            name: request.zone_name.clone(),
            zone_type: request.zone_type,
            active: true,
            bbox: GeoBounds::from_rect(request.zone_rect),
            payload: None,
        };
        self.zones.lock().expect("Mock-Lock").push(record.clone());
        Ok(record)
    }

    fn edit_zone(
        &self,
        zone_id: &str,
        zone_name: &str,
        zone_type: ZoneType,
    ) -> anyhow::Result<ZoneRecord> {
        self.check()?;
        self.update(zone_id, |record| {
            record.name = zone_name.to_string();
            record.zone_type = zone_type;
        })
    }

    fn delete_zone(&self, zone_id: &str) -> anyhow::Result<()> {
        self.check()?;
        let mut zones = self.zones.lock().expect("Mock-Lock");
        let before = zones.len();
        zones.retain(|z| z.id != zone_id);
        if zones.len() == before {
            anyhow::bail!("Zone {zone_id} not found");
        }
        Ok(())
    }

    fn refresh_zone(&self, zone_id: &str) -> anyhow::Result<ZoneRecord> {
        self.check()?;
        self.update(zone_id, |record| {
            record.payload = Some(serde_json::json!({ "wind_speed": 12.5 }));
        })
    }
}

/// Führt alle eingereihten Backend-Requests synchron aus und speist die
/// Antworten als Intents zurück, bis die Outbox leer ist.
pub fn pump(controller: &mut AppController, state: &mut AppState, backend: &MockZoneBackend) {
    loop {
        let requests = state.backend.take_outbox();
        if requests.is_empty() {
            break;
        }
        for request in requests {
            let reply = execute(backend, request);
            controller
                .handle_intent(state, AppIntent::BackendReplied { reply })
                .expect("Backend-Antwort sollte verarbeitet werden");
        }
    }
}

/// Sendet eine Folge von Intents.
pub fn send(controller: &mut AppController, state: &mut AppState, intents: Vec<AppIntent>) {
    for intent in intents {
        controller
            .handle_intent(state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }
}

/// Press → Move → Release zwischen zwei Punkten.
pub fn drag(from: GeoPoint, to: GeoPoint) -> Vec<AppIntent> {
    vec![
        AppIntent::MapPointerPressed { pos: from },
        AppIntent::MapPointerMoved { pos: to },
        AppIntent::MapPointerReleased { pos: to },
    ]
}

pub fn record(id: &str, name: &str, zone_type: ZoneType, rect: [f64; 4]) -> ZoneRecord {
    ZoneRecord {
        id: id.into(),
        name: name.into(),
        zone_type,
        active: true,
        bbox: GeoBounds::from_rect(rect),
        payload: None,
    }
}
