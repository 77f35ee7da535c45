//! Zonen-Backend: Schnittstelle, Request/Reply-Typen und HTTP-Anbindung.
//!
//! Der Kern spricht das Backend nur über `ZoneBackend` an. Aufrufe werden als
//! `BackendRequest` in die Warteschlange des `AppState` gelegt, vom
//! `BackendWorker` außerhalb des UI-Threads ausgeführt und als `BackendReply`
//! zurückgemeldet.

mod http;
mod worker;

pub use http::HttpZoneBackend;
pub use worker::BackendWorker;

use crate::core::{GeoBounds, ZoneRecord, ZoneType};
use serde::{Deserialize, Serialize};

/// Request-Body für das Anlegen einer Zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateZoneRequest {
    /// `[sw_lat, sw_lon, ne_lat, ne_lon]`
    pub zone_rect: [f64; 4],
    pub zone_name: String,
    pub zone_type: ZoneType,
}

impl CreateZoneRequest {
    /// Baut den Request aus einer (normalisierten) Box.
    pub fn new(bounds: &GeoBounds, zone_name: impl Into<String>, zone_type: ZoneType) -> Self {
        Self {
            zone_rect: bounds.to_rect(),
            zone_name: zone_name.into(),
            zone_type,
        }
    }
}

/// Antwort von `list_zones`: je nach Backend-Version Liste oder ID-Map.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ZoneListing {
    List(Vec<ZoneRecord>),
    Map(indexmap::IndexMap<String, ZoneRecord>),
}

impl ZoneListing {
    /// Liefert die Datensätze in Backend-Reihenfolge.
    pub fn into_records(self) -> Vec<ZoneRecord> {
        match self {
            ZoneListing::List(records) => records,
            ZoneListing::Map(map) => map.into_values().collect(),
        }
    }
}

/// Persistenz-Schnittstelle für Zonen.
///
/// Implementierungen blockieren; sie laufen im `BackendWorker`-Thread
/// oder synchron in Tests.
pub trait ZoneBackend: Send {
    /// Alle Zonen laden.
    fn list_zones(&self) -> anyhow::Result<Vec<ZoneRecord>>;

    /// Neue Zone anlegen, das Backend vergibt die ID.
    fn create_zone(&self, request: &CreateZoneRequest) -> anyhow::Result<ZoneRecord>;

    /// Name und Typ einer Zone ändern.
    fn edit_zone(
        &self,
        zone_id: &str,
        zone_name: &str,
        zone_type: ZoneType,
    ) -> anyhow::Result<ZoneRecord>;

    /// Zone löschen.
    fn delete_zone(&self, zone_id: &str) -> anyhow::Result<()>;

    /// Wetterdaten einer Zone neu abrufen.
    fn refresh_zone(&self, zone_id: &str) -> anyhow::Result<ZoneRecord>;
}

/// Ein einzelner Backend-Aufruf.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    ListZones,
    CreateZone(CreateZoneRequest),
    EditZone {
        zone_id: String,
        zone_name: String,
        zone_type: ZoneType,
    },
    DeleteZone {
        zone_id: String,
    },
    RefreshZone {
        zone_id: String,
    },
}

/// Aufruf mit Request-ID für die Zuordnung der Antwort.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendRequest {
    pub id: u64,
    pub call: BackendCall,
}

/// Erfolgreiches Ergebnis eines Aufrufs.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendOutcome {
    Zones(Vec<ZoneRecord>),
    Zone(ZoneRecord),
    Deleted,
}

/// Antwort auf einen `BackendRequest`.
///
/// Fehler werden als Text transportiert, damit die Antwort `Clone` bleibt.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendReply {
    pub request_id: u64,
    pub call: BackendCall,
    pub result: Result<BackendOutcome, String>,
}

impl BackendReply {
    /// Fehlerantwort für einen Request, der das Backend nie erreicht hat.
    pub fn failed(request: BackendRequest, message: impl Into<String>) -> Self {
        Self {
            request_id: request.id,
            call: request.call,
            result: Err(message.into()),
        }
    }
}

/// Führt einen Request gegen ein Backend aus und verpackt das Ergebnis.
pub fn execute(backend: &dyn ZoneBackend, request: BackendRequest) -> BackendReply {
    let result = match &request.call {
        BackendCall::ListZones => backend.list_zones().map(BackendOutcome::Zones),
        BackendCall::CreateZone(body) => backend.create_zone(body).map(BackendOutcome::Zone),
        BackendCall::EditZone {
            zone_id,
            zone_name,
            zone_type,
        } => backend
            .edit_zone(zone_id, zone_name, *zone_type)
            .map(BackendOutcome::Zone),
        BackendCall::DeleteZone { zone_id } => {
            backend.delete_zone(zone_id).map(|_| BackendOutcome::Deleted)
        }
        BackendCall::RefreshZone { zone_id } => {
            backend.refresh_zone(zone_id).map(BackendOutcome::Zone)
        }
    };

    BackendReply {
        request_id: request.id,
        call: request.call,
        result: result.map_err(|e| format!("{:#}", e)),
    }
}
