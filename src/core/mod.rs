//! Core-Domänentypen: Geometrie, Zonen, Positions-Marker, Messungen, Kamera.

pub mod camera;
pub mod geo;
pub mod ids;
pub mod measurement;
pub mod position_mark;
/// Zonen-Modell inklusive expandierter Auto-Group-Sicht
pub mod zone;

pub use camera::{CameraCommand, MapCamera};
pub use geo::{path_length, GeoBounds, GeoPoint};
pub use ids::TimeIdGenerator;
pub use measurement::Measurement;
pub use position_mark::PositionMark;
pub use zone::{expand_zones, Zone, ZoneMap, ZoneRecord, ZoneType};
