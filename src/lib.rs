//! Zone Map Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod backend;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, InteractionMode, UiState, ViewState};
pub use backend::{BackendWorker, HttpZoneBackend, ZoneBackend};
pub use core::{
    expand_zones, CameraCommand, GeoBounds, GeoPoint, MapCamera, Measurement, PositionMark, Zone,
    ZoneRecord, ZoneType,
};
pub use shared::{EditorOptions, RenderScene};
