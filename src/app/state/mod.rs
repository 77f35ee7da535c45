//! Application State: Stores, Modus, View, UI und Backend-Warteschlange.

mod app_state;
mod backend;
mod measurements;
mod mode;
mod positions;
mod ui;
mod view;
mod zones;

pub use app_state::AppState;
pub use backend::BackendQueue;
pub use measurements::MeasurementStore;
pub use mode::InteractionMode;
pub use positions::PositionStore;
pub use ui::{PositionForm, UiState, ZoneForm};
pub use view::{NativeInteractions, ViewState};
pub use zones::ZoneStore;
