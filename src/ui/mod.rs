//! UI-Komponenten: Toolbar, Eigenschaften-Panel, Status-Bar, Input-Handling.

/// UI-Layer mit egui
///
/// Jede Komponente liest den AppState und gibt `AppIntent`s zurück,
/// mutiert wird ausschließlich im Controller. Ausnahme sind die
/// Formularfelder im `UiState`.
pub mod input;
mod keyboard;
pub mod properties;
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
