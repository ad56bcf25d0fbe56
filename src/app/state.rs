//! Application State: Katalog, Selektion, Platzierung, Szene, View und UI.

mod app_state;
mod selection;
mod ui;
mod view;

pub use app_state::AppState;
pub use selection::{CatalogLevel, PickedVariant, SelectionCommand, SelectionCursor};
pub use ui::UiState;
pub use view::ViewState;
