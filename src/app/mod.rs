//! Application-Layer: Controller, State, Events, Platzierung und Use-Cases.

pub mod catalog_panel;
pub mod command_log;
pub mod controller;
pub mod events;
mod frame;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod placement;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Katalog, Selektion, Szene, View).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use frame::coalesce_intents;
pub use render_scene::build as build_render_scene;
pub use state::{
    AppState, CatalogLevel, PickedVariant, SelectionCommand, SelectionCursor, UiState, ViewState,
};
