//! Rooms-Tool-Editor Library.
//!
//! Level-Design-Werkzeug zum Platzieren vorgefertigter Räume:
//! Raum-Katalog, Auswahl-Zustandsautomat, Platzierungs-Geometrie
//! (Boden- und Tür-Snapping, Überlappungsprüfung) sowie Vorschau und Commit.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CatalogLevel, SelectionCommand,
    SelectionCursor, UiState, ViewState,
};
pub use core::{
    Catalog, ContentRepository, FsContentRepository, QuarterTurns, RoomDefinition, SceneWorld,
    StaticContentRepository, TopDownCamera,
};
pub use shared::{EditorOptions, RenderScene};
