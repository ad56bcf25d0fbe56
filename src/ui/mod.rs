//! UI-Komponenten: Menü, Status-Bar, Katalog-Panel, Viewport, Dialoge.

pub mod catalog_panel;
pub mod dialogs;
mod keyboard;
/// UI-Layer mit egui
///
/// Alle Komponenten liefern `AppIntent`s zurück und mutieren den
/// AppState nicht direkt (Ausnahme: Dialog-Flags im `UiState`).
pub mod menu;
pub mod options_dialog;
pub mod status;
pub mod viewport;

pub use catalog_panel::{draw_catalog_panel, show_catalog_panel};
pub use dialogs::handle_content_dialogs;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use viewport::{collect_viewport_intents, EguiSurface};
