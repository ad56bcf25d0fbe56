//! Handler für die Katalog-Selektion (Tastatur- und Panel-Kanal).

use crate::app::state::SelectionCommand;
use crate::app::AppState;
use crate::shared::PanelTarget;

/// Wendet einen Navigations-Befehl auf den Cursor an.
pub fn navigate(state: &mut AppState, command: SelectionCommand) {
    state.cursor.handle(&state.catalog, command);
}

/// Wendet einen Panel-Klick auf den Cursor an.
pub fn click(state: &mut AppState, target: PanelTarget) {
    match target {
        PanelTarget::Folder(index) => state.cursor.click_folder(&state.catalog, index),
        PanelTarget::Bucket(index) => state.cursor.click_bucket(&state.catalog, index),
        PanelTarget::Variant(index) => state.cursor.click_variant(&state.catalog, index),
    }
}
