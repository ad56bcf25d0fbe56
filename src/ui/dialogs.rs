//! Native Ordner-Dialoge (rfd).

use crate::app::{AppIntent, UiState};

/// Verarbeitet ausstehende Ordner-Dialoge und gibt AppIntents zurück.
pub fn handle_content_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui_state.show_content_folder_dialog {
        ui_state.show_content_folder_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .set_title("Raum-Ordner wählen")
            .pick_folder()
        {
            events.push(AppIntent::ContentFolderSelected { path });
        }
    }

    events
}
