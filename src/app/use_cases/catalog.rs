//! Use-Case-Funktionen für das Laden des Raum-Katalogs.

use std::path::{Path, PathBuf};

use crate::app::AppState;
use crate::core::{load_catalog, load_selection_arrow, ContentRepository};

/// Fordert den Ordner-Dialog für die Raum-Inhalte an.
pub fn request_content_folder_dialog(state: &mut AppState) {
    state.ui.show_content_folder_dialog = true;
}

/// Lädt Katalog und Auswahl-Pfeil aus `root` und setzt den Cursor zurück.
///
/// Eine unlesbare Quelle ergibt einen leeren Katalog; die gewählte Variante
/// wird in jedem Fall verworfen.
pub fn load_from(state: &mut AppState, repo: &dyn ContentRepository, root: &Path) {
    let catalog = load_catalog(repo, root);
    let room_count = catalog.room_count();
    let folder_count = catalog.folders.len();
    state.install_catalog(catalog);

    let texture_root = PathBuf::from(&state.options.texture_root);
    state.selection_arrow = load_selection_arrow(repo, &texture_root);
    state.content_root = root.to_path_buf();
    state.ui.show_content_folder_dialog = false;
    state.ui.status_message = Some(format!(
        "{} Räume in {} Ordnern geladen",
        room_count, folder_count
    ));
}
