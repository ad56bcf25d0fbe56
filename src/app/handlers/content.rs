//! Handler für Raum-Inhalte und Katalog.

use std::path::PathBuf;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ContentRepository;

/// Öffnet den Ordner-Dialog für Raum-Inhalte.
pub fn request_folder_dialog(state: &mut AppState) {
    use_cases::catalog::request_content_folder_dialog(state);
}

/// Lädt den Katalog aus `root` über die gegebene Content-Quelle.
pub fn load_catalog(state: &mut AppState, repo: &dyn ContentRepository, root: PathBuf) {
    use_cases::catalog::load_from(state, repo, &root);
}
