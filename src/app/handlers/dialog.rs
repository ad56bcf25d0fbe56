//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt neue Optionen (bereinigt) und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, mut options: EditorOptions) -> anyhow::Result<()> {
    options.sanitize();
    state.options = options;
    state.options.save_to_file(&state.options_path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    state.options.save_to_file(&state.options_path)
}

/// Entfernt die Statusmeldung.
pub fn dismiss_status_message(state: &mut AppState) {
    state.ui.status_message = None;
}
