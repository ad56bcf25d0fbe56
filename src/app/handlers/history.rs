//! Handler für Undo/Redo von Platzierungen.

use crate::app::history::Snapshot;
use crate::app::AppState;

/// Nimmt die letzte Platzierung zurück, falls vorhanden.
pub fn undo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    match state.history.pop_undo_with_current(current) {
        Some(prev) => {
            prev.apply_to(state);
            log::info!("Undo ausgeführt ({} Räume)", state.placed_count());
        }
        None => log::debug!("Undo: nichts zu tun"),
    }
}

/// Stellt die zuletzt zurückgenommene Platzierung wieder her.
pub fn redo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    match state.history.pop_redo_with_current(current) {
        Some(next) => {
            next.apply_to(state);
            log::info!("Redo ausgeführt ({} Räume)", state.placed_count());
        }
        None => log::debug!("Redo: nichts zu tun"),
    }
}
