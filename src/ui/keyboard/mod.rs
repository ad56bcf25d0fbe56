//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.
//! Katalog-Navigation und Bestätigung reagieren auf das Loslassen der Taste.

use crate::app::{AppIntent, SelectionCommand};

const NAVIGATION_KEYS: [(egui::Key, SelectionCommand); 4] = [
    (egui::Key::W, SelectionCommand::LevelUp),
    (egui::Key::S, SelectionCommand::LevelDown),
    (egui::Key::A, SelectionCommand::Prev),
    (egui::Key::D, SelectionCommand::Next),
];

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    // Shift+W/S/A/D: Ebene wechseln bzw. innerhalb der Ebene blättern
    if modifiers.shift_only() {
        for (key, command) in NAVIGATION_KEYS {
            if ui.input(|i| i.key_released(key)) {
                events.push(AppIntent::SelectionNavigated { command });
            }
        }
    }

    // Leertaste ohne Modifier: Platzierung bestätigen
    if modifiers.is_none() && ui.input(|i| i.key_released(egui::Key::Space)) {
        events.push(AppIntent::PlacementConfirmed);
    }

    events
}
