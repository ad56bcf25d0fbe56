//! Koaleszenz der Intents eines Frames.
//!
//! Pro Klasse (Navigation, Toggle, Zeiger, Drehung, Bestätigung) überlebt nur
//! der letzte Intent. Ein Panel-Toggle verdrängt die Tastatur-Navigation des
//! gleichen Frames. Alle übrigen Intents behalten ihre Reihenfolge.

use std::collections::HashMap;

use super::events::{AppIntent, IntentKind};

/// Reduziert die Intents eines Frames auf die auszuführende Folge.
pub fn coalesce_intents(intents: Vec<AppIntent>) -> Vec<AppIntent> {
    let mut last_index: HashMap<IntentKind, usize> = HashMap::new();
    for (index, intent) in intents.iter().enumerate() {
        if let Some(kind) = intent.coalesce_kind() {
            last_index.insert(kind, index);
        }
    }
    let toggle_clicked = last_index.contains_key(&IntentKind::ToggleClick);

    let total = intents.len();
    let kept: Vec<AppIntent> = intents
        .into_iter()
        .enumerate()
        .filter(|(index, intent)| match intent.coalesce_kind() {
            None => true,
            Some(IntentKind::Navigation) if toggle_clicked => false,
            Some(kind) => last_index.get(&kind) == Some(index),
        })
        .map(|(_, intent)| intent)
        .collect();

    if kept.len() < total {
        log::debug!("{} Intents im Frame verworfen", total - kept.len());
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::SelectionCommand;
    use crate::shared::PanelTarget;

    fn nav(command: SelectionCommand) -> AppIntent {
        AppIntent::SelectionNavigated { command }
    }

    #[test]
    fn keeps_only_latest_per_kind() {
        let kept = coalesce_intents(vec![
            nav(SelectionCommand::Next),
            AppIntent::RotateRequested { steps: 1 },
            nav(SelectionCommand::Prev),
            AppIntent::RotateRequested { steps: -1 },
        ]);

        assert_eq!(kept.len(), 2);
        assert!(matches!(
            kept[0],
            AppIntent::SelectionNavigated {
                command: SelectionCommand::Prev
            }
        ));
        assert!(matches!(kept[1], AppIntent::RotateRequested { steps: -1 }));
    }

    #[test]
    fn toggle_click_discards_keyboard_navigation() {
        let kept = coalesce_intents(vec![
            nav(SelectionCommand::Next),
            AppIntent::CatalogToggleClicked {
                target: PanelTarget::Folder(1),
            },
        ]);

        assert_eq!(kept.len(), 1);
        assert!(matches!(
            kept[0],
            AppIntent::CatalogToggleClicked {
                target: PanelTarget::Folder(1)
            }
        ));
    }

    #[test]
    fn unclassified_intents_keep_order() {
        let kept = coalesce_intents(vec![
            AppIntent::UndoRequested,
            AppIntent::PlacementConfirmed,
            AppIntent::UndoRequested,
            AppIntent::PlacementConfirmed,
            AppIntent::RedoRequested,
        ]);

        assert_eq!(kept.len(), 4);
        assert!(matches!(kept[0], AppIntent::UndoRequested));
        assert!(matches!(kept[1], AppIntent::UndoRequested));
        assert!(matches!(kept[2], AppIntent::PlacementConfirmed));
        assert!(matches!(kept[3], AppIntent::RedoRequested));
    }

    #[test]
    fn empty_frame_stays_empty() {
        assert!(coalesce_intents(Vec::new()).is_empty());
    }
}
