//! Use-Case-Funktionen für die Raum-Platzierung.

use std::sync::Arc;

use crate::app::placement::{commit, PlacementCandidate};
use crate::app::AppState;
use crate::core::{InstanceId, Ray};

/// Setzt den Zeiger-Strahl für die nächste Auswertung.
pub fn set_pointer_ray(state: &mut AppState, ray: Option<Ray>) {
    state.placement.pointer_ray = ray;
}

/// Dreht die Platzierung um `steps` Viertel-Drehungen.
pub fn rotate(state: &mut AppState, steps: i32) {
    state.placement.rotate(steps);
    log::debug!("Drehung: {}°", state.placement.rotation.degrees());
}

/// Merkt eine Bestätigung für die Auswertung dieses Frames vor.
pub fn request_confirm(state: &mut AppState) {
    state.confirm_pending = true;
}

/// Wertet die Platzierung einmal aus und platziert bei vorgemerkter Bestätigung.
///
/// Die Vormerkung wird in jedem Fall verbraucht. Ein blockierter Kandidat
/// erzeugt weder Instanz noch Undo-Eintrag.
pub fn evaluate_frame(state: &mut AppState) -> Option<InstanceId> {
    let room = state.picked_variant().map(|variant| Arc::clone(&variant.room));
    let params = state.placement_params();
    let candidate = state
        .placement
        .evaluate(room.as_deref(), state.scene.as_ref(), &params);

    if !std::mem::take(&mut state.confirm_pending) {
        return None;
    }
    let (Some(candidate), Some(room)) = (candidate, room) else {
        log::debug!("Bestätigung ohne Platzierungs-Kandidat ignoriert");
        return None;
    };
    commit_candidate(state, &candidate, &room)
}

fn commit_candidate(
    state: &mut AppState,
    candidate: &PlacementCandidate,
    room: &Arc<crate::core::RoomDefinition>,
) -> Option<InstanceId> {
    if candidate.blocked {
        log::debug!("Platzierung blockiert, Bestätigung ignoriert");
        return None;
    }
    state.record_undo_snapshot();
    let id = commit(candidate, room, Arc::<crate::core::SceneWorld>::make_mut(&mut state.scene))?;
    state.ui.status_message = Some(format!(
        "{} platziert ({} Räume)",
        room.name,
        state.scene.instance_count()
    ));
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::SelectionCommand;
    use crate::core::{Catalog, RoomDefinition, UP};
    use glam::Vec3;

    fn state_with_picked_room() -> AppState {
        let mut state = AppState::new();
        state.install_catalog(Catalog::build(vec![(
            "A".into(),
            vec![RoomDefinition::new("Zelle", 4.0, 4.0)],
        )]));
        for command in [
            SelectionCommand::LevelDown,
            SelectionCommand::LevelDown,
            SelectionCommand::Next,
        ] {
            state.cursor.handle(&state.catalog, command);
        }
        state
    }

    fn aim(state: &mut AppState, x: f32, z: f32) {
        set_pointer_ray(state, Some(Ray::new(Vec3::new(x, 100.0, z), -UP)));
    }

    #[test]
    fn confirm_commits_once_and_records_undo() {
        let mut state = state_with_picked_room();
        aim(&mut state, 10.0, 10.0);
        request_confirm(&mut state);

        assert!(evaluate_frame(&mut state).is_some());
        assert_eq!(state.placed_count(), 1);
        assert!(state.can_undo());

        // Ohne neue Bestätigung keine weitere Instanz
        assert!(evaluate_frame(&mut state).is_none());
        assert_eq!(state.placed_count(), 1);
    }

    #[test]
    fn blocked_confirm_is_consumed_without_side_effects() {
        let mut state = state_with_picked_room();
        aim(&mut state, 0.0, 0.0);
        request_confirm(&mut state);
        evaluate_frame(&mut state);

        // Gleiche Stelle: überlappt den eben platzierten Raum
        request_confirm(&mut state);
        assert!(evaluate_frame(&mut state).is_none());
        assert_eq!(state.placed_count(), 1);
        assert!(!state.confirm_pending);

        state.history = crate::app::history::EditHistory::new_with_capacity(10);
        request_confirm(&mut state);
        evaluate_frame(&mut state);
        assert!(!state.can_undo());
    }

    #[test]
    fn confirm_without_pick_is_ignored() {
        let mut state = AppState::new();
        aim(&mut state, 0.0, 0.0);
        request_confirm(&mut state);
        assert!(evaluate_frame(&mut state).is_none());
        assert_eq!(state.placed_count(), 0);
    }

    #[test]
    fn commit_does_not_touch_previous_snapshot() {
        let mut state = state_with_picked_room();
        let before = Arc::clone(&state.scene);
        aim(&mut state, 10.0, 10.0);
        request_confirm(&mut state);
        evaluate_frame(&mut state);

        assert_eq!(before.instance_count(), 0);
        assert_eq!(state.placed_count(), 1);
    }
}
