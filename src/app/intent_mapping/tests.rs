use std::path::PathBuf;

use approx::assert_relative_eq;

use crate::app::state::SelectionCommand;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::shared::PanelTarget;

use super::map_intent_to_commands;

#[test]
fn navigation_maps_to_single_selection_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SelectionNavigated {
            command: SelectionCommand::Next,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::NavigateSelection {
            command: SelectionCommand::Next
        }
    ));
}

#[test]
fn toggle_click_keeps_target() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CatalogToggleClicked {
            target: PanelTarget::Bucket(2),
        },
    );

    assert!(matches!(
        commands[0],
        AppCommand::ClickCatalogToggle {
            target: PanelTarget::Bucket(2)
        }
    ));
}

#[test]
fn pointer_position_becomes_downward_ray_through_camera() {
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];
    state.view.camera.position = glam::Vec2::new(10.0, -5.0);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            screen_pos: Some(glam::Vec2::new(400.0, 300.0)),
        },
    );

    match &commands[0] {
        AppCommand::SetPointerRay { ray: Some(ray) } => {
            assert_relative_eq!(ray.origin.x, 10.0);
            assert_relative_eq!(ray.origin.z, -5.0);
            assert_relative_eq!(ray.direction.y, -1.0);
        }
        other => panic!("Zeiger-Strahl erwartet, gefunden: {:?}", other),
    }
}

#[test]
fn pointer_outside_viewport_clears_ray() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::PointerMoved { screen_pos: None });

    assert!(matches!(commands[0], AppCommand::SetPointerRay { ray: None }));
}

#[test]
fn reload_uses_current_content_root() {
    let mut state = AppState::new();
    state.content_root = PathBuf::from("/tmp/raeume");

    let commands = map_intent_to_commands(&state, AppIntent::ReloadCatalogRequested);

    match &commands[0] {
        AppCommand::LoadCatalog { root } => assert_eq!(root, &PathBuf::from("/tmp/raeume")),
        other => panic!("LoadCatalog erwartet, gefunden: {:?}", other),
    }
}

#[test]
fn confirm_maps_to_pending_request() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::PlacementConfirmed);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::RequestPlacementConfirm));
}
