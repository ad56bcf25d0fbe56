//! Builder für Render-Szenen aus dem AppState.

use crate::app::placement::preview_commands;
use crate::app::AppState;
use crate::core::{ColliderTag, UP};
use crate::shared::{DrawCommand, RenderScene};

/// Radius der Tür-Markierung platzierter Räume.
const DOOR_MARKER_RADIUS: f32 = 0.4;
/// Deckkraft der Meshes platzierter Räume.
const PLACED_TINT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Reihenfolge: platzierte Räume (Meshes, Umrisse, Türen), dann die Vorschau.
/// Das Katalog-Panel liefert `AppController::catalog_panel`.
pub fn build(state: &AppState) -> RenderScene {
    let mut commands = Vec::new();

    for instance in state.scene.instances() {
        let transform = instance.pose.to_matrix();
        commands.extend(instance.room.meshes.iter().map(|part| DrawCommand::Mesh {
            part: *part,
            transform,
            tint: PLACED_TINT,
        }));
    }

    for collider in state.scene.colliders().filter(|c| c.owner.is_some()) {
        match collider.tag {
            ColliderTag::Untagged => commands.push(DrawCommand::WireBox {
                center: collider.bounds.center(),
                size: collider.bounds.half_extents() * 2.0,
                color: state.options.room_outline_color,
            }),
            ColliderTag::Door => commands.push(DrawCommand::WireDisc {
                center: collider.parent.position,
                normal: UP,
                radius: DOOR_MARKER_RADIUS,
                color: state.options.door_color,
            }),
        }
    }

    let picked_room = state.picked_variant().map(|variant| variant.room.as_ref());
    commands.extend(preview_commands(
        picked_room,
        state.placement.last_candidate.as_ref(),
        &state.placement.last_probes,
        &state.options,
    ));

    RenderScene {
        commands,
        camera: state.view.camera.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::{Pose, QuarterTurns, RoomDefinition, SceneInstantiator};
    use crate::shared::DrawCommand;
    use glam::Vec3;
    use std::sync::Arc;

    #[test]
    fn placed_room_draws_mesh_outline_and_doors() {
        let mut state = AppState::new();
        let room = Arc::new(
            RoomDefinition::new("R", 4.0, 4.0)
                .with_entrance(Vec3::new(2.0, 0.0, 0.0), Vec3::X)
                .with_entrance(Vec3::new(-2.0, 0.0, 0.0), -Vec3::X),
        );
        Arc::make_mut(&mut state.scene)
            .instantiate(&room, Pose::new(Vec3::ZERO, QuarterTurns::IDENTITY.to_quat()));

        let scene = build(&state);

        let meshes = scene
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Mesh { .. }))
            .count();
        let boxes = scene
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::WireBox { .. }))
            .count();
        let discs = scene
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::WireDisc { .. }))
            .count();
        assert_eq!((meshes, boxes, discs), (1, 1, 2));
    }

    #[test]
    fn empty_state_draws_nothing() {
        let state = AppState::new();
        let scene = build(&state);
        assert!(scene.commands.is_empty());
    }
}
