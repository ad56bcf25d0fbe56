//! Zeichenaufrufe für die Platzierungs-Vorschau.

use crate::core::{RoomDefinition, UP};
use crate::shared::{DrawCommand, EditorOptions};

use super::state::PlacementCandidate;

/// Baut die Vorschau: Raum-Meshes, Sonden-Scheiben, Haft-Scheibe, Grundriss.
///
/// Ohne Raum oder Kandidat bleibt die Vorschau leer.
pub fn preview_commands(
    room: Option<&RoomDefinition>,
    candidate: Option<&PlacementCandidate>,
    probes: &[glam::Vec3],
    options: &EditorOptions,
) -> Vec<DrawCommand> {
    let (Some(room), Some(candidate)) = (room, candidate) else {
        return Vec::new();
    };

    let pose_matrix = candidate.pose.to_matrix();
    let mut commands: Vec<DrawCommand> = room
        .meshes
        .iter()
        .map(|part| DrawCommand::Mesh {
            part: *part,
            transform: pose_matrix,
            tint: options.preview_tint,
        })
        .collect();

    commands.extend(probes.iter().map(|probe| DrawCommand::WireDisc {
        center: *probe,
        normal: UP,
        radius: options.snapping_radius,
        color: options.probe_disc_color,
    }));

    let point = candidate.pose.position;
    commands.push(DrawCommand::WireDisc {
        center: point,
        normal: UP,
        radius: options.snapping_hardness,
        color: options.hardness_disc_color,
    });

    let color = if candidate.blocked {
        options.footprint_blocked_color
    } else {
        options.footprint_valid_color
    };
    commands.push(DrawCommand::WireBox {
        center: point,
        size: candidate.footprint_size(),
        color,
    });

    commands
}
