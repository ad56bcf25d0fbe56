use std::sync::Arc;

use approx::assert_relative_eq;
use glam::{Vec2, Vec3};

use super::*;
use crate::core::{
    InstanceId, Pose, QuarterTurns, Ray, RoomDefinition, SceneInstantiator, SceneWorld, UP,
};
use crate::shared::{DrawCommand, EditorOptions};

/// Zählt Instanziierungen, ohne eine Szene zu verändern.
#[derive(Default)]
struct CountingInstantiator {
    calls: Vec<Pose>,
}

impl SceneInstantiator for CountingInstantiator {
    fn instantiate(&mut self, _room: &Arc<RoomDefinition>, pose: Pose) -> InstanceId {
        self.calls.push(pose);
        InstanceId(self.calls.len() as u64)
    }
}

fn pointer_at(x: f32, z: f32) -> Option<Ray> {
    Some(Ray::new(Vec3::new(x, 100.0, z), -UP))
}

/// Raum A (4×4) mit Tür nach +X, platziert im Ursprung.
fn world_with_east_door() -> SceneWorld {
    let mut world = SceneWorld::with_terrain(100.0);
    let room_a = Arc::new(
        RoomDefinition::new("A", 4.0, 4.0).with_entrance(Vec3::new(2.0, 0.0, 0.0), Vec3::X),
    );
    world.instantiate(&room_a, Pose::new(Vec3::ZERO, QuarterTurns::IDENTITY.to_quat()));
    world
}

/// Raum B (4×4) mit Eingang nach -X.
fn west_entrance_room() -> RoomDefinition {
    RoomDefinition::new("B", 4.0, 4.0).with_entrance(Vec3::new(-2.0, 0.0, 0.0), -Vec3::X)
}

// ── Snapping ──

#[test]
fn snap_point_is_stable_within_hardness() {
    let world = world_with_east_door();
    let room = west_entrance_room();
    let params = PlacementParams::default();
    let mut state = PlacementState::new();

    state.pointer_ray = pointer_at(4.5, 0.5);
    let first = state.evaluate(Some(&room), &world, &params).expect("Kandidat");
    assert!(!first.is_snapped);
    assert_relative_eq!(first.pose.position.x, 4.5);
    let snap = first.snap_point.expect("Snap-Punkt erwartet");
    assert_relative_eq!(snap.x, 4.0, epsilon = 1e-5);
    assert_relative_eq!(snap.z, 0.0, epsilon = 1e-5);

    for (x, z) in [(5.0, -1.0), (3.5, 1.5), (4.2, 0.0)] {
        state.pointer_ray = pointer_at(x, z);
        let candidate = state.evaluate(Some(&room), &world, &params).expect("Kandidat");
        assert!(candidate.is_snapped);
        assert_eq!(candidate.pose.position, snap);
        assert!(!candidate.blocked);
    }
}

#[test]
fn snap_is_dropped_once_pointer_leaves_hardness() {
    let world = world_with_east_door();
    let room = west_entrance_room();
    let params = PlacementParams::default();
    let mut state = PlacementState::new();

    state.pointer_ray = pointer_at(4.5, 0.5);
    state.evaluate(Some(&room), &world, &params);
    assert!(state.snap_point().is_some());

    state.pointer_ray = pointer_at(8.0, 0.0);
    let candidate = state.evaluate(Some(&room), &world, &params).expect("Kandidat");
    assert!(!candidate.is_snapped);
    assert_relative_eq!(candidate.pose.position.x, 8.0);
    assert!(state.snap_point().is_none());
}

#[test]
fn ray_miss_keeps_active_snap() {
    let world = world_with_east_door();
    let room = west_entrance_room();
    let params = PlacementParams::default();
    let mut state = PlacementState::new();

    state.pointer_ray = pointer_at(4.5, 0.5);
    state.evaluate(Some(&room), &world, &params);

    state.pointer_ray = None;
    let candidate = state.evaluate(Some(&room), &world, &params).expect("Kandidat");
    assert!(candidate.is_snapped);
    assert_relative_eq!(candidate.pose.position.x, 4.0, epsilon = 1e-5);
}

#[test]
fn parallel_door_does_not_snap() {
    let world = world_with_east_door();
    // Eingang zeigt ebenfalls nach +X: nicht antiparallel zur Tür
    let room = RoomDefinition::new("C", 4.0, 4.0).with_entrance(Vec3::new(-2.0, 0.0, 0.0), Vec3::X);
    let mut state = PlacementState::new();

    state.pointer_ray = pointer_at(4.5, 0.5);
    let candidate = state
        .evaluate(Some(&room), &world, &PlacementParams::default())
        .expect("Kandidat");
    assert!(candidate.snap_point.is_none());
    assert_eq!(state.last_probes.len(), 1);
}

#[test]
fn straight_approach_uses_half_depth() {
    let room = RoomDefinition::new("Flur", 2.0, 6.0).with_entrance(Vec3::new(0.0, 0.0, -3.0), -Vec3::Z);
    let door = crate::core::ParentTransform {
        position: Vec3::new(0.0, 0.0, 2.0),
        forward: Vec3::Z,
    };
    let snap = snap_point_for(&room, QuarterTurns::IDENTITY, &room.entrances[0], &door);
    assert_relative_eq!(snap.x, 0.0, epsilon = 1e-5);
    assert_relative_eq!(snap.z, 5.0, epsilon = 1e-5);
}

#[test]
fn lateral_offset_follows_multiplier_table() {
    let room = RoomDefinition::new("B", 4.0, 4.0).with_entrance(Vec3::new(-2.0, 0.0, 1.0), -Vec3::X);
    let door = crate::core::ParentTransform {
        position: Vec3::new(2.0, 0.0, 0.0),
        forward: Vec3::X,
    };

    let at_0 = snap_point_for(&room, QuarterTurns::IDENTITY, &room.entrances[0], &door);
    assert_relative_eq!(at_0.x, 4.0, epsilon = 1e-5);
    assert_relative_eq!(at_0.z, 1.0, epsilon = 1e-5);

    let at_180 = snap_point_for(&room, QuarterTurns::new(2), &room.entrances[0], &door);
    assert_relative_eq!(at_180.z, -1.0, epsilon = 1e-5);
}

#[test]
fn rotation_multiplier_table() {
    let values: Vec<f32> = (0..4).map(|s| rotation_multiplier(QuarterTurns::new(s))).collect();
    assert_eq!(values, vec![-1.0, -1.0, 1.0, 1.0]);
}

// ── Überlappung & Commit ──

#[test]
fn blocked_candidate_never_instantiates() {
    let world = world_with_east_door();
    let room = Arc::new(RoomDefinition::new("Kiste", 4.0, 4.0));
    let params = PlacementParams::default();
    let mut state = PlacementState::new();
    let mut host = CountingInstantiator::default();

    state.pointer_ray = pointer_at(1.0, 0.0);
    let blocked = state.evaluate(Some(&room), &world, &params).expect("Kandidat");
    assert!(blocked.blocked);
    assert!(commit(&blocked, &room, &mut host).is_none());
    assert!(host.calls.is_empty());

    state.pointer_ray = pointer_at(10.0, 10.0);
    let free = state.evaluate(Some(&room), &world, &params).expect("Kandidat");
    assert!(!free.blocked);
    assert!(commit(&free, &room, &mut host).is_some());
    assert_eq!(host.calls.len(), 1);
    assert_relative_eq!(host.calls[0].position.x, 10.0);
}

#[test]
fn touching_neighbor_is_not_blocked() {
    let world = world_with_east_door();
    // Bündig an Raum A: Grundriss x ∈ [2, 6]
    assert!(!is_blocked(&world, Vec3::new(4.0, 0.0, 0.0), Vec2::new(2.0, 2.0)));
    // 0.5 Einheiten Überlappung
    assert!(is_blocked(&world, Vec3::new(3.5, 0.0, 0.0), Vec2::new(2.0, 2.0)));
}

#[test]
fn rotation_swaps_candidate_half_extents() {
    let world = SceneWorld::with_terrain(100.0);
    let room = RoomDefinition::new("Lang", 4.0, 2.0);
    let mut state = PlacementState::new();
    state.pointer_ray = pointer_at(0.0, 0.0);

    let straight = state
        .evaluate(Some(&room), &world, &PlacementParams::default())
        .expect("Kandidat");
    assert_relative_eq!(straight.half_extents.x, 2.0);
    assert_relative_eq!(straight.half_extents.y, 1.0);

    state.rotate(1);
    let turned = state
        .evaluate(Some(&room), &world, &PlacementParams::default())
        .expect("Kandidat");
    assert_relative_eq!(turned.half_extents.x, 1.0);
    assert_relative_eq!(turned.half_extents.y, 2.0);
}

#[test]
fn no_candidate_without_room_or_hit() {
    let world = SceneWorld::with_terrain(10.0);
    let room = RoomDefinition::new("R", 2.0, 2.0);
    let mut state = PlacementState::new();

    state.pointer_ray = pointer_at(0.0, 0.0);
    assert!(state.evaluate(None, &world, &PlacementParams::default()).is_none());

    state.pointer_ray = pointer_at(50.0, 50.0);
    assert!(state.evaluate(Some(&room), &world, &PlacementParams::default()).is_none());
    assert!(state.last_candidate.is_none());
}

// ── Vorschau ──

#[test]
fn preview_colors_footprint_by_validity() {
    let world = world_with_east_door();
    let room = west_entrance_room();
    let options = EditorOptions::default();
    let params = PlacementParams::from_options(&options);
    let mut state = PlacementState::new();

    state.pointer_ray = pointer_at(1.0, 0.0);
    let candidate = state.evaluate(Some(&room), &world, &params).expect("Kandidat");
    let commands = preview_commands(Some(&room), Some(&candidate), &state.last_probes, &options);

    // 1 Mesh + 1 Sonde + Haft-Scheibe + Grundriss
    assert_eq!(commands.len(), 4);
    match commands.last() {
        Some(DrawCommand::WireBox { color, size, .. }) => {
            assert_eq!(*color, options.footprint_blocked_color);
            assert_relative_eq!(size.x, 4.0);
        }
        other => panic!("Grundriss erwartet, gefunden: {:?}", other),
    }
}

#[test]
fn preview_is_empty_without_candidate() {
    let room = west_entrance_room();
    let commands = preview_commands(Some(&room), None, &[], &EditorOptions::default());
    assert!(commands.is_empty());
}
