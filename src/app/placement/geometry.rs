//! Geometrie der Platzierung: Kandidaten-Pose, Überlappung und Tür-Snapping.
//!
//! Alle Ausrichtungs-Vergleiche runden das Skalarprodukt auf eine ganze Zahl.
//! Räume und Türen werden als achsenparallel in 90°-Schritten angenommen.

use std::sync::Arc;

use glam::{Vec2, Vec3};

use super::state::{PlacementCandidate, PlacementParams, PlacementState};
use crate::core::{
    round_dot, ColliderTag, Entrance, InstanceId, ParentTransform, Pose, QuarterTurns,
    RoomDefinition, SceneInstantiator, SceneQuery, FORWARD, UP,
};
use crate::shared::options::{OVERLAP_ACCEPTANCE, OVERLAP_PROBE_HALF_HEIGHT, OVERLAP_PROBE_LIFT};

/// Vorzeichen des seitlichen Eingangs-Versatzes je Drehstufe (0°, 90°, 180°, 270°).
const ROTATION_MULTIPLIERS: [f32; 4] = [-1.0, -1.0, 1.0, 1.0];

/// Vorzeichen des seitlichen Versatzes für die gegebene Drehung.
pub fn rotation_multiplier(rotation: QuarterTurns) -> f32 {
    ROTATION_MULTIPLIERS[rotation.steps() as usize]
}

/// Prüft, ob die Grundriss-Box an `point` mit der Szene überlappt.
///
/// Die Box wird um eine Einheit angehoben, damit flaches Terrain nicht zählt,
/// und pro Achse um `OVERLAP_ACCEPTANCE` verkleinert, damit Nachbarräume
/// sich berühren dürfen.
pub fn is_blocked(scene: &dyn SceneQuery, point: Vec3, half_extents: Vec2) -> bool {
    let probe_half = Vec3::new(
        (half_extents.x - OVERLAP_ACCEPTANCE).max(0.0),
        OVERLAP_PROBE_HALF_HEIGHT,
        (half_extents.y - OVERLAP_ACCEPTANCE).max(0.0),
    );
    !scene
        .overlap_box(point + UP * OVERLAP_PROBE_LIFT, probe_half)
        .is_empty()
}

/// Berechnet die Raum-Position, die `entrance` an die Tür `door` legt.
///
/// Von der Tür aus wird entlang ihrer Blickrichtung um die halbe Breite
/// (senkrechter Anflug) bzw. halbe Tiefe (gerader Anflug) versetzt. Danach
/// folgt der seitliche Versatz aus der lokalen Eingangs-Position.
pub fn snap_point_for(
    room: &RoomDefinition,
    rotation: QuarterTurns,
    entrance: &Entrance,
    door: &ParentTransform,
) -> Vec3 {
    let rot = rotation.to_quat();
    let room_forward = rot * FORWARD;
    let entrance_dir = rot * entrance.forward;

    let (half_width, half_depth) = room.half_lengths();
    let perpendicular = round_dot(door.forward, room_forward) == 0;
    let mut snap = door.position + door.forward * if perpendicular { half_width } else { half_depth };

    let lateral = if round_dot(entrance_dir, room_forward) == 0 {
        entrance.position.z
    } else {
        entrance.position.x
    };
    let modifier = lateral * rotation_multiplier(rotation);

    if round_dot(door.forward, FORWARD) == 0 {
        snap.z -= modifier;
    } else {
        snap.x += modifier;
    }
    snap
}

impl PlacementState {
    /// Wertet die Platzierung für den aktuellen Frame aus.
    ///
    /// Liefert `None`, wenn kein Raum gewählt ist oder weder ein Treffer noch
    /// ein aktiver Snap vorliegt. Ein in diesem Frame gefundener Snap-Punkt
    /// wirkt ab der nächsten Auswertung.
    pub fn evaluate(
        &mut self,
        room: Option<&RoomDefinition>,
        scene: &dyn SceneQuery,
        params: &PlacementParams,
    ) -> Option<PlacementCandidate> {
        self.last_probes.clear();
        self.last_candidate = self.evaluate_inner(room, scene, params);
        self.last_candidate
    }

    fn evaluate_inner(
        &mut self,
        room: Option<&RoomDefinition>,
        scene: &dyn SceneQuery,
        params: &PlacementParams,
    ) -> Option<PlacementCandidate> {
        let room = room?;
        let hit = self
            .pointer_ray
            .and_then(|ray| scene.raycast(&ray, params.max_ray_distance, params.layer_mask));

        let mut point = hit.map(|h| Vec3::new(h.point.x, 0.0, h.point.z));
        let mut is_snapped = false;

        if let Some(snap) = self.snap_point {
            let hardness_sq = params.snapping_hardness * params.snapping_hardness;
            match hit {
                Some(h) if snap.distance_squared(h.point) > hardness_sq => {
                    log::debug!("Snap-Punkt verlassen");
                    self.snap_point = None;
                }
                // Ohne Treffer bleibt der Snap bestehen
                _ => {
                    point = Some(snap);
                    is_snapped = true;
                }
            }
        }

        let point = point?;
        let pose = Pose::new(point, self.rotation.to_quat());
        let (hx, hz) = room.oriented_half_lengths(self.rotation);
        let half_extents = Vec2::new(hx, hz);
        let blocked = is_blocked(scene, point, half_extents);

        if !is_snapped {
            self.search_door_snap(room, &pose, scene, params);
        }

        Some(PlacementCandidate {
            pose,
            is_snapped,
            snap_point: self.snap_point,
            half_extents,
            blocked,
        })
    }

    /// Sucht für jeden Eingang (in Definitions-Reihenfolge) eine antiparallele Tür.
    fn search_door_snap(
        &mut self,
        room: &RoomDefinition,
        pose: &Pose,
        scene: &dyn SceneQuery,
        params: &PlacementParams,
    ) {
        for entrance in &room.entrances {
            let probe = pose.transform_point(entrance.position);
            let dir = pose.transform_direction(entrance.forward);
            self.last_probes.push(probe);

            let door = scene
                .overlap_sphere(probe, params.snapping_radius)
                .into_iter()
                .filter(|c| c.tag == ColliderTag::Door)
                .find(|c| round_dot(dir, c.parent.forward) == -1);

            if let Some(door) = door {
                let snap = snap_point_for(room, self.rotation, entrance, &door.parent);
                log::debug!(
                    "Tür-Snap gefunden: ({:.2}, {:.2}, {:.2})",
                    snap.x,
                    snap.y,
                    snap.z
                );
                self.snap_point = Some(snap);
                return;
            }
        }
    }
}

/// Platziert den Raum, wenn der Kandidat nicht blockiert ist.
pub fn commit(
    candidate: &PlacementCandidate,
    room: &Arc<RoomDefinition>,
    instantiator: &mut dyn SceneInstantiator,
) -> Option<InstanceId> {
    if candidate.blocked {
        log::debug!("Platzierung blockiert, Bestätigung ignoriert");
        return None;
    }
    Some(instantiator.instantiate(room, candidate.pose))
}
