//! Szenen-Welt: platzierte Raum-Instanzen und ihre Collider.
//!
//! Die Welt stellt die Geometrie-Abfragen (`SceneQuery`) für die Platzierung
//! bereit und erzeugt beim Commit persistente Instanzen (`SceneInstantiator`).
//! Sie ist `Clone`, damit die Undo-Historie Snapshots per `Arc` teilen kann.

use std::sync::Arc;

use glam::Vec3;
use indexmap::IndexMap;

use super::geometry::{Aabb, LayerMask, Pose, Ray, RayHit, UP};
use super::room::RoomDefinition;
use super::spatial::ColliderIndex;

/// Halb-Ausdehnung eines Tür-Colliders in der Ebene.
pub const DOOR_HALF_WIDTH: f32 = 0.2;
/// Halbe Höhe eines Tür-Colliders.
pub const DOOR_HALF_HEIGHT: f32 = 1.0;

/// ID eines Colliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderId(pub u64);

/// ID einer platzierten Raum-Instanz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub u64);

/// Tag eines Colliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColliderTag {
    /// Keine Sonderbedeutung
    Untagged,
    /// Tür-Marker, Ziel des Tür-Snappings
    Door,
}

/// Transform des Eltern-Objekts eines Colliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParentTransform {
    /// Welt-Position des Eltern-Objekts
    pub position: Vec3,
    /// Blickrichtung des Eltern-Objekts (normiert)
    pub forward: Vec3,
}

/// Achsenparalleler Collider der Szene.
#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    /// Eindeutige ID
    pub id: ColliderId,
    /// Tag (Tür oder ohne)
    pub tag: ColliderTag,
    /// Kollisions-Layer (0..32)
    pub layer: u8,
    /// Welt-Bounds
    pub bounds: Aabb,
    /// Transform des Eltern-Objekts
    pub parent: ParentTransform,
    /// Besitzende Instanz (None für Terrain)
    pub owner: Option<InstanceId>,
}

/// Persistente Instanz eines platzierten Raums.
#[derive(Debug, Clone)]
pub struct RoomInstance {
    /// Eindeutige ID
    pub id: InstanceId,
    /// Platzierte Definition
    pub room: Arc<RoomDefinition>,
    /// Welt-Pose
    pub pose: Pose,
}

/// Geometrie-Abfragen gegen die Szene.
pub trait SceneQuery {
    /// Erster Treffer eines Strahls gegen Collider in `mask`.
    fn raycast(&self, ray: &Ray, max_distance: f32, mask: LayerMask) -> Option<RayHit>;

    /// Alle Collider, deren Bounds die Box echt überlappen.
    fn overlap_box(&self, center: Vec3, half_extents: Vec3) -> Vec<&Collider>;

    /// Alle Collider, deren Bounds die Kugel berühren, nach Abstand sortiert.
    fn overlap_sphere(&self, center: Vec3, radius: f32) -> Vec<&Collider>;
}

/// Erzeugt persistente Raum-Instanzen.
pub trait SceneInstantiator {
    /// Platziert `room` mit `pose` und liefert die neue Instanz-ID.
    fn instantiate(&mut self, room: &Arc<RoomDefinition>, pose: Pose) -> InstanceId;
}

/// Container für Instanzen, Collider und Broadphase.
#[derive(Debug, Clone, Default)]
pub struct SceneWorld {
    colliders: IndexMap<u64, Collider>,
    instances: IndexMap<u64, RoomInstance>,
    next_collider_id: u64,
    next_instance_id: u64,
    index: ColliderIndex,
}

impl SceneWorld {
    /// Erstellt eine leere Welt ohne Terrain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine Welt mit quadratischem Terrain (Oberkante y = 0).
    pub fn with_terrain(half_size: f32) -> Self {
        let mut world = Self::new();
        let bounds = Aabb {
            min: Vec3::new(-half_size, -1.0, -half_size),
            max: Vec3::new(half_size, 0.0, half_size),
        };
        world.push_collider(
            ColliderTag::Untagged,
            LayerMask::TERRAIN_LAYER,
            bounds,
            ParentTransform {
                position: Vec3::ZERO,
                forward: super::geometry::FORWARD,
            },
            None,
        );
        world.rebuild_index();
        world
    }

    /// Fügt einen einzelnen Collider hinzu und aktualisiert den Index.
    pub fn add_collider(
        &mut self,
        tag: ColliderTag,
        layer: u8,
        bounds: Aabb,
        parent: ParentTransform,
    ) -> ColliderId {
        let id = self.push_collider(tag, layer, bounds, parent, None);
        self.rebuild_index();
        id
    }

    fn push_collider(
        &mut self,
        tag: ColliderTag,
        layer: u8,
        bounds: Aabb,
        parent: ParentTransform,
        owner: Option<InstanceId>,
    ) -> ColliderId {
        self.next_collider_id += 1;
        let id = ColliderId(self.next_collider_id);
        self.colliders.insert(
            id.0,
            Collider {
                id,
                tag,
                layer,
                bounds,
                parent,
                owner,
            },
        );
        id
    }

    fn rebuild_index(&mut self) {
        self.index = ColliderIndex::from_bounds(self.colliders.values().map(|c| (c.id.0, &c.bounds)));
    }

    /// Collider per ID.
    pub fn collider(&self, id: ColliderId) -> Option<&Collider> {
        self.colliders.get(&id.0)
    }

    /// Alle Collider in Einfüge-Reihenfolge.
    pub fn colliders(&self) -> impl Iterator<Item = &Collider> {
        self.colliders.values()
    }

    /// Alle Instanzen in Platzierungs-Reihenfolge.
    pub fn instances(&self) -> impl Iterator<Item = &RoomInstance> {
        self.instances.values()
    }

    /// Instanz per ID.
    pub fn instance(&self, id: InstanceId) -> Option<&RoomInstance> {
        self.instances.get(&id.0)
    }

    /// Anzahl platzierter Instanzen.
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Anzahl aller Collider (inklusive Terrain).
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }
}

impl SceneQuery for SceneWorld {
    fn raycast(&self, ray: &Ray, max_distance: f32, mask: LayerMask) -> Option<RayHit> {
        self.colliders
            .values()
            .filter(|c| mask.contains(c.layer))
            .filter_map(|c| c.bounds.ray_intersection(ray, max_distance))
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(distance, normal)| RayHit {
                point: ray.at(distance),
                normal,
                distance,
            })
    }

    fn overlap_box(&self, center: Vec3, half_extents: Vec3) -> Vec<&Collider> {
        let probe = Aabb::from_center_half_extents(center, half_extents);
        self.index
            .candidates(center, probe.half_extents().length())
            .into_iter()
            .filter_map(|m| self.colliders.get(&m.collider_id))
            .filter(|c| c.bounds.intersects(&probe))
            .collect()
    }

    fn overlap_sphere(&self, center: Vec3, radius: f32) -> Vec<&Collider> {
        let mut hits: Vec<(f32, &Collider)> = self
            .index
            .candidates(center, radius)
            .into_iter()
            .filter_map(|m| self.colliders.get(&m.collider_id))
            .filter(|c| c.bounds.intersects_sphere(center, radius))
            .map(|c| (c.bounds.closest_point(center).distance_squared(center), c))
            .collect();
        hits.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.id.cmp(&b.1.id)));
        hits.into_iter().map(|(_, c)| c).collect()
    }
}

impl SceneInstantiator for SceneWorld {
    fn instantiate(&mut self, room: &Arc<RoomDefinition>, pose: Pose) -> InstanceId {
        self.next_instance_id += 1;
        let id = InstanceId(self.next_instance_id);

        // Körper: Grundriss × Höhe, Unterkante auf der Pose
        let rotated_forward = pose.transform_direction(super::geometry::FORWARD);
        let (hx, hz) = oriented_footprint(room, rotated_forward);
        let body = Aabb::from_center_half_extents(
            pose.position + UP * (room.height / 2.0),
            Vec3::new(hx, room.height / 2.0, hz),
        );
        self.push_collider(
            ColliderTag::Untagged,
            LayerMask::DEFAULT_LAYER,
            body,
            ParentTransform {
                position: pose.position,
                forward: rotated_forward,
            },
            Some(id),
        );

        for entrance in &room.entrances {
            let position = pose.transform_point(entrance.position);
            let forward = pose.transform_direction(entrance.forward).normalize_or_zero();
            let door = Aabb::from_center_half_extents(
                position + UP * DOOR_HALF_HEIGHT,
                Vec3::new(DOOR_HALF_WIDTH, DOOR_HALF_HEIGHT, DOOR_HALF_WIDTH),
            );
            self.push_collider(
                ColliderTag::Door,
                LayerMask::DEFAULT_LAYER,
                door,
                ParentTransform { position, forward },
                Some(id),
            );
        }

        self.instances.insert(
            id.0,
            RoomInstance {
                id,
                room: Arc::clone(room),
                pose,
            },
        );
        self.rebuild_index();

        log::info!(
            "Raum '{}' platziert als Instanz {} bei ({:.2}, {:.2}, {:.2})",
            room.name,
            id.0,
            pose.position.x,
            pose.position.y,
            pose.position.z
        );
        id
    }
}

/// Halbe Grundriss-Ausdehnung in Welt-X/Z für eine beliebig gedrehte Vorwärts-Achse.
fn oriented_footprint(room: &RoomDefinition, rotated_forward: Vec3) -> (f32, f32) {
    let (hw, hd) = room.half_lengths();
    if super::geometry::round_dot(super::geometry::RIGHT, rotated_forward) == 0 {
        (hw, hd)
    } else {
        (hd, hw)
    }
}
