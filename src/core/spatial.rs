//! Spatial-Index (KD-Tree) als Broadphase für Collider-Abfragen.
//!
//! Indexiert werden die Box-Mittelpunkte im Grundriss (X/Z), da Räume auf
//! einer Ebene liegen. Eine Abfrage erweitert ihren Radius
//! um die größte Halb-Diagonale aller kleinen Collider, sodass keine Box
//! verloren geht. Sehr große Collider (Terrain) liegen nicht im Baum und
//! werden immer als Kandidat geliefert.

use glam::{Vec3, Vec3Swizzles};
use kiddo::{KdTree, SquaredEuclidean};

use super::geometry::Aabb;

/// Halb-Diagonale, ab der ein Collider nicht im KD-Tree landet.
pub const LARGE_COLLIDER_RADIUS: f32 = 32.0;

/// Kandidat einer Broadphase-Abfrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Colliders
    pub collider_id: u64,
    /// Abstand der Box-Mittelpunkte im Grundriss
    pub center_distance: f32,
}

/// Read-only Broadphase über allen Collidern einer Szene.
#[derive(Debug, Clone)]
pub struct ColliderIndex {
    tree: KdTree<f64, 2>,
    collider_ids: Vec<u64>,
    max_half_diagonal: f32,
    large: Vec<(u64, Vec3)>,
}

impl ColliderIndex {
    /// Erstellt einen leeren Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            collider_ids: Vec::new(),
            max_half_diagonal: 0.0,
            large: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus (ID, Bounds)-Paaren.
    pub fn from_bounds<'a>(colliders: impl IntoIterator<Item = (u64, &'a Aabb)>) -> Self {
        let mut collider_ids = Vec::new();
        let mut entries: Vec<[f64; 2]> = Vec::new();
        let mut max_half_diagonal = 0.0_f32;
        let mut large = Vec::new();

        for (id, bounds) in colliders {
            let center = bounds.center();
            let half_diagonal = bounds.half_extents().length();
            if half_diagonal > LARGE_COLLIDER_RADIUS {
                large.push((id, center));
                continue;
            }
            max_half_diagonal = max_half_diagonal.max(half_diagonal);
            collider_ids.push(id);
            entries.push([center.x as f64, center.z as f64]);
        }

        let tree: KdTree<f64, 2> = (&entries).into();

        Self {
            tree,
            collider_ids,
            max_half_diagonal,
            large,
        }
    }

    /// Gibt die Anzahl indexierter Collider zurück (inklusive großer).
    pub fn len(&self) -> usize {
        self.collider_ids.len() + self.large.len()
    }

    /// Gibt `true` zurück, wenn keine Collider im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Liefert alle Collider, deren Box eine Kugel um `center` schneiden könnte.
    ///
    /// Ergebnis ist nach Mittelpunkt-Abstand sortiert. Die exakte Prüfung
    /// (Box gegen Kugel/Box) erfolgt beim Aufrufer.
    pub fn candidates(&self, center: Vec3, radius: f32) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results: Vec<SpatialMatch> = self
            .large
            .iter()
            .map(|(id, c)| SpatialMatch {
                collider_id: *id,
                center_distance: c.xz().distance(center.xz()),
            })
            .collect();

        if !self.collider_ids.is_empty() {
            let reach = (radius + self.max_half_diagonal) as f64;
            let query = [center.x as f64, center.z as f64];
            results.extend(
                self.tree
                    .within::<SquaredEuclidean>(&query, reach * reach)
                    .into_iter()
                    .filter_map(|entry| {
                        let collider_id = *self.collider_ids.get(entry.item as usize)?;
                        Some(SpatialMatch {
                            collider_id,
                            center_distance: (entry.distance as f32).sqrt(),
                        })
                    }),
            );
        }

        results.sort_by(|a, b| {
            a.center_distance
                .total_cmp(&b.center_distance)
                .then(a.collider_id.cmp(&b.collider_id))
        });
        results
    }
}

impl Default for ColliderIndex {
    fn default() -> Self {
        Self::empty()
    }
}
