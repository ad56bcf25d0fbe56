//! Geometrie-Grundtypen: Pose, Strahl, AABB, Layer-Masken und Viertel-Drehungen.
//!
//! Koordinatensystem: +Y = oben, +Z = vorne (forward), +X = rechts.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Vorwärts-Achse in Weltkoordinaten.
pub const FORWARD: Vec3 = Vec3::Z;
/// Rechts-Achse in Weltkoordinaten.
pub const RIGHT: Vec3 = Vec3::X;
/// Hoch-Achse in Weltkoordinaten.
pub const UP: Vec3 = Vec3::Y;

/// Rundet das Skalarprodukt zweier (Einheits-)Vektoren auf die nächste ganze Zahl.
///
/// Alle Ausrichtungs-Vergleiche (senkrecht / antiparallel) laufen über diesen
/// Wert, damit nahezu achsenparallele Transformationen toleriert werden.
pub fn round_dot(a: Vec3, b: Vec3) -> i32 {
    a.dot(b).round_ties_even() as i32
}

/// Drehung um die Y-Achse in 90°-Schritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct QuarterTurns(u8);

impl QuarterTurns {
    /// Keine Drehung.
    pub const IDENTITY: Self = Self(0);

    /// Erstellt eine Drehung aus beliebig vielen Schritten (modulo 4).
    pub fn new(steps: i32) -> Self {
        Self(steps.rem_euclid(4) as u8)
    }

    /// Anzahl der Schritte im Bereich 0..=3.
    pub fn steps(self) -> u8 {
        self.0
    }

    /// Drehwinkel in Grad (0, 90, 180, 270).
    pub fn degrees(self) -> u32 {
        self.0 as u32 * 90
    }

    /// Addiert `delta` Schritte (negativ = gegen den Uhrzeigersinn).
    pub fn rotated(self, delta: i32) -> Self {
        Self::new(self.0 as i32 + delta)
    }

    /// Quaternion der Drehung (positiv: +Z dreht nach +X).
    pub fn to_quat(self) -> Quat {
        Quat::from_rotation_y(self.0 as f32 * std::f32::consts::FRAC_PI_2)
    }
}

/// Position und Orientierung in Weltkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Welt-Position
    pub position: Vec3,
    /// Welt-Rotation
    pub rotation: Quat,
}

impl Pose {
    /// Erstellt eine neue Pose.
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Transformiert einen Punkt aus dem lokalen Raum in Weltkoordinaten.
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation * local
    }

    /// Transformiert eine Richtung aus dem lokalen Raum in Weltkoordinaten.
    pub fn transform_direction(&self, local: Vec3) -> Vec3 {
        self.rotation * local
    }

    /// Lokal → Welt als Matrix (ohne Skalierung).
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }
}

/// Halbstrahl mit normierter Richtung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Startpunkt
    pub origin: Vec3,
    /// Richtung (normiert)
    pub direction: Vec3,
}

impl Ray {
    /// Erstellt einen Strahl; die Richtung wird normiert.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Punkt auf dem Strahl im Abstand `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Treffer eines Raycasts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Trefferpunkt in Weltkoordinaten
    pub point: Vec3,
    /// Flächennormale am Trefferpunkt
    pub normal: Vec3,
    /// Abstand vom Strahl-Ursprung
    pub distance: f32,
}

/// Achsenparallele Bounding-Box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimale Ecke
    pub min: Vec3,
    /// Maximale Ecke
    pub max: Vec3,
}

impl Aabb {
    /// Erstellt eine Box aus Mittelpunkt und Halb-Ausdehnung.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Mittelpunkt der Box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Halb-Ausdehnung der Box.
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Echte Überlappung (bloßes Berühren zählt nicht).
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    /// Nächster Punkt der Box zu `point`.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// Prüft, ob eine Kugel die Box schneidet oder berührt.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.closest_point(center).distance_squared(center) <= radius * radius
    }

    /// Slab-Test. Liefert Abstand und Normale des ersten Eintrittspunkts.
    ///
    /// Startet der Strahl innerhalb der Box, zählt der Ursprung als Treffer.
    pub fn ray_intersection(&self, ray: &Ray, max_distance: f32) -> Option<(f32, Vec3)> {
        let mut t_min = 0.0_f32;
        let mut t_max = max_distance;
        let mut normal = Vec3::ZERO;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let dir = ray.direction[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if dir.abs() < f32::EPSILON {
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / dir;
            let mut t0 = (lo - origin) * inv;
            let mut t1 = (hi - origin) * inv;
            let mut face = Vec3::ZERO;
            face[axis] = -dir.signum();
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            if t0 > t_min {
                t_min = t0;
                normal = face;
            }
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }

        Some((t_min, normal))
    }
}

/// Bitmaske über 32 Kollisions-Layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Standard-Layer (0)
    pub const DEFAULT_LAYER: u8 = 0;
    /// Terrain-Layer (8)
    pub const TERRAIN_LAYER: u8 = 8;
    /// Keine Layer
    pub const NONE: Self = Self(0);
    /// Alle Layer
    pub const ALL: Self = Self(u32::MAX);

    /// Maske mit genau einem Layer.
    pub fn from_layer(layer: u8) -> Self {
        Self(1u32 << (layer as u32 % 32))
    }

    /// Prüft, ob `layer` in der Maske enthalten ist.
    pub fn contains(self, layer: u8) -> bool {
        self.0 & (1u32 << (layer as u32 % 32)) != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::from_layer(Self::TERRAIN_LAYER)
    }
}
