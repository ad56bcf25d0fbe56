//! Zustand der Platzierungs-Engine über Frames hinweg.

use glam::{Vec2, Vec3};

use crate::core::{LayerMask, Pose, QuarterTurns, Ray};
use crate::shared::EditorOptions;

/// Abstimmbare Parameter einer Auswertung (aus den `EditorOptions`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementParams {
    /// Suchradius für Türen um jeden Eingang
    pub snapping_radius: f32,
    /// Radius, in dem ein Snap-Punkt Vorrang vor dem Zeiger behält
    pub snapping_hardness: f32,
    /// Layer des Zeiger-Raycasts
    pub layer_mask: LayerMask,
    /// Maximale Strahl-Länge
    pub max_ray_distance: f32,
}

impl PlacementParams {
    /// Übernimmt die Platzierungs-Werte aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            snapping_radius: options.snapping_radius,
            snapping_hardness: options.snapping_hardness,
            layer_mask: options.placement_layer_mask,
            max_ray_distance: options.max_ray_distance,
        }
    }
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

/// Pro Frame berechneter Platzierungs-Vorschlag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementCandidate {
    /// Welt-Pose des Raums
    pub pose: Pose,
    /// Pose liegt auf einem Tür-Snap-Punkt
    pub is_snapped: bool,
    /// Aktiver Snap-Punkt (auch frisch gefunden, wirkt ab dem nächsten Frame)
    pub snap_point: Option<Vec3>,
    /// Halbe Grundriss-Ausdehnung (x, z) unter der aktuellen Drehung
    pub half_extents: Vec2,
    /// Überlappung verbietet die Platzierung
    pub blocked: bool,
}

impl PlacementCandidate {
    /// Volle Größe der Grundriss-Box (Höhe 0.1).
    pub fn footprint_size(&self) -> Vec3 {
        Vec3::new(self.half_extents.x * 2.0, 0.1, self.half_extents.y * 2.0)
    }
}

/// Frame-übergreifender Zustand der Platzierung.
#[derive(Debug, Clone, Default)]
pub struct PlacementState {
    /// Aktuelle Drehung (Viertel-Drehungen um +Y)
    pub rotation: QuarterTurns,
    /// Zeiger-Strahl des letzten Frames
    pub pointer_ray: Option<Ray>,
    /// Aktiver Tür-Snap-Punkt
    pub(crate) snap_point: Option<Vec3>,
    /// Ergebnis der letzten Auswertung
    pub last_candidate: Option<PlacementCandidate>,
    /// Welt-Positionen der in der letzten Auswertung abgesuchten Eingänge
    pub last_probes: Vec<Vec3>,
}

impl PlacementState {
    /// Erstellt den Startzustand (keine Drehung, kein Snap).
    pub fn new() -> Self {
        Self::default()
    }

    /// Dreht um `steps` Viertel-Drehungen.
    pub fn rotate(&mut self, steps: i32) {
        self.rotation = self.rotation.rotated(steps);
    }

    /// Aktiver Snap-Punkt.
    pub fn snap_point(&self) -> Option<Vec3> {
        self.snap_point
    }

    /// Verwirft Snap und letzte Auswertung (z.B. nach Undo oder Katalog-Neuladen).
    pub fn reset_transient(&mut self) {
        self.snap_point = None;
        self.last_candidate = None;
        self.last_probes.clear();
    }
}
