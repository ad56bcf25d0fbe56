//! Raum-Definitionen: Abmessungen, Eingänge und darstellbare Mesh-Teile.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::geometry::{QuarterTurns, FORWARD, RIGHT};

/// Standard-Raumhöhe, falls die Definition keine angibt.
pub const DEFAULT_ROOM_HEIGHT: f32 = 3.0;
/// Farbe des synthetisierten Bodens (RGBA).
const DEFAULT_FLOOR_COLOR: [f32; 4] = [0.55, 0.55, 0.6, 1.0];

/// Eingang (Tür-Marker) eines Raums im Raum-lokalen Koordinatensystem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entrance {
    /// Lokale Position relativ zum Raum-Ursprung
    pub position: Vec3,
    /// Lokale Blickrichtung (zeigt aus dem Raum heraus)
    pub forward: Vec3,
}

/// Box-förmiges Mesh-Teil im Raum-lokalen Koordinatensystem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshPart {
    /// Mittelpunkt
    pub center: Vec3,
    /// Volle Ausdehnung
    pub size: Vec3,
    /// Farbe (RGBA)
    #[serde(default = "default_mesh_color")]
    pub color: [f32; 4],
}

fn default_mesh_color() -> [f32; 4] {
    DEFAULT_FLOOR_COLOR
}

/// Vorgefertigter Raum, der im Editor platziert werden kann.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDefinition {
    /// Anzeigename
    #[serde(default)]
    pub name: String,
    /// Breite entlang der lokalen X-Achse
    pub width: f32,
    /// Tiefe entlang der lokalen Z-Achse
    pub depth: f32,
    /// Höhe (nur für den Körper-Collider relevant)
    #[serde(default = "default_height")]
    pub height: f32,
    /// Eingänge in Reihenfolge der Definition
    #[serde(default)]
    pub entrances: Vec<Entrance>,
    /// Darstellbare Mesh-Teile
    #[serde(default)]
    pub meshes: Vec<MeshPart>,
}

fn default_height() -> f32 {
    DEFAULT_ROOM_HEIGHT
}

impl RoomDefinition {
    /// Erstellt einen Raum mit synthetisiertem Boden und ohne Eingänge.
    pub fn new(name: impl Into<String>, width: f32, depth: f32) -> Self {
        let mut room = Self {
            name: name.into(),
            width,
            depth,
            height: DEFAULT_ROOM_HEIGHT,
            entrances: Vec::new(),
            meshes: Vec::new(),
        };
        room.ensure_floor_mesh();
        room
    }

    /// Builder: fügt einen Eingang hinzu.
    pub fn with_entrance(mut self, position: Vec3, forward: Vec3) -> Self {
        self.entrances.push(Entrance {
            position,
            forward: forward.normalize_or_zero(),
        });
        self
    }

    /// Anzahl der Eingänge (Sortier- und Gruppierungsschlüssel im Katalog).
    pub fn entrance_count(&self) -> usize {
        self.entrances.len()
    }

    /// Synthetisiert einen Boden, wenn keine Meshes definiert sind.
    pub fn ensure_floor_mesh(&mut self) {
        if self.meshes.is_empty() {
            self.meshes.push(MeshPart {
                center: Vec3::new(0.0, 0.05, 0.0),
                size: Vec3::new(self.width, 0.1, self.depth),
                color: DEFAULT_FLOOR_COLOR,
            });
        }
    }

    /// Halbe Breite/Tiefe ohne Berücksichtigung der Drehung.
    pub fn half_lengths(&self) -> (f32, f32) {
        (self.width / 2.0, self.depth / 2.0)
    }

    /// Halbe Ausdehnung (x, z) des Grundrisses unter der gegebenen Drehung.
    ///
    /// Zeigt die gedrehte Vorwärts-Achse entlang der Welt-X-Achse, sind
    /// Breite und Tiefe vertauscht.
    pub fn oriented_half_lengths(&self, rotation: QuarterTurns) -> (f32, f32) {
        let rotated_forward = rotation.to_quat() * FORWARD;
        let is_straight = super::geometry::round_dot(RIGHT, rotated_forward) == 0;
        if is_straight {
            (self.width / 2.0, self.depth / 2.0)
        } else {
            (self.depth / 2.0, self.width / 2.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rotation_by_quarter_turn_swaps_half_lengths() {
        let room = RoomDefinition::new("Flur", 4.0, 2.0);

        let (x, z) = room.oriented_half_lengths(QuarterTurns::IDENTITY);
        assert_relative_eq!(x, 2.0);
        assert_relative_eq!(z, 1.0);

        let (x, z) = room.oriented_half_lengths(QuarterTurns::new(1));
        assert_relative_eq!(x, 1.0);
        assert_relative_eq!(z, 2.0);

        let (x, z) = room.oriented_half_lengths(QuarterTurns::new(2));
        assert_relative_eq!(x, 2.0);
        assert_relative_eq!(z, 1.0);
    }

    #[test]
    fn new_room_synthesizes_floor() {
        let room = RoomDefinition::new("Halle", 6.0, 8.0);
        assert_eq!(room.meshes.len(), 1);
        assert_relative_eq!(room.meshes[0].size.x, 6.0);
        assert_relative_eq!(room.meshes[0].size.z, 8.0);
    }

    #[test]
    fn room_parses_from_toml() {
        let source = r#"
            width = 4.0
            depth = 8.0

            [[entrances]]
            position = [0.0, 0.0, 4.0]
            forward = [0.0, 0.0, 1.0]
        "#;
        let room: RoomDefinition = toml::from_str(source).expect("TOML muss parsen");
        assert_eq!(room.entrance_count(), 1);
        assert_relative_eq!(room.height, DEFAULT_ROOM_HEIGHT);
        assert!(room.meshes.is_empty());
    }
}
