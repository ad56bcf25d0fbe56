//! Zentrale Konfiguration für den Rooms-Tool-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::LayerMask;

// ── Snapping ────────────────────────────────────────────────────────

/// Suchradius für Türen in der Nähe eines Eingangs.
pub const SNAPPING_RADIUS: f32 = 2.0;
/// Radius, in dem ein gefundener Snap-Punkt Vorrang vor dem Zeiger behält.
pub const SNAPPING_HARDNESS: f32 = 3.0;
/// Maximale Länge des Zeiger-Strahls.
pub const MAX_RAY_DISTANCE: f32 = 1000.0;

// ── Kollision ───────────────────────────────────────────────────────

/// Verkleinerung der Prüf-Box pro Achse (Nachbarräume dürfen sich berühren).
pub const OVERLAP_ACCEPTANCE: f32 = 0.3;
/// Anhebung der Prüf-Box über die Platzierungs-Ebene.
pub const OVERLAP_PROBE_LIFT: f32 = 1.0;
/// Halbe Höhe der Prüf-Box.
pub const OVERLAP_PROBE_HALF_HEIGHT: f32 = 0.1;
/// Halbe Kantenlänge des Terrains der Start-Szene.
pub const TERRAIN_HALF_SIZE: f32 = 500.0;

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 20.0;
/// Zoom-Schritt bei Menü-Buttons / Shortcuts.
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Farben ──────────────────────────────────────────────────────────

/// Scheibe um den Kandidaten (RGBA: Blau).
pub const HARDNESS_DISC_COLOR: [f32; 4] = [0.2, 0.4, 1.0, 1.0];
/// Scheiben um die Eingangs-Sonden (RGBA: Gelb).
pub const PROBE_DISC_COLOR: [f32; 4] = [1.0, 0.92, 0.016, 1.0];
/// Grundriss bei gültiger Platzierung (RGBA: Grün).
pub const FOOTPRINT_VALID_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Grundriss bei blockierter Platzierung (RGBA: Rot).
pub const FOOTPRINT_BLOCKED_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Tönung der Vorschau-Meshes (RGBA, halbtransparent).
pub const PREVIEW_TINT: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
/// Umriss platzierter Räume (RGBA: Hellgrau).
pub const ROOM_OUTLINE_COLOR: [f32; 4] = [0.85, 0.85, 0.85, 1.0];
/// Tür-Marker platzierter Räume (RGBA: Orange).
pub const DOOR_COLOR: [f32; 4] = [1.0, 0.5, 0.1, 1.0];

// ── Content ─────────────────────────────────────────────────────────

/// Standard-Wurzel der Raum-Ordner.
pub const CONTENT_ROOT: &str = "assets/rooms";
/// Standard-Verzeichnis der UI-Texturen.
pub const TEXTURE_ROOT: &str = "assets/textures";

/// Dateiname der Optionen-Datei.
const CONFIG_FILE_NAME: &str = "rooms_tool_editor.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `rooms_tool_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Snapping ────────────────────────────────────────────────
    /// Suchradius für Türen (≥ 0)
    pub snapping_radius: f32,
    /// Haft-Radius eines Snap-Punkts (≥ snapping_radius)
    pub snapping_hardness: f32,
    /// Layer, gegen die der Zeiger-Strahl geprüft wird
    pub placement_layer_mask: LayerMask,
    /// Maximale Strahl-Länge
    pub max_ray_distance: f32,

    // ── Content ─────────────────────────────────────────────────
    /// Wurzel der Raum-Ordner
    pub content_root: String,
    /// Verzeichnis der UI-Texturen
    pub texture_root: String,

    // ── Farben ──────────────────────────────────────────────────
    /// Scheibe um den Kandidaten
    pub hardness_disc_color: [f32; 4],
    /// Scheiben um die Eingangs-Sonden
    pub probe_disc_color: [f32; 4],
    /// Grundriss bei gültiger Platzierung
    pub footprint_valid_color: [f32; 4],
    /// Grundriss bei blockierter Platzierung
    pub footprint_blocked_color: [f32; 4],
    /// Tönung der Vorschau-Meshes
    pub preview_tint: [f32; 4],
    /// Umriss platzierter Räume
    pub room_outline_color: [f32; 4],
    /// Tür-Marker platzierter Räume
    pub door_color: [f32; 4],

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            snapping_radius: SNAPPING_RADIUS,
            snapping_hardness: SNAPPING_HARDNESS,
            placement_layer_mask: LayerMask::default(),
            max_ray_distance: MAX_RAY_DISTANCE,

            content_root: CONTENT_ROOT.to_string(),
            texture_root: TEXTURE_ROOT.to_string(),

            hardness_disc_color: HARDNESS_DISC_COLOR,
            probe_disc_color: PROBE_DISC_COLOR,
            footprint_valid_color: FOOTPRINT_VALID_COLOR,
            footprint_blocked_color: FOOTPRINT_BLOCKED_COLOR,
            preview_tint: PREVIEW_TINT,
            room_outline_color: ROOM_OUTLINE_COLOR,
            door_color: DOOR_COLOR,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
        }
    }
}

impl EditorOptions {
    /// Erzwingt gültige Wertebereiche.
    ///
    /// `snapping_radius ≥ 0` und `snapping_hardness ≥ snapping_radius`;
    /// Zoom-Grenzen werden bei Bedarf getauscht.
    pub fn sanitize(&mut self) {
        if !self.snapping_radius.is_finite() || self.snapping_radius < 0.0 {
            self.snapping_radius = 0.0;
        }
        if !self.snapping_hardness.is_finite() || self.snapping_hardness < self.snapping_radius {
            self.snapping_hardness = self.snapping_radius;
        }
        if !self.max_ray_distance.is_finite() || self.max_ray_distance <= 0.0 {
            self.max_ray_distance = MAX_RAY_DISTANCE;
        }
        if self.camera_zoom_min > self.camera_zoom_max {
            std::mem::swap(&mut self.camera_zoom_min, &mut self.camera_zoom_max);
        }
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        let mut opts = match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        };
        opts.sanitize();
        opts
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("rooms_tool_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sanitize_enforces_radius_order() {
        let mut opts = EditorOptions {
            snapping_radius: -1.0,
            snapping_hardness: -5.0,
            ..EditorOptions::default()
        };
        opts.sanitize();
        assert_relative_eq!(opts.snapping_radius, 0.0);
        assert_relative_eq!(opts.snapping_hardness, 0.0);

        let mut opts = EditorOptions {
            snapping_radius: 4.0,
            snapping_hardness: 3.0,
            ..EditorOptions::default()
        };
        opts.sanitize();
        assert_relative_eq!(opts.snapping_hardness, 4.0);
    }

    #[test]
    fn save_and_load_preserve_values() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join(CONFIG_FILE_NAME);

        let opts = EditorOptions {
            snapping_radius: 1.5,
            snapping_hardness: 2.5,
            placement_layer_mask: LayerMask(0b11),
            ..EditorOptions::default()
        };
        opts.save_to_file(&path).expect("Speichern");

        let loaded = EditorOptions::load_from_file(&path);
        assert_eq!(loaded, opts);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "snapping_radius = 5.0\n").expect("schreiben");

        let loaded = EditorOptions::load_from_file(&path);
        assert_relative_eq!(loaded.snapping_radius, 5.0);
        // Härte wird auf den Radius angehoben
        assert_relative_eq!(loaded.snapping_hardness, 5.0);
        assert_eq!(loaded.content_root, CONTENT_ROOT);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let loaded = EditorOptions::load_from_file(&dir.path().join("fehlt.toml"));
        assert_eq!(loaded, EditorOptions::default());
    }
}
