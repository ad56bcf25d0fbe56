//! Render-Szene als expliziter Übergabevertrag zwischen App und UI.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.
//! Die UI zeichnet alles über die immediate-mode Schnittstelle `DrawSurface`.

use glam::{Mat4, Vec2, Vec3};

use crate::core::{MeshPart, TextureHandle, TopDownCamera};

/// Rechteck im Panel-Koordinatensystem (Pixel, Ursprung oben links).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelRect {
    /// Obere linke Ecke
    pub min: Vec2,
    /// Breite und Höhe
    pub size: Vec2,
}

impl PanelRect {
    /// Erstellt ein Rechteck aus Position und Größe.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }
}

/// Einzelner Zeichenaufruf in Weltkoordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Mesh-Teil mit Lokal→Welt-Transform
    Mesh {
        part: MeshPart,
        transform: Mat4,
        tint: [f32; 4],
    },
    /// Kreis-Umriss
    WireDisc {
        center: Vec3,
        normal: Vec3,
        radius: f32,
        color: [f32; 4],
    },
    /// Box-Umriss (volle Größe)
    WireBox {
        center: Vec3,
        size: Vec3,
        color: [f32; 4],
    },
}

impl DrawCommand {
    /// Gibt den Aufruf an eine Zeichenfläche weiter.
    pub fn issue(&self, surface: &mut dyn DrawSurface) {
        match self {
            Self::Mesh {
                part,
                transform,
                tint,
            } => surface.mesh(part, *transform, *tint),
            Self::WireDisc {
                center,
                normal,
                radius,
                color,
            } => surface.wire_disc(*center, *normal, *radius, *color),
            Self::WireBox {
                center,
                size,
                color,
            } => surface.wire_box(*center, *size, *color),
        }
    }
}

/// Immediate-mode Zeichenfläche des Hosts.
pub trait DrawSurface {
    /// Zeichnet eine Textur in ein Panel-Rechteck.
    fn draw_texture(&mut self, rect: PanelRect, texture: &TextureHandle);

    /// Zeichnet einen Toggle-Button und liefert den Zustand nach Benutzer-Eingabe.
    fn toggle_button(&mut self, rect: PanelRect, state: bool, label: &str) -> bool;

    /// Zeichnet einen Kreis-Umriss in Weltkoordinaten.
    fn wire_disc(&mut self, center: Vec3, normal: Vec3, radius: f32, color: [f32; 4]);

    /// Zeichnet einen Box-Umriss in Weltkoordinaten.
    fn wire_box(&mut self, center: Vec3, size: Vec3, color: [f32; 4]);

    /// Zeichnet ein Mesh-Teil.
    fn mesh(&mut self, part: &MeshPart, transform: Mat4, tint: [f32; 4]);
}

/// Katalog-Ebene eines Panel-Buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelTarget {
    /// Ordner mit Index
    Folder(usize),
    /// Eingangs-Gruppe mit Index (im aktiven Ordner)
    Bucket(usize),
    /// Variante mit Index (in der aktiven Gruppe)
    Variant(usize),
}

/// Toggle-Button des Katalog-Panels.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelButton {
    /// Position und Größe
    pub rect: PanelRect,
    /// Beschriftung
    pub label: String,
    /// Aktueller Zustand (abgeleitet aus dem Selection-Cursor)
    pub selected: bool,
    /// Zugehöriges Katalog-Element
    pub target: PanelTarget,
}

/// Vollständig layoutetes Katalog-Panel eines Frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogPanel {
    /// Buttons aller sichtbaren Ebenen
    pub buttons: Vec<PanelButton>,
    /// Position des Auswahl-Pfeils (aktive Ebene)
    pub selector: Option<PanelRect>,
    /// Textur des Auswahl-Pfeils
    pub selector_texture: Option<TextureHandle>,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Weltkoordinaten-Aufrufe: platzierte Räume, dann Vorschau
    pub commands: Vec<DrawCommand>,
    /// Kamera-Zustand für diesen Frame
    pub camera: TopDownCamera,
}

impl RenderScene {
    /// Gibt alle Weltkoordinaten-Aufrufe an eine Zeichenfläche weiter.
    pub fn issue_commands(&self, surface: &mut dyn DrawSurface) {
        for command in &self.commands {
            command.issue(surface);
        }
    }
}
