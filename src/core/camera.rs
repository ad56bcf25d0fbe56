//! Top-Down-Kamera mit Pan und Zoom über der Platzierungs-Ebene.
//!
//! Bildschirm-X entspricht Welt-X, Bildschirm-Y (nach unten) entspricht Welt -Z.

use glam::{Vec2, Vec3, Vec3Swizzles};

use super::geometry::{Ray, UP};

/// Top-Down-Kamera mit Pan und Zoom
#[derive(Debug, Clone)]
pub struct TopDownCamera {
    /// Blickpunkt in Welt-Koordinaten (x, z)
    pub position: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl TopDownCamera {
    /// Pixel pro Welt-Einheit bei Zoom 1.0.
    pub const BASE_PIXELS_PER_UNIT: f32 = 16.0;
    /// Höhe, aus der Zeiger-Strahlen senkrecht nach unten starten.
    pub const RAY_HEIGHT: f32 = 100.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Weltpunkt
    pub fn look_at(&mut self, target: Vec3) {
        self.position = target.xz();
    }

    /// Verschiebt die Kamera (Pan) in Welt-Einheiten
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level innerhalb konfigurierter Grenzen.
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Pixel pro Welt-Einheit beim aktuellen Zoom.
    pub fn pixels_per_unit(&self) -> f32 {
        Self::BASE_PIXELS_PER_UNIT * self.zoom
    }

    /// Konvertiert Screen-Koordinaten (relativ zum Viewport) zu einem Weltpunkt auf y = 0.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec3 {
        let offset = (screen_pos - screen_size * 0.5) / self.pixels_per_unit();
        Vec3::new(
            self.position.x + offset.x,
            0.0,
            self.position.y - offset.y,
        )
    }

    /// Konvertiert einen Weltpunkt zu Screen-Koordinaten (Höhe wird ignoriert).
    pub fn world_to_screen(&self, world: Vec3, screen_size: Vec2) -> Vec2 {
        let offset = Vec2::new(world.x - self.position.x, self.position.y - world.z);
        screen_size * 0.5 + offset * self.pixels_per_unit()
    }

    /// Senkrechter Zeiger-Strahl durch die Screen-Position.
    pub fn pointer_ray(&self, screen_pos: Vec2, screen_size: Vec2) -> Ray {
        let ground = self.screen_to_world(screen_pos, screen_size);
        Ray::new(ground + UP * Self::RAY_HEIGHT, -UP)
    }

    /// Rechnet einen Pixel-Versatz in einen Welt-Versatz (x, z) um.
    pub fn screen_delta_to_world(&self, delta: Vec2) -> Vec2 {
        Vec2::new(delta.x, -delta.y) / self.pixels_per_unit()
    }
}

impl Default for TopDownCamera {
    fn default() -> Self {
        Self::new()
    }
}
