use crate::core::TopDownCamera;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Top-Down-Kamera für die Ansicht
    pub camera: TopDownCamera,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: TopDownCamera::new(),
            viewport_size: [0.0, 0.0],
        }
    }

    /// Viewport-Größe als Vektor.
    pub fn viewport(&self) -> glam::Vec2 {
        glam::Vec2::from(self.viewport_size)
    }
}
