//! Viewport: Eingaben der Zeichenfläche sammeln und die Render-Szene mit egui zeichnen.

use glam::{Mat4, Vec2, Vec3, Vec3Swizzles};

use super::keyboard;
use crate::app::AppIntent;
use crate::core::{MeshPart, TextureHandle, TopDownCamera};
use crate::shared::{DrawSurface, EditorOptions, PanelRect};

/// Strichstärke der Umrisse in Pixel.
const WIRE_STROKE_WIDTH: f32 = 1.5;

/// Sammelt alle Viewport-Eingaben eines Frames als AppIntents.
pub fn collect_viewport_intents(
    ui: &egui::Ui,
    response: &egui::Response,
    camera: &TopDownCamera,
    options: &EditorOptions,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let rect = response.rect;

    events.push(AppIntent::ViewportResized {
        size: [rect.width(), rect.height()],
    });

    // Keyboard-Shortcuts (ausgelagert in keyboard/)
    events.extend(keyboard::collect_keyboard_intents(ui));

    let screen_pos = response
        .hover_pos()
        .map(|pos| Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y));
    events.push(AppIntent::PointerMoved { screen_pos });

    if response.dragged_by(egui::PointerButton::Middle)
        || response.dragged_by(egui::PointerButton::Secondary)
    {
        let drag = response.drag_delta();
        if drag != egui::Vec2::ZERO {
            events.push(AppIntent::CameraPan {
                delta: -camera.screen_delta_to_world(Vec2::new(drag.x, drag.y)),
            });
        }
    }

    if response.hovered() {
        handle_scroll(ui, camera, rect, screen_pos, options, &mut events);
    }

    events
}

/// Shift+Scroll dreht den Raum, sonst zoomt das Mausrad die Kamera.
fn handle_scroll(
    ui: &egui::Ui,
    camera: &TopDownCamera,
    rect: egui::Rect,
    screen_pos: Option<Vec2>,
    options: &EditorOptions,
    events: &mut Vec<AppIntent>,
) {
    let (modifiers, raw_delta, smooth_y) =
        ui.input(|i| (i.modifiers, i.raw_scroll_delta, i.smooth_scroll_delta.y));

    if modifiers.shift {
        if let Some(steps) = rotation_steps_for_scroll(Vec2::new(raw_delta.x, raw_delta.y)) {
            events.push(AppIntent::RotateRequested { steps });
        }
        return;
    }

    if smooth_y == 0.0 {
        return;
    }

    let step = options.camera_scroll_zoom_step;
    let factor = if smooth_y > 0.0 { step } else { 1.0 / step };
    let viewport = Vec2::new(rect.width(), rect.height());
    let focus_world = screen_pos.map(|pos| camera.screen_to_world(pos, viewport).xz());
    events.push(AppIntent::CameraZoom {
        factor,
        focus_world,
    });
}

/// Drehrichtung für ein Scroll-Delta mit gedrückter Shift-Taste.
///
/// Mit Shift liefern viele Plattformen horizontales Scrollen; ist `x`
/// gesetzt, zählt `x`, sonst `y`. Positives Delta dreht um -1, sonst um +1.
pub fn rotation_steps_for_scroll(delta: Vec2) -> Option<i32> {
    let d = if delta.x != 0.0 { delta.x } else { delta.y };
    if d == 0.0 {
        None
    } else if d > 0.0 {
        Some(-1)
    } else {
        Some(1)
    }
}

fn to_color32(color: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// egui-Implementierung der Zeichenfläche für die Top-Down-Ansicht.
pub struct EguiSurface<'a> {
    ui: &'a mut egui::Ui,
    rect: egui::Rect,
    camera: &'a TopDownCamera,
}

impl<'a> EguiSurface<'a> {
    /// Erstellt eine Zeichenfläche über dem Viewport-Rechteck.
    pub fn new(ui: &'a mut egui::Ui, rect: egui::Rect, camera: &'a TopDownCamera) -> Self {
        Self { ui, rect, camera }
    }

    fn viewport_size(&self) -> Vec2 {
        Vec2::new(self.rect.width(), self.rect.height())
    }

    fn to_screen(&self, world: Vec3) -> egui::Pos2 {
        let local = self.camera.world_to_screen(world, self.viewport_size());
        self.rect.min + egui::vec2(local.x, local.y)
    }

    fn panel_rect(&self, rect: PanelRect) -> egui::Rect {
        egui::Rect::from_min_size(
            self.rect.min + egui::vec2(rect.min.x, rect.min.y),
            egui::vec2(rect.size.x, rect.size.y),
        )
    }
}

impl DrawSurface for EguiSurface<'_> {
    fn draw_texture(&mut self, rect: PanelRect, texture: &TextureHandle) {
        let rect = self.panel_rect(rect);
        egui::Image::new(texture.uri()).paint_at(self.ui, rect);
    }

    fn toggle_button(&mut self, rect: PanelRect, state: bool, label: &str) -> bool {
        let rect = self.panel_rect(rect);
        let response = self
            .ui
            .put(rect, egui::Button::new(label).selected(state));
        if response.clicked() {
            !state
        } else {
            state
        }
    }

    fn wire_disc(&mut self, center: Vec3, _normal: Vec3, radius: f32, color: [f32; 4]) {
        // Top-Down: Scheiben liegen immer in der Bildebene
        let center = self.to_screen(center);
        let radius = radius * self.camera.pixels_per_unit();
        self.ui.painter().circle_stroke(
            center,
            radius,
            egui::Stroke::new(WIRE_STROKE_WIDTH, to_color32(color)),
        );
    }

    fn wire_box(&mut self, center: Vec3, size: Vec3, color: [f32; 4]) {
        let half = size * 0.5;
        let rect = egui::Rect::from_two_pos(
            self.to_screen(center - half),
            self.to_screen(center + half),
        );
        self.ui.painter().rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(WIRE_STROKE_WIDTH, to_color32(color)),
            egui::StrokeKind::Middle,
        );
    }

    fn mesh(&mut self, part: &MeshPart, transform: Mat4, tint: [f32; 4]) {
        let half = part.size * 0.5;
        let points: Vec<egui::Pos2> = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]
            .into_iter()
            .map(|(sx, sz)| {
                let local = part.center + Vec3::new(sx * half.x, 0.0, sz * half.z);
                self.to_screen(transform.transform_point3(local))
            })
            .collect();
        let fill: [f32; 4] = std::array::from_fn(|i| part.color[i] * tint[i]);
        self.ui
            .painter()
            .add(egui::Shape::convex_polygon(points, to_color32(fill), egui::Stroke::NONE));
    }
}
