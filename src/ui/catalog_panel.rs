//! Zeichnet das Katalog-Panel und übersetzt Toggle-Wechsel in Intents.

use crate::app::AppIntent;
use crate::core::TopDownCamera;
use crate::shared::{CatalogPanel, DrawSurface};

use super::viewport::EguiSurface;

/// Zeigt das Panel als Vordergrund-Ebene über dem Viewport.
///
/// Muss vor `AppController::tick` laufen; die gelieferten Klicks gehören
/// zum selben Frame wie die Tastatur-Intents.
pub fn show_catalog_panel(
    ctx: &egui::Context,
    viewport: egui::Rect,
    camera: &TopDownCamera,
    panel: &CatalogPanel,
) -> Vec<AppIntent> {
    egui::Area::new(egui::Id::new("catalog_panel"))
        .order(egui::Order::Foreground)
        .fixed_pos(viewport.min)
        .show(ctx, |ui| {
            let mut surface = EguiSurface::new(ui, viewport, camera);
            draw_catalog_panel(&mut surface, panel)
        })
        .inner
}

/// Zeichnet alle Toggle-Buttons und den Auswahl-Pfeil.
///
/// Jeder Button, dessen Zustand sich durch Benutzer-Eingabe ändert,
/// erzeugt ein `CatalogToggleClicked`.
pub fn draw_catalog_panel(surface: &mut dyn DrawSurface, panel: &CatalogPanel) -> Vec<AppIntent> {
    let mut events = Vec::new();

    for button in &panel.buttons {
        let after = surface.toggle_button(button.rect, button.selected, &button.label);
        if after != button.selected {
            events.push(AppIntent::CatalogToggleClicked {
                target: button.target,
            });
        }
    }

    if let (Some(rect), Some(texture)) = (panel.selector, panel.selector_texture.as_ref()) {
        surface.draw_texture(rect, texture);
    }

    events
}
