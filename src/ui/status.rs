//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppIntent, AppState};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Räume im Katalog: {} | Platziert: {}",
                state.room_count(),
                state.placed_count()
            ));

            ui.separator();

            match state.picked_variant() {
                Some(variant) => ui.label(format!("Raum: {}", variant.room.name)),
                None => ui.label("Kein Raum gewählt"),
            };

            ui.label(format!("Drehung: {}°", state.placement.rotation.degrees()));

            if let Some(candidate) = &state.placement.last_candidate {
                ui.separator();
                let mut parts = Vec::new();
                if candidate.is_snapped {
                    parts.push("Tür-Snap");
                }
                if candidate.blocked {
                    parts.push("blockiert");
                }
                if !parts.is_empty() {
                    ui.label(parts.join(", "));
                }
            }

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Position: ({:.1}, {:.1})",
                state.view.camera.zoom, state.view.camera.position.x, state.view.camera.position.y
            ));

            if let Some(message) = &state.ui.status_message {
                ui.separator();
                ui.label(message);
                if ui.small_button("x").clicked() {
                    events.push(AppIntent::StatusMessageDismissed);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label("Shift+WASD: Katalog | Shift+Scroll: Drehen | Leertaste: Platzieren");
            });
        });
    });

    events
}
