//! Optionen-Dialog für Snapping, Farben und Kamera.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Snapping ────────────────────────────────────
                    ui.collapsing("Snapping", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Tür-Suchradius:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.snapping_radius)
                                        .range(0.0..=20.0)
                                        .speed(0.05),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Haft-Radius:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.snapping_hardness)
                                        .range(0.0..=50.0)
                                        .speed(0.05),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Platzierungs-Layer:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.placement_layer_mask.0)
                                        .hexadecimal(8, false, true),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Max. Strahl-Länge:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.max_ray_distance)
                                        .range(1.0..=10000.0)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                    });

                    // ── Vorschau ────────────────────────────────────
                    ui.collapsing("Vorschau", |ui| {
                        changed |= color_edit(ui, "Haft-Scheibe:", &mut opts.hardness_disc_color);
                        changed |= color_edit(ui, "Eingangs-Sonden:", &mut opts.probe_disc_color);
                        changed |= color_edit(ui, "Grundriss frei:", &mut opts.footprint_valid_color);
                        changed |=
                            color_edit(ui, "Grundriss blockiert:", &mut opts.footprint_blocked_color);
                        changed |= color_edit(ui, "Mesh-Tönung:", &mut opts.preview_tint);
                    });

                    // ── Szene ───────────────────────────────────────
                    ui.collapsing("Szene", |ui| {
                        changed |= color_edit(ui, "Raum-Umriss:", &mut opts.room_outline_color);
                        changed |= color_edit(ui, "Tür-Marker:", &mut opts.door_color);
                    });

                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Kamera", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Zoom min:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_zoom_min)
                                        .range(0.01..=1.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Zoom max:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_zoom_max)
                                        .range(1.0..=100.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Schritt (Menü):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_zoom_step)
                                        .range(1.01..=3.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Schritt (Scroll):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_scroll_zoom_step)
                                        .range(1.01..=2.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            let [r, g, b, a] = c.to_srgba_unmultiplied();
            *color = [r, g, b, a].map(|channel| channel as f32 / 255.0);
            changed = true;
        }
    });
    changed
}
