//! Rooms-Tool-Editor.
//!
//! Editor zum Platzieren vorgefertigter Räume mit Boden- und Tür-Snapping.

use eframe::egui;
use rooms_tool_editor::{ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Rooms-Tool-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Rooms-Tool-Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "Rooms-Tool-Editor",
            options,
            Box::new(|cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(EditorApp::new()))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    /// Intents für den nächsten Tick (initiales Laden des Katalogs)
    pending: Vec<AppIntent>,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.content_root = editor_options.content_root.clone().into();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
            pending: vec![AppIntent::ReloadCatalogRequested],
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = std::mem::take(&mut self.pending);
        events.extend(ui::render_status_bar(ctx, &self.state));
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::handle_content_dialogs(&mut self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default().show(ctx, |panel_ui| {
            let (rect, response) =
                panel_ui.allocate_exact_size(panel_ui.available_size(), egui::Sense::click_and_drag());

            events.extend(ui::collect_viewport_intents(
                panel_ui,
                &response,
                &self.state.view.camera,
                &self.state.options,
            ));

            // Panel vor dem Tick: Klicks und Tastatur landen im selben Frame
            let panel = self.controller.catalog_panel(&self.state);
            events.extend(ui::show_catalog_panel(
                ctx,
                rect,
                &self.state.view.camera,
                &panel,
            ));

            let scene = self
                .controller
                .tick(&mut self.state, std::mem::take(&mut events));

            let mut surface = ui::EguiSurface::new(panel_ui, rect, &scene.camera);
            scene.issue_commands(&mut surface);

            if self.state.room_count() == 0 {
                panel_ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Keine Räume geladen. File → Open Content Folder",
                    egui::FontId::proportional(20.0),
                    egui::Color32::WHITE,
                );
            }
        });

        if ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}
