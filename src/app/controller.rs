//! Application Controller für zentrale Event-Verarbeitung.

use super::catalog_panel;
use super::frame::coalesce_intents;
use super::render_scene;
use super::use_cases;
use super::{AppCommand, AppIntent, AppState};
use crate::core::{ContentRepository, FsContentRepository};
use crate::shared::{CatalogPanel, RenderScene};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
pub struct AppController {
    content: Box<dyn ContentRepository>,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl AppController {
    /// Erstellt einen Controller, der Inhalte aus dem Dateisystem lädt.
    pub fn new() -> Self {
        Self::with_content(Box::new(FsContentRepository::new()))
    }

    /// Erstellt einen Controller mit eigener Content-Quelle.
    pub fn with_content(content: Box<dyn ContentRepository>) -> Self {
        Self { content }
    }

    /// Verarbeitet einen Frame: Intents koaleszieren und ausführen,
    /// Platzierung einmal auswerten, Render-Szene bauen.
    ///
    /// Ein fehlschlagender Intent wird geloggt; die übrigen Intents des
    /// Frames und die Auswertung laufen trotzdem.
    pub fn tick(&mut self, state: &mut AppState, intents: Vec<AppIntent>) -> RenderScene {
        for intent in coalesce_intents(intents) {
            if let Err(e) = self.handle_intent(state, intent) {
                log::error!("Intent-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
        use_cases::placement::evaluate_frame(state);
        self.build_render_scene(state)
    }

    /// Layout des Katalog-Panels für den aktuellen Zustand.
    ///
    /// Der Host zeichnet es vor `tick`, damit Panel-Klicks im selben Frame
    /// wie die Tastatur-Eingaben verarbeitet werden.
    pub fn catalog_panel(&self, state: &AppState) -> CatalogPanel {
        catalog_panel::layout(&state.catalog, &state.cursor, state.selection_arrow.as_ref())
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Selektion ===
            AppCommand::NavigateSelection { command } => {
                handlers::selection::navigate(state, command)
            }
            AppCommand::ClickCatalogToggle { target } => handlers::selection::click(state, target),

            // === Platzierung ===
            AppCommand::SetPointerRay { ray } => handlers::placement::set_pointer_ray(state, ray),
            AppCommand::RotatePlacement { steps } => handlers::placement::rotate(state, steps),
            AppCommand::RequestPlacementConfirm => handlers::placement::request_confirm(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),

            // === Inhalte ===
            AppCommand::RequestContentFolderDialog => handlers::content::request_folder_dialog(state),
            AppCommand::LoadCatalog { root } => {
                handlers::content::load_catalog(state, self.content.as_ref(), root)
            }

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::DismissStatusMessage => handlers::dialog::dismiss_status_message(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
