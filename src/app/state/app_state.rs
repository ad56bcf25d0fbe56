use std::path::PathBuf;
use std::sync::Arc;

use crate::app::history::{EditHistory, Snapshot};
use crate::app::placement::{PlacementParams, PlacementState};
use crate::app::CommandLog;
use crate::core::{Catalog, RoomVariant, SceneWorld, TextureHandle};
use crate::shared::options::TERRAIN_HALF_SIZE;
use crate::shared::EditorOptions;

use super::{SelectionCursor, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Read-only Raum-Katalog (Arc für O(1)-Clone)
    pub catalog: Arc<Catalog>,
    /// Selektions-Cursor über dem Katalog
    pub cursor: SelectionCursor,
    /// Frame-übergreifender Platzierungs-Zustand
    pub placement: PlacementState,
    /// Bestätigung im aktuellen Frame angefordert (wird nach der Auswertung verbraucht)
    pub confirm_pending: bool,
    /// Szene mit Terrain und platzierten Räumen (Arc für O(1)-Snapshots)
    pub scene: Arc<SceneWorld>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Snapping, Farben, Kamera)
    pub options: EditorOptions,
    /// Zieldatei beim Speichern der Optionen
    pub options_path: PathBuf,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Wurzel-Ordner der Raum-Inhalte
    pub content_root: PathBuf,
    /// Textur des Auswahl-Pfeils im Katalog-Panel
    pub selection_arrow: Option<TextureHandle>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit leerem Katalog und Terrain.
    pub fn new() -> Self {
        let options = EditorOptions::default();
        Self {
            catalog: Arc::new(Catalog::empty()),
            cursor: SelectionCursor::default(),
            placement: PlacementState::new(),
            confirm_pending: false,
            scene: Arc::new(SceneWorld::with_terrain(TERRAIN_HALF_SIZE)),
            view: ViewState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(200),
            content_root: PathBuf::from(&options.content_root),
            options,
            options_path: EditorOptions::config_path(),
            show_options_dialog: false,
            selection_arrow: None,
            should_exit: false,
        }
    }

    /// Ersetzt den Katalog und setzt den Cursor auf den Startzustand.
    pub fn install_catalog(&mut self, catalog: Catalog) {
        self.cursor = SelectionCursor::new(&catalog);
        self.catalog = Arc::new(catalog);
        self.placement.reset_transient();
    }

    /// Aktuell zur Platzierung gewählte Variante.
    pub fn picked_variant(&self) -> Option<&RoomVariant> {
        self.cursor.picked_variant(&self.catalog)
    }

    /// Platzierungs-Parameter aus den aktuellen Optionen.
    pub fn placement_params(&self) -> PlacementParams {
        PlacementParams::from_options(&self.options)
    }

    /// Gibt die Anzahl der Räume im Katalog zurück (für UI-Anzeige)
    pub fn room_count(&self) -> usize {
        self.catalog.room_count()
    }

    /// Gibt die Anzahl der platzierten Räume zurück (für UI-Anzeige)
    pub fn placed_count(&self) -> usize {
        self.scene.instance_count()
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
