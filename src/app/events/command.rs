use std::path::PathBuf;

use crate::app::state::SelectionCommand;
use crate::core::Ray;
use crate::shared::{EditorOptions, PanelTarget};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Selektion ──
    /// Navigations-Befehl auf den Selection-Cursor anwenden
    NavigateSelection { command: SelectionCommand },
    /// Panel-Toggle auf den Selection-Cursor anwenden
    ClickCatalogToggle { target: PanelTarget },

    // ── Platzierung ──
    /// Zeiger-Strahl für die nächste Auswertung setzen
    SetPointerRay { ray: Option<Ray> },
    /// Platzierungs-Drehung ändern
    RotatePlacement { steps: i32 },
    /// Bestätigung für die Auswertung dieses Frames vormerken
    RequestPlacementConfirm,

    // ── History ──
    /// Undo ausführen
    Undo,
    /// Redo ausführen
    Redo,

    // ── Kamera & Viewport ──
    /// Kamera zurücksetzen
    ResetCamera,
    /// Hineinzoomen
    ZoomIn,
    /// Herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen
    ZoomCamera {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },

    // ── Inhalte ──
    /// Ordner-Dialog anfordern
    RequestContentFolderDialog,
    /// Katalog aus einem Inhalts-Ordner laden
    LoadCatalog { root: PathBuf },

    // ── Dialoge & Anwendung ──
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen zurücksetzen und speichern
    ResetOptions,
    /// Statusmeldung entfernen
    DismissStatusMessage,
    /// Anwendung beenden
    RequestExit,
}
