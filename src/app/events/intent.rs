use std::path::PathBuf;

use crate::app::state::SelectionCommand;
use crate::shared::{EditorOptions, PanelTarget};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Katalog-Navigation ──
    /// Tastatur-Navigation im Katalog (Shift+W/S/A/D)
    SelectionNavigated { command: SelectionCommand },
    /// Toggle im Katalog-Panel wurde umgeschaltet
    CatalogToggleClicked { target: PanelTarget },

    // ── Platzierung ──
    /// Zeiger über dem Viewport bewegt (None = Zeiger außerhalb)
    PointerMoved { screen_pos: Option<glam::Vec2> },
    /// Raum um Viertel-Drehungen drehen (Shift+Scroll)
    RotateRequested { steps: i32 },
    /// Platzierung bestätigen (Leertaste)
    PlacementConfirmed,

    // ── History ──
    /// Undo: Letzte Platzierung rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Platzierung wiederherstellen
    RedoRequested,

    // ── Kamera & Viewport ──
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten x, z)
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt in Welt x, z)
    CameraZoom {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },

    // ── Inhalte ──
    /// Ordner-Dialog für Raum-Inhalte öffnen
    OpenContentFolderRequested,
    /// Inhalts-Ordner wurde im Dialog gewählt
    ContentFolderSelected { path: PathBuf },
    /// Katalog aus dem aktuellen Inhalts-Ordner neu laden
    ReloadCatalogRequested,

    // ── Dialoge & Anwendung ──
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Statusmeldung ausblenden
    StatusMessageDismissed,
    /// Anwendung beenden
    ExitRequested,
}

/// Koaleszenz-Klasse eines Intents innerhalb eines Frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    /// Tastatur-Navigation
    Navigation,
    /// Panel-Toggle
    ToggleClick,
    /// Zeiger-Bewegung
    Pointer,
    /// Drehung
    Rotation,
    /// Bestätigung
    Confirm,
}

impl AppIntent {
    /// Klasse für die Frame-Koaleszenz; `None` = Intent bleibt in Reihenfolge erhalten.
    pub fn coalesce_kind(&self) -> Option<IntentKind> {
        match self {
            Self::SelectionNavigated { .. } => Some(IntentKind::Navigation),
            Self::CatalogToggleClicked { .. } => Some(IntentKind::ToggleClick),
            Self::PointerMoved { .. } => Some(IntentKind::Pointer),
            Self::RotateRequested { .. } => Some(IntentKind::Rotation),
            Self::PlacementConfirmed => Some(IntentKind::Confirm),
            _ => None,
        }
    }
}
