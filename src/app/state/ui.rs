/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Ob der Ordner-Dialog für die Raum-Inhalte geöffnet werden soll
    pub show_content_folder_dialog: bool,
    /// Temporäre Statusnachricht (z.B. Ergebnis des Katalog-Ladens)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self {
            show_content_folder_dialog: false,
            status_message: None,
        }
    }
}
