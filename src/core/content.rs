//! Content-Quelle für Raum-Definitionen und UI-Texturen.
//!
//! `ContentRepository` abstrahiert die Asset-Ablage. Die Dateisystem-Variante
//! liest pro Unterordner alle `*.toml`-Raumdateien.

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::catalog::Catalog;
use super::room::RoomDefinition;

/// Verweis auf einen Ordner der Content-Quelle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderHandle {
    /// Anzeigename (letztes Pfadsegment)
    pub name: String,
    /// Pfad des Ordners
    pub path: PathBuf,
}

/// Verweis auf eine ladbare Textur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureHandle {
    /// Pfad der Bilddatei
    pub path: PathBuf,
}

impl TextureHandle {
    /// URI für egui-Image-Loader.
    pub fn uri(&self) -> String {
        format!("file://{}", self.path.display())
    }
}

/// Schnittstelle zur Asset-Ablage.
pub trait ContentRepository {
    /// Listet alle Raum-Ordner unterhalb von `root` in stabiler Reihenfolge.
    fn list_folders(&self, root: &Path) -> anyhow::Result<Vec<FolderHandle>>;

    /// Lädt alle Raum-Definitionen eines Ordners.
    fn list_room_definitions(&self, folder: &FolderHandle) -> anyhow::Result<Vec<RoomDefinition>>;

    /// Listet alle Texturen unter `path`.
    fn list_textures(&self, path: &Path) -> anyhow::Result<Vec<TextureHandle>>;
}

/// Baut den Katalog aus einer Content-Quelle.
///
/// Fehler der Quelle führen zu einem leeren Katalog, nicht zu einem Abbruch.
pub fn load_catalog(repo: &dyn ContentRepository, root: &Path) -> Catalog {
    match collect_folders(repo, root) {
        Ok(folders) => {
            let catalog = Catalog::build(folders);
            log::info!(
                "Katalog geladen aus {}: {} Ordner, {} Räume",
                root.display(),
                catalog.folders.len(),
                catalog.room_count()
            );
            catalog
        }
        Err(e) => {
            log::warn!(
                "Content-Quelle {} nicht lesbar, leerer Katalog: {:#}",
                root.display(),
                e
            );
            Catalog::empty()
        }
    }
}

fn collect_folders(
    repo: &dyn ContentRepository,
    root: &Path,
) -> anyhow::Result<Vec<(String, Vec<RoomDefinition>)>> {
    repo.list_folders(root)?
        .into_iter()
        .map(|folder| {
            let rooms = repo.list_room_definitions(&folder)?;
            Ok((folder.name, rooms))
        })
        .collect()
}

/// Lädt die erste gefundene Textur (Auswahl-Pfeil des Katalog-Panels).
pub fn load_selection_arrow(repo: &dyn ContentRepository, path: &Path) -> Option<TextureHandle> {
    match repo.list_textures(path) {
        Ok(textures) => textures.into_iter().next(),
        Err(e) => {
            log::debug!("Keine Texturen unter {}: {:#}", path.display(), e);
            None
        }
    }
}

// ── Dateisystem ─────────────────────────────────────────────────────

/// Dateiendungen, die als Textur gelten.
const TEXTURE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Content-Quelle auf Basis eines Verzeichnisbaums.
///
/// `<root>/<ordner>/<raum>.toml`, Ordner und Dateien alphabetisch sortiert.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsContentRepository;

impl FsContentRepository {
    /// Erstellt die Dateisystem-Quelle.
    pub fn new() -> Self {
        Self
    }
}

/// Liest ein Verzeichnis und liefert die sortierten Einträge, die `filter` erfüllen.
fn sorted_entries(dir: &Path, filter: impl Fn(&Path) -> bool) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Verzeichnis nicht lesbar: {}", dir.display()))?
    {
        let path = entry?.path();
        if filter(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
}

impl ContentRepository for FsContentRepository {
    fn list_folders(&self, root: &Path) -> anyhow::Result<Vec<FolderHandle>> {
        let dirs = sorted_entries(root, |p| p.is_dir())?;
        Ok(dirs
            .into_iter()
            .map(|path| FolderHandle {
                name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                path,
            })
            .collect())
    }

    fn list_room_definitions(&self, folder: &FolderHandle) -> anyhow::Result<Vec<RoomDefinition>> {
        let files = sorted_entries(&folder.path, |p| p.is_file() && has_extension(p, &["toml"]))?;

        let mut rooms = Vec::with_capacity(files.len());
        for file in files {
            match parse_room_file(&file) {
                Ok(room) => rooms.push(room),
                Err(e) => log::warn!("Raum-Datei übersprungen: {:#}", e),
            }
        }
        Ok(rooms)
    }

    fn list_textures(&self, path: &Path) -> anyhow::Result<Vec<TextureHandle>> {
        let files = sorted_entries(path, |p| p.is_file() && has_extension(p, &TEXTURE_EXTENSIONS))?;
        Ok(files.into_iter().map(|path| TextureHandle { path }).collect())
    }
}

/// Parst eine einzelne Raum-Datei; der Dateiname ersetzt einen fehlenden Namen.
fn parse_room_file(path: &Path) -> anyhow::Result<RoomDefinition> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Raum-Datei nicht lesbar: {}", path.display()))?;
    let mut room: RoomDefinition = toml::from_str(&content)
        .with_context(|| format!("Raum-Datei fehlerhaft: {}", path.display()))?;

    if room.name.is_empty() {
        room.name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
    }
    for entrance in &mut room.entrances {
        entrance.forward = entrance.forward.normalize_or_zero();
    }
    room.ensure_floor_mesh();
    Ok(room)
}

// ── In-Memory ───────────────────────────────────────────────────────

/// Content-Quelle aus vorgegebenen Daten (Tests, eingebettete Inhalte).
#[derive(Debug, Clone, Default)]
pub struct StaticContentRepository {
    folders: Vec<(String, Vec<RoomDefinition>)>,
    textures: Vec<TextureHandle>,
}

impl StaticContentRepository {
    /// Erstellt eine Quelle aus (Ordnername, Räume)-Paaren.
    pub fn new(folders: Vec<(String, Vec<RoomDefinition>)>) -> Self {
        Self {
            folders,
            textures: Vec::new(),
        }
    }

    /// Builder: setzt die gelisteten Texturen.
    pub fn with_textures(mut self, textures: Vec<TextureHandle>) -> Self {
        self.textures = textures;
        self
    }
}

impl ContentRepository for StaticContentRepository {
    fn list_folders(&self, root: &Path) -> anyhow::Result<Vec<FolderHandle>> {
        Ok(self
            .folders
            .iter()
            .map(|(name, _)| FolderHandle {
                name: name.clone(),
                path: root.join(name),
            })
            .collect())
    }

    fn list_room_definitions(&self, folder: &FolderHandle) -> anyhow::Result<Vec<RoomDefinition>> {
        self.folders
            .iter()
            .find(|(name, _)| *name == folder.name)
            .map(|(_, rooms)| rooms.clone())
            .ok_or_else(|| anyhow::anyhow!("Unbekannter Ordner: {}", folder.name))
    }

    fn list_textures(&self, _path: &Path) -> anyhow::Result<Vec<TextureHandle>> {
        Ok(self.textures.clone())
    }
}
