//! Selection-Cursor über dem dreistufigen Raum-Katalog.
//!
//! Der Cursor hält nur Indizes. Ob ein Katalog-Element "ausgewählt" ist, wird
//! aus dem Cursor abgeleitet und nie im Katalog gespeichert:
//! - Ordner i ⇔ `folder_index == Some(i)`
//! - Gruppe b in Ordner f ⇔ gemerkte Gruppe von f == b
//! - Variante ⇔ ihre `RoomId` entspricht der gewählten Variante
//!
//! Tastatur (`handle`) und Panel-Klicks (`click_*`) laufen über dieselbe
//! Propagations-Logik.

use std::collections::HashMap;

use crate::core::{Catalog, RoomId, RoomVariant};

/// Katalog-Ebene, auf die horizontale Navigation wirkt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum CatalogLevel {
    /// Ordner-Zeile
    #[default]
    Folder,
    /// Eingangs-Gruppen-Zeile
    Bucket,
    /// Varianten-Zeile
    Variant,
}

impl CatalogLevel {
    /// Ebene darüber (an der Ordner-Ebene geklemmt).
    pub fn up(self) -> Self {
        match self {
            Self::Folder | Self::Bucket => Self::Folder,
            Self::Variant => Self::Bucket,
        }
    }

    /// Ebene darunter (an der Varianten-Ebene geklemmt).
    pub fn down(self) -> Self {
        match self {
            Self::Folder => Self::Bucket,
            Self::Bucket | Self::Variant => Self::Variant,
        }
    }

    /// Zeilen-Index 0..=2 (Folder, Bucket, Variant).
    pub fn row(self) -> usize {
        match self {
            Self::Folder => 0,
            Self::Bucket => 1,
            Self::Variant => 2,
        }
    }
}

/// Diskreter Navigations-Befehl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionCommand {
    /// Eine Ebene nach oben (Shift+W)
    LevelUp,
    /// Eine Ebene nach unten (Shift+S)
    LevelDown,
    /// Vorheriges Element der aktiven Ebene (Shift+A)
    Prev,
    /// Nächstes Element der aktiven Ebene (Shift+D)
    Next,
}

/// Zur Platzierung gewählte Variante mit ihrer Katalog-Position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickedVariant {
    /// Ordner-Index
    pub folder: usize,
    /// Gruppen-Index
    pub bucket: usize,
    /// Varianten-Index
    pub variant: usize,
    /// Stabile ID
    pub id: RoomId,
}

/// Cursor über dem Katalog (einzige veränderliche Selektionsquelle).
#[derive(Debug, Clone, Default)]
pub struct SelectionCursor {
    /// Ebene, auf die Prev/Next wirkt
    pub active_level: CatalogLevel,
    folder_index: Option<usize>,
    bucket_index: Option<usize>,
    variant_index: Option<usize>,
    remembered_buckets: HashMap<usize, usize>,
    picked: Option<PickedVariant>,
}

/// Neuer Index nach Klemmung auf `0..len`; ohne bisherigen Index gilt −1.
fn clamp_step(current: Option<usize>, direction: i32, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let base = current.map_or(-1, |i| i as i64);
    Some((base + direction as i64).clamp(0, len as i64 - 1) as usize)
}

impl SelectionCursor {
    /// Initialer Cursor: erster Ordner, erste Gruppe (falls vorhanden), keine Variante.
    pub fn new(catalog: &Catalog) -> Self {
        let mut cursor = Self::default();
        if !catalog.is_empty() {
            cursor.enter_folder(catalog, 0);
        }
        cursor
    }

    /// Index des ausgewählten Ordners.
    pub fn folder_index(&self) -> Option<usize> {
        self.folder_index
    }

    /// Index der ausgewählten Gruppe im aktiven Ordner.
    pub fn bucket_index(&self) -> Option<usize> {
        self.bucket_index
    }

    /// Hervorgehobene Variante in der aktiven Gruppe.
    pub fn variant_index(&self) -> Option<usize> {
        self.variant_index
    }

    /// Gewählte Variante (unabhängig von der Navigation).
    pub fn picked(&self) -> Option<PickedVariant> {
        self.picked
    }

    /// Löst die gewählte Variante im Katalog auf.
    pub fn picked_variant<'a>(&self, catalog: &'a Catalog) -> Option<&'a RoomVariant> {
        let picked = self.picked?;
        catalog
            .variant(picked.folder, picked.bucket, picked.variant)
            .filter(|v| v.id == picked.id)
    }

    /// Ist der Ordner ausgewählt?
    pub fn is_folder_selected(&self, folder: usize) -> bool {
        self.folder_index == Some(folder)
    }

    /// Ist die Gruppe in ihrem Ordner ausgewählt (inklusive gemerkter Auswahl)?
    pub fn is_bucket_selected(&self, folder: usize, bucket: usize) -> bool {
        self.remembered_buckets.get(&folder) == Some(&bucket)
    }

    /// Ist die Variante die gewählte?
    pub fn is_variant_selected(&self, id: RoomId) -> bool {
        self.picked.is_some_and(|p| p.id == id)
    }

    // ── Tastatur-Kanal ──────────────────────────────────────────────

    /// Verarbeitet einen Navigations-Befehl.
    pub fn handle(&mut self, catalog: &Catalog, command: SelectionCommand) {
        match command {
            SelectionCommand::LevelUp => self.active_level = self.active_level.up(),
            SelectionCommand::LevelDown => self.active_level = self.active_level.down(),
            SelectionCommand::Prev => self.shift(catalog, -1),
            SelectionCommand::Next => self.shift(catalog, 1),
        }
    }

    fn shift(&mut self, catalog: &Catalog, direction: i32) {
        match self.active_level {
            CatalogLevel::Folder => {
                if let Some(target) = clamp_step(self.folder_index, direction, catalog.folders.len()) {
                    self.enter_folder(catalog, target);
                }
            }
            CatalogLevel::Bucket => {
                let Some(folder) = self.folder_index.and_then(|f| catalog.folder(f)) else {
                    log::debug!("Gruppen-Wechsel ohne Ordner ignoriert");
                    return;
                };
                if let Some(target) = clamp_step(self.bucket_index, direction, folder.buckets.len()) {
                    self.enter_bucket(catalog, target);
                }
            }
            CatalogLevel::Variant => self.shift_variant(catalog, direction),
        }
    }

    fn shift_variant(&mut self, catalog: &Catalog, direction: i32) {
        let (Some(folder), Some(bucket)) = (self.folder_index, self.bucket_index) else {
            log::debug!("Varianten-Wechsel ohne Gruppe ignoriert");
            return;
        };
        let Some(entrance_bucket) = catalog.bucket(folder, bucket) else {
            return;
        };
        let len = entrance_bucket.variants.len();
        if len == 0 {
            return;
        }

        // Ohne Auswahl in dieser Gruppe wird die Richtung ignoriert
        let target = match self.picked {
            Some(p) if p.folder == folder && p.bucket == bucket => {
                clamp_step(Some(p.variant), direction, len).unwrap_or(0)
            }
            _ => 0,
        };
        self.pick(catalog, folder, bucket, target);
    }

    // ── Panel-Kanal ─────────────────────────────────────────────────

    /// Klick auf einen Ordner-Toggle.
    pub fn click_folder(&mut self, catalog: &Catalog, folder: usize) {
        self.active_level = CatalogLevel::Folder;
        if folder < catalog.folders.len() && self.folder_index != Some(folder) {
            self.enter_folder(catalog, folder);
        }
    }

    /// Klick auf einen Gruppen-Toggle im aktiven Ordner.
    pub fn click_bucket(&mut self, catalog: &Catalog, bucket: usize) {
        self.active_level = CatalogLevel::Bucket;
        let exists = self
            .folder_index
            .is_some_and(|f| catalog.bucket(f, bucket).is_some());
        if exists && self.bucket_index != Some(bucket) {
            self.enter_bucket(catalog, bucket);
        }
    }

    /// Klick auf einen Varianten-Toggle in der aktiven Gruppe.
    pub fn click_variant(&mut self, catalog: &Catalog, variant: usize) {
        self.active_level = CatalogLevel::Variant;
        let (Some(folder), Some(bucket)) = (self.folder_index, self.bucket_index) else {
            return;
        };
        let Some(clicked) = catalog.variant(folder, bucket, variant) else {
            return;
        };
        if !self.is_variant_selected(clicked.id) {
            self.pick(catalog, folder, bucket, variant);
        }
    }

    // ── Propagation ─────────────────────────────────────────────────

    /// Aktiviert einen Ordner und wählt dessen gemerkte Gruppe (Standard: 0).
    fn enter_folder(&mut self, catalog: &Catalog, folder: usize) {
        self.folder_index = Some(folder);
        self.bucket_index = None;
        self.variant_index = None;

        let bucket_count = catalog.folder(folder).map_or(0, |f| f.buckets.len());
        if bucket_count > 0 {
            let remembered = self
                .remembered_buckets
                .get(&folder)
                .copied()
                .filter(|b| *b < bucket_count)
                .unwrap_or(0);
            self.enter_bucket(catalog, remembered);
        }
    }

    /// Aktiviert eine Gruppe im aktiven Ordner und hebt eine Variante hervor.
    fn enter_bucket(&mut self, catalog: &Catalog, bucket: usize) {
        let Some(folder) = self.folder_index else {
            return;
        };
        self.bucket_index = Some(bucket);
        self.remembered_buckets.insert(folder, bucket);

        let variant_count = catalog.bucket(folder, bucket).map_or(0, |b| b.variants.len());
        self.variant_index = match self.picked {
            Some(p) if p.folder == folder && p.bucket == bucket => Some(p.variant),
            _ if variant_count > 0 => Some(0),
            _ => None,
        };
    }

    fn pick(&mut self, catalog: &Catalog, folder: usize, bucket: usize, variant: usize) {
        let Some(room) = catalog.variant(folder, bucket, variant) else {
            return;
        };
        self.variant_index = Some(variant);
        self.picked = Some(PickedVariant {
            folder,
            bucket,
            variant,
            id: room.id,
        });
        log::debug!("Raum gewählt: {} ({:?})", room.room.name, room.id);
    }
}
