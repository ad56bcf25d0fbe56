//! Dreistufiger Raum-Katalog: Ordner → Eingangs-Gruppe → Raum-Variante.
//!
//! Der Katalog ist nach dem Aufbau read-only. Welche Elemente selektiert sind,
//! verwaltet ausschließlich der `SelectionCursor` im App-Layer.

use std::sync::Arc;

use super::room::RoomDefinition;

/// Präfix der Gruppen-Beschriftung.
pub const BUCKET_LABEL_PREFIX: &str = "N of Doors: ";

/// Stabile ID einer Raum-Variante, vergeben beim Katalog-Aufbau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub u32);

/// Einzelne platzierbare Raum-Variante.
#[derive(Debug, Clone)]
pub struct RoomVariant {
    /// Stabile ID (ersetzt Objekt-Identität)
    pub id: RoomId,
    /// Raum-Definition
    pub room: Arc<RoomDefinition>,
}

/// Gruppe aller Räume mit derselben Eingangs-Anzahl.
#[derive(Debug, Clone)]
pub struct EntranceBucket {
    /// Beschriftung, z.B. "N of Doors: 2"
    pub label: String,
    /// Gemeinsame Eingangs-Anzahl
    pub entrance_count: usize,
    /// Varianten in stabiler Sortierreihenfolge
    pub variants: Vec<RoomVariant>,
}

/// Oberste Katalog-Ebene: ein Ordner der Content-Quelle.
#[derive(Debug, Clone)]
pub struct FolderBlock {
    /// Ordnername
    pub name: String,
    /// Eingangs-Gruppen mit aufsteigender Eingangs-Anzahl
    pub buckets: Vec<EntranceBucket>,
}

/// Geordneter Katalog aller Ordner.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Ordner in Reihenfolge der Content-Quelle
    pub folders: Vec<FolderBlock>,
}

impl Catalog {
    /// Baut den Katalog aus (Ordnername, Raum-Definitionen)-Paaren.
    ///
    /// Räume werden stabil nach Eingangs-Anzahl sortiert und in Gruppen
    /// zerlegt. Gruppen entstehen nur für tatsächlich vorkommende Anzahlen.
    pub fn build(folders: Vec<(String, Vec<RoomDefinition>)>) -> Self {
        let mut next_id = 0u32;
        let folders = folders
            .into_iter()
            .map(|(name, rooms)| FolderBlock {
                name,
                buckets: build_buckets(rooms, &mut next_id),
            })
            .collect();

        Self { folders }
    }

    /// Leerer Katalog (z.B. bei unlesbarer Content-Quelle).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn kein Ordner existiert.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Anzahl aller Raum-Varianten über alle Ordner.
    pub fn room_count(&self) -> usize {
        self.folders
            .iter()
            .flat_map(|f| f.buckets.iter())
            .map(|b| b.variants.len())
            .sum()
    }

    /// Ordner per Index.
    pub fn folder(&self, index: usize) -> Option<&FolderBlock> {
        self.folders.get(index)
    }

    /// Gruppe per (Ordner, Gruppe).
    pub fn bucket(&self, folder: usize, bucket: usize) -> Option<&EntranceBucket> {
        self.folder(folder)?.buckets.get(bucket)
    }

    /// Variante per (Ordner, Gruppe, Variante).
    pub fn variant(&self, folder: usize, bucket: usize, variant: usize) -> Option<&RoomVariant> {
        self.bucket(folder, bucket)?.variants.get(variant)
    }
}

/// Sortiert nach Eingangs-Anzahl und gruppiert bei jedem Anstieg der Anzahl.
fn build_buckets(mut rooms: Vec<RoomDefinition>, next_id: &mut u32) -> Vec<EntranceBucket> {
    // Vec::sort_by_key ist stabil: gleiche Anzahl behält die Quell-Reihenfolge
    rooms.sort_by_key(|room| room.entrance_count());

    let mut buckets: Vec<EntranceBucket> = Vec::new();
    for room in rooms {
        let count = room.entrance_count();
        let id = RoomId(*next_id);
        *next_id += 1;

        let variant = RoomVariant {
            id,
            room: Arc::new(room),
        };

        match buckets.last_mut() {
            Some(bucket) if bucket.entrance_count == count => bucket.variants.push(variant),
            _ => buckets.push(EntranceBucket {
                label: format!("{BUCKET_LABEL_PREFIX}{count}"),
                entrance_count: count,
                variants: vec![variant],
            }),
        }
    }

    buckets
}
