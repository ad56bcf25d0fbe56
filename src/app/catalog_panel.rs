//! Layout des Katalog-Panels aus Katalog und Selection-Cursor.
//!
//! Drei Zeilen Toggle-Buttons: Ordner, Gruppen des aktiven Ordners,
//! Varianten der aktiven Gruppe. Der Auswahl-Pfeil markiert die aktive Ebene.

use crate::app::state::{CatalogLevel, SelectionCursor};
use crate::core::{Catalog, TextureHandle};
use crate::shared::{CatalogPanel, PanelButton, PanelRect, PanelTarget};

/// Linke Kante der ersten Button-Spalte.
pub const BUTTON_ORIGIN_X: f32 = 70.0;
/// Button-Größe in Pixel.
pub const BUTTON_SIZE: [f32; 2] = [150.0, 50.0];
/// Horizontaler Abstand zwischen Buttons.
pub const BUTTON_GAP: f32 = 2.0;
/// Obere Kante der Zeilen (Ordner, Gruppen, Varianten).
pub const ROW_Y: [f32; 3] = [10.0, 70.0, 140.0];

const SELECTOR_X: f32 = 25.0;
const SELECTOR_Y: f32 = 25.0;
const SELECTOR_ROW_STEP: f32 = 55.0;
const SELECTOR_SIZE: f32 = 25.0;
// Varianten-Zeile liegt tiefer als das Raster der ersten beiden Zeilen
const SELECTOR_ROW_FACTOR: [f32; 3] = [0.0, 1.0, 2.3];

fn row_rect(row: usize, column: usize) -> PanelRect {
    PanelRect::new(
        BUTTON_ORIGIN_X + column as f32 * (BUTTON_SIZE[0] + BUTTON_GAP),
        ROW_Y[row],
        BUTTON_SIZE[0],
        BUTTON_SIZE[1],
    )
}

/// Position des Auswahl-Pfeils für eine Ebene.
pub fn selector_rect(level: CatalogLevel) -> PanelRect {
    PanelRect::new(
        SELECTOR_X,
        SELECTOR_Y + SELECTOR_ROW_STEP * SELECTOR_ROW_FACTOR[level.row()],
        SELECTOR_SIZE,
        SELECTOR_SIZE,
    )
}

/// Baut das Panel eines Frames.
pub fn layout(
    catalog: &Catalog,
    cursor: &SelectionCursor,
    arrow: Option<&TextureHandle>,
) -> CatalogPanel {
    let mut buttons: Vec<PanelButton> = catalog
        .folders
        .iter()
        .enumerate()
        .map(|(i, folder)| PanelButton {
            rect: row_rect(0, i),
            label: folder.name.clone(),
            selected: cursor.is_folder_selected(i),
            target: PanelTarget::Folder(i),
        })
        .collect();

    if let Some(folder_index) = cursor.folder_index() {
        if let Some(folder) = catalog.folder(folder_index) {
            buttons.extend(folder.buckets.iter().enumerate().map(|(b, bucket)| PanelButton {
                rect: row_rect(1, b),
                label: bucket.label.clone(),
                selected: cursor.is_bucket_selected(folder_index, b),
                target: PanelTarget::Bucket(b),
            }));
        }

        let bucket = cursor
            .bucket_index()
            .and_then(|b| catalog.bucket(folder_index, b));
        if let Some(bucket) = bucket {
            buttons.extend(bucket.variants.iter().enumerate().map(|(v, variant)| PanelButton {
                rect: row_rect(2, v),
                label: variant.room.name.clone(),
                selected: cursor.is_variant_selected(variant.id),
                target: PanelTarget::Variant(v),
            }));
        }
    }

    CatalogPanel {
        buttons,
        selector: Some(selector_rect(cursor.active_level)),
        selector_texture: arrow.cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::SelectionCommand;
    use crate::core::RoomDefinition;
    use approx::assert_relative_eq;
    use glam::Vec3;

    fn catalog() -> Catalog {
        let one_door = |name: &str| {
            RoomDefinition::new(name, 4.0, 4.0).with_entrance(Vec3::new(0.0, 0.0, 2.0), Vec3::Z)
        };
        Catalog::build(vec![
            ("Keller".into(), vec![one_door("k0"), one_door("k1")]),
            ("Turm".into(), vec![RoomDefinition::new("t0", 2.0, 2.0)]),
        ])
    }

    fn targets(panel: &CatalogPanel) -> Vec<PanelTarget> {
        panel.buttons.iter().map(|b| b.target).collect()
    }

    #[test]
    fn rows_follow_active_folder_and_bucket() {
        let catalog = catalog();
        let cursor = SelectionCursor::new(&catalog);
        let panel = layout(&catalog, &cursor, None);

        assert_eq!(
            targets(&panel),
            vec![
                PanelTarget::Folder(0),
                PanelTarget::Folder(1),
                PanelTarget::Bucket(0),
                PanelTarget::Variant(0),
                PanelTarget::Variant(1),
            ]
        );
        assert_eq!(panel.buttons[2].label, "N of Doors: 1");
    }

    #[test]
    fn buttons_use_fixed_grid() {
        let catalog = catalog();
        let cursor = SelectionCursor::new(&catalog);
        let panel = layout(&catalog, &cursor, None);

        let second_folder = &panel.buttons[1];
        assert_relative_eq!(second_folder.rect.min.x, 222.0);
        assert_relative_eq!(second_folder.rect.min.y, 10.0);
        let second_variant = &panel.buttons[4];
        assert_relative_eq!(second_variant.rect.min.x, 222.0);
        assert_relative_eq!(second_variant.rect.min.y, 140.0);
        assert_relative_eq!(second_variant.rect.size.x, 150.0);
    }

    #[test]
    fn selection_flags_are_derived_from_cursor() {
        let catalog = catalog();
        let mut cursor = SelectionCursor::new(&catalog);
        cursor.handle(&catalog, SelectionCommand::LevelDown);
        cursor.handle(&catalog, SelectionCommand::LevelDown);
        cursor.handle(&catalog, SelectionCommand::Next);
        cursor.handle(&catalog, SelectionCommand::Next);

        let panel = layout(&catalog, &cursor, None);
        let selected: Vec<PanelTarget> = panel
            .buttons
            .iter()
            .filter(|b| b.selected)
            .map(|b| b.target)
            .collect();
        assert_eq!(
            selected,
            vec![PanelTarget::Folder(0), PanelTarget::Bucket(0), PanelTarget::Variant(1)]
        );
    }

    #[test]
    fn selector_marks_active_level() {
        assert_relative_eq!(selector_rect(CatalogLevel::Folder).min.y, 25.0);
        assert_relative_eq!(selector_rect(CatalogLevel::Bucket).min.y, 80.0);
        assert_relative_eq!(selector_rect(CatalogLevel::Variant).min.y, 151.5, epsilon = 1e-4);
    }

    #[test]
    fn empty_catalog_has_only_selector() {
        let catalog = Catalog::empty();
        let panel = layout(&catalog, &SelectionCursor::new(&catalog), None);
        assert!(panel.buttons.is_empty());
        assert!(panel.selector.is_some());
    }
}
