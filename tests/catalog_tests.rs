use glam::Vec3;
use rooms_tool_editor::core::BUCKET_LABEL_PREFIX;
use rooms_tool_editor::{
    AppController, AppIntent, AppState, Catalog, CatalogLevel, FsContentRepository,
    RoomDefinition, SelectionCommand, SelectionCursor,
};
use std::fs;

fn room(name: &str, doors: usize) -> RoomDefinition {
    (0..doors).fold(RoomDefinition::new(name, 6.0, 6.0), |r, i| {
        r.with_entrance(Vec3::new(i as f32 - 2.0, 0.0, 3.0), Vec3::Z)
    })
}

#[test]
fn test_rooms_are_grouped_by_entrance_count() {
    let catalog = Catalog::build(vec![(
        "Gemischt".into(),
        vec![
            room("r0", 2),
            room("r1", 2),
            room("r2", 5),
            room("r3", 5),
            room("r4", 5),
            room("r5", 3),
        ],
    )]);

    let folder = &catalog.folders[0];
    let counts: Vec<usize> = folder.buckets.iter().map(|b| b.entrance_count).collect();
    assert_eq!(counts, vec![2, 3, 5]);

    let sizes: Vec<usize> = folder.buckets.iter().map(|b| b.variants.len()).collect();
    assert_eq!(sizes, vec![2, 1, 3]);

    assert_eq!(folder.buckets[2].label, format!("{}5", BUCKET_LABEL_PREFIX));

    // Gleiche Anzahl behält die Quell-Reihenfolge
    let five: Vec<&str> = folder.buckets[2]
        .variants
        .iter()
        .map(|v| v.room.name.as_str())
        .collect();
    assert_eq!(five, vec!["r2", "r3", "r4"]);
}

#[test]
fn test_room_ids_are_unique_across_folders() {
    let catalog = Catalog::build(vec![
        ("A".into(), vec![room("a0", 1), room("a1", 2)]),
        ("B".into(), vec![room("b0", 1)]),
    ]);

    let mut ids: Vec<_> = catalog
        .folders
        .iter()
        .flat_map(|f| f.buckets.iter())
        .flat_map(|b| b.variants.iter())
        .map(|v| v.id)
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_folder_revisit_restores_remembered_bucket() {
    let catalog = Catalog::build(vec![
        ("A".into(), vec![room("a0", 1), room("a1", 2), room("a2", 3)]),
        ("B".into(), vec![room("b0", 1)]),
    ]);
    let mut cursor = SelectionCursor::new(&catalog);

    // In Ordner A die dritte Gruppe wählen
    cursor.handle(&catalog, SelectionCommand::LevelDown);
    cursor.handle(&catalog, SelectionCommand::Next);
    cursor.handle(&catalog, SelectionCommand::Next);
    assert_eq!(cursor.bucket_index(), Some(2));

    // Nach B und zurück
    cursor.handle(&catalog, SelectionCommand::LevelUp);
    cursor.handle(&catalog, SelectionCommand::Next);
    assert_eq!(cursor.folder_index(), Some(1));
    assert_eq!(cursor.bucket_index(), Some(0));
    cursor.handle(&catalog, SelectionCommand::Prev);

    assert_eq!(cursor.folder_index(), Some(0));
    assert_eq!(cursor.bucket_index(), Some(2));
    assert!(cursor.is_bucket_selected(0, 2));
    assert!(!cursor.is_bucket_selected(0, 0));
}

#[test]
fn test_navigation_clamps_without_wraparound() {
    let catalog = Catalog::build(vec![("A".into(), vec![room("a0", 1)])]);
    let mut cursor = SelectionCursor::new(&catalog);

    cursor.handle(&catalog, SelectionCommand::LevelUp);
    assert_eq!(cursor.active_level, CatalogLevel::Folder);
    cursor.handle(&catalog, SelectionCommand::Prev);
    assert_eq!(cursor.folder_index(), Some(0));

    for _ in 0..5 {
        cursor.handle(&catalog, SelectionCommand::LevelDown);
    }
    assert_eq!(cursor.active_level, CatalogLevel::Variant);
    cursor.handle(&catalog, SelectionCommand::Next);
    cursor.handle(&catalog, SelectionCommand::Next);
    assert_eq!(cursor.picked().map(|p| p.variant), Some(0));
}

#[test]
fn test_content_folder_selection_loads_from_filesystem() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let flure = dir.path().join("flure");
    fs::create_dir(&flure).expect("Ordner anlegen");
    fs::write(
        flure.join("gang.toml"),
        r#"
            width = 2.0
            depth = 8.0

            [[entrances]]
            position = [0.0, 0.0, 4.0]
            forward = [0.0, 0.0, 1.0]
        "#,
    )
    .expect("schreiben");

    let mut controller = AppController::with_content(Box::new(FsContentRepository::new()));
    let mut state = AppState::new();
    controller.tick(
        &mut state,
        vec![AppIntent::ContentFolderSelected {
            path: dir.path().to_path_buf(),
        }],
    );

    assert_eq!(state.room_count(), 1);
    assert_eq!(state.content_root, dir.path());
    assert_eq!(state.catalog.folders[0].name, "flure");
    assert_eq!(state.catalog.folders[0].buckets[0].variants[0].room.name, "gang");
}

#[test]
fn test_unreadable_content_root_yields_empty_catalog() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let mut controller = AppController::with_content(Box::new(FsContentRepository::new()));
    let mut state = AppState::new();

    controller.tick(
        &mut state,
        vec![AppIntent::ContentFolderSelected {
            path: dir.path().join("fehlt"),
        }],
    );

    assert_eq!(state.room_count(), 0);
    assert!(state.cursor.folder_index().is_none());
}
