use cork_common::{Board, EntityId};
use cork_config::Config;
use cork_core::storage::{JsonFileStore, SnapshotStore, SCHEMA_VERSION};
use cork_core::BoardEngine;
use cork_test_helpers::prelude::*;
use std::fs;

fn file_engine(root: &std::path::Path) -> BoardEngine {
    BoardEngine::new(
        &Config::default(),
        Box::new(NullTransport),
        Box::new(JsonFileStore::new(&root.join(".corkboard")).unwrap()),
    )
}

#[test]
fn test_state_survives_restart() {
    let workspace = init_workspace();

    let (board, column) = {
        let mut engine = file_engine(workspace.path());
        let board = engine.add_board("Sprint");
        let column = engine.add_column(&board, "Todo").unwrap();
        engine.add_card(&board, &column, "Write spec").unwrap();
        (board, column)
    };

    // A second engine over the same workspace sees the persisted tree
    let engine = file_engine(workspace.path());
    assert_eq!(engine.board_count(), 1);
    assert_eq!(engine.boards()[0].id, board);
    assert_eq!(card_titles(&engine.boards()[0], &column), vec!["Write spec"]);
}

#[test]
fn test_every_mutation_overwrites_record() {
    let workspace = init_workspace();
    let store = JsonFileStore::new(&workspace.path().join(".corkboard")).unwrap();
    let mut engine = file_engine(workspace.path());

    let board = engine.add_board("Sprint");
    assert_eq!(store.load().unwrap().unwrap().boards.len(), 1);

    engine.add_column(&board, "Todo").unwrap();
    assert_eq!(
        store.load().unwrap().unwrap().boards[0].columns.len(),
        1
    );

    engine.undo();
    assert!(store.load().unwrap().unwrap().boards[0].columns.is_empty());

    engine.delete_board(&board).unwrap();
    assert!(store.load().unwrap().unwrap().boards.is_empty());
}

#[test]
fn test_record_carries_schema_version() {
    let workspace = init_workspace();
    let mut engine = file_engine(workspace.path());
    engine.add_board("Sprint");

    let raw = fs::read_to_string(
        workspace.path().join(".corkboard/board-storage.json"),
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["version"], u64::from(SCHEMA_VERSION));
    assert!(value["boards"].is_array());
}

#[test]
fn test_seeded_record_initializes_engine() {
    let workspace = workspace_with_record(vec![Board {
        id: EntityId::from("b1"),
        name: "Seeded".to_string(),
        columns: vec![],
    }]);

    let engine = file_engine(workspace.path());
    assert_eq!(engine.boards()[0].name, "Seeded");
}

#[test]
fn test_corrupt_record_starts_empty() {
    let workspace = init_workspace();
    fs::write(
        workspace.path().join(".corkboard/board-storage.json"),
        b"{definitely not json",
    )
    .unwrap();

    let engine = file_engine(workspace.path());
    assert!(engine.boards().is_empty());
}

#[test]
fn test_remote_applied_state_is_persisted() {
    let workspace = init_workspace();
    let store = JsonFileStore::new(&workspace.path().join(".corkboard")).unwrap();

    let bus = cork_sync::SyncBus::new(8);
    let mut tab_a = BoardEngine::new(
        &Config::default(),
        Box::new(bus.subscribe()),
        Box::new(cork_core::MemoryStore::new()),
    );
    let mut tab_b = BoardEngine::new(
        &Config::default(),
        Box::new(bus.subscribe()),
        Box::new(JsonFileStore::new(&workspace.path().join(".corkboard")).unwrap()),
    );

    tab_a.add_board("Sprint");
    tab_b.poll_remote();

    let record = store.load().unwrap().unwrap();
    assert_eq!(record.boards.len(), 1);
    assert_eq!(record.boards[0].name, "Sprint");
}

#[test]
fn test_failing_store_degrades_not_crashes() {
    let mut engine = BoardEngine::new(
        &Config::default(),
        Box::new(NullTransport),
        Box::new(FailingStore),
    );

    let board = engine.add_board("Sprint");
    engine.add_column(&board, "Todo").unwrap();

    // The in-memory tree stays valid and fully usable
    assert_eq!(engine.boards()[0].columns.len(), 1);
    assert!(engine.is_degraded());
    assert!(engine.undo());
    assert!(engine.boards()[0].columns.is_empty());
}

#[test]
fn test_open_uses_workspace_config() {
    let workspace = init_workspace();
    fs::create_dir_all(workspace.path().join(".corkboard")).unwrap();
    fs::write(
        workspace.path().join(".corkboard/config.toml"),
        "[history]\ndepth = 2\n",
    )
    .unwrap();

    let mut engine = BoardEngine::open(workspace.path(), Box::new(NullTransport)).unwrap();
    for i in 0..5 {
        engine.add_board(&format!("b{}", i));
    }

    // Depth-capped history: only the two most recent edits are undoable
    assert!(engine.undo());
    assert!(engine.undo());
    assert!(!engine.undo());
    assert_eq!(engine.board_count(), 3);

    // And the durable record landed in the configured directory
    assert!(workspace
        .path()
        .join(".corkboard/board-storage.json")
        .exists());
}
