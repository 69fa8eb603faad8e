//! Workspace initialization utilities for tests
//!
//! Provides functions to create temporary directories and seed Corkboard
//! workspaces with durable records for integration testing.

use assert_fs::TempDir;
use cork_common::Board;
use cork_core::storage::{BoardRecord, JsonFileStore, SnapshotStore};
use std::fs;

/// Create a temporary directory for testing
///
/// The directory is cleaned up when the `TempDir` is dropped.
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Initialize a Corkboard workspace in a temp directory
///
/// Creates the `.corkboard` directory the engine persists into.
pub fn init_workspace() -> TempDir {
    let temp = temp_dir();
    let corkboard_dir = temp.path().join(".corkboard");
    fs::create_dir_all(&corkboard_dir).expect("Failed to create .corkboard directory");
    temp
}

/// Create a workspace whose durable record already holds `boards`
///
/// # Example
///
/// ```rust
/// use cork_test_helpers::workspace::workspace_with_record;
///
/// let workspace = workspace_with_record(vec![]);
/// assert!(workspace
///     .path()
///     .join(".corkboard/board-storage.json")
///     .exists());
/// ```
pub fn workspace_with_record(boards: Vec<Board>) -> TempDir {
    let workspace = init_workspace();
    let store = JsonFileStore::new(&workspace.path().join(".corkboard"))
        .expect("Failed to create snapshot store");
    store
        .save(&BoardRecord::new(boards))
        .expect("Failed to seed durable record");
    workspace
}
