//! Core board state engine for Corkboard
//!
//! This crate contains the entity store (state transitions over the
//! board/column/card tree), the snapshot-based undo/redo history, durable
//! snapshot storage, and the [`BoardEngine`] that ties them to a sync
//! transport.

pub mod engine;
pub mod history;
pub mod storage;
pub mod store;

pub use engine::BoardEngine;
pub use history::History;
pub use storage::{
    BoardRecord, JsonFileStore, MemoryStore, SnapshotStore, SCHEMA_VERSION, STORAGE_KEY,
};
pub use store::BoardSet;
