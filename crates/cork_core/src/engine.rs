//! Board engine orchestration
//!
//! [`BoardEngine`] ties the entity store, the undo/redo history, the sync
//! transport and the durable snapshot store together behind the public
//! operation set. One engine instance is one "tab": local mutations run
//! snapshot → apply → broadcast → persist, while remote states arrive
//! through [`BoardEngine::poll_remote`] and bypass the history entirely.

use crate::history::History;
use crate::storage::{BoardRecord, JsonFileStore, MemoryStore, SnapshotStore};
use crate::store::BoardSet;
use cork_common::{Board, EntityId, Result};
use cork_config::Config;
use cork_sync::{SyncMessage, SyncTransport};
use std::path::Path;

/// Stateful engine for one tab's view of the shared board data.
///
/// Collaborators are injected so embedders and tests can substitute
/// in-memory fakes; nothing here is a process-wide singleton.
pub struct BoardEngine {
    store: BoardSet,
    history: History,
    transport: Box<dyn SyncTransport>,
    snapshots: Box<dyn SnapshotStore>,
    selected_board_id: Option<EntityId>,
    degraded: bool,
}

impl BoardEngine {
    /// Build an engine from injected collaborators, seeding state from the
    /// durable record. A missing record seeds an empty board list; an
    /// unreadable one is a warning, never a startup failure.
    pub fn new(
        config: &Config,
        transport: Box<dyn SyncTransport>,
        snapshots: Box<dyn SnapshotStore>,
    ) -> Self {
        let boards = match snapshots.load() {
            Ok(Some(record)) => {
                tracing::info!("Loaded {} boards from storage", record.boards.len());
                record.boards
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to load stored boards, starting empty: {}", e);
                Vec::new()
            }
        };

        Self {
            store: BoardSet::from_boards(boards),
            history: History::new(config.history.depth),
            transport,
            snapshots,
            selected_board_id: None,
            degraded: false,
        }
    }

    /// Convenience constructor: load `.corkboard/config.toml` under
    /// `workspace_root` and persist to the configured storage directory.
    /// An unavailable storage directory degrades to in-memory-only.
    pub fn open(workspace_root: &Path, transport: Box<dyn SyncTransport>) -> Result<Self> {
        let config = Config::load(workspace_root)?;

        let mut storage_failed = false;
        let snapshots: Box<dyn SnapshotStore> =
            match JsonFileStore::new(&workspace_root.join(&config.storage.dir)) {
                Ok(store) => Box::new(store),
                Err(e) => {
                    tracing::warn!("Durable storage unavailable, running in-memory: {}", e);
                    storage_failed = true;
                    Box::new(MemoryStore::new())
                }
            };

        let mut engine = Self::new(&config, transport, snapshots);
        engine.degraded = storage_failed;
        Ok(engine)
    }

    // ---- reads ----

    pub fn boards(&self) -> &[Board] {
        self.store.boards()
    }

    pub fn board_count(&self) -> usize {
        self.store.boards().len()
    }

    pub fn selected_board_id(&self) -> Option<&EntityId> {
        self.selected_board_id.as_ref()
    }

    /// Resolve the selection against the current tree; `None` when the
    /// selection is empty or points at a board that no longer exists
    pub fn selected_board(&self) -> Option<&Board> {
        let id = self.selected_board_id.as_ref()?;
        self.store.boards().iter().find(|b| &b.id == id)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// True once a broadcast or persist side effect has failed this
    /// session. Mutations keep working in-memory regardless.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    // ---- local mutations ----

    pub fn add_board(&mut self, name: &str) -> EntityId {
        let prior = self.store.snapshot();
        let id = self.store.add_board(name);
        tracing::debug!("Added board {} ({})", name, id);
        self.commit(prior);
        id
    }

    pub fn delete_board(&mut self, board_id: &EntityId) -> Result<()> {
        let prior = self.store.snapshot();
        match self.store.delete_board(board_id) {
            Ok(()) => {
                self.commit(prior);
                Ok(())
            }
            Err(e) => {
                tracing::debug!("delete_board: {}", e);
                Err(e)
            }
        }
    }

    pub fn add_column(&mut self, board_id: &EntityId, name: &str) -> Result<EntityId> {
        let prior = self.store.snapshot();
        match self.store.add_column(board_id, name) {
            Ok(id) => {
                self.commit(prior);
                Ok(id)
            }
            Err(e) => {
                tracing::debug!("add_column: {}", e);
                Err(e)
            }
        }
    }

    pub fn delete_column(&mut self, board_id: &EntityId, column_id: &EntityId) -> Result<()> {
        let prior = self.store.snapshot();
        match self.store.delete_column(board_id, column_id) {
            Ok(()) => {
                self.commit(prior);
                Ok(())
            }
            Err(e) => {
                tracing::debug!("delete_column: {}", e);
                Err(e)
            }
        }
    }

    pub fn add_card(
        &mut self,
        board_id: &EntityId,
        column_id: &EntityId,
        title: &str,
    ) -> Result<EntityId> {
        let prior = self.store.snapshot();
        match self.store.add_card(board_id, column_id, title) {
            Ok(id) => {
                self.commit(prior);
                Ok(id)
            }
            Err(e) => {
                tracing::debug!("add_card: {}", e);
                Err(e)
            }
        }
    }

    pub fn delete_card(
        &mut self,
        board_id: &EntityId,
        column_id: &EntityId,
        card_id: &EntityId,
    ) -> Result<()> {
        let prior = self.store.snapshot();
        match self.store.delete_card(board_id, column_id, card_id) {
            Ok(()) => {
                self.commit(prior);
                Ok(())
            }
            Err(e) => {
                tracing::debug!("delete_card: {}", e);
                Err(e)
            }
        }
    }

    pub fn move_card(
        &mut self,
        board_id: &EntityId,
        from_column_id: &EntityId,
        to_column_id: &EntityId,
        card_id: &EntityId,
        target_index: Option<usize>,
    ) -> Result<()> {
        let prior = self.store.snapshot();
        match self
            .store
            .move_card(board_id, from_column_id, to_column_id, card_id, target_index)
        {
            Ok(true) => {
                self.commit(prior);
                Ok(())
            }
            // Found but already in place: nothing to record or broadcast
            Ok(false) => Ok(()),
            Err(e) => {
                tracing::debug!("move_card: {}", e);
                Err(e)
            }
        }
    }

    pub fn move_column(
        &mut self,
        board_id: &EntityId,
        from_index: usize,
        to_index: usize,
    ) -> Result<()> {
        let prior = self.store.snapshot();
        match self.store.move_column(board_id, from_index, to_index) {
            Ok(true) => {
                self.commit(prior);
                Ok(())
            }
            Ok(false) => Ok(()),
            Err(e) => {
                tracing::debug!("move_column: {}", e);
                Err(e)
            }
        }
    }

    /// Update the selection and hint peer tabs to follow it. Selection is
    /// UI state: it is neither persisted nor undoable.
    pub fn set_selected_board_id(&mut self, board_id: Option<EntityId>) {
        self.selected_board_id = board_id.clone();
        if let Some(board_id) = board_id {
            self.publish(&SyncMessage::UpdateSelectedBoard { board_id });
        }
    }

    // ---- undo / redo ----

    /// Step back one mutation. No-op (returns false) with empty history.
    /// The restored state runs the same broadcast-and-persist path as any
    /// mutation so peer tabs converge on it.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.store.snapshot()) {
            Some(snapshot) => {
                self.store.replace(snapshot);
                self.publish_boards();
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Step forward one undone mutation. No-op (returns false) with an
    /// empty redo path.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.store.snapshot()) {
            Some(snapshot) => {
                self.store.replace(snapshot);
                self.publish_boards();
                self.persist();
                true
            }
            None => false,
        }
    }

    // ---- sync receive path ----

    /// Apply messages queued by peer tabs; returns how many were applied.
    ///
    /// A received board list overwrites local state wholesale (last write
    /// wins) and is persisted, but never touches the undo/redo stacks and
    /// is never re-broadcast. A snapshot equal to current state is skipped.
    pub fn poll_remote(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.transport.try_recv() {
                Ok(Some(SyncMessage::SyncBoards { boards })) => {
                    if boards.as_slice() == self.store.boards() {
                        continue;
                    }
                    self.store.replace(boards);
                    self.persist();
                    applied += 1;
                }
                Ok(Some(SyncMessage::UpdateSelectedBoard { board_id })) => {
                    self.selected_board_id = Some(board_id);
                    applied += 1;
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!("Sync receive failed: {}", e);
                    self.degraded = true;
                    break;
                }
            }
        }
        applied
    }

    // ---- side-effect plumbing ----

    /// Post-mutation path shared by every effective local edit
    fn commit(&mut self, prior: Vec<Board>) {
        self.history.record(prior);
        self.publish_boards();
        self.persist();
    }

    fn publish_boards(&mut self) {
        let message = SyncMessage::SyncBoards {
            boards: self.store.snapshot(),
        };
        self.publish(&message);
    }

    fn publish(&mut self, message: &SyncMessage) {
        if let Err(e) = self.transport.publish(message) {
            tracing::warn!("Broadcast failed, continuing local-only: {}", e);
            self.degraded = true;
        }
    }

    fn persist(&mut self) {
        let record = BoardRecord::new(self.store.snapshot());
        if let Err(e) = self.snapshots.save(&record) {
            tracing::warn!("Persist failed, continuing in-memory: {}", e);
            self.degraded = true;
        }
    }
}
