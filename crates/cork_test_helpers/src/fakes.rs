//! Collaborator doubles for engine tests
//!
//! The engine takes its transport and snapshot store by injection, so
//! degraded-mode and receive-path behavior is tested with these fakes
//! instead of a real bus or filesystem.

use cork_core::storage::{BoardRecord, Result as StorageResult, SnapshotStore, StorageError};
use cork_sync::{Result as SyncResult, SyncError, SyncMessage, SyncTransport};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Transport with no peers: publishes vanish, nothing ever arrives
pub struct NullTransport;

impl SyncTransport for NullTransport {
    fn publish(&self, _message: &SyncMessage) -> SyncResult<()> {
        Ok(())
    }

    fn try_recv(&mut self) -> SyncResult<Option<SyncMessage>> {
        Ok(None)
    }
}

/// Transport whose publishes always fail (channel unavailable)
pub struct FailingTransport;

impl SyncTransport for FailingTransport {
    fn publish(&self, _message: &SyncMessage) -> SyncResult<()> {
        Err(SyncError::TransportUnavailable("transport down".to_string()))
    }

    fn try_recv(&mut self) -> SyncResult<Option<SyncMessage>> {
        Ok(None)
    }
}

/// Snapshot store whose saves always fail (durable store unavailable)
pub struct FailingStore;

impl SnapshotStore for FailingStore {
    fn load(&self) -> StorageResult<Option<BoardRecord>> {
        Ok(None)
    }

    fn save(&self, _record: &BoardRecord) -> StorageResult<()> {
        Err(StorageError::Io(std::io::Error::other("store down")))
    }
}

/// Hand-fed transport: the test pushes incoming frames through a
/// [`RemoteFeed`] and inspects everything the engine published.
pub struct ScriptedTransport {
    incoming: Arc<Mutex<VecDeque<SyncMessage>>>,
    published: Arc<Mutex<Vec<SyncMessage>>>,
}

/// Test-side handle to a [`ScriptedTransport`]
#[derive(Clone)]
pub struct RemoteFeed {
    incoming: Arc<Mutex<VecDeque<SyncMessage>>>,
    published: Arc<Mutex<Vec<SyncMessage>>>,
}

impl ScriptedTransport {
    pub fn new() -> (Self, RemoteFeed) {
        let incoming = Arc::new(Mutex::new(VecDeque::new()));
        let published = Arc::new(Mutex::new(Vec::new()));
        let feed = RemoteFeed {
            incoming: incoming.clone(),
            published: published.clone(),
        };
        (Self { incoming, published }, feed)
    }
}

impl SyncTransport for ScriptedTransport {
    fn publish(&self, message: &SyncMessage) -> SyncResult<()> {
        self.published
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.clone());
        Ok(())
    }

    fn try_recv(&mut self) -> SyncResult<Option<SyncMessage>> {
        Ok(self
            .incoming
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front())
    }
}

impl RemoteFeed {
    /// Queue a frame as if a peer tab had published it
    pub fn push(&self, message: SyncMessage) {
        self.incoming
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(message);
    }

    /// Everything the engine has published so far
    pub fn published(&self) -> Vec<SyncMessage> {
        self.published
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
