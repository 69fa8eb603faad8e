//! In-process broadcast bus
//!
//! One [`SyncBus`] models the shared channel all tabs of the application
//! subscribe to; each [`BusHandle`] is one tab's connection. Delivery is
//! queued per subscriber and drained on that subscriber's own turn, so
//! peers may observe different interleavings of concurrent publications.

use crate::protocol::SyncMessage;
use crate::transport::SyncTransport;
use crate::{Result, SyncError};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;

/// Fixed topic name all tabs subscribe to for synchronization messages
pub const SYNC_TOPIC: &str = "board-sync";

/// A published message stamped with its publisher, so a handle can skip
/// frames it sent itself (mirrors BroadcastChannel delivery rules).
#[derive(Debug, Clone)]
struct Frame {
    origin: u64,
    message: SyncMessage,
}

/// Shared publish/subscribe channel for one topic
pub struct SyncBus {
    topic: String,
    sender: broadcast::Sender<Frame>,
    next_origin: AtomicU64,
}

impl SyncBus {
    /// Create a bus on the default topic with the given per-subscriber
    /// queue capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            topic: SYNC_TOPIC.to_string(),
            sender,
            next_origin: AtomicU64::new(0),
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Connect a new tab to the bus. The handle only sees messages
    /// published after this call.
    pub fn subscribe(&self) -> BusHandle {
        BusHandle {
            origin: self.next_origin.fetch_add(1, Ordering::Relaxed),
            sender: self.sender.clone(),
            receiver: self.sender.subscribe(),
        }
    }
}

impl Default for SyncBus {
    fn default() -> Self {
        Self::new(64)
    }
}

/// One tab's connection to the bus
pub struct BusHandle {
    origin: u64,
    sender: broadcast::Sender<Frame>,
    receiver: broadcast::Receiver<Frame>,
}

impl SyncTransport for BusHandle {
    fn publish(&self, message: &SyncMessage) -> Result<()> {
        let frame = Frame {
            origin: self.origin,
            message: message.clone(),
        };
        // send only fails when no receiver exists; this handle holds one,
        // so a failure means the handle is being torn down
        self.sender
            .send(frame)
            .map(|_| ())
            .map_err(|_| SyncError::ChannelClosed)
    }

    fn try_recv(&mut self) -> Result<Option<SyncMessage>> {
        loop {
            match self.receiver.try_recv() {
                Ok(frame) if frame.origin == self.origin => continue,
                Ok(frame) => return Ok(Some(frame.message)),
                Err(broadcast::error::TryRecvError::Empty) => return Ok(None),
                Err(broadcast::error::TryRecvError::Closed) => {
                    return Err(SyncError::ChannelClosed)
                }
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    // Safe to continue: every sync-boards frame carries the
                    // full state, so the next one supersedes what was lost
                    tracing::warn!("Sync receiver lagged, {} frames dropped", n);
                    continue;
                }
            }
        }
    }
}
