//! # Corkboard Sync Broadcaster
//!
//! Cross-tab synchronization over a publish/subscribe channel.
//!
//! ## Architecture
//!
//! - **Protocol**: a closed tagged union of message kinds; unknown kinds are
//!   rejected at decode time rather than silently ignored
//! - **Transport**: the [`SyncTransport`] seam lets embedders plug in their
//!   own channel; tests use the in-process [`SyncBus`]
//! - **Convergence**: every publication carries the full board list, so the
//!   most recently delivered snapshot fully replaces local state
//!   (last write wins, no per-field merge)
//!
//! ## Usage
//!
//! ```rust
//! use cork_sync::{SyncBus, SyncMessage, SyncTransport};
//!
//! let bus = SyncBus::new(64);
//! let tab_a = bus.subscribe();
//! let mut tab_b = bus.subscribe();
//!
//! tab_a.publish(&SyncMessage::SyncBoards { boards: vec![] })?;
//! assert!(tab_b.try_recv()?.is_some());
//! # Ok::<(), cork_sync::SyncError>(())
//! ```

pub mod bus;
pub mod protocol;
pub mod transport;

pub use bus::{BusHandle, SyncBus, SYNC_TOPIC};
pub use protocol::SyncMessage;
pub use transport::SyncTransport;

/// Common result type for sync operations
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors that can occur during sync operations
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Sync channel closed")]
    ChannelClosed,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Transport unavailable: {0}")]
    TransportUnavailable(String),
}
