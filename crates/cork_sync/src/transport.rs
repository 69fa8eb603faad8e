//! Transport seam for sync messages

use crate::protocol::SyncMessage;
use crate::Result;

/// Publish/subscribe channel connecting one tab to its peers.
///
/// Implementations must not block: `publish` hands the message off for
/// asynchronous delivery, and `try_recv` returns only frames that have
/// already been queued for this subscriber. A tab never receives its own
/// publications.
pub trait SyncTransport: Send {
    /// Publish a message to every other tab on the topic
    fn publish(&self, message: &SyncMessage) -> Result<()>;

    /// Pop the next pending message for this tab, if any
    fn try_recv(&mut self) -> Result<Option<SyncMessage>>;
}
