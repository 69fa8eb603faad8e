//! Sync protocol message types

use cork_common::{Board, EntityId};
use serde::{Deserialize, Serialize};

/// Messages exchanged between tabs on the broadcast topic.
///
/// This is a closed set: a frame whose `type` tag is not listed here fails
/// to decode, so receivers reject malformed input instead of dropping it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SyncMessage {
    /// Full replacement of the receiver's board list
    #[serde(rename = "sync-boards")]
    SyncBoards { boards: Vec<Board> },

    /// Selection hint for the UI; not part of the entity invariants
    #[serde(rename = "update-selected-board")]
    UpdateSelectedBoard {
        #[serde(rename = "boardId")]
        board_id: EntityId,
    },
}

impl SyncMessage {
    /// Serialize message to JSON bytes
    pub fn to_bytes(&self) -> crate::Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Deserialize message from JSON bytes
    pub fn from_bytes(bytes: &[u8]) -> crate::Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
