//! Common types and errors for Corkboard
//!
//! This crate provides the shared board/column/card data model used across
//! all Corkboard components.

pub mod telemetry;

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Core error types for board operations
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Board not found: {0}")]
    BoardNotFound(EntityId),

    #[error("Column not found: {0}")]
    ColumnNotFound(EntityId),

    #[error("Card not found: {0}")]
    CardNotFound(EntityId),

    #[error("Column index {index} out of range (board has {len} columns)")]
    ColumnIndexOutOfRange { index: usize, len: usize },

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

/// Opaque identifier for boards, columns and cards.
///
/// Ids are short random alphanumeric strings, stable for the lifetime of the
/// entity. Global uniqueness across one board tree is enforced where the id
/// is minted (the entity store regenerates on collision).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

const ID_LEN: usize = 8;

impl EntityId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        let id: String = rand::thread_rng()
            .sample_iter(&rand::distributions::Alphanumeric)
            .take(ID_LEN)
            .map(char::from)
            .collect::<String>()
            .to_lowercase();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A single task card, owned by exactly one column at a time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: EntityId,
    pub title: String,
}

/// An ordered lane of cards, owned by exactly one board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: EntityId,
    pub name: String,

    /// Card order is significant (display and drop position)
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    /// Position of a card in this column, if present
    pub fn card_position(&self, card_id: &EntityId) -> Option<usize> {
        self.cards.iter().position(|c| &c.id == card_id)
    }
}

/// A top-level board holding an ordered sequence of columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: EntityId,
    pub name: String,

    /// Column order is significant
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Board {
    /// Position of a column on this board, if present
    pub fn column_position(&self, column_id: &EntityId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == column_id)
    }

    /// Look up a column by id
    pub fn column(&self, column_id: &EntityId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == column_id)
    }

    /// Total number of cards across all columns
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, BoardError>;
