//! State transitions over the board/column/card tree
//!
//! All operations are total over the current state: referencing an absent
//! board, column or card returns a typed error and leaves the tree
//! untouched, so callers can tell "not found" from "already in that state"
//! while keeping no-op behavior on the error path.

use cork_common::{Board, BoardError, Card, Column, EntityId, Result};

/// Owns the ordered board list and applies entity mutations.
///
/// Entities are created only through the add-operations (which mint the id)
/// and destroyed only through the delete-operations; deletes cascade down
/// the tree.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BoardSet {
    boards: Vec<Board>,
}

impl BoardSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_boards(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Full copy of the current board list (the history snapshot unit)
    pub fn snapshot(&self) -> Vec<Board> {
        self.boards.clone()
    }

    /// Wholesale replacement, used by the sync receive path and undo/redo
    pub fn replace(&mut self, boards: Vec<Board>) {
        self.boards = boards;
    }

    /// Append a new empty board and return its id
    pub fn add_board(&mut self, name: &str) -> EntityId {
        let id = self.fresh_id();
        self.boards.push(Board {
            id: id.clone(),
            name: name.to_string(),
            columns: Vec::new(),
        });
        id
    }

    /// Remove a board and its whole subtree
    pub fn delete_board(&mut self, board_id: &EntityId) -> Result<()> {
        let index = self
            .boards
            .iter()
            .position(|b| &b.id == board_id)
            .ok_or_else(|| BoardError::BoardNotFound(board_id.clone()))?;
        self.boards.remove(index);
        Ok(())
    }

    /// Append a new empty column to a board and return its id
    pub fn add_column(&mut self, board_id: &EntityId, name: &str) -> Result<EntityId> {
        let id = self.fresh_id();
        let board = self.board_mut(board_id)?;
        board.columns.push(Column {
            id: id.clone(),
            name: name.to_string(),
            cards: Vec::new(),
        });
        Ok(id)
    }

    /// Remove a column and its cards
    pub fn delete_column(&mut self, board_id: &EntityId, column_id: &EntityId) -> Result<()> {
        let board = self.board_mut(board_id)?;
        let index = board
            .column_position(column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(column_id.clone()))?;
        board.columns.remove(index);
        Ok(())
    }

    /// Append a new card to a column and return its id
    pub fn add_card(
        &mut self,
        board_id: &EntityId,
        column_id: &EntityId,
        title: &str,
    ) -> Result<EntityId> {
        let id = self.fresh_id();
        let column = self.column_mut(board_id, column_id)?;
        column.cards.push(Card {
            id: id.clone(),
            title: title.to_string(),
        });
        Ok(id)
    }

    /// Remove a card from a column
    pub fn delete_card(
        &mut self,
        board_id: &EntityId,
        column_id: &EntityId,
        card_id: &EntityId,
    ) -> Result<()> {
        let column = self.column_mut(board_id, column_id)?;
        let index = column
            .card_position(card_id)
            .ok_or_else(|| BoardError::CardNotFound(card_id.clone()))?;
        column.cards.remove(index);
        Ok(())
    }

    /// Move a card between columns, or reposition it within one.
    ///
    /// The card is removed from the source column (remaining order
    /// preserved) and inserted into the destination at `target_index`,
    /// clamped to the destination length; without an index it is appended.
    /// Moving within the same column with no index leaves the sequence
    /// identical. Returns whether the state changed.
    ///
    /// The destination is validated before the card is removed, so a failed
    /// move can never drop the card.
    pub fn move_card(
        &mut self,
        board_id: &EntityId,
        from_column_id: &EntityId,
        to_column_id: &EntityId,
        card_id: &EntityId,
        target_index: Option<usize>,
    ) -> Result<bool> {
        let board = self.board_mut(board_id)?;
        let from_idx = board
            .column_position(from_column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(from_column_id.clone()))?;
        let to_idx = board
            .column_position(to_column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(to_column_id.clone()))?;
        let card_idx = board.columns[from_idx]
            .card_position(card_id)
            .ok_or_else(|| BoardError::CardNotFound(card_id.clone()))?;

        if from_idx == to_idx {
            let Some(requested) = target_index else {
                return Ok(false);
            };
            let card = board.columns[from_idx].cards.remove(card_idx);
            let cards = &mut board.columns[from_idx].cards;
            let insert_at = requested.min(cards.len());
            cards.insert(insert_at, card);
            return Ok(insert_at != card_idx);
        }

        let card = board.columns[from_idx].cards.remove(card_idx);
        let dest = &mut board.columns[to_idx].cards;
        let insert_at = target_index.map_or(dest.len(), |i| i.min(dest.len()));
        dest.insert(insert_at, card);
        Ok(true)
    }

    /// Reorder a board's columns by index. Returns whether the state
    /// changed; either index out of range is an error.
    pub fn move_column(
        &mut self,
        board_id: &EntityId,
        from_index: usize,
        to_index: usize,
    ) -> Result<bool> {
        let board = self.board_mut(board_id)?;
        let len = board.columns.len();
        if from_index >= len {
            return Err(BoardError::ColumnIndexOutOfRange {
                index: from_index,
                len,
            });
        }
        if to_index >= len {
            return Err(BoardError::ColumnIndexOutOfRange {
                index: to_index,
                len,
            });
        }
        if from_index == to_index {
            return Ok(false);
        }
        let column = board.columns.remove(from_index);
        board.columns.insert(to_index, column);
        Ok(true)
    }

    fn board_mut(&mut self, board_id: &EntityId) -> Result<&mut Board> {
        self.boards
            .iter_mut()
            .find(|b| &b.id == board_id)
            .ok_or_else(|| BoardError::BoardNotFound(board_id.clone()))
    }

    fn column_mut(&mut self, board_id: &EntityId, column_id: &EntityId) -> Result<&mut Column> {
        self.board_mut(board_id)?
            .columns
            .iter_mut()
            .find(|c| &c.id == column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(column_id.clone()))
    }

    /// Mint an id unused anywhere in the tree
    fn fresh_id(&self) -> EntityId {
        loop {
            let id = EntityId::generate();
            if !self.contains_id(&id) {
                return id;
            }
        }
    }

    fn contains_id(&self, id: &EntityId) -> bool {
        self.boards.iter().any(|b| {
            &b.id == id
                || b.columns
                    .iter()
                    .any(|c| &c.id == id || c.cards.iter().any(|k| &k.id == id))
        })
    }
}
