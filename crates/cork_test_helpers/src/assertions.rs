//! Domain-specific assertions for Corkboard tests

use cork_common::{Board, EntityId};
use cork_core::BoardEngine;

/// Card titles of one column, in display order
///
/// Panics when the column is absent so ordering tests fail loudly.
pub fn card_titles(board: &Board, column_id: &EntityId) -> Vec<String> {
    board
        .column(column_id)
        .unwrap_or_else(|| panic!("column {} not on board {}", column_id, board.id))
        .cards
        .iter()
        .map(|c| c.title.clone())
        .collect()
}

/// Column names of one board, in display order
pub fn column_names(board: &Board) -> Vec<String> {
    board.columns.iter().map(|c| c.name.clone()).collect()
}

/// Assert two tabs hold deep-equal board lists
pub fn assert_converged(a: &BoardEngine, b: &BoardEngine) {
    assert_eq!(
        a.boards(),
        b.boards(),
        "tabs have not converged on the same board list"
    );
}
