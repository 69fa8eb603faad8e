use cork_common::BoardError;
use cork_test_helpers::prelude::*;
use std::collections::HashSet;

#[test]
fn test_board_column_card_scenario() {
    let mut engine = solo_engine();

    let b1 = engine.add_board("Sprint");
    let c1 = engine.add_column(&b1, "Todo").unwrap();
    let k1 = engine.add_card(&b1, &c1, "Write spec").unwrap();

    assert_eq!(engine.board_count(), 1);
    let board = &engine.boards()[0];
    assert_eq!(board.id, b1);
    assert_eq!(board.columns.len(), 1);
    assert_eq!(board.columns[0].id, c1);
    assert_eq!(board.columns[0].cards.len(), 1);
    assert_eq!(board.columns[0].cards[0].id, k1);
    assert_eq!(board.columns[0].cards[0].title, "Write spec");
}

#[test]
fn test_move_then_undo_scenario() {
    let mut engine = solo_engine();

    let b1 = engine.add_board("Sprint");
    let c1 = engine.add_column(&b1, "Todo").unwrap();
    let k1 = engine.add_card(&b1, &c1, "Write spec").unwrap();
    let c2 = engine.add_column(&b1, "Doing").unwrap();

    engine.move_card(&b1, &c1, &c2, &k1, None).unwrap();
    {
        let board = &engine.boards()[0];
        assert!(card_titles(board, &c1).is_empty());
        assert_eq!(card_titles(board, &c2), vec!["Write spec"]);
    }

    assert!(engine.undo());
    let board = &engine.boards()[0];
    assert_eq!(card_titles(board, &c1), vec!["Write spec"]);
    assert!(card_titles(board, &c2).is_empty());
}

#[test]
fn test_ids_unique_across_tree() {
    let mut engine = solo_engine();
    let mut seen = HashSet::new();

    for i in 0..4 {
        let board = engine.add_board(&format!("board {}", i));
        assert!(seen.insert(board.clone()));
        for j in 0..3 {
            let column = engine.add_column(&board, &format!("col {}", j)).unwrap();
            assert!(seen.insert(column.clone()));
            for k in 0..3 {
                let card = engine
                    .add_card(&board, &column, &format!("card {}", k))
                    .unwrap();
                assert!(seen.insert(card));
            }
        }
    }
}

#[test]
fn test_delete_board_cascade_leaves_no_orphans() {
    let mut engine = solo_engine();

    let keep = engine.add_board("Keep");
    let keep_col = engine.add_column(&keep, "Todo").unwrap();
    engine.add_card(&keep, &keep_col, "stays").unwrap();

    let doomed = engine.add_board("Doomed");
    let doomed_col = engine.add_column(&doomed, "Todo").unwrap();
    engine.add_card(&doomed, &doomed_col, "goes").unwrap();

    engine.delete_board(&doomed).unwrap();

    assert_eq!(engine.board_count(), 1);
    assert_eq!(engine.boards()[0].id, keep);
    // Nothing from the deleted subtree survives anywhere in the tree
    for board in engine.boards() {
        assert_ne!(board.id, doomed);
        for column in &board.columns {
            assert_ne!(column.id, doomed_col);
            for card in &column.cards {
                assert_ne!(card.title, "goes");
            }
        }
    }
}

#[test]
fn test_move_conserves_cards() {
    let mut engine = solo_engine();
    let board = engine.add_board("Sprint");
    let a = engine.add_column(&board, "A").unwrap();
    let b = engine.add_column(&board, "B").unwrap();

    let mut cards = Vec::new();
    for i in 0..5 {
        cards.push(engine.add_card(&board, &a, &format!("card {}", i)).unwrap());
    }

    engine.move_card(&board, &a, &b, &cards[2], None).unwrap();
    engine.move_card(&board, &a, &b, &cards[0], Some(0)).unwrap();

    let tree = &engine.boards()[0];
    assert_eq!(tree.card_count(), 5);
    // Untouched cards keep their relative order in both columns
    assert_eq!(card_titles(tree, &a), vec!["card 1", "card 3", "card 4"]);
    assert_eq!(card_titles(tree, &b), vec!["card 0", "card 2"]);

    // Each moved card appears exactly once
    let all: Vec<_> = tree
        .columns
        .iter()
        .flat_map(|c| c.cards.iter().map(|k| k.id.clone()))
        .collect();
    let unique: HashSet<_> = all.iter().collect();
    assert_eq!(unique.len(), all.len());
}

#[test]
fn test_history_branching_clears_redo() {
    let mut engine = solo_engine();

    engine.add_board("one");
    engine.add_board("two");

    assert!(engine.undo());
    assert!(engine.can_redo());

    // A fresh edit after undo invalidates the redo path
    engine.add_board("three");
    assert!(!engine.can_redo());
    assert!(!engine.redo());

    let names: Vec<_> = engine.boards().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["one", "three"]);
}

#[test]
fn test_not_found_surfaces_typed_error() {
    let mut engine = solo_engine();
    let board = engine.add_board("Sprint");
    let column = engine.add_column(&board, "Todo").unwrap();

    let err = engine
        .add_card(&board, &"missing".into(), "x")
        .unwrap_err();
    assert!(matches!(err, BoardError::ColumnNotFound(_)));

    let err = engine.move_column(&board, 0, 9).unwrap_err();
    assert!(matches!(
        err,
        BoardError::ColumnIndexOutOfRange { index: 9, len: 1 }
    ));

    // State is untouched by the failed calls
    assert_eq!(engine.boards()[0].columns.len(), 1);
    assert_eq!(engine.boards()[0].columns[0].id, column);
}
