//! Snapshot tests - ordering, render decoupling, and JSON shape

use gridfall::core::Board;
use gridfall::types::{Cell, PieceKind, GRID_HEIGHT, GRID_WIDTH};

#[test]
fn test_snapshot_preserves_board_order() {
    let mut board = Board::with_seed(GRID_WIDTH, GRID_HEIGHT, 1);
    assert!(board.settle_at(PieceKind::Square, Cell::new(0, 18)));
    assert!(board.settle_at(PieceKind::Line, Cell::new(9, 16)));
    assert!(board.spawn_at(PieceKind::T, Cell::new(3, 0)));

    let view = board.snapshot();
    assert_eq!(view.width, GRID_WIDTH);
    assert_eq!(view.height, GRID_HEIGHT);
    assert_eq!(view.pieces.len(), 3);
    assert_eq!(view.pieces[0].kind, PieceKind::Square);
    assert_eq!(view.pieces[1].kind, PieceKind::Line);
    assert_eq!(view.pieces[2].kind, PieceKind::T);
    assert_eq!(view.active, Some(2));
    assert_eq!(view.active_piece().unwrap().kind, PieceKind::T);
    assert!(!view.game_over);
}

#[test]
fn test_snapshot_is_decoupled_from_later_mutation() {
    let mut board = Board::with_seed(GRID_WIDTH, GRID_HEIGHT, 3);
    assert!(board.spawn_at(PieceKind::Line, Cell::new(2, 0)));

    let before = board.snapshot();
    board.tick();
    board.rotate_active();

    // The view taken earlier is an owned value and must not change
    assert_eq!(before.pieces[0].cells[0], Cell::new(2, 0));
    assert_ne!(board.snapshot(), before);
}

#[test]
fn test_kind_at_maps_cells_to_kinds() {
    let mut board = Board::with_seed(GRID_WIDTH, GRID_HEIGHT, 1);
    assert!(board.settle_at(PieceKind::Square, Cell::new(3, 5)));

    let view = board.snapshot();
    assert_eq!(view.kind_at(Cell::new(3, 5)), Some(PieceKind::Square));
    assert_eq!(view.kind_at(Cell::new(4, 6)), Some(PieceKind::Square));
    assert_eq!(view.kind_at(Cell::new(0, 0)), None);
}

#[test]
fn test_snapshot_json_round_trip() {
    let mut board = Board::with_seed(GRID_WIDTH, GRID_HEIGHT, 11);
    for _ in 0..50 {
        board.tick();
    }

    let view = board.snapshot();
    let json = serde_json::to_string(&view).expect("snapshot serializes");
    let back: gridfall::core::BoardSnapshot =
        serde_json::from_str(&json).expect("snapshot deserializes");
    assert_eq!(back, view);
}

#[test]
fn test_snapshot_json_field_names() {
    let mut board = Board::with_seed(GRID_WIDTH, GRID_HEIGHT, 1);
    assert!(board.spawn_at(PieceKind::T, Cell::new(3, 0)));

    let value: serde_json::Value =
        serde_json::to_value(board.snapshot()).expect("snapshot serializes");

    // Field names are part of the host-facing contract
    assert!(value.get("width").is_some());
    assert!(value.get("height").is_some());
    assert!(value.get("pieces").is_some());
    assert!(value.get("active").is_some());
    assert!(value.get("game_over").is_some());

    let piece = &value["pieces"][0];
    assert_eq!(piece["kind"], "T");
    assert_eq!(piece["rotation"], "Zero");
    assert_eq!(piece["cells"][0]["col"], 4);
    assert_eq!(piece["cells"][0]["row"], 0);
}
