//! Worked positions for the move validator
//!
//! Each test sets up a handful of pieces on an otherwise empty board and
//! checks the verdicts a caller would get back.

use board_core::{
    Board, Coordinate, IllegalMove, MoveEffect, Piece, PieceKind, Side, can_move, check_move,
};

fn sq(name: &str) -> Coordinate {
    name.parse().unwrap()
}

fn place(board: &mut Board, name: &str, kind: PieceKind, side: Side) {
    board.set(sq(name), Piece::new(kind, side));
}

// =============================================================================
// Sliding pieces
// =============================================================================

#[test]
fn test_rook_file_blocked_by_opposing_pawn() {
    // Rook on d1, opposing pawn on d5 between it and d8
    let mut board = Board::new();
    place(&mut board, "d1", PieceKind::Rook, Side::Light);
    place(&mut board, "d5", PieceKind::Pawn, Side::Dark);

    assert!(!can_move(&board, sq("d1"), sq("d8")));
    assert_eq!(
        check_move(&board, sq("d1"), sq("d8")),
        Err(IllegalMove::PathBlocked { blocker: sq("d5") })
    );
}

#[test]
fn test_rook_reaches_occupied_far_end() {
    // d2..d7 empty; whatever sits on d8 is the destination, not a blocker
    for side in [Side::Light, Side::Dark] {
        let mut board = Board::new();
        place(&mut board, "d1", PieceKind::Rook, Side::Light);
        place(&mut board, "d8", PieceKind::Pawn, side);

        let expected = match side {
            Side::Dark => Ok(MoveEffect::Capture(Piece::new(PieceKind::Pawn, Side::Dark))),
            Side::Light => Err(IllegalMove::FriendlyFireCapture),
        };
        assert_eq!(check_move(&board, sq("d1"), sq("d8")), expected);
    }
}

#[test]
fn test_bishop_long_diagonal_capture() {
    // a1..h8 diagonal empty apart from an opponent on h8
    let mut board = Board::new();
    place(&mut board, "a1", PieceKind::Bishop, Side::Light);
    place(&mut board, "h8", PieceKind::Knight, Side::Dark);

    assert!(can_move(&board, sq("a1"), sq("h8")));
    assert!(check_move(&board, sq("a1"), sq("h8")).unwrap().is_capture());
}

#[test]
fn test_queen_long_diagonal_blocked_by_own_piece() {
    // Queen on h1 heading for a8 with its own piece on e4
    let mut board = Board::new();
    place(&mut board, "h1", PieceKind::Queen, Side::Dark);
    place(&mut board, "e4", PieceKind::Bishop, Side::Dark);

    assert!(!can_move(&board, sq("h1"), sq("a8")));
    assert!(can_move(&board, sq("h1"), sq("f3")));
    assert!(!can_move(&board, sq("h1"), sq("e4")));
}

// =============================================================================
// Stepping pieces
// =============================================================================

#[test]
fn test_knight_from_b1() {
    let mut board = Board::new();
    place(&mut board, "b1", PieceKind::Knight, Side::Light);

    assert!(can_move(&board, sq("b1"), sq("c3")));
    assert!(can_move(&board, sq("b1"), sq("a3")));
    assert!(can_move(&board, sq("b1"), sq("d2")));
    assert!(!can_move(&board, sq("b1"), sq("b3")));
    assert!(!can_move(&board, sq("b1"), sq("c2")));
}

#[test]
fn test_standard_opening_moves() {
    let board = Board::standard();

    // Every light piece that can move at the start: 16 pawn moves + 4 knight moves
    let moves: usize = board
        .pieces()
        .filter(|(_, piece)| piece.side() == Side::Light)
        .map(|(from, _)| board_core::legal_destinations(&board, from).len())
        .sum();
    assert_eq!(moves, 20);

    // Sliders are all boxed in
    assert!(!can_move(&board, sq("a1"), sq("a3")));
    assert!(!can_move(&board, sq("c1"), sq("e3")));
    assert!(!can_move(&board, sq("d1"), sq("d4")));
}

// =============================================================================
// Purity
// =============================================================================

#[test]
fn test_repeated_queries_agree_and_leave_board_untouched() {
    let mut board = Board::standard();
    place(&mut board, "e4", PieceKind::Queen, Side::Dark);
    let before = board.clone();

    for from in Coordinate::all() {
        for to in Coordinate::all() {
            let first = check_move(&board, from, to);
            let second = check_move(&board, from, to);
            assert_eq!(first, second, "{from} -> {to}");
        }
    }
    assert_eq!(board, before);
}
