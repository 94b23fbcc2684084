//! Geometric move legality.
//!
//! Every query is a pure function of the board and the two squares: the
//! board is only read, and repeated queries on an unchanged board give the
//! same answer. Whether the resulting position is legal chess (king safety,
//! castling, en passant, promotion, turn order) is not examined.

use tracing::trace;

use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::error::IllegalMove;
use crate::types::*;

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ALL_LINES: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];
const KING_OFFSETS: [(i8, i8); 8] = ALL_LINES;

/// What a legal move does to its destination square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveEffect {
    /// The destination was empty.
    Quiet,
    /// The destination held this opponent piece.
    Capture(Piece),
}

impl MoveEffect {
    pub fn is_capture(self) -> bool {
        matches!(self, MoveEffect::Capture(_))
    }
}

/// Can the piece on `from` move to `to`?
pub fn can_move(board: &Board, from: Coordinate, to: Coordinate) -> bool {
    check_move(board, from, to).is_ok()
}

/// Like [`can_move`], but explains a rejection.
pub fn check_move(board: &Board, from: Coordinate, to: Coordinate) -> Result<MoveEffect, IllegalMove> {
    let verdict = evaluate(board, from, to);
    if let Err(reason) = verdict {
        trace!(%from, %to, %reason, "move rejected");
    }
    verdict
}

/// [`check_move`] for a [`Move`] value.
pub fn check(board: &Board, mv: Move) -> Result<MoveEffect, IllegalMove> {
    check_move(board, mv.from, mv.to)
}

/// Every square the piece on `from` can currently reach, in index order.
/// Empty when `from` is empty.
pub fn legal_destinations(board: &Board, from: Coordinate) -> Vec<Coordinate> {
    Coordinate::all()
        .filter(|&to| evaluate(board, from, to).is_ok())
        .collect()
}

fn evaluate(board: &Board, from: Coordinate, to: Coordinate) -> Result<MoveEffect, IllegalMove> {
    let mover = board.get(from).ok_or(IllegalMove::NoPieceAtOrigin)?;
    if from == to {
        return Err(IllegalMove::WrongShape);
    }

    match mover.kind() {
        PieceKind::Rook => slide(board, mover, from, to, &ORTHOGONAL),
        PieceKind::Bishop => slide(board, mover, from, to, &DIAGONAL),
        PieceKind::Queen => slide(board, mover, from, to, &ALL_LINES),
        PieceKind::Knight => jump(board, mover, from, to, &KNIGHT_OFFSETS),
        PieceKind::King => jump(board, mover, from, to, &KING_OFFSETS),
        PieceKind::Pawn => pawn(board, mover, from, to),
    }
}

/// Unit direction from `from` to `to`, or `None` when the displacement is not
/// a straight horizontal, vertical or diagonal line.
fn line_direction(from: Coordinate, to: Coordinate) -> Option<(i8, i8)> {
    let (df, dr) = from.delta_to(to);
    if (df, dr) == (0, 0) {
        return None;
    }
    if df != 0 && dr != 0 && df.abs() != dr.abs() {
        return None;
    }
    Some((df.signum(), dr.signum()))
}

fn slide(
    board: &Board,
    mover: Piece,
    from: Coordinate,
    to: Coordinate,
    directions: &[(i8, i8)],
) -> Result<MoveEffect, IllegalMove> {
    let (df, dr) = line_direction(from, to).ok_or(IllegalMove::WrongShape)?;
    if !directions.contains(&(df, dr)) {
        return Err(IllegalMove::WrongShape);
    }

    let mut square = from;
    loop {
        // Running off the edge means `to` was never on this line.
        square = match square.step_diagonal(df, dr) {
            Ok(next) => next,
            Err(_) => return Err(IllegalMove::WrongShape),
        };
        if square == to {
            return land(board, mover, to);
        }
        if !board.is_empty(square) {
            return Err(IllegalMove::PathBlocked { blocker: square });
        }
    }
}

fn jump(
    board: &Board,
    mover: Piece,
    from: Coordinate,
    to: Coordinate,
    offsets: &[(i8, i8)],
) -> Result<MoveEffect, IllegalMove> {
    if !offsets.contains(&from.delta_to(to)) {
        return Err(IllegalMove::WrongShape);
    }
    land(board, mover, to)
}

fn pawn(board: &Board, mover: Piece, from: Coordinate, to: Coordinate) -> Result<MoveEffect, IllegalMove> {
    let side = mover.side();
    let forward = side.forward();
    let (df, dr) = from.delta_to(to);

    match (df.abs(), dr * forward) {
        // Single push
        (0, 1) => advance(board, mover, to),
        // Double push from the starting rank; the skipped square must be empty too
        (0, 2) if from.rank() == side.pawn_start_rank() => {
            let skipped = from
                .step_rank(forward)
                .map_err(|_| IllegalMove::WrongShape)?;
            if !board.is_empty(skipped) {
                return Err(IllegalMove::PathBlocked { blocker: skipped });
            }
            advance(board, mover, to)
        }
        // Diagonal step, only as a capture
        (1, 1) => match board.get(to) {
            None => Err(IllegalMove::WrongShape),
            Some(_) => land(board, mover, to),
        },
        _ => Err(IllegalMove::WrongShape),
    }
}

/// Pawns never capture straight ahead: any occupant blocks the push.
fn advance(board: &Board, mover: Piece, to: Coordinate) -> Result<MoveEffect, IllegalMove> {
    match board.get(to) {
        None => Ok(MoveEffect::Quiet),
        Some(target) if mover.is_opponent(target) => Err(IllegalMove::PathBlocked { blocker: to }),
        Some(_) => Err(IllegalMove::FriendlyFireCapture),
    }
}

/// Final-square rule shared by every piece: empty or opponent-held is fine,
/// own side never is.
fn land(board: &Board, mover: Piece, to: Coordinate) -> Result<MoveEffect, IllegalMove> {
    match board.get(to) {
        None => Ok(MoveEffect::Quiet),
        Some(target) if mover.is_opponent(target) => Ok(MoveEffect::Capture(target)),
        Some(_) => Err(IllegalMove::FriendlyFireCapture),
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod validator_tests;
