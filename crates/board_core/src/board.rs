use tracing::{debug, trace};

use crate::coordinate::{Coordinate, SQUARE_COUNT};
use crate::types::*;

/// An 8x8 occupancy grid.
///
/// The board knows nothing about chess rules: `set` overwrites whatever was
/// on the square, and any capture bookkeeping is left to the caller (the
/// displaced piece is handed back, the board keeps no record of it).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; SQUARE_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Board {
            cells: [None; SQUARE_COUNT],
        }
    }

    /// The conventional opening arrangement: Light on ranks 1-2, Dark on 7-8.
    pub fn standard() -> Self {
        let mut board = Board::new();

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            let f = f + 1;
            board.cells[Self::cell(f, 1)] = Some(Piece::new(kind, Side::Light));
            board.cells[Self::cell(f, 2)] = Some(Piece::new(PieceKind::Pawn, Side::Light));
            board.cells[Self::cell(f, 7)] = Some(Piece::new(PieceKind::Pawn, Side::Dark));
            board.cells[Self::cell(f, 8)] = Some(Piece::new(kind, Side::Dark));
        }

        debug!(pieces = board.piece_count(), "standard board arranged");
        board
    }

    /// Build a board from `(square, piece)` pairs. Later pairs overwrite
    /// earlier ones on the same square, exactly as repeated `set` calls do.
    pub fn from_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Coordinate, Piece)>,
    {
        let mut board = Board::new();
        for (at, piece) in pieces {
            board.set(at, piece);
        }
        board
    }

    #[inline]
    fn cell(file: usize, rank: usize) -> usize {
        (rank - 1) * 8 + (file - 1)
    }

    #[inline]
    pub fn get(&self, at: Coordinate) -> Option<Piece> {
        self.cells[at.index()]
    }

    /// Place `piece` on `at`, returning whatever was there before.
    pub fn set(&mut self, at: Coordinate, piece: Piece) -> Option<Piece> {
        let previous = self.cells[at.index()].replace(piece);
        if let Some(displaced) = previous {
            trace!(square = %at, %displaced, placed = %piece, "occupant overwritten");
        }
        previous
    }

    /// Empty `at`, returning the piece that stood there.
    pub fn remove(&mut self, at: Coordinate) -> Option<Piece> {
        self.cells[at.index()].take()
    }

    #[inline]
    pub fn is_empty(&self, at: Coordinate) -> bool {
        self.get(at).is_none()
    }

    /// Every square with its occupant, in index order (a1, b1, ..., h8).
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Option<Piece>)> + '_ {
        Coordinate::all().map(move |at| (at, self.get(at)))
    }

    /// Occupied squares only, in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.cells()
            .filter_map(|(at, piece)| piece.map(|piece| (at, piece)))
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }
}

impl FromIterator<(Coordinate, Piece)> for Board {
    fn from_iter<I: IntoIterator<Item = (Coordinate, Piece)>>(iter: I) -> Self {
        Board::from_pieces(iter)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
