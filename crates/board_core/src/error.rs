//! Error types for the board core.
//!
//! Coordinate arithmetic reports `CoordinateError`; the move validator reports
//! `IllegalMove` reason codes. Neither is fatal: the worst outcome of a
//! legality query is a rejected move.

use thiserror::Error;

use crate::coordinate::Coordinate;

/// Errors raised while building or stepping a [`Coordinate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// File or rank outside 1..=8, either on construction or after a step.
    #[error("({file}, {rank}) is off the board (file and rank must be 1-8)")]
    OutOfBounds { file: i16, rank: i16 },

    /// A square name that is not a file letter `a`-`h` followed by a rank digit `1`-`8`.
    #[error("invalid square name: {0:?}")]
    InvalidSquareName(String),
}

/// Why the validator rejected a move.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IllegalMove {
    /// The origin square is empty.
    #[error("no piece on the origin square")]
    NoPieceAtOrigin,

    /// The displacement is not a pattern the piece can make.
    #[error("the piece cannot move in that pattern")]
    WrongShape,

    /// A piece stands in the way.
    #[error("path blocked at {blocker}")]
    PathBlocked { blocker: Coordinate },

    /// The destination holds a piece of the mover's own side.
    #[error("destination is occupied by a piece of the same side")]
    FriendlyFireCapture,
}
