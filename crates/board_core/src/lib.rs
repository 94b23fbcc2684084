//! Chessboard occupancy grid and per-piece move legality.
//!
//! A [`Board`] is a dumb 8x8 grid of optional [`Piece`]s addressed by
//! validated [`Coordinate`]s. The [`validator`] answers whether the piece on
//! one square may geometrically move to another: shape, path obstruction and
//! capture rules only. Check, castling, en passant, promotion and turn order
//! belong to the caller.

pub mod board;
pub mod coordinate;
pub mod error;
pub mod types;
pub mod validator;

pub use board::*;
pub use coordinate::*;
pub use error::*;
pub use types::*;
pub use validator::{MoveEffect, can_move, check, check_move, legal_destinations};
