//! Validated board coordinates.
//!
//! Files and ranks are 1-based (`a` = 1, `h` = 8). Every constructor and step
//! operation checks the result against the grid and reports
//! [`CoordinateError::OutOfBounds`] instead of wrapping or clamping.

use std::fmt;
use std::str::FromStr;

use crate::error::CoordinateError;

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: u8 = 8;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// A (file, rank) pair, each in `1..=8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Coordinate {
    // Field order gives rank-major ordering, matching `index()`.
    rank: u8,
    file: u8,
}

impl Coordinate {
    /// Build a coordinate, rejecting file or rank outside `1..=8`.
    pub fn new(file: i8, rank: i8) -> Result<Self, CoordinateError> {
        Self::checked(i16::from(file), i16::from(rank))
    }

    /// Inverse of [`Coordinate::index`].
    pub fn from_index(index: usize) -> Result<Self, CoordinateError> {
        if index >= SQUARE_COUNT {
            return Err(CoordinateError::OutOfBounds {
                file: (index % 8) as i16 + 1,
                rank: i16::try_from(index / 8 + 1).unwrap_or(i16::MAX),
            });
        }
        Ok(Self {
            file: (index % 8) as u8 + 1,
            rank: (index / 8) as u8 + 1,
        })
    }

    fn checked(file: i16, rank: i16) -> Result<Self, CoordinateError> {
        let range = 1..=i16::from(BOARD_SIZE);
        if range.contains(&file) && range.contains(&rank) {
            Ok(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            Err(CoordinateError::OutOfBounds { file, rank })
        }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Array index in `0..64`: a1 = 0, h1 = 7, a2 = 8, ..., h8 = 63.
    #[inline]
    pub const fn index(self) -> usize {
        (self.rank as usize - 1) * 8 + (self.file as usize - 1)
    }

    /// Move along the file axis (towards `h` for positive `delta`).
    pub fn step_file(self, delta: i8) -> Result<Self, CoordinateError> {
        self.step_diagonal(delta, 0)
    }

    /// Move along the rank axis (towards rank 8 for positive `delta`).
    pub fn step_rank(self, delta: i8) -> Result<Self, CoordinateError> {
        self.step_diagonal(0, delta)
    }

    /// Move by an arbitrary `(d_file, d_rank)` offset.
    pub fn step_diagonal(self, d_file: i8, d_rank: i8) -> Result<Self, CoordinateError> {
        Self::checked(
            i16::from(self.file) + i16::from(d_file),
            i16::from(self.rank) + i16::from(d_rank),
        )
    }

    /// Signed `(d_file, d_rank)` displacement from `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: Coordinate) -> (i8, i8) {
        (
            other.file as i8 - self.file as i8,
            other.rank as i8 - self.rank as i8,
        )
    }

    /// All 64 coordinates in index order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (1..=BOARD_SIZE).flat_map(|rank| (1..=BOARD_SIZE).map(move |file| Coordinate { file, rank }))
    }

    /// File letter, `'a'..='h'`.
    pub fn file_char(self) -> char {
        char::from(b'a' + self.file - 1)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    /// Parse a square name such as `"e4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoordinateError::InvalidSquareName(s.to_owned());
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Coordinate {
            file: file - b'a' + 1,
            rank: rank - b'0',
        })
    }
}

impl TryFrom<String> for Coordinate {
    type Error = CoordinateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Coordinate> for String {
    fn from(value: Coordinate) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "coordinate_tests.rs"]
mod coordinate_tests;
