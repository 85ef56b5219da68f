//! Board coordinates.
//!
//! A [`Square`] is a signed `(row, col)` pair so that stepping off the edge of
//! the board produces a value the rules can reject instead of wrapping or
//! panicking. Row 0 is Black's back rank (rank 8), row 7 is White's (rank 1).

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: i8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn is_in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// The square `(dr, dc)` away. May land off the board.
    pub fn offset(self, dr: i8, dc: i8) -> Self {
        Self {
            row: self.row.saturating_add(dr),
            col: self.col.saturating_add(dc),
        }
    }

    /// `(end.row - start.row, end.col - start.col)`, widened so that
    /// off-board inputs cannot overflow.
    pub fn delta(self, to: Square) -> (i16, i16) {
        (
            i16::from(to.row) - i16::from(self.row),
            i16::from(to.col) - i16::from(self.col),
        )
    }

    /// All 64 on-board squares, row-major from the top-left.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }

    /// File letter `a`-`h`, or `None` off the board.
    pub fn file_char(self) -> Option<char> {
        if !self.is_in_bounds() {
            return None;
        }
        Some((b'a' + self.col as u8) as char)
    }

    /// Rank digit `8` (row 0) down to `1` (row 7), or `None` off the board.
    pub fn rank_char(self) -> Option<char> {
        if !self.is_in_bounds() {
            return None;
        }
        Some((b'8' - self.row as u8) as char)
    }

    /// Parse a label such as `e2`.
    pub fn from_label(label: &str) -> Result<Self, SquareParseError> {
        let bytes = label.trim().as_bytes();
        let [file, rank] = bytes else {
            return Err(SquareParseError::InvalidLabel(label.to_string()));
        };
        let file = file.to_ascii_lowercase();
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(rank) {
            return Err(SquareParseError::InvalidLabel(label.to_string()));
        }
        Ok(Self {
            row: (b'8' - rank) as i8,
            col: (file - b'a') as i8,
        })
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.file_char(), self.rank_char()) {
            (Some(file), Some(rank)) => write!(f, "{}{}", file, rank),
            _ => write!(f, "({},{})", self.row, self.col),
        }
    }
}

impl std::str::FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SquareParseError {
    #[error("Invalid square label: {0:?} (expected a file a-h followed by a rank 1-8)")]
    InvalidLabel(String),
}
