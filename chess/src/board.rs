//! The 8x8 grid and its text encoding.
//!
//! Every square always holds an explicit occupant. The text form is eight rows
//! of eight characters, uppercase for White, lowercase for Black and a space
//! for an empty square, with row 0 at the top.

use crate::square::{Square, BOARD_SIZE};
use crate::types::{Piece, PieceColor, PieceKind};

/// Content of a square.
pub type Occupant = Option<Piece>;

/// Text rows of the standard starting arrangement.
pub const START_ROWS: [&str; 8] = [
    "rnbqkbnr",
    "pppppppp",
    "        ",
    "        ",
    "        ",
    "        ",
    "PPPPPPPP",
    "RNBQKBNR",
];

const SIZE: usize = BOARD_SIZE as usize;
const BACK_RANK: [PieceKind; SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Occupant; SIZE]; SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[None; SIZE]; SIZE],
        }
    }

    /// Standard starting arrangement.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(*kind, PieceColor::Black));
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, PieceColor::Black));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, PieceColor::White));
            board.squares[7][col] = Some(Piece::new(*kind, PieceColor::White));
        }
        board
    }

    pub fn is_in_bounds(square: Square) -> bool {
        square.is_in_bounds()
    }

    /// Occupant of `square`; off-board squares read as empty.
    pub fn get(&self, square: Square) -> Occupant {
        if !square.is_in_bounds() {
            return None;
        }
        self.squares[square.row as usize][square.col as usize]
    }

    /// Overwrite the occupant of `square`. Writes off the board are dropped.
    pub fn set(&mut self, square: Square, occupant: Occupant) {
        if !square.is_in_bounds() {
            tracing::trace!("Ignoring write to off-board square {}", square);
            return;
        }
        self.squares[square.row as usize][square.col as usize] = occupant;
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Relocate the occupant of `from` onto `to` and clear `from`.
    /// Returns whatever stood on `to` before. No legality check is made.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Occupant {
        let moving = self.get(from);
        let captured = self.get(to);
        self.set(to, moving);
        self.set(from, None);
        captured
    }

    /// Occupied squares holding a piece of `color`, row-major.
    pub fn pieces(&self, color: PieceColor) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.get(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Total material value of `color`'s pieces.
    pub fn material(&self, color: PieceColor) -> u32 {
        self.pieces(color).map(|(_, piece)| piece.kind.value()).sum()
    }

    /// Decode eight rows of eight characters.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        if rows.len() != SIZE {
            return Err(BoardError::RowCount(rows.len()));
        }

        let mut board = Self::empty();
        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            let width = text.chars().count();
            if width != SIZE {
                return Err(BoardError::RowWidth { row, width });
            }
            for (col, c) in text.chars().enumerate() {
                board.squares[row][col] = match c {
                    ' ' => None,
                    c => Some(Piece::from_char(c).ok_or(BoardError::InvalidPiece { c, row, col })?),
                };
            }
        }

        Ok(board)
    }

    /// Decode the newline-separated text form.
    pub fn from_text(text: &str) -> Result<Self, BoardError> {
        let rows: Vec<&str> = text.lines().collect();
        Self::from_rows(&rows)
    }

    /// Encode as eight rows of eight characters.
    pub fn to_rows(&self) -> Vec<String> {
        self.squares
            .iter()
            .map(|row| row.iter().map(|sq| sq.map_or(' ', Piece::to_char)).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("Expected 8 board rows, found {0}")]
    RowCount(usize),
    #[error("Row {row} has {width} squares, expected 8")]
    RowWidth { row: usize, width: usize },
    #[error("Invalid piece character {c:?} at row {row}, column {col}")]
    InvalidPiece { c: char, row: usize, col: usize },
}
