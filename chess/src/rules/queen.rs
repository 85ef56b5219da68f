//! Queens move as a rook or as a bishop.

use crate::board::Board;
use crate::rules::{bishop, rook};
use crate::square::Square;

pub fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    rook::is_legal(board, from, to) || bishop::is_legal(board, from, to)
}
