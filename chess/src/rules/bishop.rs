//! Bishops slide along diagonals.

use crate::board::Board;
use crate::rules::{can_land_on, path_is_clear};
use crate::square::Square;

pub fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    let Some(bishop) = board.get(from) else {
        return false;
    };

    let (dr, dc) = from.delta(to);
    dr != 0
        && dr.abs() == dc.abs()
        && can_land_on(board, bishop, to)
        && path_is_clear(board, from, to)
}
