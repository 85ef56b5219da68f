//! Knights jump; nothing in between matters.

use crate::board::Board;
use crate::rules::can_land_on;
use crate::square::Square;

/// The eight L-shaped `(row, col)` offsets.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    let Some(knight) = board.get(from) else {
        return false;
    };

    let (dr, dc) = from.delta(to);
    let is_jump = matches!((dr.abs(), dc.abs()), (2, 1) | (1, 2));

    is_jump && can_land_on(board, knight, to)
}
