//! Pawns: straight advances onto empty squares, diagonal captures only.

use crate::board::Board;
use crate::square::Square;

pub fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    let Some(pawn) = board.get(from) else {
        return false;
    };
    if !to.is_in_bounds() {
        return false;
    }

    let forward = i16::from(pawn.color.forward());
    let (dr, dc) = from.delta(to);

    match (dr, dc.abs()) {
        (dr, 0) if dr == forward => board.is_empty(to),
        (dr, 0) if dr == 2 * forward => {
            from.row == pawn.color.pawn_home_row()
                && board.is_empty(from.offset(pawn.color.forward(), 0))
                && board.is_empty(to)
        }
        // No en passant: the diagonal needs an enemy piece on it.
        (dr, 1) if dr == forward => board.get(to).is_some_and(|target| pawn.opposes(target)),
        _ => false,
    }
}
