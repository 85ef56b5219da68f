//! Attack and check queries.
//!
//! Pawns and knights are tested with fixed offsets since their movement rules
//! depend on what stands on the target square. Sliders and the king reuse
//! their movement rule with the target as destination. Nothing here feeds back
//! into move legality.

use crate::board::Board;
use crate::rules::{self, knight::KNIGHT_OFFSETS};
use crate::square::Square;
use crate::types::{PieceColor, PieceKind};

/// Whether any piece of color `by` attacks `target`.
pub fn is_square_attacked(board: &Board, target: Square, by: PieceColor) -> bool {
    if !target.is_in_bounds() {
        return false;
    }

    board.pieces(by).any(|(from, piece)| match piece.kind {
        PieceKind::Pawn => [-1, 1]
            .iter()
            .any(|&dc| from.offset(piece.color.forward(), dc) == target),
        PieceKind::Knight => KNIGHT_OFFSETS
            .iter()
            .any(|&(dr, dc)| from.offset(dr, dc) == target),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen | PieceKind::King => {
            rules::is_legal_move(board, from, target)
        }
    })
}

/// Whether the king of `king_color` standing on `king_square` is attacked by
/// the other side. Stops at the first attacker found.
pub fn is_king_in_check(board: &Board, king_square: Square, king_color: PieceColor) -> bool {
    is_square_attacked(board, king_square, king_color.opposite())
}

/// Square of `color`'s king, if it is on the board.
pub fn find_king(board: &Board, color: PieceColor) -> Option<Square> {
    board
        .pieces(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(sq, _)| sq)
}

/// Whether `color`'s king is currently attacked. A side without a king is
/// never in check.
pub fn is_in_check(board: &Board, color: PieceColor) -> bool {
    find_king(board, color).is_some_and(|king| is_king_in_check(board, king, color))
}

/// Whether playing `from`-`to` would leave the mover's own king attacked.
///
/// The move is played on a scratch copy; `board` is untouched. This is only a
/// query: the movement rules, the enumerator and [`crate::Game`] do not filter
/// on it.
pub fn exposes_king(board: &Board, from: Square, to: Square) -> bool {
    let Some(mover) = board.get(from) else {
        return false;
    };

    let mut scratch = board.clone();
    scratch.move_piece(from, to);
    is_in_check(&scratch, mover.color)
}
