//! Per-piece movement rules.
//!
//! Every rule answers one question: may the piece standing on `from` move to
//! `to` on this board? Rules are pure, never mutate the board and never look
//! at check (a king may be left in or moved into check).

pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;

use crate::board::Board;
use crate::square::Square;
use crate::types::{Piece, PieceKind};

/// Whether the piece on `from` may move to `to`, dispatched by its kind.
/// An empty `from` square is never a legal move.
pub fn is_legal_move(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };

    let legal = match piece.kind {
        PieceKind::Pawn => pawn::is_legal(board, from, to),
        PieceKind::Knight => knight::is_legal(board, from, to),
        PieceKind::Bishop => bishop::is_legal(board, from, to),
        PieceKind::Rook => rook::is_legal(board, from, to),
        PieceKind::Queen => queen::is_legal(board, from, to),
        PieceKind::King => king::is_legal(board, from, to),
    };

    if !legal {
        tracing::trace!("Rejected {} {}-{}", piece, from, to);
    }
    legal
}

/// `to` is on the board and either empty or held by a piece opposing `mover`.
pub(crate) fn can_land_on(board: &Board, mover: Piece, to: Square) -> bool {
    if !to.is_in_bounds() {
        return false;
    }
    match board.get(to) {
        None => true,
        Some(target) => mover.opposes(target),
    }
}

/// Every square strictly between `from` and `to` is empty. Callers make sure
/// the two squares share a line or a diagonal.
pub(crate) fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let (dr, dc) = from.delta(to);
    let step_row = dr.signum() as i8;
    let step_col = dc.signum() as i8;

    let mut current = from.offset(step_row, step_col);
    while current != to {
        if !current.is_in_bounds() || !board.is_empty(current) {
            return false;
        }
        current = current.offset(step_row, step_col);
    }
    true
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::types::PieceColor;

    /// Board holding only the given pieces.
    pub(crate) fn board_with(pieces: &[(i8, i8, char)]) -> Board {
        let mut board = Board::empty();
        for &(row, col, c) in pieces {
            board.set(Square::new(row, col), Piece::from_char(c));
        }
        board
    }

    /// All destinations the piece on `from` may legally reach.
    pub(crate) fn destinations(board: &Board, from: Square) -> Vec<Square> {
        Square::all()
            .filter(|&to| is_legal_move(board, from, to))
            .collect()
    }

    pub(crate) fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col)
    }

    pub(crate) fn white(kind: PieceKind) -> Piece {
        Piece::new(kind, PieceColor::White)
    }
}
