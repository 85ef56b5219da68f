//! Rooks slide along rows and columns.

use crate::board::Board;
use crate::rules::{can_land_on, path_is_clear};
use crate::square::Square;

pub fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    let Some(rook) = board.get(from) else {
        return false;
    };

    let (dr, dc) = from.delta(to);
    let straight = (dr == 0) != (dc == 0);

    straight && can_land_on(board, rook, to) && path_is_clear(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::*;

    #[test]
    fn test_open_lines() {
        let board = board_with(&[(4, 4, 'R')]);
        assert!(is_legal(&board, sq(4, 4), sq(4, 0)));
        assert!(is_legal(&board, sq(4, 4), sq(0, 4)));
        assert!(is_legal(&board, sq(4, 4), sq(7, 4)));
        assert_eq!(destinations(&board, sq(4, 4)).len(), 14);
    }

    #[test]
    fn test_zero_length_move_is_illegal() {
        let board = board_with(&[(4, 4, 'R')]);
        assert!(!is_legal(&board, sq(4, 4), sq(4, 4)));
    }

    #[test]
    fn test_rejects_diagonal() {
        let board = board_with(&[(4, 4, 'r')]);
        assert!(!is_legal(&board, sq(4, 4), sq(5, 5)));
    }

    #[test]
    fn test_blocked_by_any_color() {
        let board = board_with(&[(4, 4, 'R'), (4, 2, 'P'), (2, 4, 'p')]);
        assert!(!is_legal(&board, sq(4, 4), sq(4, 0)));
        assert!(!is_legal(&board, sq(4, 4), sq(0, 4)));
        assert!(is_legal(&board, sq(4, 4), sq(2, 4)));
        assert!(!is_legal(&board, sq(4, 4), sq(4, 2)));
    }

    #[test]
    fn test_start_position_rook_is_boxed_in() {
        let board = Board::starting();
        assert!(destinations(&board, sq(7, 0)).is_empty());
        assert!(destinations(&board, sq(0, 7)).is_empty());
    }
}
