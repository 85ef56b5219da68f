//! Kings step one square in any direction. Check is not considered here.

use crate::board::Board;
use crate::rules::can_land_on;
use crate::square::Square;

pub fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    let Some(king) = board.get(from) else {
        return false;
    };

    let (dr, dc) = from.delta(to);
    let one_step = dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0);

    one_step && can_land_on(board, king, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attacks::is_square_attacked;
    use crate::rules::test_support::*;
    use crate::types::PieceColor;

    #[test]
    fn test_single_steps() {
        let board = board_with(&[(4, 4, 'K')]);
        assert_eq!(destinations(&board, sq(4, 4)).len(), 8);
        assert!(!is_legal(&board, sq(4, 4), sq(2, 4)));
        assert!(!is_legal(&board, sq(4, 4), sq(4, 4)));
    }

    #[test]
    fn test_corner_king() {
        let board = board_with(&[(0, 0, 'k')]);
        assert_eq!(
            destinations(&board, sq(0, 0)),
            vec![sq(0, 1), sq(1, 0), sq(1, 1)]
        );
    }

    #[test]
    fn test_capture_and_friendly_target() {
        let board = board_with(&[(4, 4, 'K'), (3, 4, 'p'), (3, 3, 'P')]);
        assert!(is_legal(&board, sq(4, 4), sq(3, 4)));
        assert!(!is_legal(&board, sq(4, 4), sq(3, 3)));
    }

    #[test]
    fn test_king_may_step_into_attacked_square() {
        // The black rook covers the whole of row 3; stepping there is still accepted.
        let board = board_with(&[(4, 4, 'K'), (3, 0, 'r')]);
        assert!(is_square_attacked(&board, sq(3, 4), PieceColor::Black));
        assert!(is_legal(&board, sq(4, 4), sq(3, 4)));
    }
}
