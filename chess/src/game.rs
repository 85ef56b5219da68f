use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::attacks;
use crate::board::{Board, BoardError};
use crate::movegen::{self, Move};
use crate::notation;
use crate::rules;
use crate::square::Square;
use crate::types::{Piece, PieceColor, PieceKind};

/// Game state: the board, whose turn it is and the move log.
///
/// The turn flips exactly once per applied move. Rejected moves leave every
/// field untouched. There is no terminal state; the host decides when to stop.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: PieceColor,
    history: Vec<HistoryEntry>,
    move_number: u32,
}

/// One applied half-move, recorded before the board is changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub ply: u32,          // 1-based count of applied half-moves
    pub move_number: u32,  // Full-move number the ply belongs to
    pub color: PieceColor, // Side that moved
    pub piece: PieceKind,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}

impl HistoryEntry {
    /// Display label such as `Nb1-c3`, or `e2-e4` for pawns.
    pub fn label(&self) -> String {
        notation::entry_label(self.piece, self.from, self.to)
    }

    pub fn as_move(&self) -> Move {
        Move::new(self.from, self.to)
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Game {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self::with_board(Board::starting(), PieceColor::White)
    }

    pub fn with_board(board: Board, side_to_move: PieceColor) -> Self {
        Self {
            board,
            side_to_move,
            history: Vec::new(),
            move_number: 1,
        }
    }

    /// Load a position from its eight text rows.
    pub fn from_text(rows: &[&str], side_to_move: PieceColor) -> Result<Self, GameError> {
        let board = Board::from_rows(rows)?;
        Ok(Self::with_board(board, side_to_move))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> PieceColor {
        self.side_to_move
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The move log paired into display lines, e.g. `1. e2-e4 e7-e5`.
    pub fn log_lines(&self) -> Vec<String> {
        notation::format_log_lines(&self.history)
    }

    /// Every legal move for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        movegen::all_legal_moves(&self.board, self.side_to_move)
    }

    /// Whether the side to move has its king attacked. Informational only.
    pub fn is_in_check(&self) -> bool {
        attacks::is_in_check(&self.board, self.side_to_move)
    }

    /// Validate and apply a move for the side to move.
    ///
    /// On success the log entry is recorded, the piece is relocated and the
    /// turn passes to the other side. On rejection nothing changes.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<HistoryEntry, GameError> {
        if !from.is_in_bounds() {
            return Err(GameError::OutOfBounds(from));
        }

        let piece = self.board.get(from).ok_or(GameError::EmptySquare(from))?;

        if piece.color != self.side_to_move {
            return Err(GameError::WrongSide {
                expected: self.side_to_move,
                found: piece.color,
            });
        }

        if !rules::is_legal_move(&self.board, from, to) {
            tracing::debug!("Illegal move {} {}-{}", piece, from, to);
            return Err(GameError::IllegalMove { from, to });
        }

        let entry = HistoryEntry {
            ply: self.history.len() as u32 + 1,
            move_number: self.move_number,
            color: piece.color,
            piece: piece.kind,
            from,
            to,
            captured: self.board.get(to),
        };
        self.history.push(entry.clone());

        self.board.move_piece(from, to);
        self.change_turn();

        tracing::debug!("Applied {} ({} to move)", entry, self.side_to_move);

        Ok(entry)
    }

    /// Play a uniformly random legal move for the side to move.
    pub fn play_random_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<HistoryEntry, GameError> {
        let mv = movegen::choose_random_move(&self.board, self.side_to_move, rng)
            .ok_or(GameError::NoLegalMoves(self.side_to_move))?;
        tracing::debug!("Random pick for {}: {}", self.side_to_move, mv);
        self.attempt_move(mv.from, mv.to)
    }

    /// Back to the starting position with White to move and an empty log.
    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::debug!("Game reset");
    }

    fn change_turn(&mut self) {
        if self.side_to_move == PieceColor::Black {
            self.move_number += 1;
        }
        self.side_to_move = self.side_to_move.opposite();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Square {0} is off the board")]
    OutOfBounds(Square),
    #[error("No piece on {0}")]
    EmptySquare(Square),
    #[error("It is {expected}'s turn, not {found}'s")]
    WrongSide {
        expected: PieceColor,
        found: PieceColor,
    },
    #[error("Illegal move {from}-{to}")]
    IllegalMove { from: Square, to: Square },
    #[error("No legal moves available for {0}")]
    NoLegalMoves(PieceColor),
    #[error("Board error: {0}")]
    Board(#[from] BoardError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::START_ROWS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(label: &str) -> Square {
        label.parse().unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), PieceColor::White);
        assert!(game.history().is_empty());
        assert_eq!(game.board().to_rows(), START_ROWS);
        assert_eq!(game.legal_moves().len(), 20);
    }

    #[test]
    fn test_applied_move_toggles_turn_and_logs() {
        let mut game = Game::new();
        let entry = game.attempt_move(sq("e2"), sq("e4")).unwrap();

        assert_eq!(entry.ply, 1);
        assert_eq!(entry.move_number, 1);
        assert_eq!(entry.color, PieceColor::White);
        assert_eq!(entry.piece, PieceKind::Pawn);
        assert_eq!(entry.captured, None);
        assert_eq!(entry.label(), "e2-e4");

        assert_eq!(game.side_to_move(), PieceColor::Black);
        assert_eq!(game.history().len(), 1);
        assert!(game.board().is_empty(sq("e2")));
        assert_eq!(
            game.board().get(sq("e4")),
            Some(Piece::new(PieceKind::Pawn, PieceColor::White))
        );
    }

    #[test]
    fn test_rejections_change_nothing() {
        let mut game = Game::new();
        let before = game.board().clone();

        assert_eq!(
            game.attempt_move(sq("e4"), sq("e5")),
            Err(GameError::EmptySquare(sq("e4")))
        );
        assert_eq!(
            game.attempt_move(sq("e7"), sq("e5")),
            Err(GameError::WrongSide {
                expected: PieceColor::White,
                found: PieceColor::Black,
            })
        );
        assert_eq!(
            game.attempt_move(sq("e2"), sq("e5")),
            Err(GameError::IllegalMove {
                from: sq("e2"),
                to: sq("e5"),
            })
        );
        assert_eq!(
            game.attempt_move(Square::new(-1, 4), sq("e5")),
            Err(GameError::OutOfBounds(Square::new(-1, 4)))
        );
        assert!(matches!(
            game.attempt_move(sq("e2"), Square::new(8, 4)),
            Err(GameError::IllegalMove { .. })
        ));

        assert_eq!(game.board(), &before);
        assert_eq!(game.side_to_move(), PieceColor::White);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_capture_is_recorded() {
        let mut game = Game::new();
        game.attempt_move(sq("e2"), sq("e4")).unwrap();
        game.attempt_move(sq("d7"), sq("d5")).unwrap();
        let entry = game.attempt_move(sq("e4"), sq("d5")).unwrap();

        assert_eq!(
            entry.captured,
            Some(Piece::new(PieceKind::Pawn, PieceColor::Black))
        );
        assert_eq!(entry.move_number, 2);
        assert_eq!(entry.ply, 3);
        assert_eq!(game.board().material(PieceColor::Black), 38);
    }

    #[test]
    fn test_king_may_walk_into_check() {
        let mut game = Game::from_text(
            &[
                "    k   ",
                "        ",
                "        ",
                "        ",
                "   r    ",
                "        ",
                "        ",
                "    K   ",
            ],
            PieceColor::White,
        )
        .unwrap();

        let entry = game.attempt_move(sq("e1"), sq("d1")).unwrap();
        assert_eq!(entry.label(), "Ke1-d1");
        assert_eq!(game.side_to_move(), PieceColor::Black);

        // White's king now sits on an attacked square; the move was still accepted.
        assert!(attacks::is_in_check(game.board(), PieceColor::White));
    }

    #[test]
    fn test_is_in_check_for_side_to_move() {
        let game = Game::from_text(
            &[
                "    k   ",
                "        ",
                "        ",
                "        ",
                "        ",
                "        ",
                "        ",
                "    R  K",
            ],
            PieceColor::Black,
        )
        .unwrap();
        assert!(game.is_in_check());
    }

    #[test]
    fn test_reset_restores_start() {
        let mut game = Game::new();
        game.attempt_move(sq("g1"), sq("f3")).unwrap();
        game.attempt_move(sq("b8"), sq("c6")).unwrap();
        game.attempt_move(sq("f3"), sq("e5")).unwrap();

        game.reset();
        assert_eq!(game.board().to_rows(), START_ROWS);
        assert_eq!(game.side_to_move(), PieceColor::White);
        assert!(game.history().is_empty());

        let entry = game.attempt_move(sq("d2"), sq("d4")).unwrap();
        assert_eq!(entry.ply, 1);
        assert_eq!(entry.move_number, 1);
    }

    #[test]
    fn test_random_move_applies_for_side_to_move() {
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(3);

        let first = game.play_random_move(&mut rng).unwrap();
        assert_eq!(first.color, PieceColor::White);
        let second = game.play_random_move(&mut rng).unwrap();
        assert_eq!(second.color, PieceColor::Black);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.side_to_move(), PieceColor::White);
    }

    #[test]
    fn test_random_move_without_moves() {
        let mut game = Game::from_text(
            &[
                "k       ",
                "        ",
                "        ",
                "        ",
                "        ",
                "        ",
                "        ",
                "        ",
            ],
            PieceColor::White,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            game.play_random_move(&mut rng),
            Err(GameError::NoLegalMoves(PieceColor::White))
        );
        assert_eq!(game.side_to_move(), PieceColor::White);
    }

    #[test]
    fn test_null_king_move_keeps_turn() {
        let mut game = Game::new();
        game.attempt_move(sq("e2"), sq("e4")).unwrap();
        game.attempt_move(sq("e7"), sq("e5")).unwrap();
        game.attempt_move(sq("e1"), sq("e2")).unwrap();

        assert_eq!(
            game.attempt_move(sq("e8"), sq("e8")),
            Err(GameError::IllegalMove {
                from: sq("e8"),
                to: sq("e8"),
            })
        );
        assert_eq!(game.side_to_move(), PieceColor::Black);
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn test_extreme_coordinates_are_rejected() {
        let mut game = Game::new();
        let far = Square::new(i8::MIN, i8::MAX);
        assert_eq!(game.attempt_move(far, sq("e4")), Err(GameError::OutOfBounds(far)));
        assert_eq!(
            game.attempt_move(sq("e2"), far),
            Err(GameError::IllegalMove { from: sq("e2"), to: far })
        );
        assert_eq!(
            game.attempt_move(sq("b1"), Square::new(i8::MAX, i8::MIN)),
            Err(GameError::IllegalMove {
                from: sq("b1"),
                to: Square::new(i8::MAX, i8::MIN),
            })
        );
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_history_entry_as_move() {
        let mut game = Game::new();
        let entry = game.attempt_move(sq("b1"), sq("c3")).unwrap();
        assert_eq!(entry.as_move(), Move::new(sq("b1"), sq("c3")));
        assert_eq!(entry.as_move().to_string(), "b1-c3");
    }

    #[test]
    fn test_from_text_rejects_bad_board() {
        assert!(matches!(
            Game::from_text(&["rnbqkbnr"], PieceColor::White),
            Err(GameError::Board(BoardError::RowCount(1)))
        ));
    }
}
