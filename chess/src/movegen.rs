//! Brute-force move enumeration.
//!
//! Every piece of the requested color is tried against all 64 destinations
//! with its movement rule. At most 64x64 rule calls per side; there is no
//! pseudo-legal/legal split and no pin detection.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::rules::is_legal_move;
use crate::square::Square;
use crate::types::PieceColor;

/// A start/end square pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// All `(from, to)` pairs accepted by the movement rules for `color`, ordered
/// by source square then destination square (row-major).
pub fn all_legal_moves(board: &Board, color: PieceColor) -> Vec<Move> {
    let moves: Vec<Move> = board
        .pieces(color)
        .flat_map(|(from, _)| {
            Square::all()
                .filter(move |&to| is_legal_move(board, from, to))
                .map(move |to| Move::new(from, to))
        })
        .collect();

    tracing::trace!("Enumerated {} legal moves for {}", moves.len(), color);
    moves
}

/// Destinations the piece on `from` may move to. Empty for an empty square.
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    if board.get(from).is_none() {
        return Vec::new();
    }
    Square::all()
        .filter(|&to| is_legal_move(board, from, to))
        .collect()
}

/// A uniformly random legal move for `color`, or `None` when it has none.
pub fn choose_random_move<R: Rng + ?Sized>(
    board: &Board,
    color: PieceColor,
    rng: &mut R,
) -> Option<Move> {
    all_legal_moves(board, color).choose(rng).copied()
}
