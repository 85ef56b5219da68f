//! Serializable view of a game for hosts.

use serde::{Deserialize, Serialize};

use crate::game::Game;
use crate::types::PieceColor;

/// Immutable snapshot of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Vec<String>,
    pub side_to_move: PieceColor,
    pub history: Vec<String>,
    pub log_lines: Vec<String>,
    pub in_check: bool,
    pub legal_move_count: usize,
    pub white_material: u32,
    pub black_material: u32,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        Self {
            board: game.board().to_rows(),
            side_to_move: game.side_to_move(),
            history: game.history().iter().map(|e| e.label()).collect(),
            log_lines: game.log_lines(),
            in_check: game.is_in_check(),
            legal_move_count: game.legal_moves().len(),
            white_material: game.board().material(PieceColor::White),
            black_material: game.board().material(PieceColor::Black),
        }
    }
}

impl Game {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::START_ROWS;

    #[test]
    fn test_snapshot_of_new_game() {
        let snapshot = Game::new().snapshot();
        assert_eq!(snapshot.board, START_ROWS);
        assert_eq!(snapshot.side_to_move, PieceColor::White);
        assert!(snapshot.history.is_empty());
        assert!(!snapshot.in_check);
        assert_eq!(snapshot.legal_move_count, 20);
    }

    #[test]
    fn test_snapshot_json() {
        let mut game = Game::new();
        game.attempt_move("b1".parse().unwrap(), "c3".parse().unwrap())
            .unwrap();

        let json = serde_json::to_string(&game.snapshot()).unwrap();
        assert!(json.contains("\"side_to_move\":\"Black\""));
        assert!(json.contains("Nb1-c3"));

        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game.snapshot());
    }
}
