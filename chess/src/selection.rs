//! Two-pick square selection used by interactive hosts.
//!
//! The first pick must land on a piece of the side to move; anything else is
//! ignored. The second pick is a move attempt from the selected square. Either
//! way the selection is cleared afterwards, so a stray second click cancels
//! rather than errors.

use crate::game::{Game, GameError, HistoryEntry};
use crate::square::Square;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<Square>,
}

/// What a single pick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// A piece of the side to move is now selected.
    Selected(Square),
    /// Nothing was selected and the pick did not hit a selectable piece.
    Ignored(Square),
    /// The move was applied.
    Moved(HistoryEntry),
    /// The move was rejected; the selection is cleared.
    Rejected(GameError),
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn pick(&mut self, game: &mut Game, square: Square) -> PickOutcome {
        match self.selected.take() {
            None => {
                let selectable = game
                    .board()
                    .get(square)
                    .is_some_and(|piece| piece.color == game.side_to_move());
                if selectable {
                    self.selected = Some(square);
                    PickOutcome::Selected(square)
                } else {
                    PickOutcome::Ignored(square)
                }
            }
            Some(from) => match game.attempt_move(from, square) {
                Ok(entry) => PickOutcome::Moved(entry),
                Err(err) => {
                    tracing::debug!("Selection cancelled: {}", err);
                    PickOutcome::Rejected(err)
                }
            },
        }
    }
}
