//! Chess move-legality engine.
//!
//! A toolkit-free core: the board and its text encoding, one movement rule
//! per piece kind, attack/check queries, brute-force move enumeration and a
//! turn-keeping [`Game`]. Castling, en passant, promotion, draw rules and
//! checkmate detection are not modelled, and moves that leave a king in check
//! are accepted.

pub mod attacks;
pub mod board;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod rules;
pub mod selection;
pub mod snapshot;
pub mod square;
pub mod types;

pub use attacks::{exposes_king, find_king, is_in_check, is_king_in_check, is_square_attacked};
pub use board::{Board, BoardError, Occupant, START_ROWS};
pub use game::{Game, GameError, HistoryEntry};
pub use movegen::{all_legal_moves, choose_random_move, legal_destinations, Move};
pub use rules::is_legal_move;
pub use selection::{PickOutcome, Selection};
pub use snapshot::GameSnapshot;
pub use square::{Square, SquareParseError};
pub use types::{Piece, PieceColor, PieceKind};
