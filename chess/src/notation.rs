//! Move log formatting.
//!
//! Entries are labelled with an optional piece letter followed by the start
//! and end squares (`Nb1-c3`, `e2-e4`). Half-moves sharing a move number are
//! joined on one line prefixed with `"<N>. "`.

use crate::game::HistoryEntry;
use crate::square::Square;
use crate::types::{PieceColor, PieceKind};

/// Label for a single half-move.
pub fn entry_label(piece: PieceKind, from: Square, to: Square) -> String {
    let mut label = String::new();
    if let Some(letter) = piece.log_letter() {
        label.push(letter);
    }
    label.push_str(&format!("{}-{}", from, to));
    label
}

/// Pair the log into display lines.
///
/// A line that opens with a Black half-move (a game loaded with Black to
/// move) shows `...` in White's slot.
pub fn format_log_lines(history: &[HistoryEntry]) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current: Option<u32> = None;

    for entry in history {
        if current == Some(entry.move_number) {
            if let Some(line) = lines.last_mut() {
                line.push(' ');
                line.push_str(&entry.label());
            }
            continue;
        }

        current = Some(entry.move_number);
        let line = match entry.color {
            PieceColor::White => format!("{}. {}", entry.move_number, entry.label()),
            PieceColor::Black => format!("{}. ... {}", entry.move_number, entry.label()),
        };
        lines.push(line);
    }

    lines
}
