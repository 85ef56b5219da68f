//! Plain-text rendering for the terminal.

use chess::{Board, Move, PieceColor, Square};

/// Board with rank digits on the left and file letters underneath.
/// Empty squares print as `.`.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..8 {
        let rank = Square::new(row, 0).rank_char().unwrap_or('?');
        out.push(rank);
        out.push_str(" |");
        for col in 0..8 {
            out.push(' ');
            out.push(board.get(Square::new(row, col)).map_or('.', |p| p.to_char()));
        }
        out.push('\n');
    }
    out.push_str("    a b c d e f g h\n");
    out.push_str(&format!(
        "material: white {} / black {}\n",
        board.material(PieceColor::White),
        board.material(PieceColor::Black)
    ));
    out
}

/// Moves as `e2-e4` labels, eight per line.
pub fn render_moves(moves: &[Move]) -> String {
    let labels: Vec<String> = moves.iter().map(Move::to_string).collect();
    let mut out = labels
        .chunks(8)
        .map(|chunk| chunk.join(" "))
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}
