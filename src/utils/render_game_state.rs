//! Terminal-oriented Unicode board renderer.
//!
//! Draws the grid with rank 8 (row 0) at the top, for the demo binary, tests
//! and diagnostics in text environments.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..BOARD_SIZE {
        let rank = char::from(b'0' + (BOARD_SIZE - row) as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..BOARD_SIZE {
            match board.piece_at(Coordinate::new(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece.color, piece.kind())),
                None => out.push('·'),
            }

            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board plus a one-line summary of turn, clock and the last move.
pub fn render_game_state(board: &Board) -> String {
    let last = match board.last_move() {
        Some((from, to)) => format!("{from}{to}"),
        None => "-".to_owned(),
    };
    format!(
        "{}\n{:?} to move, no-progress clock {}, last move {}",
        render_board(board),
        board.side_to_move(),
        board.half_moves_since_capture(),
        last
    )
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::{render_board, render_game_state};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Coordinate;

    #[test]
    fn rank_eight_is_drawn_first() {
        let rendered = render_board(&Board::new_game());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }

    #[test]
    fn summary_line_reports_last_move() {
        let mut board = Board::new_game();
        let e2 = Coordinate::new(6, 4);
        let e4 = Coordinate::new(4, 4);
        board.apply_move(e2, e4, true);
        let rendered = render_game_state(&board);
        assert!(rendered.ends_with("Dark to move, no-progress clock 0, last move e2e4"));
    }
}
