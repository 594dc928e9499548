//! Shared stepping and ray-casting helpers for the per-kind generators.
//!
//! Both helpers reject off-board squares, the piece's own square and squares
//! held by a piece of the same color.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Coordinate;
use crate::game_state::piece::Piece;

pub const ORTHOGONAL_STEPS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_STEPS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Pushes `target` when it is on the board and not held by an own piece.
/// Returns whether the square was accepted.
#[inline]
pub fn push_step(piece: &Piece, board: &Board, target: Coordinate, out: &mut Vec<Coordinate>) -> bool {
    if !target.is_on_board() || target == piece.position {
        return false;
    }
    match board.piece_at(target) {
        Some(other) if other.color == piece.color => false,
        _ => {
            out.push(target);
            true
        }
    }
}

/// Extends a ray square by square until the edge, an own piece (excluded) or
/// an enemy piece (included).
pub fn trace_ray(piece: &Piece, board: &Board, d_row: i8, d_col: i8, out: &mut Vec<Coordinate>) {
    let mut target = piece.position.offset(d_row, d_col);
    while push_step(piece, board, target, out) {
        if board.piece_at(target).is_some() {
            break;
        }
        target = target.offset(d_row, d_col);
    }
}

#[cfg(test)]
mod tests {
    use super::{push_step, trace_ray};
    use crate::game_state::chess_types::Coordinate;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn ray_includes_enemy_blocker_and_stops() {
        let board = parse_fen("4k3/8/8/8/p7/8/8/R3K3 w - - 0 1").expect("fixture FEN");
        let rook = board.piece_at(Coordinate::new(7, 0)).expect("rook on a1");
        let mut out = Vec::new();
        trace_ray(&rook, &board, -1, 0, &mut out);
        assert_eq!(out, vec![Coordinate::new(6, 0), Coordinate::new(5, 0), Coordinate::new(4, 0)]);
    }

    #[test]
    fn ray_stops_before_own_piece() {
        let board = parse_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").expect("fixture FEN");
        let rook = board.piece_at(Coordinate::new(7, 0)).expect("rook on a1");
        let mut out = Vec::new();
        trace_ray(&rook, &board, 0, 1, &mut out);
        assert_eq!(out.len(), 3);
        assert!(!out.contains(&Coordinate::new(7, 4)));
    }

    #[test]
    fn zero_offset_step_is_rejected() {
        let board = parse_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").expect("fixture FEN");
        let rook = board.piece_at(Coordinate::new(7, 0)).expect("rook on a1");
        let mut out = Vec::new();
        assert!(!push_step(&rook, &board, rook.position, &mut out));
        assert!(!push_step(&rook, &board, Coordinate::new(8, 0), &mut out));
        assert!(out.is_empty());
    }
}
