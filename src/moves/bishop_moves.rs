use crate::game_state::board::Board;
use crate::game_state::chess_types::Coordinate;
use crate::game_state::piece::Piece;
use crate::moves::ray_tracing::{trace_ray, DIAGONAL_STEPS};

pub fn bishop_moves(piece: &Piece, board: &Board, out: &mut Vec<Coordinate>) {
    for (d_row, d_col) in DIAGONAL_STEPS {
        trace_ray(piece, board, d_row, d_col, out);
    }
}
