//! King single steps. Castling destinations need trial moves and are added by
//! the legality pass in `move_generation::legal_move_generator`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Coordinate;
use crate::game_state::piece::Piece;
use crate::moves::ray_tracing::{push_step, DIAGONAL_STEPS, ORTHOGONAL_STEPS};

pub fn king_moves(piece: &Piece, board: &Board, out: &mut Vec<Coordinate>) {
    for (d_row, d_col) in ORTHOGONAL_STEPS.into_iter().chain(DIAGONAL_STEPS) {
        push_step(piece, board, piece.position.offset(d_row, d_col), out);
    }
}
