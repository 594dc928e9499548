//! Pawn destinations.
//!
//! Forward steps are never attacks, so they are only produced for the
//! legality-filtered mode. Diagonals count when an enemy stands there or the
//! square is the current en-passant target.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Coordinate;
use crate::game_state::piece::{PawnState, Piece};
use crate::moves::ray_tracing::push_step;

pub fn pawn_moves(
    piece: &Piece,
    state: PawnState,
    board: &Board,
    filter_for_legality: bool,
    out: &mut Vec<Coordinate>,
) {
    let forward = piece.color.forward();
    let from = piece.position;

    if filter_for_legality {
        let one_step = from.offset(forward, 0);
        if one_step.is_on_board() && board.piece_at(one_step).is_none() {
            out.push(one_step);
            let two_step = from.offset(2 * forward, 0);
            if !state.has_moved && two_step.is_on_board() && board.piece_at(two_step).is_none() {
                out.push(two_step);
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let target = from.offset(forward, d_col);
        if !target.is_on_board() {
            continue;
        }
        let enemy_there = board
            .piece_at(target)
            .is_some_and(|other| other.color != piece.color);
        let en_passant = board.en_passant_target() == Some(target) && piece.color == board.side_to_move();
        if enemy_there || en_passant {
            push_step(piece, board, target, out);
        }
    }
}
