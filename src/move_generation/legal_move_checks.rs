//! Check detection.
//!
//! Attack probing only ever asks the pieces for their unfiltered destination
//! sets. It must never reach the legality filter, which itself calls
//! `is_in_check` after every trial move.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

#[inline]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    board
        .pieces_of(color.opposite())
        .any(|piece| piece.geometric_moves(board, false).contains(&king_sq))
}

/// Pieces of `attacker_color` that could capture on `square`.
///
/// Pawn diagonals only count onto occupied squares or the en-passant target,
/// so this is meant for occupied squares such as a king's.
pub fn attackers_to_square(board: &Board, square: Coordinate, attacker_color: Color) -> Vec<(Coordinate, PieceKind)> {
    board
        .pieces_of(attacker_color)
        .filter(|piece| piece.geometric_moves(board, false).contains(&square))
        .map(|piece| (piece.position, piece.kind()))
        .collect()
}
