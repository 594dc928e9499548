//! Legal move generation.
//!
//! Two modes behind one entry point: unfiltered generation returns the
//! geometric destination set (what check detection consumes), filtered
//! generation plays every candidate as a trial move, keeps it only when the
//! mover's king is not in check afterward, and undoes it before the next one.
//! The board is borrowed mutably for the duration of the filter but is left
//! exactly as it was found.

use std::collections::BTreeSet;

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::piece::{KingState, Piece, PieceRole};
use crate::move_generation::legal_move_checks::is_in_check;

/// Why a side with no legal move cannot continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MateKind {
    Checkmate,
    Stalemate,
}

pub fn generate_moves(board: &mut Board, from: Coordinate, filter_for_legality: bool) -> BTreeSet<Coordinate> {
    let Some(piece) = board.piece_at(from) else {
        return BTreeSet::new();
    };

    let candidates = piece.geometric_moves(board, filter_for_legality);
    if !filter_for_legality {
        return candidates.into_iter().collect();
    }

    let mut legal: BTreeSet<Coordinate> = candidates
        .into_iter()
        .filter(|&to| keeps_king_safe(board, from, to, piece.color))
        .collect();

    if let PieceRole::King(rights) = piece.role {
        add_castling_moves(board, &piece, rights, &mut legal);
    }

    legal
}

/// Legal destinations of the piece on `square` (empty for an empty square).
#[inline]
pub fn legal_moves(board: &mut Board, square: Coordinate) -> BTreeSet<Coordinate> {
    generate_moves(board, square, true)
}

/// Every legal `(from, to)` pair for `color`, ordered by origin then target.
pub fn all_legal_moves(board: &mut Board, color: Color) -> Vec<(Coordinate, Coordinate)> {
    let mut out = Vec::with_capacity(48);
    for from in board.squares_of(color) {
        for to in generate_moves(board, from, true) {
            out.push((from, to));
        }
    }
    out
}

pub fn has_any_legal_move(board: &mut Board, color: Color) -> bool {
    board
        .squares_of(color)
        .into_iter()
        .any(|from| !generate_moves(board, from, true).is_empty())
}

pub fn checkmate_or_stalemate(board: &mut Board, color: Color) -> Option<MateKind> {
    if has_any_legal_move(board, color) {
        return None;
    }
    if is_in_check(board, color) {
        Some(MateKind::Checkmate)
    } else {
        Some(MateKind::Stalemate)
    }
}

fn keeps_king_safe(board: &mut Board, from: Coordinate, to: Coordinate, color: Color) -> bool {
    let captured = board.apply_move(from, to, false);
    let safe = !is_in_check(board, color);
    board.undo_move(captured, from, to);
    safe
}

/// Castling needs the right, an unmoved own rook in the corner, nothing
/// between king and rook, a king not in check, a safe transit square (already
/// a legal single step) and a safe destination.
fn add_castling_moves(board: &mut Board, king: &Piece, rights: KingState, legal: &mut BTreeSet<Coordinate>) {
    if !rights.can_castle_queenside && !rights.can_castle_kingside {
        return;
    }
    if is_in_check(board, king.color) {
        return;
    }

    let from = king.position;
    for side in [CastleSide::Queenside, CastleSide::Kingside] {
        if !rights.can_castle(side) || board.castling_rook(king.color, from.row, side).is_none() {
            continue;
        }

        let rook_col = side.rook_column();
        let (low, high) = if rook_col < from.col { (rook_col, from.col) } else { (from.col, rook_col) };
        let path_clear = (low + 1..high).all(|col| board.piece_at(Coordinate::new(from.row, col)).is_none());

        let transit = from.offset(0, side.direction());
        let destination = from.offset(0, 2 * side.direction());
        if !path_clear || !destination.is_on_board() || !legal.contains(&transit) {
            continue;
        }

        if keeps_king_safe(board, from, destination, king.color) {
            legal.insert(destination);
        }
    }
}
