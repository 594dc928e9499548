//! Canonical chess-rule constants.
//!
//! Board dimensions, draw and history limits, promotion choices, piece base
//! values and the standard starting position in Forsyth-Edwards Notation.

use crate::game_state::chess_types::PieceKind;

/// Squares per row and per column.
pub const BOARD_SIZE: i8 = 8;

/// Half-moves without a capture or pawn move after which the game is drawn.
pub const NO_PROGRESS_LIMIT: u16 = 50;

/// Number of recent positions kept for repetition avoidance.
pub const HISTORY_CAPACITY: usize = 40;

/// Promotion choices, in the order the search tries them.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Material value of a piece kind, before positional adjustment.
#[inline]
pub const fn base_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
