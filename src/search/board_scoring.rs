//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::base_value;
use crate::game_state::chess_types::*;
use crate::tables::positional_tables::PositionTables;

/// Magnitude of a mate, before scaling by the remaining depth.
pub const MATE_SCORE: i32 = 100_000;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, board: &Board) -> i32;
}

/// Signed sum of base value plus table entry over every piece; positive
/// favors `Light`.
pub fn material_and_positional_score(board: &Board, tables: &PositionTables) -> i32 {
    board
        .occupied()
        .map(|(_, piece)| piece.score_contribution(tables))
        .sum()
}

#[inline]
fn from_side_to_move(board: &Board, light_minus_dark: i32) -> i32 {
    match board.side_to_move() {
        Color::Light => light_minus_dark,
        Color::Dark => -light_minus_dark,
    }
}

#[derive(Debug, Clone)]
pub struct PositionalScorer {
    tables: PositionTables,
}

impl PositionalScorer {
    pub fn new(tables: PositionTables) -> Self {
        Self { tables }
    }
}

impl BoardScorer for PositionalScorer {
    fn score(&self, board: &Board) -> i32 {
        from_side_to_move(board, material_and_positional_score(board, &self.tables))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        let light_minus_dark = board
            .occupied()
            .map(|(_, piece)| piece.color.sign() * base_value(piece.kind()))
            .sum();
        from_side_to_move(board, light_minus_dark)
    }
}
