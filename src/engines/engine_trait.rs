//! Engine abstraction layer used by the game driver.
//!
//! Defines the common output payload so different move-selection strategies
//! can be swapped behind a single trait interface.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::board_history::BoardHistory;
use crate::search::minimax::ChosenMove;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal move.
    pub chosen: Option<ChosenMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, board: &Board, history: &BoardHistory) -> ChessResult<EngineOutput>;
}
