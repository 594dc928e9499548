//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used as a baseline
//! opponent and in integration tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::board_history::BoardHistory;
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::PieceKind;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::search::minimax::ChosenMove;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, board: &Board, _history: &BoardHistory) -> ChessResult<EngineOutput> {
        let mut scratch = board.clone();
        let legal_moves = all_legal_moves(&mut scratch, board.side_to_move());

        let mut out = EngineOutput::default();
        out.info_lines.push(format!("legal_moves {}", legal_moves.len()));

        let Some(&(from, to)) = legal_moves.choose(&mut self.rng) else {
            return Ok(out);
        };

        let promotion = board
            .piece_at(from)
            .filter(|p| p.kind() == PieceKind::Pawn && to.row == p.color.promotion_row())
            .and_then(|_| PROMOTION_CHOICES.choose(&mut self.rng).copied());

        out.chosen = Some(ChosenMove { from, to, promotion });
        Ok(out)
    }
}
