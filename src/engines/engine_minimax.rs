//! Fixed-depth minimax engine with positional scoring.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::chess_errors::ChessResult;
use crate::engines::engine_config::EngineConfig;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::board_history::BoardHistory;
use crate::search::board_scoring::PositionalScorer;
use crate::search::minimax::{choose_move, SearchConfig};
use crate::tables::positional_tables::PositionTables;

pub struct MinimaxEngine {
    search: SearchConfig,
    scorer: PositionalScorer,
    seed: Option<u64>,
    rng: StdRng,
}

impl MinimaxEngine {
    pub fn new(search: SearchConfig, tables: PositionTables, seed: Option<u64>) -> Self {
        Self {
            search,
            scorer: PositionalScorer::new(tables),
            seed,
            rng: make_rng(seed),
        }
    }

    /// Loads the configured tables; a bad table directory fails here.
    pub fn from_config(config: &EngineConfig) -> ChessResult<Self> {
        let tables = PositionTables::load(config.tables_dir.as_deref())?;
        Ok(Self::new(config.search_config(), tables, config.seed))
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn new_game(&mut self) {
        self.rng = make_rng(self.seed);
    }

    fn choose_move(&mut self, board: &Board, history: &BoardHistory) -> ChessResult<EngineOutput> {
        let outcome = choose_move(board, history, self.search, &self.scorer, &mut self.rng);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "depth {} nodes {} score {} ties {}",
            self.search.max_depth,
            outcome.nodes,
            outcome.best_score,
            outcome.candidates.len()
        ));
        if outcome.repetition_retry {
            out.info_lines.push("repetition filter lifted".to_owned());
        }

        if let Some(chosen) = outcome.chosen {
            info!(engine = self.name(), mv = %chosen, score = outcome.best_score, "engine chose move");
        }
        out.chosen = outcome.chosen;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::MinimaxEngine;
    use crate::engines::engine_config::EngineConfig;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board::Board;
    use crate::game_state::board_history::BoardHistory;
    use crate::utils::fen_parser::parse_fen;

    fn seeded(depth: u8, seed: u64) -> MinimaxEngine {
        let config = EngineConfig {
            depth,
            seed: Some(seed),
            ..EngineConfig::default()
        };
        MinimaxEngine::from_config(&config).expect("embedded tables")
    }

    #[test]
    fn new_game_replays_the_same_choices() {
        let board = Board::new_game();
        let history = BoardHistory::new();
        let mut engine = seeded(1, 11);

        let first = engine.choose_move(&board, &history).expect("search").chosen;
        engine.new_game();
        let again = engine.choose_move(&board, &history).expect("search").chosen;
        assert!(first.is_some());
        assert_eq!(first, again);
    }

    #[test]
    fn reports_search_statistics() {
        let board = parse_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("fixture FEN");
        let mut engine = seeded(2, 5);
        let out = engine.choose_move(&board, &BoardHistory::new()).expect("search");
        assert_eq!(out.chosen.map(|mv| mv.to_string()), Some("a1a8".to_owned()));
        assert!(out.info_lines[0].starts_with("depth 2 nodes "));
    }

    #[test]
    fn mated_side_gets_no_move() {
        let board = parse_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("fixture FEN");
        let mut engine = seeded(2, 0);
        assert!(engine.choose_move(&board, &BoardHistory::new()).expect("search").chosen.is_none());
    }
}
