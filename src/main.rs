//! Self-play demo: two engines play one game and every move is logged.
//!
//! Usage: `minimax_chess [config.toml] [max_plies]`. Set `RUST_LOG=debug` for
//! per-search statistics.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use minimax_chess::engines::engine_config::EngineConfig;
use minimax_chess::engines::engine_minimax::MinimaxEngine;
use minimax_chess::engines::engine_random::RandomEngine;
use minimax_chess::engines::engine_trait::Engine;
use minimax_chess::game_state::board_history::BoardHistory;
use minimax_chess::game_state::chess_types::Color;
use minimax_chess::game_state::game_flow::{is_game_over, new_game, play_chosen_move, GameStatus};
use minimax_chess::utils::render_game_state::render_game_state;

const DEFAULT_MAX_PLIES: u32 = 200;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => EngineConfig::from_path(Path::new(&path)).with_context(|| format!("reading config {path}"))?,
        None => EngineConfig::default(),
    }
    .with_env_overrides()
    .context("applying environment overrides")?;
    let max_plies = match args.next() {
        Some(raw) => raw.parse::<u32>().with_context(|| format!("max plies '{raw}'"))?,
        None => DEFAULT_MAX_PLIES,
    };

    let mut light: Box<dyn Engine> = Box::new(MinimaxEngine::from_config(&config).context("loading positional tables")?);
    let mut dark: Box<dyn Engine> = Box::new(match config.seed {
        Some(seed) => RandomEngine::seeded(seed.wrapping_add(1)),
        None => RandomEngine::new(),
    });
    light.new_game();
    dark.new_game();

    info!(light = light.name(), dark = dark.name(), depth = config.depth, "starting self-play game");

    let mut board = new_game();
    let mut history = BoardHistory::new();
    history.record(&board);

    let mut status = is_game_over(&board);
    let mut ply = 0u32;
    while !status.is_over() && ply < max_plies {
        let engine = match board.side_to_move() {
            Color::Light => light.as_mut(),
            Color::Dark => dark.as_mut(),
        };
        let output = engine.choose_move(&board, &history)?;
        let Some(chosen) = output.chosen else {
            bail!("{} found no move in an ongoing game", engine.name());
        };

        let captured = play_chosen_move(&mut board, chosen).with_context(|| format!("engine move {chosen}"))?;
        history.record(&board);
        ply += 1;
        info!(
            ply,
            engine = engine.name(),
            mv = %chosen,
            captured = ?captured.map(|p| p.kind()),
            "move played"
        );

        status = is_game_over(&board);
    }

    println!("{}", render_game_state(&board));
    match status {
        GameStatus::Checkmate { winner } => info!(?winner, ply, "checkmate"),
        GameStatus::Stalemate => info!(ply, "stalemate"),
        GameStatus::DrawByNoProgress => info!(ply, "draw by no progress"),
        GameStatus::Ongoing => info!(ply, "ply limit reached"),
    }
    Ok(())
}
