//! Fixed-depth, full-width negamax.
//!
//! Every child is explored on its own cloned board; the apply/undo pair stays
//! confined to the legality filter. Scores are always "advantage to the side
//! to move" and are negated one ply up. At the root every move tying the best
//! score is kept, and the caller picks among them at random.

use std::fmt;

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::game_state::board::Board;
use crate::game_state::board_history::BoardHistory;
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::search::board_scoring::{BoardScorer, MATE_SCORE};

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
    /// Skip non-pawn root moves whose result is already in the history.
    pub avoid_repetitions: bool,
    pub repetition_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            avoid_repetitions: true,
            repetition_threshold: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChosenMove {
    pub from: Coordinate,
    pub to: Coordinate,
    pub promotion: Option<PieceKind>,
}

impl fmt::Display for ChosenMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            let letter = match kind {
                PieceKind::Queen => 'q',
                PieceKind::Rook => 'r',
                PieceKind::Bishop => 'b',
                PieceKind::Knight => 'n',
                PieceKind::Pawn => 'p',
                PieceKind::King => 'k',
            };
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub chosen: Option<ChosenMove>,
    pub best_score: i32,
    /// Root moves that scored exactly `best_score`, in generation order.
    pub candidates: Vec<ChosenMove>,
    pub nodes: u64,
    /// The repetition filter rejected every root move and the search ran again
    /// without it.
    pub repetition_retry: bool,
}

/// Searches `board` and collects the tie set; `chosen` is left empty.
pub fn search_root<S: BoardScorer + ?Sized>(
    board: &Board,
    history: &BoardHistory,
    config: SearchConfig,
    scorer: &S,
) -> SearchOutcome {
    let mut outcome = SearchOutcome::default();
    let mut scratch = board.clone();
    let color = board.side_to_move();
    let moves = all_legal_moves(&mut scratch, color);

    if moves.is_empty() {
        outcome.nodes = 1;
        outcome.best_score = terminal_score(board, config.max_depth);
        return outcome;
    }

    let filter = config.avoid_repetitions;
    let (best_score, candidates) = root_pass(board, &moves, history, config, scorer, filter, &mut outcome.nodes);
    if candidates.is_empty() && filter {
        warn!(moves = moves.len(), "every root move repeats a recent position; searching again without the filter");
        let (best_score, candidates) = root_pass(board, &moves, history, config, scorer, false, &mut outcome.nodes);
        outcome.best_score = best_score;
        outcome.candidates = candidates;
        outcome.repetition_retry = true;
    } else {
        outcome.best_score = best_score;
        outcome.candidates = candidates;
    }

    debug!(
        depth = config.max_depth,
        nodes = outcome.nodes,
        best_score = outcome.best_score,
        ties = outcome.candidates.len(),
        retry = outcome.repetition_retry,
        "search finished"
    );
    outcome
}

/// Searches `board` and picks uniformly among the best-scoring moves.
pub fn choose_move<S: BoardScorer + ?Sized, R: Rng + ?Sized>(
    board: &Board,
    history: &BoardHistory,
    config: SearchConfig,
    scorer: &S,
    rng: &mut R,
) -> SearchOutcome {
    let mut outcome = search_root(board, history, config, scorer);
    outcome.chosen = outcome.candidates.choose(rng).copied();
    outcome
}

fn root_pass<S: BoardScorer + ?Sized>(
    board: &Board,
    moves: &[(Coordinate, Coordinate)],
    history: &BoardHistory,
    config: SearchConfig,
    scorer: &S,
    filter: bool,
    nodes: &mut u64,
) -> (i32, Vec<ChosenMove>) {
    let remaining = config.max_depth.saturating_sub(1);
    let mut best_score = i32::MIN;
    let mut candidates = Vec::new();

    for &(from, to) in moves {
        let is_pawn = board.piece_at(from).is_some_and(|p| p.kind() == PieceKind::Pawn);
        let mut child = board.clone();
        child.apply_move(from, to, true);

        if filter && !is_pawn && history.found_recently(&child, config.repetition_threshold) {
            continue;
        }

        let (score, promotion) = score_child(child, remaining, scorer, nodes);
        let mv = ChosenMove { from, to, promotion };
        if score > best_score {
            best_score = score;
            candidates.clear();
            candidates.push(mv);
        } else if score == best_score {
            candidates.push(mv);
        }
    }

    (best_score, candidates)
}

/// Score of a just-committed child from the parent's point of view. A pawn on
/// its last row is tried as each promotion choice and the best one is kept.
fn score_child<S: BoardScorer + ?Sized>(
    child: Board,
    remaining: u8,
    scorer: &S,
    nodes: &mut u64,
) -> (i32, Option<PieceKind>) {
    let Some(square) = child.pending_promotion() else {
        return (-negamax(&child, remaining, scorer, nodes), None);
    };

    let mut best: Option<(i32, PieceKind)> = None;
    for kind in PROMOTION_CHOICES {
        let mut promoted = child.clone();
        if promoted.promote(square, kind).is_err() {
            continue;
        }
        let score = -negamax(&promoted, remaining, scorer, nodes);
        match best {
            Some((top, _)) if score <= top => {}
            _ => best = Some((score, kind)),
        }
    }

    match best {
        Some((score, kind)) => (score, Some(kind)),
        None => (-negamax(&child, remaining, scorer, nodes), None),
    }
}

fn negamax<S: BoardScorer + ?Sized>(board: &Board, remaining: u8, scorer: &S, nodes: &mut u64) -> i32 {
    *nodes += 1;

    let mut scratch = board.clone();
    let color = board.side_to_move();
    let moves = all_legal_moves(&mut scratch, color);
    if moves.is_empty() {
        return terminal_score(board, remaining);
    }
    if board.is_draw_by_no_progress() {
        return 0;
    }
    if remaining == 0 {
        return scorer.score(board);
    }

    let mut best = i32::MIN;
    for (from, to) in moves {
        let mut child = board.clone();
        child.apply_move(from, to, true);
        let (score, _) = score_child(child, remaining - 1, scorer, nodes);
        best = best.max(score);
    }
    best
}

/// Score of a side with no legal move: mated (scaled so nearer mates weigh
/// more) or stalemated.
fn terminal_score(board: &Board, remaining: u8) -> i32 {
    if is_in_check(board, board.side_to_move()) {
        -MATE_SCORE * (i32::from(remaining) + 1)
    } else {
        0
    }
}
