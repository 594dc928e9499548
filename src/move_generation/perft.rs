use std::thread;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{all_legal_moves, has_any_legal_move};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct MoveFacts {
    capture: bool,
    en_passant: bool,
    castle: bool,
    promotion: bool,
}

/// Counts leaf positions `depth` plies below `board`. Each of the four
/// promotion choices is its own leaf.
pub fn perft(board: &Board, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }
    perft_recurse(board, depth, &mut total);
    total
}

/// Same counts as `perft`, with one worker per root move.
pub fn perft_multi_threaded(board: &Board, depth: u8) -> PerftCounts {
    if depth == 0 {
        return perft(board, depth);
    }

    let mut root = board.clone();
    let color = root.side_to_move();
    let root_children: Vec<(Board, MoveFacts)> = all_legal_moves(&mut root, color)
        .into_iter()
        .flat_map(|(from, to)| successors(board, from, to))
        .collect();

    let mut total = PerftCounts::default();
    thread::scope(|scope| {
        let handles: Vec<_> = root_children
            .iter()
            .map(|(child, facts)| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    if depth == 1 {
                        tally_leaf(child, *facts, &mut local);
                    } else {
                        perft_recurse(child, depth - 1, &mut local);
                    }
                    local
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
    });

    total
}

fn perft_recurse(board: &Board, depth: u8, counts: &mut PerftCounts) {
    let mut scratch = board.clone();
    let color = scratch.side_to_move();
    for (from, to) in all_legal_moves(&mut scratch, color) {
        for (child, facts) in successors(board, from, to) {
            if depth == 1 {
                tally_leaf(&child, facts, counts);
            } else {
                perft_recurse(&child, depth - 1, counts);
            }
        }
    }
}

/// Boards reached by committing `from -> to`, one per promotion choice when
/// the move lands a pawn on its last row.
fn successors(board: &Board, from: Coordinate, to: Coordinate) -> Vec<(Board, MoveFacts)> {
    let Some(mover) = board.piece_at(from) else {
        return Vec::new();
    };
    let target_empty = board.piece_at(to).is_none();
    let mut facts = MoveFacts {
        en_passant: mover.kind() == PieceKind::Pawn && target_empty && from.col != to.col,
        castle: mover.kind() == PieceKind::King && (to.col - from.col).abs() == 2,
        ..MoveFacts::default()
    };

    let mut child = board.clone();
    facts.capture = child.apply_move(from, to, true).is_some();

    let Some(square) = child.pending_promotion() else {
        return vec![(child, facts)];
    };
    PROMOTION_CHOICES
        .iter()
        .filter_map(|&kind| {
            let mut promoted = child.clone();
            promoted.promote(square, kind).ok()?;
            Some((
                promoted,
                MoveFacts {
                    promotion: true,
                    ..facts
                },
            ))
        })
        .collect()
}

fn tally_leaf(child: &Board, facts: MoveFacts, counts: &mut PerftCounts) {
    counts.nodes += 1;
    if facts.capture {
        counts.captures += 1;
    }
    if facts.en_passant {
        counts.en_passant += 1;
    }
    if facts.castle {
        counts.castles += 1;
    }
    if facts.promotion {
        counts.promotions += 1;
    }

    let defender = child.side_to_move();
    if is_in_check(child, defender) {
        counts.checks += 1;
        let mut probe = child.clone();
        if !has_any_legal_move(&mut probe, defender) {
            counts.checkmates += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const ENDGAME: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const PROMOTIONS: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&Board::new_game(), 0);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_node_counts() {
        let board = Board::new_game();
        assert_eq!(perft(&board, 1).nodes, 20);
        assert_eq!(perft(&board, 2).nodes, 400);
        assert_eq!(
            perft(&board, 3),
            PerftCounts {
                nodes: 8902,
                captures: 34,
                checks: 12,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn kiwipete_exercises_castling_and_en_passant() {
        let board = parse_fen(KIWIPETE).expect("fixture FEN");
        assert_eq!(perft(&board, 1).nodes, 48);
        assert_eq!(
            perft(&board, 2),
            PerftCounts {
                nodes: 2039,
                captures: 351,
                en_passant: 1,
                castles: 91,
                checks: 3,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn sparse_endgame_with_pins_and_en_passant() {
        let board = parse_fen(ENDGAME).expect("fixture FEN");
        assert_eq!(perft(&board, 1).nodes, 14);
        assert_eq!(perft(&board, 2).nodes, 191);
        let counts = perft(&board, 3);
        assert_eq!(counts.nodes, 2812);
        assert_eq!(counts.captures, 209);
        assert_eq!(counts.en_passant, 2);
        assert_eq!(counts.checks, 267);
    }

    #[test]
    fn promotion_choices_are_separate_leaves() {
        let board = parse_fen(PROMOTIONS).expect("fixture FEN");
        assert_eq!(perft(&board, 1).nodes, 6);
        let counts = perft(&board, 2);
        assert_eq!(counts.nodes, 264);
        assert_eq!(counts.promotions, 48);
        assert_eq!(counts.castles, 6);
    }

    #[test]
    fn threaded_perft_matches_single_threaded() {
        let board = parse_fen(KIWIPETE).expect("fixture FEN");
        assert_eq!(perft_multi_threaded(&board, 2), perft(&board, 2));
        assert_eq!(perft_multi_threaded(&board, 0).nodes, 1);
    }
}
