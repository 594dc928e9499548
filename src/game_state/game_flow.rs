//! Inbound game operations: the calls a session layer makes on the core.
//!
//! Player input is validated here and rejected with a `ChessError`; engine
//! and search internals never see an illegal move.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::board_history::BoardHistory;
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_generator::{self, checkmate_or_stalemate, MateKind};
use crate::search::board_scoring::BoardScorer;
use crate::search::minimax::{self, ChosenMove, SearchConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    DrawByNoProgress,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

/// Standard starting position, Light to move.
pub fn new_game() -> Board {
    Board::new_game()
}

/// Legal destinations of the piece on `square`; empty for off-board or empty
/// squares.
pub fn legal_moves(board: &Board, square: Coordinate) -> BTreeSet<Coordinate> {
    let mut scratch = board.clone();
    legal_move_generator::legal_moves(&mut scratch, square)
}

/// Validates and commits a player move, returning the captured piece.
///
/// A move landing a pawn on its last row leaves it pending; call `promote`
/// before the next move.
pub fn apply_player_move(board: &mut Board, from: Coordinate, to: Coordinate) -> ChessResult<Option<Piece>> {
    if let Err(err) = validate_player_move(board, from, to) {
        debug!(%from, %to, error = %err, "rejected player move");
        return Err(err);
    }
    Ok(board.apply_move(from, to, true))
}

fn validate_player_move(board: &mut Board, from: Coordinate, to: Coordinate) -> ChessResult<()> {
    if let Some(square) = board.pending_promotion() {
        return Err(ChessError::PromotionPending(square));
    }
    for square in [from, to] {
        if !square.is_on_board() {
            return Err(ChessError::OffBoard(square));
        }
    }

    let piece = board.piece_at(from).ok_or(ChessError::EmptySquare(from))?;
    let to_move = board.side_to_move();
    if piece.color != to_move {
        return Err(ChessError::NotYourPiece {
            square: from,
            owner: piece.color,
            to_move,
        });
    }

    if !legal_move_generator::legal_moves(board, from).contains(&to) {
        return Err(ChessError::IllegalMove { from, to });
    }
    Ok(())
}

pub fn promote(board: &mut Board, square: Coordinate, kind: PieceKind) -> ChessResult<()> {
    board.promote(square, kind)
}

/// Status for the side to move. Mate and stalemate take precedence over the
/// no-progress draw.
pub fn is_game_over(board: &Board) -> GameStatus {
    let mut scratch = board.clone();
    let to_move = board.side_to_move();
    match checkmate_or_stalemate(&mut scratch, to_move) {
        Some(MateKind::Checkmate) => GameStatus::Checkmate {
            winner: to_move.opposite(),
        },
        Some(MateKind::Stalemate) => GameStatus::Stalemate,
        None if board.is_draw_by_no_progress() => GameStatus::DrawByNoProgress,
        None => GameStatus::Ongoing,
    }
}

/// Searches `depth` plies with repetition avoidance and returns one of the
/// best moves, or `None` when the side to move cannot move.
pub fn choose_ai_move<S: BoardScorer + ?Sized, R: Rng + ?Sized>(
    board: &Board,
    history: &BoardHistory,
    depth: u8,
    scorer: &S,
    rng: &mut R,
) -> Option<ChosenMove> {
    let config = SearchConfig {
        max_depth: depth,
        ..SearchConfig::default()
    };
    minimax::choose_move(board, history, config, scorer, rng).chosen
}

/// Commits an engine move, promotion included.
pub fn play_chosen_move(board: &mut Board, chosen: ChosenMove) -> ChessResult<Option<Piece>> {
    let captured = apply_player_move(board, chosen.from, chosen.to)?;
    if let Some(square) = board.pending_promotion() {
        board.promote(square, chosen.promotion.unwrap_or(PieceKind::Queen))?;
    }
    Ok(captured)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::search::board_scoring::MaterialScorer;
    use crate::utils::fen_parser::parse_fen;

    fn sq(name: &str) -> Coordinate {
        Coordinate::from_algebraic(name).expect("test square should parse")
    }

    #[test]
    fn fresh_game_is_ongoing_with_moves_for_both_sides() {
        let board = new_game();
        assert_eq!(is_game_over(&board), GameStatus::Ongoing);
        assert_eq!(legal_moves(&board, sq("g1")).len(), 2);
        assert_eq!(legal_moves(&board, sq("e7")).len(), 2);
        assert!(legal_moves(&board, sq("e4")).is_empty());
        assert!(legal_moves(&board, Coordinate::new(8, 0)).is_empty());
    }

    #[test]
    fn player_moves_are_validated() {
        let mut board = new_game();
        assert!(matches!(
            apply_player_move(&mut board, Coordinate::new(6, 4), Coordinate::new(-1, 4)),
            Err(ChessError::OffBoard(_))
        ));
        assert!(matches!(
            apply_player_move(&mut board, sq("e4"), sq("e5")),
            Err(ChessError::EmptySquare(_))
        ));
        assert!(matches!(
            apply_player_move(&mut board, sq("e7"), sq("e5")),
            Err(ChessError::NotYourPiece { owner: Color::Dark, .. })
        ));
        assert!(matches!(
            apply_player_move(&mut board, sq("e2"), sq("e5")),
            Err(ChessError::IllegalMove { .. })
        ));
        assert_eq!(board, new_game());

        let captured = apply_player_move(&mut board, sq("e2"), sq("e4")).expect("legal move");
        assert!(captured.is_none());
        assert_eq!(board.side_to_move(), Color::Dark);
    }

    #[test]
    fn capture_is_returned() {
        let mut board =
            parse_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2").expect("fixture FEN");
        let captured = apply_player_move(&mut board, sq("e4"), sq("d5")).expect("legal capture");
        assert_eq!(captured.map(|p| (p.kind(), p.color)), Some((PieceKind::Pawn, Color::Dark)));
    }

    #[test]
    fn terminal_states_are_reported() {
        let mated = parse_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("fixture FEN");
        assert_eq!(is_game_over(&mated), GameStatus::Checkmate { winner: Color::Light });

        let stalemated = parse_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("fixture FEN");
        assert_eq!(is_game_over(&stalemated), GameStatus::Stalemate);

        let stale_clock = parse_fen("4k3/8/8/8/8/8/8/R3K3 w - - 50 80").expect("fixture FEN");
        assert_eq!(is_game_over(&stale_clock), GameStatus::DrawByNoProgress);
        assert!(is_game_over(&stale_clock).is_over());
    }

    #[test]
    fn promotion_after_reaching_last_row() {
        let mut board = parse_fen("8/4P3/8/8/8/8/8/k6K w - - 0 1").expect("fixture FEN");
        apply_player_move(&mut board, sq("e7"), sq("e8")).expect("legal push");
        promote(&mut board, sq("e8"), PieceKind::Rook).expect("pending promotion");
        assert_eq!(board.piece_at(sq("e8")).map(|p| p.kind()), Some(PieceKind::Rook));
    }

    #[test]
    fn pending_promotion_blocks_the_next_move() {
        let mut board = parse_fen("k7/4P3/8/8/8/8/8/7K w - - 0 1").expect("fixture FEN");
        apply_player_move(&mut board, sq("e7"), sq("e8")).expect("legal push");
        let before = board.clone();

        let err = apply_player_move(&mut board, sq("a8"), sq("a7")).unwrap_err();
        assert!(matches!(err, ChessError::PromotionPending(square) if square == sq("e8")));
        assert_eq!(board, before);
        assert_eq!(board.pending_promotion(), Some(sq("e8")));

        promote(&mut board, sq("e8"), PieceKind::Knight).expect("pending promotion");
        assert_eq!(board.pending_promotion(), None);
        apply_player_move(&mut board, sq("a8"), sq("a7")).expect("dark may move after promotion");
        assert_eq!(board.piece_at(sq("e8")).map(|p| p.kind()), Some(PieceKind::Knight));
    }

    #[test]
    fn ai_move_is_playable() {
        let mut board = parse_fen("8/4P3/8/8/8/8/8/k6K w - - 0 1").expect("fixture FEN");
        let mut rng = StdRng::seed_from_u64(2);
        let chosen = choose_ai_move(&board, &BoardHistory::new(), 1, &MaterialScorer, &mut rng).expect("a move");
        play_chosen_move(&mut board, chosen).expect("engine move is legal");
        assert_eq!(board.piece_at(sq("e8")).map(|p| p.kind()), Some(PieceKind::Queen));
    }
}
