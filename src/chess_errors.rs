//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type of the crate. It is produced at the
//! boundaries only: player move submission, promotion requests, loading of
//! positional tables, FEN fixtures and engine configuration. Move generation
//! and the search never build errors; an illegal candidate is simply absent
//! from the generated set.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Coordinate, PieceKind};

#[derive(Error, Debug)]
pub enum ChessError {
    /// A coordinate outside the 8x8 grid was submitted.
    #[error("coordinate {0} is off the board")]
    OffBoard(Coordinate),

    /// The origin square of a submitted move holds no piece.
    #[error("no piece on {0}")]
    EmptySquare(Coordinate),

    /// The piece on the origin square belongs to the side not on move.
    #[error("piece on {square} belongs to {owner:?}, but {to_move:?} is to move")]
    NotYourPiece {
        square: Coordinate,
        owner: Color,
        to_move: Color,
    },

    /// Destination is not in the piece's legal-move set.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Coordinate, to: Coordinate },

    /// A pawn on its last row must be promoted before any other move.
    #[error("pawn on {0} must be promoted before the next move")]
    PromotionPending(Coordinate),

    /// Promotion was requested for a square without a pawn on its last row.
    #[error("no pawn awaiting promotion on {0}")]
    NoPromotionPending(Coordinate),

    /// Pawns may only become a queen, rook, bishop or knight.
    #[error("pawns cannot promote to {0:?}")]
    InvalidPromotionKind(PieceKind),

    /// A positional table resource is missing or malformed.
    #[error("failed to load positional table for {kind:?} from {source_name}: {reason}")]
    TableLoad {
        kind: PieceKind,
        source_name: String,
        reason: String,
    },

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid engine configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type ChessResult<T> = Result<T, ChessError>;
