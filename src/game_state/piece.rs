//! Piece model: one sum type over the six kinds, each variant carrying only
//! the state its own movement rules need.
//!
//! Pieces never hold a reference to the board. Movement hooks report what the
//! board has to change instead (`MoveSideEffect`), and move generation takes
//! the board as an argument.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::base_value;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;
use crate::tables::positional_tables::PositionTables;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PawnState {
    pub has_moved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RookState {
    pub side: CastleSide,
    pub has_moved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KingState {
    pub can_castle_queenside: bool,
    pub can_castle_kingside: bool,
}

impl KingState {
    #[inline]
    pub const fn can_castle(&self, side: CastleSide) -> bool {
        match side {
            CastleSide::Queenside => self.can_castle_queenside,
            CastleSide::Kingside => self.can_castle_kingside,
        }
    }

    /// Rights only ever go from `true` to `false`.
    #[inline]
    pub fn revoke(&mut self, side: CastleSide) {
        match side {
            CastleSide::Queenside => self.can_castle_queenside = false,
            CastleSide::Kingside => self.can_castle_kingside = false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceRole {
    Pawn(PawnState),
    Knight,
    Bishop,
    Rook(RookState),
    Queen,
    King(KingState),
}

/// Board-level bookkeeping a committed move asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSideEffect {
    None,
    /// A pawn skipped over this square on its double step.
    EnPassantTarget(Coordinate),
    /// A rook left its corner; the own king loses this castling right.
    RevokeCastling(CastleSide),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub position: Coordinate,
    pub role: PieceRole,
}

impl Piece {
    /// A fresh, unmoved piece. Rooks take their castling side from the column
    /// they are created on.
    pub fn new(kind: PieceKind, color: Color, position: Coordinate) -> Self {
        let role = match kind {
            PieceKind::Pawn => PieceRole::Pawn(PawnState { has_moved: false }),
            PieceKind::Knight => PieceRole::Knight,
            PieceKind::Bishop => PieceRole::Bishop,
            PieceKind::Rook => PieceRole::Rook(RookState {
                side: CastleSide::from_rook_column(position.col),
                has_moved: false,
            }),
            PieceKind::Queen => PieceRole::Queen,
            PieceKind::King => PieceRole::King(KingState {
                can_castle_queenside: true,
                can_castle_kingside: true,
            }),
        };
        Self {
            color,
            position,
            role,
        }
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        match self.role {
            PieceRole::Pawn(_) => PieceKind::Pawn,
            PieceRole::Knight => PieceKind::Knight,
            PieceRole::Bishop => PieceKind::Bishop,
            PieceRole::Rook(_) => PieceKind::Rook,
            PieceRole::Queen => PieceKind::Queen,
            PieceRole::King(_) => PieceKind::King,
        }
    }

    /// Kind and color match. Flags and position are ignored.
    #[inline]
    pub fn same_identity(&self, other: &Piece) -> bool {
        self.color == other.color && self.kind() == other.kind()
    }

    /// Geometrically valid destinations from the current position, ignoring
    /// whether the move would expose the own king.
    ///
    /// With `filter_for_legality == false` the set is the piece's attack set:
    /// pawns only contribute diagonal captures. The caller runs the legality
    /// pass; castling is added by the legality pass as well, since it needs
    /// trial moves.
    pub fn geometric_moves(&self, board: &Board, filter_for_legality: bool) -> Vec<Coordinate> {
        let mut out = Vec::with_capacity(28);
        match self.role {
            PieceRole::Pawn(state) => pawn_moves(self, state, board, filter_for_legality, &mut out),
            PieceRole::Knight => knight_moves(self, board, &mut out),
            PieceRole::Bishop => bishop_moves(self, board, &mut out),
            PieceRole::Rook(_) => rook_moves(self, board, &mut out),
            PieceRole::Queen => queen_moves(self, board, &mut out),
            PieceRole::King(_) => king_moves(self, board, &mut out),
        }
        out
    }

    /// Runs once per committed move, after the piece has landed on `to`.
    pub fn update_when_moved(&mut self, from: Coordinate, to: Coordinate) -> MoveSideEffect {
        match &mut self.role {
            PieceRole::Pawn(state) => {
                let double_step = !state.has_moved && (to.row - from.row).abs() == 2;
                state.has_moved = true;
                if double_step {
                    MoveSideEffect::EnPassantTarget(Coordinate::new((from.row + to.row) / 2, from.col))
                } else {
                    MoveSideEffect::None
                }
            }
            PieceRole::Rook(state) => {
                if state.has_moved {
                    MoveSideEffect::None
                } else {
                    state.has_moved = true;
                    MoveSideEffect::RevokeCastling(state.side)
                }
            }
            PieceRole::King(state) => {
                state.can_castle_queenside = false;
                state.can_castle_kingside = false;
                MoveSideEffect::None
            }
            PieceRole::Knight | PieceRole::Bishop | PieceRole::Queen => MoveSideEffect::None,
        }
    }

    /// Signed material plus positional value; positive favors `Light`.
    #[inline]
    pub fn score_contribution(&self, tables: &PositionTables) -> i32 {
        let kind = self.kind();
        let positional = tables.value(kind, self.color, self.position);
        self.color.sign() * (base_value(kind) + positional)
    }
}
