//! Authoritative game state.
//!
//! `Board` owns an 8x8 grid of pieces plus a per-color occupancy index and
//! the king squares. All three are only ever written through `place`, so the
//! index and the king squares always mirror the grid. Move application comes
//! in two flavors: committed moves (turn bookkeeping, castling rights,
//! en-passant target) and trial moves used by the legality filter, which are
//! reversed with `undo_move`.

use std::collections::BTreeSet;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{NO_PROGRESS_LIMIT, PROMOTION_CHOICES};
use crate::game_state::chess_types::*;
use crate::game_state::piece::{KingState, MoveSideEffect, Piece, PieceRole, RookState};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    // [color] -> occupied squares, kept in lock-step with `grid`.
    by_color: [BTreeSet<Coordinate>; 2],
    kings: [Option<Coordinate>; 2],

    pub(crate) en_passant_target: Option<Coordinate>,
    pub(crate) side_to_move: Color,
    pub(crate) half_moves_since_capture: u16,
    pub(crate) last_move: Option<(Coordinate, Coordinate)>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            grid: [[None; 8]; 8],
            by_color: [BTreeSet::new(), BTreeSet::new()],
            kings: [None; 2],
            en_passant_target: None,
            side_to_move: Color::Light,
            half_moves_since_capture: 0,
            last_move: None,
        }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position, Light to move.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        for color in [Color::Dark, Color::Light] {
            let back = color.back_row();
            let pawns = back + color.forward();
            for (col, kind) in BACK_RANK.iter().enumerate() {
                let col = col as i8;
                board.place(Some(Piece::new(*kind, color, Coordinate::new(back, col))), Coordinate::new(back, col));
                board.place(
                    Some(Piece::new(PieceKind::Pawn, color, Coordinate::new(pawns, col))),
                    Coordinate::new(pawns, col),
                );
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Coordinate) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        self.grid[square.row as usize][square.col as usize]
    }

    /// Mutable access to a piece's flags. Callers must not change `position`.
    #[inline]
    pub(crate) fn piece_at_mut(&mut self, square: Coordinate) -> Option<&mut Piece> {
        if !square.is_on_board() {
            return None;
        }
        self.grid[square.row as usize][square.col as usize].as_mut()
    }

    /// The single mutation primitive. Clears whatever stands on `square` from
    /// the index, writes the cell and, for `Some`, registers the piece and
    /// moves its `position` to `square`.
    pub fn place(&mut self, piece: Option<Piece>, square: Coordinate) {
        if !square.is_on_board() {
            return;
        }
        let cell = &mut self.grid[square.row as usize][square.col as usize];
        if let Some(previous) = cell.take() {
            self.by_color[previous.color.index()].remove(&square);
            if previous.kind() == PieceKind::King && self.kings[previous.color.index()] == Some(square) {
                self.kings[previous.color.index()] = None;
            }
        }

        if let Some(mut piece) = piece {
            piece.position = square;
            self.by_color[piece.color.index()].insert(square);
            if piece.kind() == PieceKind::King {
                self.kings[piece.color.index()] = Some(square);
            }
            self.grid[square.row as usize][square.col as usize] = Some(piece);
        }
    }

    /// Moves the piece on `from` to `to` and returns whatever was captured,
    /// which for en passant is not the piece on `to`.
    ///
    /// Castling relocates the rook as well. Promotion is a separate call.
    /// With `commit == false` only piece placement changes: the trial path of
    /// the legality filter, reversed by `undo_move`.
    pub fn apply_move(&mut self, from: Coordinate, to: Coordinate, commit: bool) -> Option<Piece> {
        let moving = self.piece_at(from)?;
        let mut captured = self.piece_at(to);

        self.place(None, from);
        self.place(Some(moving), to);

        match moving.kind() {
            PieceKind::King if (to.col - from.col).abs() == 2 => {
                self.shift_castling_rook(to, castle_side_of(from, to), false);
            }
            PieceKind::Pawn
                if captured.is_none() && from.col != to.col && self.en_passant_target == Some(to) =>
            {
                let victim_square = Coordinate::new(from.row, to.col);
                captured = self.piece_at(victim_square);
                self.place(None, victim_square);
            }
            _ => {}
        }

        if commit {
            self.finish_committed_move(from, to, captured.is_some());
        }

        captured
    }

    /// Inverse of a trial `apply_move`. Castling rights and turn state are
    /// left alone because a trial move never changed them.
    pub fn undo_move(&mut self, captured: Option<Piece>, from: Coordinate, to: Coordinate) {
        let moved = self.piece_at(to);
        self.place(None, to);
        self.place(moved, from);

        if let Some(piece) = captured {
            self.place(Some(piece), piece.position);
        }

        if let Some(piece) = moved {
            if piece.kind() == PieceKind::King && (to.col - from.col).abs() == 2 {
                self.shift_castling_rook(to, castle_side_of(from, to), true);
            }
        }
    }

    /// Replaces the pawn on `square` with a new piece of `kind`.
    /// A promoted rook counts as moved, so it never enables castling.
    pub fn promote(&mut self, square: Coordinate, kind: PieceKind) -> ChessResult<()> {
        if !PROMOTION_CHOICES.contains(&kind) {
            return Err(ChessError::InvalidPromotionKind(kind));
        }
        let pawn = self
            .piece_at(square)
            .filter(|p| p.kind() == PieceKind::Pawn && square.row == p.color.promotion_row())
            .ok_or(ChessError::NoPromotionPending(square))?;

        let mut promoted = Piece::new(kind, pawn.color, square);
        if let PieceRole::Rook(state) = &mut promoted.role {
            state.has_moved = true;
        }
        self.place(Some(promoted), square);
        Ok(())
    }

    /// Landing square of the last committed move when it put a pawn on its
    /// promotion row.
    pub fn pending_promotion(&self) -> Option<Coordinate> {
        let (_, to) = self.last_move?;
        self.piece_at(to)
            .filter(|p| p.kind() == PieceKind::Pawn && to.row == p.color.promotion_row())
            .map(|_| to)
    }

    #[inline]
    pub fn is_draw_by_no_progress(&self) -> bool {
        self.half_moves_since_capture >= NO_PROGRESS_LIMIT
    }

    /// Placement-only comparison: kind and color per square.
    ///
    /// Castling rights, the en-passant target and the side to move are not
    /// compared, so two legally distinct positions can match. Repetition
    /// avoidance relies on exactly this comparison.
    pub fn same_placement(&self, other: &Board) -> bool {
        Coordinate::all().all(|sq| match (self.piece_at(sq), other.piece_at(sq)) {
            (None, None) => true,
            (Some(a), Some(b)) => a.same_identity(&b),
            _ => false,
        })
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Coordinate> {
        self.en_passant_target
    }

    #[inline]
    pub fn half_moves_since_capture(&self) -> u16 {
        self.half_moves_since_capture
    }

    #[inline]
    pub fn last_move(&self) -> Option<(Coordinate, Coordinate)> {
        self.last_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Coordinate> {
        self.kings[color.index()]
    }

    /// Castling flags of `color`'s king.
    pub fn castling_rights(&self, color: Color) -> Option<KingState> {
        match self.piece_at(self.king_square(color)?)?.role {
            PieceRole::King(state) => Some(state),
            _ => None,
        }
    }

    /// Squares occupied by `color`, in row-major order.
    pub fn squares_of(&self, color: Color) -> Vec<Coordinate> {
        self.by_color[color.index()].iter().copied().collect()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.by_color[color.index()].iter().filter_map(|sq| self.piece_at(*sq))
    }

    /// Every occupied square with its piece, for renderers.
    pub fn occupied(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Unmoved own rook standing on `side`'s corner of `color`'s back row.
    pub(crate) fn castling_rook(&self, color: Color, row: i8, side: CastleSide) -> Option<RookState> {
        let piece = self.piece_at(Coordinate::new(row, side.rook_column()))?;
        match piece.role {
            PieceRole::Rook(state) if piece.color == color && !state.has_moved => Some(state),
            _ => None,
        }
    }

    fn finish_committed_move(&mut self, from: Coordinate, to: Coordinate, captured: bool) {
        self.en_passant_target = None;

        let Some(piece) = self.piece_at_mut(to) else {
            return;
        };
        let color = piece.color;
        let was_pawn = piece.kind() == PieceKind::Pawn;
        match piece.update_when_moved(from, to) {
            MoveSideEffect::EnPassantTarget(square) => self.en_passant_target = Some(square),
            MoveSideEffect::RevokeCastling(side) => self.revoke_castling(color, side),
            MoveSideEffect::None => {}
        }

        if captured || was_pawn {
            self.half_moves_since_capture = 0;
        } else {
            self.half_moves_since_capture = self.half_moves_since_capture.saturating_add(1);
        }
        self.side_to_move = color.opposite();
        self.last_move = Some((from, to));
    }

    fn revoke_castling(&mut self, color: Color, side: CastleSide) {
        let Some(king_sq) = self.king_square(color) else {
            return;
        };
        if let Some(Piece {
            role: PieceRole::King(state),
            ..
        }) = self.piece_at_mut(king_sq)
        {
            state.revoke(side);
        }
    }

    /// Moves the castling rook between its corner and the square next to the
    /// king's destination (`back == true` reverses the relocation).
    fn shift_castling_rook(&mut self, king_to: Coordinate, side: CastleSide, back: bool) {
        let corner = Coordinate::new(king_to.row, side.rook_column());
        let beside_king = king_to.offset(0, -side.direction());
        let (src, dst) = if back { (beside_king, corner) } else { (corner, beside_king) };
        if let Some(rook) = self.piece_at(src) {
            self.place(None, src);
            self.place(Some(rook), dst);
        }
    }
}

#[inline]
fn castle_side_of(from: Coordinate, to: Coordinate) -> CastleSide {
    if to.col > from.col {
        CastleSide::Kingside
    } else {
        CastleSide::Queenside
    }
}
