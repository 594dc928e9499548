//! Core value types shared by the board, the pieces and the search.
//!
//! Coordinates use a zero-indexed 8x8 grid where row 0 is Dark's back rank
//! and row 7 is Light's back rank; column 0 is the a-file.

use std::fmt;

use crate::game_state::chess_rules::BOARD_SIZE;

/// Side to move. `Light` moves first and starts on rows 6-7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row step a pawn of this color advances by.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Row on which pawns of this color promote.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::Light => 0,
            Color::Dark => BOARD_SIZE - 1,
        }
    }

    /// Row holding this color's king and rooks at the start of a game.
    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Color::Light => BOARD_SIZE - 1,
            Color::Dark => 0,
        }
    }

    /// Score sign: positive material favors `Light`.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }
}

/// Piece kind (kind-specific state lives on `PieceRole`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lower-case name, also the stem of the positional table resource.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// Which rook a castling right refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Queenside,
    Kingside,
}

impl CastleSide {
    /// Column step from the king toward this side's rook.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            CastleSide::Queenside => -1,
            CastleSide::Kingside => 1,
        }
    }

    /// Corner column the rook starts on.
    #[inline]
    pub const fn rook_column(self) -> i8 {
        match self {
            CastleSide::Queenside => 0,
            CastleSide::Kingside => BOARD_SIZE - 1,
        }
    }

    /// Side a rook standing on `col` belongs to.
    #[inline]
    pub const fn from_rook_column(col: i8) -> Self {
        if col == 0 {
            CastleSide::Queenside
        } else {
            CastleSide::Kingside
        }
    }
}

/// Immutable (row, col) board address. Values outside `[0, 8)` are allowed
/// while generating candidates and are rejected by `is_on_board`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: i8,
    pub col: i8,
}

impl Coordinate {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Every on-board coordinate, row-major from row 0.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coordinate::new(row, col)))
    }

    /// Parse algebraic notation such as `e2` (rank 1 is row 7).
    pub fn from_algebraic(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        let col = (file as u8 - b'a') as i8;
        let row = BOARD_SIZE - (rank as u8 - b'0') as i8;
        Some(Self::new(row, col))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.row, self.col);
        }
        let file = char::from(b'a' + self.col as u8);
        let rank = BOARD_SIZE - self.row;
        write!(f, "{file}{rank}")
    }
}
