//! Per-kind positional scoring tables.
//!
//! Each table is an 8x8 grid of integers written from Light's point of view,
//! first line = rank 8 (row 0). Dark pieces read the row-mirrored entry.
//! Tables come from `<kind>.txt` files in a directory, or from the copies
//! compiled into the crate when no directory is configured.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;

const SIZE: usize = BOARD_SIZE as usize;

type Grid = [[i32; SIZE]; SIZE];

const ALL_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

const EMBEDDED: [(PieceKind, &str); 6] = [
    (PieceKind::Pawn, include_str!("data/pawn.txt")),
    (PieceKind::Knight, include_str!("data/knight.txt")),
    (PieceKind::Bishop, include_str!("data/bishop.txt")),
    (PieceKind::Rook, include_str!("data/rook.txt")),
    (PieceKind::Queen, include_str!("data/queen.txt")),
    (PieceKind::King, include_str!("data/king.txt")),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionTables {
    grids: [Grid; 6],
}

impl PositionTables {
    /// Tables compiled into the crate.
    pub fn embedded() -> ChessResult<Self> {
        let mut grids = [[[0; SIZE]; SIZE]; 6];
        for (kind, text) in EMBEDDED {
            grids[kind.index()] = parse_grid(kind, "embedded", text)?;
        }
        Ok(Self { grids })
    }

    /// Reads `pawn.txt` .. `king.txt` from `dir`.
    pub fn from_dir(dir: &Path) -> ChessResult<Self> {
        let mut grids = [[[0; SIZE]; SIZE]; 6];
        for kind in ALL_KINDS {
            let path = dir.join(format!("{}.txt", kind.name()));
            let source_name = path.display().to_string();
            let text = fs::read_to_string(&path).map_err(|e| ChessError::TableLoad {
                kind,
                source_name: source_name.clone(),
                reason: e.to_string(),
            })?;
            grids[kind.index()] = parse_grid(kind, &source_name, &text)?;
        }
        Ok(Self { grids })
    }

    /// Directory tables when `dir` is given, embedded ones otherwise.
    pub fn load(dir: Option<&Path>) -> ChessResult<Self> {
        match dir {
            Some(dir) => {
                let tables = Self::from_dir(dir)?;
                info!(dir = %dir.display(), "loaded positional tables from directory");
                Ok(tables)
            }
            None => {
                let tables = Self::embedded()?;
                info!("loaded embedded positional tables");
                Ok(tables)
            }
        }
    }

    /// Builds one table set from in-memory text, in `ALL_KINDS` order.
    pub fn from_strs(texts: [&str; 6]) -> ChessResult<Self> {
        let mut grids = [[[0; SIZE]; SIZE]; 6];
        for (kind, text) in ALL_KINDS.into_iter().zip(texts) {
            grids[kind.index()] = parse_grid(kind, "inline", text)?;
        }
        Ok(Self { grids })
    }

    #[inline]
    pub fn value(&self, kind: PieceKind, color: Color, position: Coordinate) -> i32 {
        if !position.is_on_board() {
            return 0;
        }
        let row = match color {
            Color::Light => position.row as usize,
            Color::Dark => SIZE - 1 - position.row as usize,
        };
        self.grids[kind.index()][row][position.col as usize]
    }
}

fn parse_grid(kind: PieceKind, source_name: &str, text: &str) -> ChessResult<Grid> {
    let fail = |reason: String| ChessError::TableLoad {
        kind,
        source_name: source_name.to_owned(),
        reason,
    };

    let rows: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if rows.len() != SIZE {
        return Err(fail(format!("expected {SIZE} rows, found {}", rows.len())));
    }

    let mut grid = [[0; SIZE]; SIZE];
    for (r, line) in rows.iter().enumerate() {
        let cells: Vec<&str> = line.split_whitespace().collect();
        if cells.len() != SIZE {
            return Err(fail(format!("row {} has {} columns", r + 1, cells.len())));
        }
        for (c, cell) in cells.iter().enumerate() {
            grid[r][c] = cell
                .parse::<i32>()
                .map_err(|_| fail(format!("row {} column {}: '{cell}' is not an integer", r + 1, c + 1)))?;
        }
    }
    Ok(grid)
}
