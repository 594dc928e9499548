//! FEN-to-Board parser.
//!
//! Builds a `Board` from a Forsyth-Edwards Notation string. The board keeps
//! per-piece movement flags rather than a castling field, so the parser
//! derives them: pawns count as unmoved only on their starting row, rooks only
//! in a corner, and the king receives the castling letters only while it
//! stands on its home square.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;
use crate::game_state::piece::{KingState, Piece, PieceRole};

const KING_HOME_COLUMN: i8 = 4;

pub fn parse_fen(fen: &str) -> ChessResult<Board> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut board = Board::new_empty();
    parse_board(board_part, &mut board)?;

    for color in [Color::Light, Color::Dark] {
        let kings = board.pieces_of(color).filter(|p| p.kind() == PieceKind::King).count();
        if kings != 1 {
            return Err(invalid(&format!("expected one {color:?} king, found {kings}")));
        }
    }

    board.side_to_move = parse_side_to_move(side_part)?;
    apply_castling_rights(castling_part, &mut board)?;
    board.en_passant_target = parse_en_passant_square(en_passant_part)?;
    board.half_moves_since_capture = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("halfmove clock '{halfmove_part}'")))?;
    fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("fullmove number '{fullmove_part}'")))?;

    Ok(board)
}

fn invalid(reason: &str) -> ChessError {
    ChessError::InvalidFen(reason.to_owned())
}

fn parse_board(board_part: &str, board: &mut Board) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != BOARD_SIZE as usize {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let row = row as i8;
        let mut col = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("empty-square count '{ch}'")));
                }
                if col + empty_count as i8 > BOARD_SIZE {
                    return Err(invalid("rank has too many files"));
                }
                col += empty_count as i8;
                continue;
            }

            let (color, kind) =
                piece_from_fen_char(ch).ok_or_else(|| invalid(&format!("piece character '{ch}'")))?;
            if col >= BOARD_SIZE {
                return Err(invalid("rank has too many files"));
            }

            let square = Coordinate::new(row, col);
            board.place(Some(piece_with_flags(kind, color, square)), square);
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err(invalid("rank does not sum to 8 files"));
        }
    }

    Ok(())
}

/// Fresh piece whose movement flags are inferred from where it stands.
fn piece_with_flags(kind: PieceKind, color: Color, square: Coordinate) -> Piece {
    let mut piece = Piece::new(kind, color, square);
    match &mut piece.role {
        PieceRole::Pawn(state) => {
            state.has_moved = square.row != color.back_row() + color.forward();
        }
        PieceRole::Rook(state) => {
            let in_corner = square.row == color.back_row()
                && (square.col == CastleSide::Queenside.rook_column()
                    || square.col == CastleSide::Kingside.rook_column());
            state.has_moved = !in_corner;
        }
        PieceRole::King(state) => {
            *state = KingState {
                can_castle_queenside: false,
                can_castle_kingside: false,
            };
        }
        PieceRole::Knight | PieceRole::Bishop | PieceRole::Queen => {}
    }
    piece
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(&format!("side-to-move field '{side_part}'"))),
    }
}

fn apply_castling_rights(castling_part: &str, board: &mut Board) -> ChessResult<()> {
    if castling_part == "-" {
        return Ok(());
    }

    for ch in castling_part.chars() {
        let (color, side) = match ch {
            'K' => (Color::Light, CastleSide::Kingside),
            'Q' => (Color::Light, CastleSide::Queenside),
            'k' => (Color::Dark, CastleSide::Kingside),
            'q' => (Color::Dark, CastleSide::Queenside),
            _ => return Err(invalid(&format!("castling rights character '{ch}'"))),
        };

        let home = Coordinate::new(color.back_row(), KING_HOME_COLUMN);
        if board.king_square(color) != Some(home) {
            continue;
        }
        if let Some(Piece {
            role: PieceRole::King(state),
            ..
        }) = board.piece_at_mut(home)
        {
            match side {
                CastleSide::Queenside => state.can_castle_queenside = true,
                CastleSide::Kingside => state.can_castle_kingside = true,
            }
        }
    }

    Ok(())
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Coordinate>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Coordinate::from_algebraic(en_passant_part)
        .map(Some)
        .ok_or_else(|| invalid(&format!("en-passant square '{en_passant_part}'")))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}
