use crate::game_state::board::Board;
use crate::game_state::chess_types::Coordinate;
use crate::game_state::piece::Piece;
use crate::moves::ray_tracing::push_step;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn knight_moves(piece: &Piece, board: &Board, out: &mut Vec<Coordinate>) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        push_step(piece, board, piece.position.offset(d_row, d_col), out);
    }
}

#[cfg(test)]
mod tests {
    use super::knight_moves;
    use crate::game_state::chess_types::Coordinate;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn knight_in_center_has_eight_targets() {
        let board = parse_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1").expect("fixture FEN");
        let knight = board.piece_at(Coordinate::new(4, 3)).expect("knight on d4");
        let mut out = Vec::new();
        knight_moves(&knight, &board, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn knight_in_corner_skips_own_pieces() {
        let board = parse_fen("4k3/8/8/8/8/8/2P5/N3K3 w - - 0 1").expect("fixture FEN");
        let knight = board.piece_at(Coordinate::new(7, 0)).expect("knight on a1");
        let mut out = Vec::new();
        knight_moves(&knight, &board, &mut out);
        assert_eq!(out, vec![Coordinate::new(5, 1)]);
    }
}
