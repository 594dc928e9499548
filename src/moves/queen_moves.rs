use crate::game_state::board::Board;
use crate::game_state::chess_types::Coordinate;
use crate::game_state::piece::Piece;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::rook_moves::rook_moves;

#[inline]
pub fn queen_moves(piece: &Piece, board: &Board, out: &mut Vec<Coordinate>) {
    bishop_moves(piece, board, out);
    rook_moves(piece, board, out);
}

#[cfg(test)]
mod tests {
    use super::queen_moves;
    use crate::game_state::chess_types::Coordinate;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn queen_on_d4_sees_twenty_seven_squares_on_open_board() {
        let board = parse_fen("k7/8/8/8/3Q4/8/8/7K w - - 0 1").expect("fixture FEN");
        let queen = board.piece_at(Coordinate::new(4, 3)).expect("queen on d4");
        let mut out = Vec::new();
        queen_moves(&queen, &board, &mut out);
        assert_eq!(out.len(), 27);
    }
}
