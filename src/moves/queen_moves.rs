use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(board: &Board, from: Square, target: Square) -> bool {
    bishop_attacks(board, from, target) || rook_attacks(board, from, target)
}

#[cfg(test)]
mod tests {
    use super::queen_attacks;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn queen_on_open_board_sees_twenty_seven_squares() {
        let mut board = Board::empty();
        let d4 = Square::new(3, 3);
        board.place(d4, Piece::new(Color::White, PieceKind::Queen));
        let seen = Square::all().filter(|sq| queen_attacks(&board, d4, *sq)).count();
        assert_eq!(seen, 27);
    }

    #[test]
    fn queen_rejects_knight_geometry() {
        let board = Board::empty();
        assert!(!queen_attacks(&board, Square::new(3, 3), Square::new(5, 4)));
    }
}
