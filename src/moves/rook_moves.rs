use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

#[inline]
pub fn is_orthogonal(from: Square, to: Square) -> bool {
    from != to && (from.row == to.row || from.col == to.col)
}

/// Rank/file line of sight from `from` to `target`.
#[inline]
pub fn rook_attacks(board: &Board, from: Square, target: Square) -> bool {
    is_orthogonal(from, target) && board.path_clear(from, target)
}

#[cfg(test)]
mod tests {
    use super::rook_attacks;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn rook_cannot_jump_over_pieces() {
        let board = Board::standard();
        let a1 = Square::new(0, 0);
        assert!(rook_attacks(&board, a1, Square::new(1, 0)));
        assert!(!rook_attacks(&board, a1, Square::new(3, 0)));
        assert!(!rook_attacks(&board, a1, Square::new(1, 1)));
    }

    #[test]
    fn rook_on_open_board_sees_fourteen_squares() {
        let mut board = Board::empty();
        let d4 = Square::new(3, 3);
        board.place(d4, Piece::new(Color::White, PieceKind::Rook));
        let seen = Square::all().filter(|sq| rook_attacks(&board, d4, *sq)).count();
        assert_eq!(seen, 14);
    }
}
