use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    from != to && (to.row - from.row).abs() == (to.col - from.col).abs()
}

/// Diagonal line of sight from `from` to `target`.
#[inline]
pub fn bishop_attacks(board: &Board, from: Square, target: Square) -> bool {
    is_diagonal(from, target) && board.path_clear(from, target)
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn bishop_slides_until_blocked() {
        let mut board = Board::empty();
        let c1 = Square::new(0, 2);
        board.place(c1, Piece::new(Color::White, PieceKind::Bishop));
        board.place(Square::new(3, 5), Piece::new(Color::Black, PieceKind::Pawn));

        assert!(bishop_attacks(&board, c1, Square::new(2, 4)));
        assert!(bishop_attacks(&board, c1, Square::new(3, 5)));
        assert!(!bishop_attacks(&board, c1, Square::new(4, 6)));
        assert!(!bishop_attacks(&board, c1, Square::new(0, 5)));
    }
}
