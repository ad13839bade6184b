use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, GameState, Square};

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.king_square(color)
}

/// True if any `attacker_color` piece threatens `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|(from, piece)| piece.attacks(board, from, square))
}

/// A side without a king is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

#[inline]
pub fn is_check(game_state: &GameState, color: Color) -> bool {
    is_king_in_check(&game_state.board, color)
}
