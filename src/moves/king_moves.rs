use crate::game_state::chess_types::Square;

/// Chebyshev distance one.
#[inline]
pub fn king_attacks(from: Square, target: Square) -> bool {
    from != target && (target.row - from.row).abs() <= 1 && (target.col - from.col).abs() <= 1
}

/// Same-rank two-file jump. Only a castling attempt marker; whether castling
/// is actually allowed is decided by the legality layer.
#[inline]
pub fn is_castling_jump(from: Square, to: Square) -> bool {
    from.row == to.row && (to.col - from.col).abs() == 2
}

#[inline]
pub fn king_can_move(from: Square, to: Square) -> bool {
    king_attacks(from, to) || is_castling_jump(from, to)
}
