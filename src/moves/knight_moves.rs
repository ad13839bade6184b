use crate::game_state::chess_types::Square;

/// L-shape geometry: (|Δr|,|Δc|) is (2,1) or (1,2).
#[inline]
pub fn knight_attacks(from: Square, target: Square) -> bool {
    let d_row = (target.row - from.row).abs();
    let d_col = (target.col - from.col).abs();
    (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)
}
