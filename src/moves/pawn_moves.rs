//! Pawn movement: pushes, the double step from the start row, and diagonal
//! captures. En passant is a legality-layer exception and is not granted here.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

/// Squares a pawn threatens: one row forward, one file sideways. The square
/// straight ahead is never threatened.
#[inline]
pub fn pawn_attacks(color: Color, from: Square, target: Square) -> bool {
    target.row - from.row == color.pawn_direction() && (target.col - from.col).abs() == 1
}

/// Pseudo-legal pawn move. Assumes the shared destination checks
/// (bounds, null move, friendly occupant) have already passed.
pub fn pawn_can_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let dir = color.pawn_direction();
    let d_row = to.row - from.row;
    let d_col = to.col - from.col;

    if d_col == 0 && d_row == dir {
        return board.is_empty(to);
    }

    if d_col == 0 && d_row == 2 * dir && from.row == color.pawn_start_row() {
        return board.is_empty(from.offset(dir, 0)) && board.is_empty(to);
    }

    pawn_attacks(color, from, to) && board.is_enemy(to, color)
}
