//! Special-move predicates and the king-safety simulation shared by move
//! validation and legal-move enumeration.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{CastleSide, KING_HOME_COL};
use crate::game_state::chess_types::{Color, GameState, Piece, PieceKind, Square};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};

/// Board after relocating `from` to `to`, with `extra_capture` vacated first.
///
/// Execution and simulation both go through here so they cannot disagree on
/// which squares a move touches.
#[inline]
pub fn board_after_relocation(
    board: &Board,
    from: Square,
    to: Square,
    extra_capture: Option<Square>,
) -> Board {
    let mut scratch = *board;
    if let Some(captured) = extra_capture {
        scratch.clear(captured);
    }
    scratch.relocate(from, to);
    scratch
}

/// Would moving the piece on `from` to `to` leave its own king in check?
///
/// Runs on a scratch copy, so `board` is untouched whatever the outcome.
pub fn leaves_king_in_check(
    board: &Board,
    from: Square,
    to: Square,
    extra_capture: Option<Square>,
) -> bool {
    let Some(mover) = board.piece_at(from) else {
        return true;
    };
    let scratch = board_after_relocation(board, from, to, extra_capture);
    is_king_in_check(&scratch, mover.color)
}

fn unmoved(piece: Option<Piece>, color: Color, kind: PieceKind) -> bool {
    matches!(piece, Some(p) if p.color == color && p.kind == kind && !p.has_moved)
}

/// Castling preconditions: unmoved king and rook on their home squares, empty
/// squares between them, king not in check and not crossing an attacked square.
pub fn can_castle(board: &Board, color: Color, side: CastleSide) -> bool {
    let row = color.back_rank();
    let king_sq = Square::new(row, KING_HOME_COL);
    let rook_sq = Square::new(row, side.rook_home_col());

    if !unmoved(board.piece_at(king_sq), color, PieceKind::King)
        || !unmoved(board.piece_at(rook_sq), color, PieceKind::Rook)
    {
        return false;
    }
    if !board.path_clear(king_sq, rook_sq) {
        return false;
    }
    if is_king_in_check(board, color) {
        return false;
    }

    let enemy = color.opposite();
    side.king_path_cols()
        .iter()
        .all(|col| !is_square_attacked(board, Square::new(row, *col), enemy))
}

/// Square of the pawn an en-passant capture from `from` to `to` would remove,
/// if the window currently allows exactly that capture for `mover`.
pub fn en_passant_capture(
    game_state: &GameState,
    mover: Piece,
    from: Square,
    to: Square,
) -> Option<Square> {
    if mover.kind != PieceKind::Pawn || (to.col - from.col).abs() != 1 {
        return None;
    }
    if to.row != from.row + mover.color.pawn_direction() || !game_state.board.is_empty(to) {
        return None;
    }

    let window = game_state.en_passant?;
    (window.pawn_color != mover.color && window.target == to).then_some(window.captured)
}
