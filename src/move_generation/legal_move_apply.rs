//! Move validation and execution.
//!
//! Validation (`plan_move`) is a pure function of the position and yields a
//! `MovePlan`; execution consumes the plan. Because legal-move enumeration asks
//! the same `plan_move`, every enumerated move is accepted by `apply_move`.

use crate::chess_errors::MoveError;
use crate::game_state::chess_rules::CastleSide;
use crate::game_state::chess_types::{
    ChessMove, Color, EnPassantWindow, GameState, PieceKind, Square,
};
use crate::move_generation::legal_move_shared::{
    can_castle, en_passant_capture, leaves_king_in_check,
};
use crate::moves::king_moves::is_castling_jump;
use crate::utils::coordinate_notation::parse_coordinate_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Any move not listed below, captures and promotions included.
    Normal,
    DoublePawnPush,
    Castle(CastleSide),
    EnPassant { captured: Square },
}

/// A move that has passed every legality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

/// Validate a move for the side to move without touching the game.
pub fn plan_move(game_state: &GameState, from: Square, to: Square) -> Result<MovePlan, MoveError> {
    plan_declared_move(game_state, None, from, to)
}

fn plan_declared_move(
    game_state: &GameState,
    declared: Option<PieceKind>,
    from: Square,
    to: Square,
) -> Result<MovePlan, MoveError> {
    if !from.in_bounds() || !to.in_bounds() {
        return Err(MoveError::OutOfBounds { from, to });
    }

    let piece = game_state
        .board
        .piece_at(from)
        .ok_or(MoveError::EmptyOrigin(from))?;

    if piece.color != game_state.side_to_move {
        return Err(MoveError::WrongTurn {
            expected: game_state.side_to_move,
        });
    }

    if let Some(declared) = declared {
        if declared != piece.kind {
            return Err(MoveError::ShapeMismatch {
                declared,
                actual: piece.kind,
            });
        }
    }

    plan_for_color(game_state, piece.color, from, to)
}

/// Legality for an in-bounds origin holding a `mover` piece, independent of
/// whose turn it is. Terminal detection uses this for either color.
pub(crate) fn plan_for_color(
    game_state: &GameState,
    mover: Color,
    from: Square,
    to: Square,
) -> Result<MovePlan, MoveError> {
    let board = &game_state.board;
    let piece = board.piece_at(from).ok_or(MoveError::EmptyOrigin(from))?;
    debug_assert_eq!(piece.color, mover);

    if piece.kind == PieceKind::King && is_castling_jump(from, to) {
        let side = CastleSide::from_king_target(to.col);
        if from.row == mover.back_rank() && can_castle(board, mover, side) {
            return Ok(MovePlan {
                from,
                to,
                kind: MoveKind::Castle(side),
            });
        }
        return Err(MoveError::CastlingUnavailable);
    }

    if let Some(captured) = en_passant_capture(game_state, piece, from, to) {
        if leaves_king_in_check(board, from, to, Some(captured)) {
            return Err(MoveError::SelfCheck);
        }
        return Ok(MovePlan {
            from,
            to,
            kind: MoveKind::EnPassant { captured },
        });
    }

    if !piece.kind.can_move(board, mover, from, to) {
        return Err(MoveError::IllegalShape);
    }
    if leaves_king_in_check(board, from, to, None) {
        return Err(MoveError::SelfCheck);
    }

    let kind = if piece.kind == PieceKind::Pawn && (to.row - from.row).abs() == 2 {
        MoveKind::DoublePawnPush
    } else {
        MoveKind::Normal
    };
    Ok(MovePlan { from, to, kind })
}

/// Carry out a validated plan.
pub fn execute_plan(game_state: &mut GameState, plan: MovePlan) {
    let mover = game_state.side_to_move;
    game_state.en_passant = None;

    match plan.kind {
        MoveKind::Castle(side) => {
            let row = plan.from.row;
            let rook_from = Square::new(row, side.rook_home_col());
            let rook_to = Square::new(row, side.rook_target_col());
            game_state.board.relocate(plan.from, plan.to);
            game_state.board.relocate(rook_from, rook_to);
            mark_moved(game_state, plan.to);
            mark_moved(game_state, rook_to);
        }
        MoveKind::EnPassant { captured } => {
            game_state.board.clear(captured);
            game_state.board.relocate(plan.from, plan.to);
            mark_moved(game_state, plan.to);
            promote_if_needed(game_state, plan.to);
        }
        MoveKind::DoublePawnPush => {
            game_state.board.relocate(plan.from, plan.to);
            mark_moved(game_state, plan.to);
            game_state.en_passant = Some(EnPassantWindow {
                target: plan.from.offset(mover.pawn_direction(), 0),
                captured: plan.to,
                pawn_color: mover,
            });
        }
        MoveKind::Normal => {
            game_state.board.relocate(plan.from, plan.to);
            mark_moved(game_state, plan.to);
            promote_if_needed(game_state, plan.to);
        }
    }

    if mover == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }
    game_state.side_to_move = mover.opposite();
}

fn mark_moved(game_state: &mut GameState, square: Square) {
    if let Some(piece) = game_state.board.piece_at_mut(square) {
        piece.has_moved = true;
    }
}

/// Pawns reaching the far rank become Queens; no other choice is offered.
fn promote_if_needed(game_state: &mut GameState, square: Square) {
    if let Some(piece) = game_state.board.piece_at_mut(square) {
        if piece.kind == PieceKind::Pawn && square.row == piece.color.promotion_row() {
            piece.kind = PieceKind::Queen;
            piece.has_moved = true;
        }
    }
}

/// Validate and play `from` -> `to` for the side to move.
///
/// On error the game is left exactly as it was.
pub fn apply_move(game_state: &mut GameState, from: Square, to: Square) -> Result<(), MoveError> {
    let plan = plan_move(game_state, from, to)?;
    execute_plan(game_state, plan);
    Ok(())
}

#[inline]
pub fn apply_chess_move(game_state: &mut GameState, mv: ChessMove) -> Result<(), MoveError> {
    apply_move(game_state, mv.from, mv.to)
}

/// Play a console-notation move such as `P10 30` or `10 30`.
pub fn apply_notation(game_state: &mut GameState, text: &str) -> Result<(), MoveError> {
    let parsed = parse_coordinate_move(text)?;
    let plan = plan_declared_move(game_state, parsed.piece, parsed.from, parsed.to)?;
    execute_plan(game_state, plan);
    Ok(())
}
