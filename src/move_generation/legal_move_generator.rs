//! Full legal move generation and terminal detection.
//!
//! Every candidate goes through `plan_for_color`, the same legality contract
//! `apply_move` enforces, so enumeration and execution cannot disagree.

use crate::game_state::chess_types::{ChessMove, Color, GameState, Square};
use crate::move_generation::legal_move_apply::{execute_plan, plan_for_color, MoveKind, MovePlan};
use crate::move_generation::legal_move_checks::is_check;

/// A legal move together with the position it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedMove {
    pub chess_move: ChessMove,
    pub kind: MoveKind,
    pub game_after_move: GameState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is in check but has a reply.
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

/// Legal plans for `color`, origins then destinations in row-major order.
fn legal_plans_for(game_state: &GameState, color: Color) -> impl Iterator<Item = MovePlan> + '_ {
    game_state
        .board
        .pieces_of(color)
        .flat_map(move |(from, _)| {
            Square::all().filter_map(move |to| plan_for_color(game_state, color, from, to).ok())
        })
}

/// Legal moves for the side to move.
pub fn generate_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    legal_plans_for(game_state, game_state.side_to_move)
        .map(|plan| ChessMove::new(plan.from, plan.to))
        .collect()
}

/// Legal moves for the side to move, each with its resulting position.
pub fn generate_legal_successors(game_state: &GameState) -> Vec<GeneratedMove> {
    legal_plans_for(game_state, game_state.side_to_move)
        .map(|plan| {
            let mut next = *game_state;
            execute_plan(&mut next, plan);
            GeneratedMove {
                chess_move: ChessMove::new(plan.from, plan.to),
                kind: plan.kind,
                game_after_move: next,
            }
        })
        .collect()
}

/// Stops at the first legal move found.
#[inline]
pub fn has_any_legal_move(game_state: &GameState, color: Color) -> bool {
    legal_plans_for(game_state, color).next().is_some()
}

pub fn is_checkmate(game_state: &GameState, color: Color) -> bool {
    is_check(game_state, color) && !has_any_legal_move(game_state, color)
}

pub fn is_stalemate(game_state: &GameState, color: Color) -> bool {
    !is_check(game_state, color) && !has_any_legal_move(game_state, color)
}

pub fn game_status(game_state: &GameState) -> GameStatus {
    let to_move = game_state.side_to_move;
    let in_check = is_check(game_state, to_move);
    let can_move = has_any_legal_move(game_state, to_move);

    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate {
            winner: to_move.opposite(),
        },
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Ongoing,
    }
}
