//! Perft: exhaustive legal-move tree counts, the standard move generator
//! correctness oracle.

use crate::game_state::chess_types::{GameState, PieceKind};
use crate::move_generation::legal_move_apply::MoveKind;
use crate::move_generation::legal_move_checks::is_check;
use crate::move_generation::legal_move_generator::{
    generate_legal_successors, has_any_legal_move, GeneratedMove,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

/// Leaf count of the legal move tree `depth` plies deep.
pub fn perft(game_state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let successors = generate_legal_successors(game_state);
    if depth == 1 {
        return successors.len() as u64;
    }

    successors
        .iter()
        .map(|generated| perft(&generated.game_after_move, depth - 1))
        .sum()
}

/// Like [`perft`], also classifying the moves that reach the leaves.
pub fn perft_counts(game_state: &GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }

    for generated in generate_legal_successors(game_state) {
        if depth == 1 {
            classify_leaf(game_state, &generated, &mut counts);
        } else {
            let child = perft_counts(&generated.game_after_move, depth - 1);
            counts.merge(child);
        }
    }

    counts
}

/// Per-root-move node counts, for comparing against a reference engine.
/// Depth 0 has no root moves to split and yields an empty list.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(GeneratedMove, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    generate_legal_successors(game_state)
        .into_iter()
        .map(|generated| {
            let nodes = perft(&generated.game_after_move, depth - 1);
            (generated, nodes)
        })
        .collect()
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

fn classify_leaf(parent: &GameState, generated: &GeneratedMove, counts: &mut PerftCounts) {
    let mv = generated.chess_move;
    let next = &generated.game_after_move;
    counts.nodes += 1;

    match generated.kind {
        MoveKind::EnPassant { .. } => {
            counts.captures += 1;
            counts.en_passant += 1;
        }
        MoveKind::Castle(_) => counts.castles += 1,
        MoveKind::Normal | MoveKind::DoublePawnPush => {
            if parent.board.piece_at(mv.to).is_some() {
                counts.captures += 1;
            }
        }
    }

    if let Some(mover) = parent.board.piece_at(mv.from) {
        if mover.kind == PieceKind::Pawn && mv.to.row == mover.color.promotion_row() {
            counts.promotions += 1;
        }
    }

    if is_check(next, next.side_to_move) {
        counts.checks += 1;
        if !has_any_legal_move(next, next.side_to_move) {
            counts.checkmates += 1;
        }
    }
}
