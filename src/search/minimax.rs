//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! White maximizes and Black minimizes an absolute, White-positive score.
//! Each node explores copies of the position, so the caller's game is never
//! touched. Moves are searched in enumeration order; there is no move
//! ordering, transposition table or quiescence stage.

use tracing::{debug, trace};

use crate::game_state::chess_types::{ChessMove, Color, GameState};
use crate::move_generation::legal_move_checks::is_check;
use crate::move_generation::legal_move_generator::generate_legal_successors;
use crate::search::board_scoring::{mate_score, BoardScorer, MaterialMobilityScorer};

/// Wider than any reachable score, mate included.
const INFINITY: i32 = 1_000_000_000;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 3 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` only when the side to move has no legal move.
    pub best_move: Option<ChessMove>,
    pub best_score: i32,
    pub nodes: u64,
}

pub fn minimax_search<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let depth = config.max_depth.max(1);
    let mut nodes = 1u64;

    let successors = generate_legal_successors(game_state);
    if successors.is_empty() {
        let best_score = terminal_score(game_state, 0);
        debug!(depth, best_score, "no legal moves at root");
        return SearchResult {
            best_move: None,
            best_score,
            nodes,
        };
    }

    let maximizing = game_state.side_to_move == Color::White;
    let mut alpha = -INFINITY;
    let mut beta = INFINITY;
    let mut best_score = if maximizing { -INFINITY } else { INFINITY };
    let mut best_move = successors[0].chess_move;

    for successor in &successors {
        let score = minimax(
            &successor.game_after_move,
            scorer,
            depth - 1,
            alpha,
            beta,
            1,
            &mut nodes,
        );
        trace!(mv = %successor.chess_move, score, "root move searched");

        // Strict comparison keeps the first enumerated move on ties.
        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = successor.chess_move;
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = successor.chess_move;
            }
            beta = beta.min(score);
        }
    }

    debug!(
        depth,
        best_move = %best_move,
        best_score,
        nodes,
        "search complete"
    );

    SearchResult {
        best_move: Some(best_move),
        best_score,
        nodes,
    }
}

fn minimax<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ply: u8,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return scorer.score(game_state);
    }

    let successors = generate_legal_successors(game_state);
    if successors.is_empty() {
        return terminal_score(game_state, ply);
    }

    if game_state.side_to_move == Color::White {
        let mut best = -INFINITY;
        for successor in &successors {
            let score = minimax(
                &successor.game_after_move,
                scorer,
                depth - 1,
                alpha,
                beta,
                ply.saturating_add(1),
                nodes,
            );
            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        best
    } else {
        let mut best = INFINITY;
        for successor in &successors {
            let score = minimax(
                &successor.game_after_move,
                scorer,
                depth - 1,
                alpha,
                beta,
                ply.saturating_add(1),
                nodes,
            );
            best = best.min(score);
            beta = beta.min(score);
            if alpha >= beta {
                break;
            }
        }
        best
    }
}

/// Score of a node with no legal moves.
fn terminal_score(game_state: &GameState, ply: u8) -> i32 {
    let to_move = game_state.side_to_move;
    if is_check(game_state, to_move) {
        mate_score(to_move, ply)
    } else {
        0
    }
}

/// Best move for the side to move with the default material+mobility scorer.
pub fn best_move(game_state: &GameState, depth: u8) -> Option<ChessMove> {
    minimax_search(
        game_state,
        &MaterialMobilityScorer,
        SearchConfig { max_depth: depth },
    )
    .best_move
}

#[cfg(test)]
mod tests {
    use super::{best_move, minimax_search, SearchConfig};
    use crate::game_state::chess_types::{ChessMove, GameState, Square};
    use crate::move_generation::legal_move_apply::apply_chess_move;
    use crate::move_generation::legal_move_generator::generate_legal_moves;
    use crate::search::board_scoring::{MaterialMobilityScorer, MaterialScorer, MATE_SCORE};

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn finds_back_rank_mate_for_white() {
        let game = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN should parse");
        let result = minimax_search(&game, &MaterialScorer, SearchConfig { max_depth: 2 });

        assert_eq!(result.best_move, Some(ChessMove::new(sq(0, 0), sq(7, 0))));
        assert_eq!(result.best_score, MATE_SCORE - 1);
        assert!(result.nodes > 1);
    }

    #[test]
    fn finds_mate_for_black_with_default_scorer() {
        let game = GameState::from_fen("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1").expect("FEN should parse");
        let result = minimax_search(&game, &MaterialMobilityScorer, SearchConfig { max_depth: 2 });

        assert_eq!(result.best_move, Some(ChessMove::new(sq(7, 0), sq(0, 0))));
        assert_eq!(result.best_score, -(MATE_SCORE - 1));
    }

    #[test]
    fn grabs_hanging_queen() {
        let game =
            GameState::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(best_move(&game, 1), Some(ChessMove::new(sq(1, 3), sq(4, 3))));
    }

    #[test]
    fn depth_zero_is_treated_as_one() {
        let game = GameState::new_game();
        let shallow = minimax_search(&game, &MaterialScorer, SearchConfig { max_depth: 0 });
        let one = minimax_search(&game, &MaterialScorer, SearchConfig { max_depth: 1 });
        assert_eq!(shallow, one);
        assert!(shallow.best_move.is_some());
    }

    #[test]
    fn ties_keep_the_first_enumerated_move() {
        let game = GameState::new_game();
        let result = minimax_search(&game, &MaterialScorer, SearchConfig { max_depth: 1 });
        assert_eq!(result.best_move, generate_legal_moves(&game).first().copied());
        assert_eq!(result.best_score, 0);
    }

    #[test]
    fn no_move_when_mated_or_stalemated() {
        let mated =
            GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        let result = minimax_search(&mated, &MaterialScorer, SearchConfig::default());
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, MATE_SCORE);

        let stalemated =
            GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert_eq!(best_move(&stalemated, 3), None);
    }

    #[test]
    fn search_leaves_the_game_untouched_and_move_is_legal() {
        let game = GameState::new_game();
        let before = game;
        let mv = best_move(&game, 2).expect("start position has moves");
        assert_eq!(game, before);

        let mut after = game;
        apply_chess_move(&mut after, mv).expect("chosen move should be legal");
    }
}
