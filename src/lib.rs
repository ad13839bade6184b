//! Crate root module declarations for the minimax chess engine.
//!
//! This file exposes all top-level subsystems (game state, movement rules,
//! legality and move generation, search, engines, UCI protocol handling, and
//! utility helpers) so binaries, benches, and external tooling can import
//! stable module paths. The most common entry points are re-exported here.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod movement_rules;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod uci {
    pub mod uci_top;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod console_game;
    pub mod coordinate_notation;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}

pub use chess_errors::MoveError;
pub use game_state::chess_types::{ChessMove, Color, GameState, Piece, PieceKind, Square};
pub use game_state::game_state::create_initial_position;
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_checks::is_check;
pub use move_generation::legal_move_generator::{generate_legal_moves, is_checkmate, is_stalemate};
pub use search::minimax::best_move;
