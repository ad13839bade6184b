//! Errors used throughout the chess engine.
//!
//! Every variant is recoverable. A `MoveError` is returned before anything is
//! mutated, so a rejected move leaves the game exactly as it was; parsing
//! errors carry the offending text so drivers can report it verbatim.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Why a move was refused at the execution boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Move text could not be read as coordinates.
    #[error("format error in '{0}': use P10 30 or 10 30")]
    Format(String),

    #[error("out of bounds: {from} -> {to}")]
    OutOfBounds { from: Square, to: Square },

    #[error("no piece at origin {0}")]
    EmptyOrigin(Square),

    #[error("it's {expected}'s turn")]
    WrongTurn { expected: Color },

    /// A declared piece letter does not match the occupant of the origin.
    #[error("piece letter {declared:?} doesn't match the {actual:?} on the origin square")]
    ShapeMismatch {
        declared: PieceKind,
        actual: PieceKind,
    },

    #[error("castling not allowed now")]
    CastlingUnavailable,

    #[error("illegal move for that piece")]
    IllegalShape,

    #[error("move would leave king in check")]
    SelfCheck,
}

/// FEN parsing failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("missing {0} in FEN")]
    MissingField(&'static str),

    #[error("FEN has extra trailing fields")]
    TrailingFields,

    #[error("board layout must contain 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} does not sum to 8 files")]
    RankWidth { rank: usize },

    #[error("invalid piece character '{0}' in board layout")]
    PieceChar(char),

    #[error("invalid side-to-move field: {0}")]
    SideToMove(String),

    #[error("invalid castling rights character: {0}")]
    CastlingChar(char),

    #[error("invalid en-passant square: {0}")]
    EnPassant(String),

    #[error("invalid move counter: {0}")]
    Counter(String),

    #[error("position must hold exactly one {0} king")]
    KingCount(Color),
}

/// Algebraic square and UCI move text failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid algebraic square: {0}")]
    Square(String),

    #[error("invalid long algebraic move: {0}")]
    Move(String),

    #[error("square out of bounds: {0}")]
    OffBoard(Square),
}

/// Engine configuration failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid {name} value '{value}'")]
    InvalidOptionValue { name: String, value: String },
}

/// UCI command failures. Reported to the GUI as `info string`; the session
/// keeps running.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UciError {
    #[error("incomplete command: missing {0}")]
    Incomplete(&'static str),

    #[error("unsupported position token '{0}'")]
    UnsupportedToken(String),

    #[error(transparent)]
    Fen(#[from] FenError),

    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error("illegal move {text}: {source}")]
    IllegalMove {
        text: String,
        #[source]
        source: MoveError,
    },

    #[error(transparent)]
    Engine(#[from] EngineError),
}
