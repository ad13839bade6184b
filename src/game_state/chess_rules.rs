//! Canonical chess-rule constants.
//!
//! Static literals for the standard setup and the fixed castling geometry.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank pieces from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// File of both kings at the start.
pub const KING_HOME_COL: i8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Side implied by a two-file king jump to `to_col`.
    #[inline]
    pub const fn from_king_target(to_col: i8) -> Self {
        if to_col > KING_HOME_COL {
            CastleSide::KingSide
        } else {
            CastleSide::QueenSide
        }
    }

    #[inline]
    pub const fn rook_home_col(self) -> i8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    #[inline]
    pub const fn king_target_col(self) -> i8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    #[inline]
    pub const fn rook_target_col(self) -> i8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Files the king passes through, destination included.
    #[inline]
    pub const fn king_path_cols(self) -> [i8; 2] {
        match self {
            CastleSide::KingSide => [5, 6],
            CastleSide::QueenSide => [3, 2],
        }
    }
}
