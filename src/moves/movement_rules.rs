//! Per-kind pseudo-legal movement and attack dispatch.
//!
//! The piece-kind set is closed, so dispatch is an exhaustive `match` rather
//! than a trait object. Nothing here looks at king safety, castling rights or
//! the en-passant window; that is the legality layer's job.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::{king_attacks, king_can_move};
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::{pawn_attacks, pawn_can_move};
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

impl PieceKind {
    /// Pseudo-legal move of a `color` piece of this kind from `from` to `to`.
    ///
    /// False for the null move, for off-board squares and for a destination
    /// holding a friendly piece, whatever the kind.
    pub fn can_move(self, board: &Board, color: Color, from: Square, to: Square) -> bool {
        if from == to || !from.in_bounds() || !to.in_bounds() || board.is_friend(to, color) {
            return false;
        }

        match self {
            PieceKind::Pawn => pawn_can_move(board, color, from, to),
            PieceKind::Knight => knight_attacks(from, to),
            PieceKind::Bishop => bishop_attacks(board, from, to),
            PieceKind::Rook => rook_attacks(board, from, to),
            PieceKind::Queen => queen_attacks(board, from, to),
            PieceKind::King => king_can_move(from, to),
        }
    }
}

impl Piece {
    /// True when this piece, standing on `from`, threatens `target`.
    ///
    /// Unlike [`PieceKind::can_move`] the occupant of `target` is ignored, pawns
    /// only threaten diagonally and kings never threaten two files away.
    pub fn attacks(self, board: &Board, from: Square, target: Square) -> bool {
        match self.kind {
            PieceKind::Pawn => pawn_attacks(self.color, from, target),
            PieceKind::Knight => knight_attacks(from, target),
            PieceKind::Bishop => bishop_attacks(board, from, target),
            PieceKind::Rook => rook_attacks(board, from, target),
            PieceKind::Queen => queen_attacks(board, from, target),
            PieceKind::King => king_attacks(from, target),
        }
    }
}

/// Pseudo-legal move of whatever stands on `from`; false for an empty origin.
pub fn can_move(board: &Board, from: Square, to: Square) -> bool {
    match board.piece_at(from) {
        Some(piece) => piece.kind.can_move(board, piece.color, from, to),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::can_move;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn shared_contract_holds_for_every_kind() {
        let board = Board::standard();
        for (from, piece) in board.pieces() {
            assert!(!piece.kind.can_move(&board, piece.color, from, from));
            assert!(!piece.kind.can_move(&board, piece.color, from, Square::new(8, 0)));
            assert!(!piece.kind.can_move(&board, piece.color, from, Square::new(0, -1)));
            for (to, _) in board.pieces_of(piece.color) {
                assert!(!piece.kind.can_move(&board, piece.color, from, to));
            }
        }
    }

    #[test]
    fn start_position_pseudo_moves() {
        let board = Board::standard();
        // g1 knight to f3 and h3, never to g3.
        assert!(can_move(&board, Square::new(0, 6), Square::new(2, 5)));
        assert!(can_move(&board, Square::new(0, 6), Square::new(2, 7)));
        assert!(!can_move(&board, Square::new(0, 6), Square::new(2, 6)));
        // Sliders are boxed in.
        assert!(!can_move(&board, Square::new(0, 3), Square::new(2, 3)));
        assert!(!can_move(&board, Square::new(0, 2), Square::new(2, 4)));
        // Empty origin.
        assert!(!can_move(&board, Square::new(3, 3), Square::new(4, 3)));
    }

    #[test]
    fn king_two_file_jump_is_only_a_marker() {
        let mut board = Board::empty();
        let e1 = Square::new(0, 4);
        board.place(e1, Piece::new(Color::White, PieceKind::King));
        assert!(can_move(&board, e1, Square::new(0, 6)));
        assert!(!can_move(&board, e1, Square::new(2, 4)));
    }

    #[test]
    fn pawn_does_not_attack_straight_ahead() {
        let board = Board::standard();
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        assert!(!pawn.attacks(&board, Square::new(1, 4), Square::new(2, 4)));
        assert!(pawn.attacks(&board, Square::new(1, 4), Square::new(2, 3)));
    }
}
