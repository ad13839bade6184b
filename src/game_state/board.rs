//! Flat 8×8 piece grid.
//!
//! `Board` is `Copy`: every copy is an independent snapshot, which is what the
//! king-safety simulation and the search rely on when they explore a move
//! without disturbing the position they were given.

use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard initial setup.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        board.set_major_pieces(Color::White);
        board.set_major_pieces(Color::Black);
        board
    }

    fn set_major_pieces(&mut self, color: Color) {
        let back_rank = color.back_rank();
        for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            self.place(Square::new(back_rank, col as i8), Piece::new(color, *kind));
        }
        let pawn_row = color.pawn_start_row();
        for col in 0..8 {
            self.place(Square::new(pawn_row, col), Piece::new(color, PieceKind::Pawn));
        }
    }

    /// Occupant of `square`; `None` for empty or off-board squares.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.in_bounds() {
            return None;
        }
        self.squares[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn piece_at_mut(&mut self, square: Square) -> Option<&mut Piece> {
        if !square.in_bounds() {
            return None;
        }
        self.squares[square.row as usize][square.col as usize].as_mut()
    }

    /// Put `piece` on `square`, returning the previous occupant. Off-board
    /// squares are ignored.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.set(square, Some(piece))
    }

    #[inline]
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.set(square, None)
    }

    fn set(&mut self, square: Square, content: Option<Piece>) -> Option<Piece> {
        if !square.in_bounds() {
            return None;
        }
        std::mem::replace(
            &mut self.squares[square.row as usize][square.col as usize],
            content,
        )
    }

    /// Move whatever stands on `from` to `to`, returning what `to` held.
    /// Does not touch `has_moved`; callers decide whether the relocation counts
    /// as a real move.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        match self.clear(from) {
            Some(piece) => self.place(to, piece),
            None => self.clear(to),
        }
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn is_friend(&self, square: Square, color: Color) -> bool {
        matches!(self.piece_at(square), Some(piece) if piece.color == color)
    }

    #[inline]
    pub fn is_enemy(&self, square: Square, color: Color) -> bool {
        matches!(self.piece_at(square), Some(piece) if piece.color != color)
    }

    /// True when every square strictly between `from` and `to` is empty.
    /// Callers must pass squares on a shared rank, file or diagonal.
    pub fn path_clear(&self, from: Square, to: Square) -> bool {
        let d_row = (to.row - from.row).signum();
        let d_col = (to.col - from.col).signum();
        if d_row == 0 && d_col == 0 {
            return true;
        }

        let mut current = from.offset(d_row, d_col);
        while current != to {
            if !current.in_bounds() || !self.is_empty(current) {
                return false;
            }
            current = current.offset(d_row, d_col);
        }
        true
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces().find_map(|(square, piece)| {
            (piece.color == color && piece.kind == PieceKind::King).then_some(square)
        })
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn standard_board_has_pawn_rows_and_royal_files() {
        let board = Board::standard();
        for col in 0..8 {
            assert_eq!(
                board.piece_at(Square::new(1, col)),
                Some(Piece::new(Color::White, PieceKind::Pawn))
            );
            assert_eq!(
                board.piece_at(Square::new(6, col)),
                Some(Piece::new(Color::Black, PieceKind::Pawn))
            );
        }
        assert_eq!(board.king_square(Color::White), Some(Square::new(0, 4)));
        assert_eq!(board.king_square(Color::Black), Some(Square::new(7, 4)));
        assert_eq!(
            board.piece_at(Square::new(7, 3)).map(|p| p.kind),
            Some(PieceKind::Queen)
        );
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn copies_do_not_alias() {
        let original = Board::standard();
        let mut copy = original;
        copy.relocate(Square::new(1, 4), Square::new(3, 4));
        if let Some(piece) = copy.piece_at_mut(Square::new(3, 4)) {
            piece.has_moved = true;
        }

        assert!(original.is_empty(Square::new(3, 4)));
        assert!(!original.is_empty(Square::new(1, 4)));
        assert!(copy.is_empty(Square::new(1, 4)));
    }

    #[test]
    fn path_clear_ignores_endpoints_and_stops_at_blockers() {
        let board = Board::standard();
        // a1 rook to a3: a2 pawn blocks.
        assert!(!board.path_clear(Square::new(0, 0), Square::new(2, 0)));
        // a2 to a7 crosses only empty middle rows.
        assert!(board.path_clear(Square::new(1, 0), Square::new(6, 0)));
        // adjacent squares have nothing strictly between them.
        assert!(board.path_clear(Square::new(0, 0), Square::new(1, 1)));
    }

    #[test]
    fn off_board_squares_read_as_empty_and_ignore_writes() {
        let mut board = Board::empty();
        let off = Square::new(8, 8);
        assert!(board.is_empty(off));
        assert_eq!(board.place(off, Piece::new(Color::White, PieceKind::Rook)), None);
        assert_eq!(board.pieces().count(), 0);
        assert_eq!(board.king_square(Color::White), None);
    }
}
