//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! `Square` values reused by the FEN and UCI components. The rank digit maps to
//! `row` (rank 1 = row 0) and the file letter to `col`.

use crate::chess_errors::NotationError;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, NotationError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(NotationError::Square(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(NotationError::Square(square.to_owned()));
    }

    Ok(Square::new((rank - b'1') as i8, (file - b'a') as i8))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, NotationError> {
    if !square.in_bounds() {
        return Err(NotationError::OffBoard(square));
    }

    let file_char = char::from(b'a' + square.col as u8);
    let rank_char = char::from(b'1' + square.row as u8);

    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::chess_errors::NotationError;
    use crate::game_state::chess_types::Square;

    #[test]
    fn corner_and_center_squares() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), Square::new(0, 0));
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), Square::new(7, 7));
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse"), Square::new(3, 4));
        assert_eq!(square_to_algebraic(Square::new(0, 0)).expect("a1 should convert"), "a1");
        assert_eq!(square_to_algebraic(Square::new(6, 3)).expect("d7 should convert"), "d7");
    }

    #[test]
    fn rejects_bad_text_and_off_board_squares() {
        for text in ["", "e", "i1", "a9", "a0", "E4", "e44"] {
            assert!(algebraic_to_square(text).is_err(), "'{text}' should be rejected");
        }
        assert_eq!(
            square_to_algebraic(Square::new(8, 0)),
            Err(NotationError::OffBoard(Square::new(8, 0)))
        );
    }
}
