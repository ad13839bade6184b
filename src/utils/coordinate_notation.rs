//! Console coordinate notation.
//!
//! A move is two `rowcol` digit pairs separated by whitespace, optionally
//! prefixed by the moving piece's letter: `P10 30` or `10 30`. Rows and columns
//! are zero-based, row 0 being White's back rank.

use crate::chess_errors::MoveError;
use crate::game_state::chess_types::{ChessMove, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMove {
    /// Declared piece kind, checked against the origin's occupant.
    pub piece: Option<PieceKind>,
    pub from: Square,
    pub to: Square,
}

pub fn parse_coordinate_move(text: &str) -> Result<CoordinateMove, MoveError> {
    let format_error = || MoveError::Format(text.trim().to_owned());

    let mut tokens = text.split_whitespace();
    let origin = tokens.next().ok_or_else(format_error)?;
    let destination = tokens.next().ok_or_else(format_error)?;
    if tokens.next().is_some() {
        return Err(format_error());
    }

    let mut origin_chars = origin.chars();
    let first = origin_chars.next().ok_or_else(format_error)?;
    let (piece, origin_digits) = if first.is_ascii_digit() {
        (None, origin)
    } else {
        let kind = PieceKind::from_letter(first).ok_or_else(format_error)?;
        (Some(kind), origin_chars.as_str())
    };

    let from = parse_digit_pair(origin_digits).ok_or_else(format_error)?;
    let to = parse_digit_pair(destination).ok_or_else(format_error)?;

    Ok(CoordinateMove { piece, from, to })
}

fn parse_digit_pair(token: &str) -> Option<Square> {
    let bytes = token.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let row = digit(bytes[0])?;
    let col = digit(bytes[1])?;
    Some(Square::new(row, col))
}

fn digit(byte: u8) -> Option<i8> {
    (b'0'..=b'7').contains(&byte).then(|| (byte - b'0') as i8)
}

/// `rc rc` form, as printed by the console.
#[inline]
pub fn format_coordinate_move(mv: ChessMove) -> String {
    mv.to_string()
}
