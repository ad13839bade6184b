//! Plain-text board renderer for the console driver and diagnostics.
//!
//! Rows are printed from 7 down to 0 with their index on the left, and the
//! column indices run along the bottom, matching the `rowcol` move notation.

use crate::game_state::chess_types::{GameState, Square};

/// Uppercase for White, lowercase for Black, `-` for an empty square.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    for row in (0..8i8).rev() {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');

        for col in 0..8i8 {
            let symbol = game_state
                .board
                .piece_at(Square::new(row, col))
                .map_or('-', |piece| piece.symbol());
            out.push(symbol);

            if col < 7 {
                out.push(' ');
            }
        }

        out.push('\n');
    }

    out.push_str("  0 1 2 3 4 5 6 7");

    out
}
