use crate::game_state::chess_rules::{CastleSide, KING_HOME_COL};
use crate::game_state::chess_types::{Color, EnPassantWindow, GameState, PieceKind, Square};
use crate::utils::algebraic::square_to_algebraic;

/// Serialize a position. Castling rights are read back from the `has_moved`
/// flags; the halfmove clock is not tracked and is always written as 0.
pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state);
    let side_to_move = match game_state.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game_state);
    let en_passant = generate_en_passant_field(game_state.en_passant);

    format!(
        "{} {} {} {} 0 {}",
        board, side_to_move, castling, en_passant, game_state.fullmove_number
    )
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for row in (0..8i8).rev() {
        let mut empty_count = 0u8;

        for col in 0..8i8 {
            if let Some(piece) = game_state.board.piece_at(Square::new(row, col)) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.symbol());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row > 0 {
            out.push('/');
        }
    }

    out
}

fn has_castling_right(game_state: &GameState, color: Color, side: CastleSide) -> bool {
    let row = color.back_rank();
    let unmoved = |col: i8, kind: PieceKind| {
        matches!(
            game_state.board.piece_at(Square::new(row, col)),
            Some(piece) if piece.color == color && piece.kind == kind && !piece.has_moved
        )
    };
    unmoved(KING_HOME_COL, PieceKind::King) && unmoved(side.rook_home_col(), PieceKind::Rook)
}

fn generate_castling_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for color in [Color::White, Color::Black] {
        for side in CastleSide::BOTH {
            if has_castling_right(game_state, color, side) {
                let letter = match side {
                    CastleSide::KingSide => 'K',
                    CastleSide::QueenSide => 'Q',
                };
                out.push(match color {
                    Color::White => letter,
                    Color::Black => letter.to_ascii_lowercase(),
                });
            }
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(window: Option<EnPassantWindow>) -> String {
    let Some(window) = window else {
        return "-".to_owned();
    };

    square_to_algebraic(window.target).unwrap_or_else(|_| "-".to_owned())
}
