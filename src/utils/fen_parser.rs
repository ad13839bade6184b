//! FEN-to-GameState parser.
//!
//! Builds a `GameState` from a Forsyth-Edwards Notation string. Castling rights
//! have no field of their own here: they are folded into the `has_moved` flags
//! of the kings and corner rooks, which is all the castling check looks at.
//! The halfmove clock is validated and dropped. The move counters may be
//! omitted altogether, in which case the fullmove number defaults to 1.

use crate::chess_errors::FenError;
use crate::game_state::chess_rules::{CastleSide, KING_HOME_COL};
use crate::game_state::chess_types::{Color, EnPassantWindow, GameState, Piece, PieceKind, Square};
use crate::utils::algebraic::algebraic_to_square;

/// One flag per (color, side), indexed by `Color::index()` then
/// king side / queen side.
type CastlingFlags = [[bool; 2]; 2];

pub fn parse_fen(fen: &str) -> Result<GameState, FenError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(FenError::MissingField("board layout"))?;
    let side_part = parts.next().ok_or(FenError::MissingField("side to move"))?;
    let castling_part = parts.next().ok_or(FenError::MissingField("castling rights"))?;
    let en_passant_part = parts.next().ok_or(FenError::MissingField("en-passant square"))?;
    let halfmove_part = parts.next();
    let fullmove_part = parts.next();

    if halfmove_part.is_some() && fullmove_part.is_none() {
        return Err(FenError::MissingField("fullmove number"));
    }
    if parts.next().is_some() {
        return Err(FenError::TrailingFields);
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    validate_kings(&game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;

    let castling = parse_castling_rights(castling_part)?;
    apply_moved_flags(&mut game_state, &castling);

    game_state.en_passant = parse_en_passant(en_passant_part, &game_state)?;

    if let (Some(halfmove), Some(fullmove)) = (halfmove_part, fullmove_part) {
        halfmove
            .parse::<u16>()
            .map_err(|_| FenError::Counter(halfmove.to_owned()))?;
        game_state.fullmove_number = fullmove
            .parse::<u16>()
            .map_err(|_| FenError::Counter(fullmove.to_owned()))?;
    }

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = 7 - fen_rank_idx as i8;
        let rank = 8 - fen_rank_idx;
        let mut col = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::PieceChar(ch));
                }
                col += empty_count as i8;
                if col > 8 {
                    return Err(FenError::RankWidth { rank });
                }
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(FenError::PieceChar(ch))?;
            if col >= 8 {
                return Err(FenError::RankWidth { rank });
            }

            game_state.board.place(Square::new(row, col), piece);
            col += 1;
        }

        if col != 8 {
            return Err(FenError::RankWidth { rank });
        }
    }

    Ok(())
}

fn validate_kings(game_state: &GameState) -> Result<(), FenError> {
    for color in [Color::White, Color::Black] {
        let kings = game_state
            .board
            .pieces_of(color)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(FenError::KingCount(color));
        }
    }
    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::SideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingFlags, FenError> {
    let mut rights: CastlingFlags = [[false; 2]; 2];
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        let (color, side) = match ch {
            'K' => (Color::White, 0),
            'Q' => (Color::White, 1),
            'k' => (Color::Black, 0),
            'q' => (Color::Black, 1),
            _ => return Err(FenError::CastlingChar(ch)),
        };
        rights[color.index()][side] = true;
    }

    Ok(rights)
}

/// Derive `has_moved` for every piece from its square and the castling rights.
///
/// Pawns off their start row have moved. A king is unmoved only on its home
/// square with at least one right left; a rook only on the corner its right
/// names. Other pieces never influence legality through the flag.
fn apply_moved_flags(game_state: &mut GameState, rights: &CastlingFlags) {
    for square in Square::all() {
        let Some(piece) = game_state.board.piece_at_mut(square) else {
            continue;
        };
        let color_rights = rights[piece.color.index()];
        let back_rank = piece.color.back_rank();

        piece.has_moved = match piece.kind {
            PieceKind::Pawn => square.row != piece.color.pawn_start_row(),
            PieceKind::King => {
                let at_home = square == Square::new(back_rank, KING_HOME_COL);
                !(at_home && (color_rights[0] || color_rights[1]))
            }
            PieceKind::Rook => {
                let unmoved = CastleSide::BOTH.iter().enumerate().any(|(idx, side)| {
                    color_rights[idx] && square == Square::new(back_rank, side.rook_home_col())
                });
                !unmoved
            }
            _ => false,
        };
    }
}

/// The target square must sit behind a pawn of the side that just moved.
fn parse_en_passant(
    en_passant_part: &str,
    game_state: &GameState,
) -> Result<Option<EnPassantWindow>, FenError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_square(en_passant_part)
        .map_err(|_| FenError::EnPassant(en_passant_part.to_owned()))?;

    let pawn_color = game_state.side_to_move.opposite();
    let expected_row = pawn_color.pawn_start_row() + pawn_color.pawn_direction();
    if target.row != expected_row {
        return Err(FenError::EnPassant(en_passant_part.to_owned()));
    }

    let captured = target.offset(pawn_color.pawn_direction(), 0);
    match game_state.board.piece_at(captured) {
        Some(piece) if piece.color == pawn_color && piece.kind == PieceKind::Pawn => {
            Ok(Some(EnPassantWindow {
                target,
                captured,
                pawn_color,
            }))
        }
        _ => Err(FenError::EnPassant(en_passant_part.to_owned())),
    }
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    PieceKind::from_letter(ch).map(|kind| Piece::new(color, kind))
}
