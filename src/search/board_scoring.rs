//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.
//! Scores are absolute: positive favors White whoever is to move.

use std::fmt;
use std::str::FromStr;

use crate::game_state::chess_types::{Color, GameState, PieceKind};
use crate::move_generation::legal_move_generator::generate_legal_moves;

/// Magnitude of a checkmate score, before the ply adjustment.
pub const MATE_SCORE: i32 = 100_000;

pub trait BoardScorer: Send + Sync {
    /// Score from White's perspective.
    fn score(&self, game_state: &GameState) -> i32;
}

#[inline]
pub const fn piece_value(piece: PieceKind) -> i32 {
    match piece {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

fn material_balance_white_minus_black(game_state: &GameState) -> i32 {
    game_state
        .board
        .pieces()
        .map(|(_, piece)| piece.color.sign() * piece_value(piece.kind))
        .sum()
}

/// Signed piece values only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        material_balance_white_minus_black(game_state)
    }
}

/// Material plus one point per legal move of the side to move, signed by that
/// side. Enumerating moves makes this far more expensive than the material
/// count alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialMobilityScorer;

impl BoardScorer for MaterialMobilityScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let mobility = generate_legal_moves(game_state).len() as i32;
        material_balance_white_minus_black(game_state) + game_state.side_to_move.sign() * mobility
    }
}

/// Runtime choice of scorer, selected by the `Evaluation` engine option and the
/// `--evaluation` command-line flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Evaluation {
    #[default]
    MaterialMobility,
    Material,
}

impl Evaluation {
    pub const fn name(self) -> &'static str {
        match self {
            Evaluation::MaterialMobility => "MaterialMobility",
            Evaluation::Material => "Material",
        }
    }
}

impl BoardScorer for Evaluation {
    fn score(&self, game_state: &GameState) -> i32 {
        match self {
            Evaluation::MaterialMobility => MaterialMobilityScorer.score(game_state),
            Evaluation::Material => MaterialScorer.score(game_state),
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Evaluation {
    type Err = String;

    /// Case-insensitive; dashes and underscores are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|ch| *ch != '-' && *ch != '_')
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "materialmobility" => Ok(Evaluation::MaterialMobility),
            "material" => Ok(Evaluation::Material),
            _ => Err(format!("unknown evaluation: {s}")),
        }
    }
}

/// Mate score for `mated`, shrunk by `ply` so nearer mates dominate.
#[inline]
pub fn mate_score(mated: Color, ply: u8) -> i32 {
    -mated.sign() * (MATE_SCORE - i32::from(ply))
}

#[cfg(test)]
mod tests {
    use super::{mate_score, BoardScorer, Evaluation, MaterialMobilityScorer, MaterialScorer};
    use crate::game_state::chess_types::{Color, GameState};
    use crate::move_generation::legal_move_apply::apply_notation;

    #[test]
    fn start_position_is_balanced_plus_mobility() {
        let game = GameState::new_game();
        assert_eq!(MaterialScorer.score(&game), 0);
        assert_eq!(MaterialMobilityScorer.score(&game), 20);

        let mut black_to_move = game;
        apply_notation(&mut black_to_move, "14 34").expect("e2e4 should be legal");
        assert_eq!(MaterialMobilityScorer.score(&black_to_move), -20);
    }

    #[test]
    fn material_counts_every_piece_but_kings() {
        let game =
            GameState::from_fen("4k3/8/8/8/8/8/PPP5/RN2K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(MaterialScorer.score(&game), 3 * 100 + 500 + 320);

        let game = GameState::from_fen("3qk3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(MaterialScorer.score(&game), -900);
    }

    #[test]
    fn mate_scores_are_signed_against_the_mated_side() {
        assert_eq!(mate_score(Color::White, 0), -100_000);
        assert_eq!(mate_score(Color::Black, 3), 99_997);
    }

    #[test]
    fn evaluation_names_parse() {
        assert_eq!("material-mobility".parse(), Ok(Evaluation::MaterialMobility));
        assert_eq!("MaterialMobility".parse(), Ok(Evaluation::MaterialMobility));
        assert_eq!("material".parse(), Ok(Evaluation::Material));
        assert!("positional".parse::<Evaluation>().is_err());
    }
}
