//! UCI-exposed engine tunables (§6.1, §10.3): the options a GUI can set with
//! `setoption`, kept separate from [`super::super::search::SearchParams`]
//! because these are user-facing knobs rather than internal heuristic
//! constants.

use crate::eval::Weights;
use crate::types::PieceKind;

/// Default transposition table size, in megabytes.
pub const DEFAULT_HASH_MB: usize = 64;

/// `EngineOptions` (§10.3): `hash_mb`, `threads`, `show_curr_line`, and the
/// five `piece_eval_*` centipawn overrides, mirroring the option set
/// `setoption` can change (§6.1).
#[derive(Clone, Debug, PartialEq)]
pub struct EngineOptions {
    pub hash_mb: usize,
    pub threads: usize,
    pub show_curr_line: bool,
    pub piece_eval_pawn: i32,
    pub piece_eval_knight: i32,
    pub piece_eval_bishop: i32,
    pub piece_eval_rook: i32,
    pub piece_eval_queen: i32,
}

impl Default for EngineOptions {
    fn default() -> EngineOptions {
        let weights = Weights::default();
        EngineOptions {
            hash_mb: DEFAULT_HASH_MB,
            threads: 1,
            show_curr_line: false,
            piece_eval_pawn: weights.piece_value(PieceKind::Pawn),
            piece_eval_knight: weights.piece_value(PieceKind::Knight),
            piece_eval_bishop: weights.piece_value(PieceKind::Bishop),
            piece_eval_rook: weights.piece_value(PieceKind::Rook),
            piece_eval_queen: weights.piece_value(PieceKind::Queen),
        }
    }
}

impl EngineOptions {
    /// Builds the [`Weights`] the evaluator should use, folding in the
    /// piece-value overrides. The king's value is never overridden: it has
    /// no `piece_eval_king` option (§6.1 lists only the other five kinds).
    #[must_use]
    pub fn weights(&self) -> Weights {
        Weights::default()
            .with_piece_value(PieceKind::Pawn, self.piece_eval_pawn)
            .with_piece_value(PieceKind::Knight, self.piece_eval_knight)
            .with_piece_value(PieceKind::Bishop, self.piece_eval_bishop)
            .with_piece_value(PieceKind::Rook, self.piece_eval_rook)
            .with_piece_value(PieceKind::Queen, self.piece_eval_queen)
    }

    /// Applies a `setoption name <N> value <V>` pair; returns `false` if `name`
    /// isn't one of the options this engine exposes (§6.1).
    #[must_use]
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        match name {
            "Hash" => {
                let Ok(mb) = value.parse::<usize>() else { return false };
                self.hash_mb = mb;
            }
            "Threads" => {
                let Ok(n) = value.parse::<usize>() else { return false };
                self.threads = n.max(1);
            }
            "UCI_ShowCurrLine" => {
                self.show_curr_line = value.eq_ignore_ascii_case("true");
            }
            "piece_eval_pawn" => self.piece_eval_pawn = value.parse().unwrap_or(self.piece_eval_pawn),
            "piece_eval_knight" => {
                self.piece_eval_knight = value.parse().unwrap_or(self.piece_eval_knight);
            }
            "piece_eval_bishop" => {
                self.piece_eval_bishop = value.parse().unwrap_or(self.piece_eval_bishop);
            }
            "piece_eval_rook" => self.piece_eval_rook = value.parse().unwrap_or(self.piece_eval_rook),
            "piece_eval_queen" => {
                self.piece_eval_queen = value.parse().unwrap_or(self.piece_eval_queen);
            }
            _ => return false,
        }
        true
    }

    /// `option name ...` lines for the `uci` reply (§6.1).
    #[must_use]
    pub fn uci_option_lines() -> Vec<String> {
        vec![
            "option name Hash type spin default 64 min 1 max 65536".to_string(),
            "option name Threads type spin default 1 min 1 max 256".to_string(),
            "option name UCI_ShowCurrLine type check default false".to_string(),
            format!(
                "option name piece_eval_pawn type spin default {} min 1 max 10000",
                Weights::default().piece_value(PieceKind::Pawn)
            ),
            format!(
                "option name piece_eval_knight type spin default {} min 1 max 10000",
                Weights::default().piece_value(PieceKind::Knight)
            ),
            format!(
                "option name piece_eval_bishop type spin default {} min 1 max 10000",
                Weights::default().piece_value(PieceKind::Bishop)
            ),
            format!(
                "option name piece_eval_rook type spin default {} min 1 max 10000",
                Weights::default().piece_value(PieceKind::Rook)
            ),
            format!(
                "option name piece_eval_queen type spin default {} min 1 max 10000",
                Weights::default().piece_value(PieceKind::Queen)
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classical_piece_values() {
        let opts = EngineOptions::default();
        let weights = opts.weights();
        assert_eq!(weights.piece_value(PieceKind::Pawn), opts.piece_eval_pawn);
        assert_eq!(weights.piece_value(PieceKind::Queen), opts.piece_eval_queen);
    }

    #[test]
    fn set_updates_known_options_and_rejects_unknown_ones() {
        let mut opts = EngineOptions::default();
        assert!(opts.set("Hash", "128"));
        assert_eq!(opts.hash_mb, 128);
        assert!(opts.set("Threads", "4"));
        assert_eq!(opts.threads, 4);
        assert!(!opts.set("NotAnOption", "1"));
    }

    #[test]
    fn threads_below_one_is_clamped_to_one() {
        let mut opts = EngineOptions::default();
        assert!(opts.set("Threads", "0"));
        assert_eq!(opts.threads, 1);
    }
}
