//! Static evaluator (§4.5): seven scoring terms, each computed from the RY
//! perspective and summed, then negated if the side to move is on BG — the
//! same perspective flip the searcher's negamax relies on everywhere else.

mod activation;
mod imbalance;
mod king_safety;
mod knight_bonus;
mod material;
mod mobility;
mod pst;

use crate::constants::MATE;
use crate::position::make_unmake::captured_a_king;
use crate::position::movegen::generate_pseudo_legal_for;
use crate::position::Position;
use crate::types::{
    Color, MoveList, PieceKind, Square, Team, ALL_COLORS, NUM_LEGAL_SQUARES, NUM_PIECE_KINDS,
    PIECE_VALUES,
};

/// The king-safety term's documented bound (§4.5): lazy evaluation may skip
/// computing it once the partial sum is far enough from the search window
/// that no value within `±KING_SAFETY_BOUND` could change the outcome.
const KING_SAFETY_BOUND: i32 = 600;

/// Per-kind centipawn overrides (§10.3 `piece_eval_*` UCI options), in place
/// of the fixed [`PIECE_VALUES`] table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weights {
    piece_values: [i32; NUM_PIECE_KINDS],
}

impl Default for Weights {
    fn default() -> Weights {
        Weights { piece_values: PIECE_VALUES }
    }
}

impl Weights {
    #[inline]
    #[must_use]
    pub fn piece_value(&self, kind: PieceKind) -> i32 {
        self.piece_values[kind.index()]
    }

    #[must_use]
    pub fn with_piece_value(mut self, kind: PieceKind, value: i32) -> Weights {
        self.piece_values[kind.index()] = value;
        self
    }
}

/// Pseudo-legal move counts for all four colors on one position, shared by
/// the mobility and activation terms so each only generates moves once.
pub struct MoveCounts {
    per_square: [u16; NUM_LEGAL_SQUARES],
    totals: [u32; 4],
}

impl MoveCounts {
    #[must_use]
    pub fn compute(position: &Position) -> MoveCounts {
        let mut per_square = [0u16; NUM_LEGAL_SQUARES];
        let mut totals = [0u32; 4];
        let mut moves = MoveList::new();
        for &color in &ALL_COLORS {
            moves = MoveList::new();
            generate_pseudo_legal_for(position, color, &mut moves);
            totals[color.index()] = moves.len() as u32;
            for mv in &moves {
                per_square[mv.from().legal_index()] += 1;
            }
        }
        MoveCounts { per_square, totals }
    }

    /// Pseudo-legal move count for whichever piece sits on `square`.
    #[inline]
    #[must_use]
    pub fn at(&self, square: Square) -> usize {
        self.per_square[square.legal_index()] as usize
    }

    /// Summed pseudo-legal move count across a team's two colors.
    #[must_use]
    pub fn total(&self, team: Team) -> u32 {
        ALL_COLORS.iter().filter(|c| c.team() == team).map(|c| self.totals[c.index()]).sum()
    }
}

/// +1 for Red/Yellow, -1 for Blue/Green — the perspective every term is
/// computed in before the final side-to-move flip (§4.5).
#[inline]
#[must_use]
fn team_sign(color: Color) -> i32 {
    match color.team() {
        Team::RedYellow => 1,
        Team::BlueGreen => -1,
    }
}

/// A pluggable position scorer, so a future learned evaluator could sit
/// behind the same interface the searcher calls (§10.6) without the search
/// engine depending on [`ClassicalEvaluator`] directly.
pub trait Evaluator {
    /// Side-to-move-relative centipawn score for `position`, given the
    /// caller's current alpha/beta window (for the lazy-evaluation
    /// early-return, §4.5).
    fn evaluate(&self, position: &Position, alpha: i32, beta: i32) -> i32;
}

/// The evaluator specified in §4.5: material, piece-square, mobility,
/// activation, king safety, knight-near-enemy-king bonus, and team
/// imbalance.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassicalEvaluator {
    weights: Weights,
}

impl ClassicalEvaluator {
    #[must_use]
    pub fn new(weights: Weights) -> ClassicalEvaluator {
        ClassicalEvaluator { weights }
    }
}

impl Evaluator for ClassicalEvaluator {
    fn evaluate(&self, position: &Position, alpha: i32, beta: i32) -> i32 {
        evaluate(position, alpha, beta, &self.weights)
    }
}

/// Implements §4.5 end to end: the game-over shortcut, the six
/// always-computed terms, the lazy-evaluation early return, and the
/// king-safety term, each summed from the RY perspective and flipped to be
/// relative to `position`'s side to move.
#[must_use]
pub fn evaluate(position: &Position, alpha: i32, beta: i32, weights: &Weights) -> i32 {
    if let Some(last) = position.move_stack().last() {
        if captured_a_king(last) {
            let sign = team_sign(last.mover_color());
            return (sign * MATE) * team_sign(position.turn());
        }
    }

    let counts = MoveCounts::compute(position);

    let partial = material::score(position, weights)
        + pst::score(position)
        + mobility::score(&counts)
        + activation::score(position, &counts)
        + knight_bonus::score(position)
        + imbalance::score(position);

    let sign = team_sign(position.turn());
    let partial_stm = partial * sign;

    if partial_stm + KING_SAFETY_BOUND < alpha || partial_stm - KING_SAFETY_BOUND > beta {
        return partial_stm;
    }

    let total = partial + king_safety::score(position);
    total * sign
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_setup_is_dead_even() {
        let pos = Position::new_standard();
        let weights = Weights::default();
        assert_eq!(evaluate(&pos, -MATE, MATE, &weights), 0);
    }

    #[test]
    fn lazy_window_outside_partial_still_returns_a_value_outside_the_window() {
        let pos = Position::new_standard();
        let weights = Weights::default();
        // A window far above any plausible score forces the lazy early
        // return; the result must still fail low of it.
        let score = evaluate(&pos, MATE - 10, MATE - 5, &weights);
        assert!(score < MATE - 10);
    }

    #[test]
    fn king_capture_is_scored_as_mate_from_the_mover_team_perspective() {
        use crate::types::{CastlingRights, Color, Move, Piece, PieceKind, Square};

        let mut pos = Position::empty();
        let from = Square::new(7, 7);
        let to = Square::new(7, 8);
        pos.place_piece(from, Color::Red, PieceKind::Queen);
        pos.place_piece(to, Color::Yellow, PieceKind::King);
        pos.place_piece(Square::new(3, 3), Color::Blue, PieceKind::King);
        pos.place_piece(Square::new(10, 10), Color::Green, PieceKind::King);

        let rights = [CastlingRights::ABSENT; 4];
        let mv = Move::new(
            from,
            to,
            Piece::new(Color::Red, PieceKind::Queen),
            Some(Piece::new(Color::Yellow, PieceKind::King)),
            None,
            None,
            None,
            rights,
            rights,
        );
        pos.make(&mv);

        let weights = Weights::default();
        // Red (RY) just captured Yellow's king; Blue is now to move, on BG,
        // so the shortcut must report a maximally negative score for Blue.
        assert_eq!(pos.turn(), Color::Blue);
        assert_eq!(evaluate(&pos, -MATE, MATE, &weights), -MATE);
    }
}
