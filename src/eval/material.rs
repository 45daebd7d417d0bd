//! Term 1: material (§4.5).

use crate::types::{Color, PieceKind, ALL_COLORS, NUM_PIECE_KINDS};

use super::Weights;
use crate::position::Position;

/// `Σ_RY piece_value − Σ_BG piece_value`, using `weights` in place of the
/// default [`crate::types::PIECE_VALUES`] table so the `piece_eval_*` UCI
/// options (§6.1) can retune material without touching the position's own
/// incrementally maintained sums.
#[must_use]
pub fn score(position: &Position, weights: &Weights) -> i32 {
    let mut total = 0;
    for &color in &ALL_COLORS {
        let sign = team_sign(color);
        for (kind, squares) in kinds_with_squares(position, color) {
            total += sign * weights.piece_value(kind) * squares as i32;
        }
    }
    total
}

#[must_use]
fn team_sign(color: Color) -> i32 {
    match color.team() {
        crate::types::Team::RedYellow => 1,
        crate::types::Team::BlueGreen => -1,
    }
}

/// Per-kind piece counts for `color`, as `(kind, count)` pairs.
fn kinds_with_squares(position: &Position, color: Color) -> [(PieceKind, usize); NUM_PIECE_KINDS] {
    let lists = position.piece_lists(color);
    [
        (PieceKind::Pawn, lists.of(PieceKind::Pawn).len()),
        (PieceKind::Knight, lists.of(PieceKind::Knight).len()),
        (PieceKind::Bishop, lists.of(PieceKind::Bishop).len()),
        (PieceKind::Rook, lists.of(PieceKind::Rook).len()),
        (PieceKind::Queen, lists.of(PieceKind::Queen).len()),
        (PieceKind::King, lists.of(PieceKind::King).len()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_setup_is_balanced() {
        let pos = Position::new_standard();
        assert_eq!(score(&pos, &Weights::default()), 0);
    }
}
