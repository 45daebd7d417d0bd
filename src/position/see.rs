//! Static Exchange Evaluation: the material outcome of repeatedly
//! recapturing on one square, always with the cheapest attacker (§4.8).

use crate::types::{piece_value, Move};

use super::attacks;
use super::Position;

/// Evaluates the capture sequence on `mv.to()` that starts by making `mv`.
/// Positive means the side making `mv` nets material; §4.8's "clamp with 0
/// on each recursion" models a side refusing a recapture that would lose
/// material for it.
#[must_use]
pub fn see_capture(position: &mut Position, mv: &Move) -> i32 {
    debug_assert!(mv.is_capture());
    let captured_value = mv.captured_value();
    let mover_value = piece_value(mv.promotion().unwrap_or_else(|| mv.mover().kind()));

    position.make(mv);
    let square = mv.to();
    let opponent_team = mv.mover_color().team().other();
    let own_team = mv.mover_color().team();

    let opp_attackers = sorted_attacker_values(position, square, opponent_team);
    let own_attackers = sorted_attacker_values(position, square, own_team);

    let result = captured_value - exchange(mover_value, &opp_attackers, 0, &own_attackers, 0);
    position.unmake();
    result
}

fn sorted_attacker_values(
    position: &Position,
    square: crate::types::Square,
    team: crate::types::Team,
) -> Vec<i32> {
    let mut values: Vec<i32> = attacks::attackers(position, square, team, attacks::MAX_ATTACKERS)
        .into_iter()
        .map(|a| piece_value(a.kind))
        .collect();
    values.sort_unstable();
    values
}

/// `value(me) = square_value - value(opp)`, clamped at 0, where
/// `square_value` is the value of the piece currently standing on the
/// target square (the one `attackers[index]` would capture) and the
/// recursion swaps sides with their cheapest piece first (§4.8).
fn exchange(square_value: i32, attackers: &[i32], index: usize, other_side: &[i32], other_index: usize) -> i32 {
    if index >= attackers.len() {
        return 0;
    }
    let gain = square_value - exchange(attackers[index], other_side, other_index, attackers, index + 1);
    gain.max(0)
}
