//! Term 3: mobility (§4.5) — pseudo-legal move counts, RY minus BG, times 5.

use crate::types::Team;

use super::MoveCounts;

const MOBILITY_WEIGHT: i32 = 5;

#[must_use]
pub fn score(counts: &MoveCounts) -> i32 {
    let ry = counts.total(Team::RedYellow) as i32;
    let bg = counts.total(Team::BlueGreen) as i32;
    (ry - bg) * MOBILITY_WEIGHT
}
