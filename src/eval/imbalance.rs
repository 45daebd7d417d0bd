//! Term 7: material imbalance between teammates (§4.5) — a team with
//! lopsided major-piece counts between its two players (e.g. one player
//! stripped of rooks while the other hoards them) is worse off than the
//! same total material split evenly, since the weaker player becomes a
//! liability the team must defend.

use crate::types::{Color, PieceKind};

use super::Position;

/// Monotone-decreasing penalty by `|major_a - major_b|`, clamped to the
/// last entry for larger gaps (§4.5).
const PENALTY_BY_GAP: [i32; 7] = [0, -25, -50, -150, -300, -350, -400];

const MAJOR_KINDS: [PieceKind; 4] =
    [PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen];

#[must_use]
pub fn score(position: &Position) -> i32 {
    let ry = penalty_for(position, Color::Red, Color::Yellow);
    let bg = penalty_for(position, Color::Blue, Color::Green);
    ry - bg
}

fn penalty_for(position: &Position, a: Color, b: Color) -> i32 {
    let gap = (major_count(position, a) - major_count(position, b)).unsigned_abs() as usize;
    PENALTY_BY_GAP[gap.min(PENALTY_BY_GAP.len() - 1)]
}

fn major_count(position: &Position, color: Color) -> i32 {
    MAJOR_KINDS.iter().map(|&kind| position.piece_lists(color).of(kind).len() as i32).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_setup_has_no_imbalance() {
        let pos = Position::new_standard();
        assert_eq!(score(&pos), 0);
    }
}
