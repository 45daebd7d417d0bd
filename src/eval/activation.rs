//! Term 4: piece activation (§4.5) — a piece counts as "activated" once its
//! own pseudo-legal move count clears a per-kind threshold; the team bonus
//! rewards having *both* teammates with activated pieces, not just one.

use crate::types::{Color, PieceKind, Team, ALL_COLORS};

use super::{MoveCounts, Position};

const QUEEN_THRESHOLD: usize = 5;
const BISHOP_THRESHOLD: usize = 5;
const ROOK_THRESHOLD: usize = 5;
const KNIGHT_THRESHOLD: usize = 3;

const LINEAR_BONUS: i32 = 25;
const SYNERGY_BONUS: i32 = 15;

#[must_use]
pub fn score(position: &Position, counts: &MoveCounts) -> i32 {
    let ry = team_score(position, counts, Team::RedYellow);
    let bg = team_score(position, counts, Team::BlueGreen);
    ry - bg
}

fn team_score(position: &Position, counts: &MoveCounts, team: Team) -> i32 {
    let mut teammates = ALL_COLORS.iter().copied().filter(|c| c.team() == team);
    let n1 = activated_count(position, counts, teammates.next().expect("team has a color"));
    let n2 = activated_count(position, counts, teammates.next().expect("team has a second color"));
    LINEAR_BONUS * (n1 + n2) + SYNERGY_BONUS * n1 * n2
}

fn activated_count(position: &Position, counts: &MoveCounts, color: Color) -> i32 {
    let mut activated = 0;
    for (kind, square) in position.piece_lists(color).iter_in_order() {
        let threshold = match kind {
            PieceKind::Queen => QUEEN_THRESHOLD,
            PieceKind::Bishop => BISHOP_THRESHOLD,
            PieceKind::Rook => ROOK_THRESHOLD,
            PieceKind::Knight => KNIGHT_THRESHOLD,
            PieceKind::Pawn | PieceKind::King => continue,
        };
        if counts.at(square) < threshold {
            continue;
        }
        if kind == PieceKind::Knight && crate::position::movegen::is_back_rank(square, color) {
            continue;
        }
        activated += 1;
    }
    activated
}
