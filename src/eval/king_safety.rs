//! Term 5: king safety (§4.5) — a pawn-shield/back-rank shield penalty plus
//! a king-zone attacker tally, weighted by how many attackers are massing
//! and further penalized when they come from more than one enemy color.

use crate::types::{Color, PieceKind, Square, Team, ALL_COLORS};

use super::Position;
use crate::position::{attacks, movegen};

const SHIELD_MISSING_PENALTY: i32 = 30;
const OFF_BACK_RANK_PENALTY: i32 = 40;
const BOTH_PENALTY: i32 = 20;
const MULTI_COLOR_ATTACK_PENALTY: i32 = 150;

const ATTACKER_VALUE: [i32; 6] = [25, 30, 30, 40, 50, 0]; // Pawn,Knight,Bishop,Rook,Queen,King

const ATTACK_WEIGHT: [i32; 9] = [0, 50, 100, 120, 150, 200, 250, 300, 400];

const KING_OFFSETS: [(i8, i8); 8] =
    [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

#[must_use]
pub fn score(position: &Position) -> i32 {
    let ry = color_safety(position, Color::Red) + color_safety(position, Color::Yellow);
    let bg = color_safety(position, Color::Blue) + color_safety(position, Color::Green);
    ry - bg
}

fn color_safety(position: &Position, color: Color) -> i32 {
    let king_sq = position.king_square(color);
    if king_sq.is_none() {
        return 0;
    }
    -(shield_penalty(position, color, king_sq) + zone_attack_penalty(position, color, king_sq))
}

fn shield_direction(color: Color) -> (i8, i8) {
    let (dr, dc) = movegen::pawn_advance_direction(color);
    (-dr, -dc)
}

fn shield_penalty(position: &Position, color: Color, king_sq: Square) -> i32 {
    let (dr, dc) = shield_direction(color);
    let row_axis = dr == 0; // perpendicular axis is rows when the shield direction is purely columnar
    let shield_squares = if row_axis {
        [king_sq.relative(-1, dc), king_sq.relative(0, dc), king_sq.relative(1, dc)]
    } else {
        [king_sq.relative(dr, -1), king_sq.relative(dr, 0), king_sq.relative(dr, 1)]
    };
    let shielded = shield_squares
        .iter()
        .filter(|&&sq| {
            sq.is_present() && {
                let p = position.piece_at(sq);
                p.is_present() && p.color() == color
            }
        })
        .count();

    let missing_shield = shielded < 3;
    let off_back_rank = !movegen::is_back_rank(king_sq, color);

    let mut penalty = 0;
    if missing_shield {
        penalty += SHIELD_MISSING_PENALTY;
    }
    if off_back_rank {
        penalty += OFF_BACK_RANK_PENALTY;
    }
    if missing_shield && off_back_rank {
        penalty += BOTH_PENALTY;
    }
    penalty
}

fn zone_attack_penalty(position: &Position, color: Color, king_sq: Square) -> i32 {
    let enemy_team = color.team().other();
    let mut value_sum = 0i32;
    let mut attacker_count = 0usize;
    let mut colors_seen = [false; 4];

    for &(dr, dc) in &KING_OFFSETS {
        let zone_sq = king_sq.relative(dr, dc);
        if zone_sq.is_none() || movegen::is_back_rank(zone_sq, color) {
            continue;
        }
        for attacker in attacks::attackers(position, zone_sq, enemy_team, attacks::MAX_ATTACKERS) {
            value_sum += ATTACKER_VALUE[attacker.kind.index()];
            attacker_count += 1;
            colors_seen[attacker.color.index()] = true;
        }
    }

    if attacker_count == 0 {
        return 0;
    }

    let weight = ATTACK_WEIGHT[attacker_count.min(ATTACK_WEIGHT.len() - 1)];
    let mut penalty = value_sum * weight / 100;

    let distinct_colors = ALL_COLORS.iter().filter(|c| colors_seen[c.index()]).count();
    if distinct_colors >= 2 {
        penalty += MULTI_COLOR_ATTACK_PENALTY;
    }
    penalty
}

const _: () = assert!(matches!(PieceKind::King as u8, 5));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_setup_has_no_zone_attackers() {
        let pos = Position::new_standard();
        for &color in &ALL_COLORS {
            let king_sq = pos.king_square(color);
            assert_eq!(zone_attack_penalty(&pos, color, king_sq), 0);
        }
    }
}
