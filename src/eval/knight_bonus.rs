//! Term 6: knight-near-enemy-king bonus (§4.5) — a flat bonus per knight
//! that can reach either enemy king's square in exactly two knight moves,
//! using a precomputed two-hop reachability table (pure geometry, ignoring
//! occupancy, since a knight's path can't be blocked).

use once_cell::sync::Lazy;

use crate::types::{Color, PieceKind, Square, Team, ALL_COLORS, ALL_SQUARES, NUM_LEGAL_SQUARES};

use super::Position;

const KNIGHT_REACH_BONUS: i32 = 100;

const KNIGHT_OFFSETS: [(i8, i8); 8] =
    [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];

/// `reachable[a][b]` is true if a knight on legal square `a` can reach legal
/// square `b` in exactly two knight jumps (through any intermediate legal
/// square, occupied or not).
static TWO_HOP_REACHABLE: Lazy<Vec<Vec<bool>>> = Lazy::new(build_table);

fn build_table() -> Vec<Vec<bool>> {
    let mut one_hop = vec![Vec::new(); NUM_LEGAL_SQUARES];
    for (i, &from) in ALL_SQUARES.iter().enumerate() {
        for &(dr, dc) in &KNIGHT_OFFSETS {
            let to = from.relative(dr, dc);
            if to.is_present() {
                one_hop[i].push(to.legal_index());
            }
        }
    }

    let mut two_hop = vec![vec![false; NUM_LEGAL_SQUARES]; NUM_LEGAL_SQUARES];
    for i in 0..NUM_LEGAL_SQUARES {
        for &mid in &one_hop[i] {
            for &j in &one_hop[mid] {
                two_hop[i][j] = true;
            }
        }
    }
    two_hop
}

#[must_use]
fn reachable_in_two(from: Square, to: Square) -> bool {
    TWO_HOP_REACHABLE[from.legal_index()][to.legal_index()]
}

#[must_use]
pub fn score(position: &Position) -> i32 {
    let ry = team_bonus(position, Team::RedYellow);
    let bg = team_bonus(position, Team::BlueGreen);
    ry - bg
}

fn team_bonus(position: &Position, team: Team) -> i32 {
    let mut total = 0;
    for &color in ALL_COLORS.iter().filter(|c| c.team() == team) {
        for &knight_sq in position.piece_lists(color).of(PieceKind::Knight) {
            if enemy_king_in_range(position, color, knight_sq) {
                total += KNIGHT_REACH_BONUS;
            }
        }
    }
    total
}

fn enemy_king_in_range(position: &Position, color: Color, knight_sq: Square) -> bool {
    ALL_COLORS.iter().filter(|c| c.team() != color.team()).any(|&enemy| {
        let king_sq = position.king_square(enemy);
        king_sq.is_present() && reachable_in_two(knight_sq, king_sq)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_can_return_to_its_own_square_in_two_hops() {
        // b1-a3-b1 (or any such round trip) is a legal pair of knight jumps
        // from any interior square with room to jump.
        let center = Square::new(6, 6);
        assert!(reachable_in_two(center, center));
    }

    #[test]
    fn standard_setup_has_no_immediate_knight_bonus() {
        let pos = Position::new_standard();
        assert_eq!(score(&pos), 0);
    }
}
