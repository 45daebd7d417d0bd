//! Term 2: piece-square scoring (§4.5) — a back-rank penalty and a
//! centrality bonus for major pieces, an advanced-toward-the-enemy-lines
//! bonus for pieces sitting within the nearest three ranks/files of either
//! enemy color's own back rank, and a rook-file advance bonus for pawns.
//!
//! The spec's "opponent-team's nearest-three rank/file" is read as: within
//! 3 of *either* enemy color's back rank, measured along that enemy's own
//! axis — the two enemy colors sit on the board's side edges relative to
//! either teammate's advance direction, so a piece pushing up the board
//! passes close to both of them before it ever nears its promotion rank.

use crate::types::{Color, PieceKind, ALL_COLORS, Team};

use crate::position::Position;

const BACK_RANK_PENALTY: i32 = -15;
const CENTRALITY_SCALE: f64 = 6.0;
const BOARD_CENTER: f64 = 6.5;
const ADVANCE_BONUS: i32 = 20;
const ADVANCE_PROXIMITY: i8 = 2; // within ranks/files 0,1,2 of the enemy back rank
const ROOK_PAWN_ADVANCE_BONUS: i32 = 10;

#[must_use]
pub fn score(position: &Position) -> i32 {
    let mut total = 0;
    for &color in &ALL_COLORS {
        let sign = team_sign(color);
        total += sign * color_score(position, color);
    }
    total
}

fn team_sign(color: Color) -> i32 {
    match color.team() {
        Team::RedYellow => 1,
        Team::BlueGreen => -1,
    }
}

fn color_score(position: &Position, color: Color) -> i32 {
    let mut total = 0;
    for (kind, square) in position.piece_lists(color).iter_in_order() {
        match kind {
            PieceKind::Pawn => total += rook_pawn_advance_bonus(color, square),
            PieceKind::King => {}
            _ => {
                total += back_rank_and_centrality(color, square);
                total += enemy_proximity_bonus(color, square);
            }
        }
    }
    total
}

fn back_rank_and_centrality(color: Color, square: crate::types::Square) -> i32 {
    let mut value = 0;
    if crate::position::movegen::is_back_rank(square, color) {
        value += BACK_RANK_PENALTY;
    }
    let distance = square.euclidean_distance(BOARD_CENTER, BOARD_CENTER);
    let centrality = (9.5 - distance) * CENTRALITY_SCALE;
    value += centrality.max(0.0).round() as i32;
    value
}

fn enemy_proximity_bonus(color: Color, square: crate::types::Square) -> i32 {
    let enemy_team = color.team().other();
    for &enemy in &ALL_COLORS {
        if enemy.team() != enemy_team {
            continue;
        }
        let enemy_back = crate::position::movegen::back_rank_line(enemy);
        let axis_value = crate::position::movegen::line_of(square, enemy);
        if (axis_value - enemy_back).abs() <= ADVANCE_PROXIMITY {
            return ADVANCE_BONUS;
        }
    }
    0
}

/// Bonus for a rook-file pawn (one sharing a file with one of its own
/// color's starting rook squares) that has advanced exactly one step off
/// its initial line.
fn rook_pawn_advance_bonus(color: Color, square: crate::types::Square) -> i32 {
    let spec = crate::position::movegen::castle_spec(color);
    let file = crate::position::movegen::file_coord(square, color);
    let kingside_file = crate::position::movegen::file_coord(spec.rook_from_kingside, color);
    let queenside_file = crate::position::movegen::file_coord(spec.rook_from_queenside, color);
    if file != kingside_file && file != queenside_file {
        return 0;
    }
    let initial = crate::position::movegen::pawn_initial_line(color);
    let line = crate::position::movegen::line_of(square, color);
    let (dr, dc) = crate::position::movegen::pawn_advance_direction(color);
    let step = if dr != 0 { dr } else { dc };
    if line == initial + step {
        ROOK_PAWN_ADVANCE_BONUS
    } else {
        0
    }
}
