//! "Is square attacked", "attackers of square", and the check-detection
//! heuristic used for move ordering and extensions (§4.3).

use crate::types::{Color, Move, PieceKind, Square, Team};

use super::Position;

/// Maximum attackers [`attackers`] will collect before stopping (§4.3, used
/// by SEE: at most one attacker per opposing piece kind realistically
/// matters, but the spec leaves the limit to the caller).
pub const MAX_ATTACKERS: usize = 16;

const ROOK_RAYS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_RAYS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const KNIGHT_OFFSETS: [(i8, i8); 8] =
    [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];
const KING_OFFSETS: [(i8, i8); 8] =
    [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

/// A piece (at a square) found to attack the queried location.
#[derive(Clone, Copy, Debug)]
pub struct Attacker {
    pub square: Square,
    pub kind: PieceKind,
    pub color: Color,
}

/// True if any piece of `by_team` attacks `square`.
#[must_use]
pub fn is_attacked(position: &Position, square: Square, by_team: Team) -> bool {
    attacker_exists_on_rays(position, square, by_team, &ROOK_RAYS, PieceKind::Rook)
        || attacker_exists_on_rays(position, square, by_team, &BISHOP_RAYS, PieceKind::Bishop)
        || attacker_exists_at_offsets(position, square, by_team, &KNIGHT_OFFSETS, PieceKind::Knight)
        || pawn_attacker_exists(position, square, by_team)
        || attacker_exists_at_offsets(position, square, by_team, &KING_OFFSETS, PieceKind::King)
}

fn ray_hit(position: &Position, square: Square, by_team: Team, dr: i8, dc: i8, slider: PieceKind) -> bool {
    let mut to = square.relative(dr, dc);
    while to.is_present() {
        let occupant = position.piece_at(to);
        if occupant.is_present() {
            return occupant.team() == by_team
                && (occupant.kind() == slider || occupant.kind() == PieceKind::Queen);
        }
        to = to.relative(dr, dc);
    }
    false
}

fn attacker_exists_on_rays(
    position: &Position,
    square: Square,
    by_team: Team,
    rays: &[(i8, i8)],
    slider: PieceKind,
) -> bool {
    rays.iter().any(|&(dr, dc)| ray_hit(position, square, by_team, dr, dc, slider))
}

fn attacker_exists_at_offsets(
    position: &Position,
    square: Square,
    by_team: Team,
    offsets: &[(i8, i8)],
    kind: PieceKind,
) -> bool {
    offsets.iter().any(|&(dr, dc)| {
        let to = square.relative(dr, dc);
        to.is_present() && {
            let occupant = position.piece_at(to);
            occupant.is_present() && occupant.team() == by_team && occupant.kind() == kind
        }
    })
}

/// A pawn of color `c` attacks `square` if `square` lies on `c`'s
/// forward-diagonal from the pawn's location; equivalently, the pawn sits
/// one step behind `square` along `c`'s advance axis, on either diagonal.
fn pawn_attacker_exists(position: &Position, square: Square, by_team: Team) -> bool {
    for &row_offset in &[-1i8, 1i8] {
        for &col_offset in &[-1i8, 1i8] {
            let candidate = Square::new(square.row() + row_offset, square.col() + col_offset);
            if candidate.is_none() {
                continue;
            }
            let occupant = position.piece_at(candidate);
            if occupant.is_none() || occupant.team() != by_team || occupant.kind() != PieceKind::Pawn {
                continue;
            }
            if pawn_attacks_from_offsets(occupant.color(), row_offset, col_offset) {
                return true;
            }
        }
    }
    false
}

/// Whether a pawn of `color`, sitting at `(row_offset, col_offset)` relative
/// to the target square, attacks that target. Each color only cares about
/// the offset along its own advance axis (§4.3): Red/Yellow check the row
/// offset, Blue/Green the column offset, matching
/// `Board::GetAttackers`'s per-color branch in the original.
fn pawn_attacks_from_offsets(color: Color, row_offset: i8, col_offset: i8) -> bool {
    match color {
        Color::Red => row_offset == 1,
        Color::Yellow => row_offset == -1,
        Color::Blue => col_offset == -1,
        Color::Green => col_offset == 1,
    }
}

/// Collects up to `limit` attackers of `square` belonging to `by_team`, in
/// the fixed order rooks/queens, bishops/queens, knights, pawns, king (§4.3).
pub fn attackers(position: &Position, square: Square, by_team: Team, limit: usize) -> Vec<Attacker> {
    let mut out = Vec::with_capacity(limit.min(MAX_ATTACKERS));
    collect_ray_attackers(position, square, by_team, &ROOK_RAYS, PieceKind::Rook, limit, &mut out);
    collect_ray_attackers(position, square, by_team, &BISHOP_RAYS, PieceKind::Bishop, limit, &mut out);
    collect_offset_attackers(position, square, by_team, &KNIGHT_OFFSETS, PieceKind::Knight, limit, &mut out);
    collect_pawn_attackers(position, square, by_team, limit, &mut out);
    collect_offset_attackers(position, square, by_team, &KING_OFFSETS, PieceKind::King, limit, &mut out);
    out.truncate(limit);
    out
}

fn collect_ray_attackers(
    position: &Position,
    square: Square,
    by_team: Team,
    rays: &[(i8, i8)],
    slider: PieceKind,
    limit: usize,
    out: &mut Vec<Attacker>,
) {
    for &(dr, dc) in rays {
        if out.len() >= limit {
            return;
        }
        let mut to = square.relative(dr, dc);
        while to.is_present() {
            let occupant = position.piece_at(to);
            if occupant.is_present() {
                if occupant.team() == by_team
                    && (occupant.kind() == slider || occupant.kind() == PieceKind::Queen)
                {
                    out.push(Attacker { square: to, kind: occupant.kind(), color: occupant.color() });
                }
                break;
            }
            to = to.relative(dr, dc);
        }
    }
}

fn collect_offset_attackers(
    position: &Position,
    square: Square,
    by_team: Team,
    offsets: &[(i8, i8)],
    kind: PieceKind,
    limit: usize,
    out: &mut Vec<Attacker>,
) {
    for &(dr, dc) in offsets {
        if out.len() >= limit {
            return;
        }
        let to = square.relative(dr, dc);
        if to.is_none() {
            continue;
        }
        let occupant = position.piece_at(to);
        if occupant.is_present() && occupant.team() == by_team && occupant.kind() == kind {
            out.push(Attacker { square: to, kind, color: occupant.color() });
        }
    }
}

fn collect_pawn_attackers(
    position: &Position,
    square: Square,
    by_team: Team,
    limit: usize,
    out: &mut Vec<Attacker>,
) {
    for &row_offset in &[-1i8, 1i8] {
        if out.len() >= limit {
            return;
        }
        for &col_offset in &[-1i8, 1i8] {
            if out.len() >= limit {
                break;
            }
            let candidate = Square::new(square.row() + row_offset, square.col() + col_offset);
            if candidate.is_none() {
                continue;
            }
            let occupant = position.piece_at(candidate);
            if occupant.is_none() || occupant.team() != by_team || occupant.kind() != PieceKind::Pawn {
                continue;
            }
            if pawn_attacks_from_offsets(occupant.color(), row_offset, col_offset) {
                out.push(Attacker { square: candidate, kind: PieceKind::Pawn, color: occupant.color() });
            }
        }
    }
}

/// `is_attacked(king_square[color], other_team(color))` (§4.3), `false` if
/// the king has already been captured.
#[must_use]
pub fn king_in_check(position: &Position, color: Color) -> bool {
    let king_sq = position.king_square(color);
    king_sq.is_present() && is_attacked(position, king_sq, color.team().other())
}

/// Heuristic-only check predicate (§4.3, §9 open question 3): makes the
/// move, tests whether the just-moved piece's own movement pattern now
/// attacks either enemy-team king, and unmakes. Does **not** detect
/// discovered checks; used only for move ordering and search extensions.
pub fn delivers_check(position: &mut Position, mv: &Move) -> bool {
    if let Some(cached) = mv.cached_check() {
        return cached;
    }
    let mover_team = mv.mover_color().team();
    position.make(mv);
    let result = crate::types::ALL_COLORS
        .iter()
        .filter(|c| c.team() != mover_team)
        .any(|&enemy| {
            let king_sq = position.king_square(enemy);
            king_sq.is_present() && moved_piece_attacks(position, mv, king_sq)
        });
    position.unmake();
    mv.set_cached_check(result);
    result
}

/// Whether the piece now sitting on `mv.to()` attacks `target` by its own
/// movement pattern (ignores discovered checks by design, §4.3).
fn moved_piece_attacks(position: &Position, mv: &Move, target: Square) -> bool {
    let piece = position.piece_at(mv.to());
    if piece.is_none() {
        // Promotions replace the pawn; en-passant/castling never land the
        // mover itself off `to`, so this only trips if the square was
        // somehow vacated, which shouldn't happen.
        return false;
    }
    let from = mv.to();
    match piece.kind() {
        PieceKind::Knight => KNIGHT_OFFSETS.iter().any(|&(dr, dc)| from.relative(dr, dc) == target),
        PieceKind::King => KING_OFFSETS.iter().any(|&(dr, dc)| from.relative(dr, dc) == target),
        PieceKind::Rook => slides_to(position, from, target, &ROOK_RAYS),
        PieceKind::Bishop => slides_to(position, from, target, &BISHOP_RAYS),
        PieceKind::Queen => slides_to(position, from, target, &ROOK_RAYS) || slides_to(position, from, target, &BISHOP_RAYS),
        PieceKind::Pawn => pawn_attacks(piece.color(), from, target),
    }
}

fn slides_to(position: &Position, from: Square, target: Square, rays: &[(i8, i8)]) -> bool {
    for &(dr, dc) in rays {
        let mut to = from.relative(dr, dc);
        while to.is_present() {
            if to == target {
                return true;
            }
            if position.piece_at(to).is_present() {
                break;
            }
            to = to.relative(dr, dc);
        }
    }
    false
}

fn pawn_attacks(color: Color, from: Square, target: Square) -> bool {
    let row_axis = matches!(color, Color::Red | Color::Yellow);
    let (dr, dc) = super::movegen::pawn_advance_direction(color);
    for sign in [-1i8, 1i8] {
        let to = if row_axis { from.relative(dr, sign) } else { from.relative(sign, dc) };
        if to == target {
            return true;
        }
    }
    false
}
