//! King move generation, including castling (§4.1).
//!
//! Castling direction data is derived from the real initial king/rook
//! squares (`original_source/board.cc`'s `CreateStandardSetup`), per
//! `SPEC_FULL.md` §10.7 point 5, rather than copied from the original's
//! `GetKingMoves` castling branch, which has two bugs there (a broken
//! Yellow queenside offset and dead, wrong `kGreenInitialRookLocation*`
//! constants).

use crate::types::{CastleRookMove, Color, Move, MoveList, Piece, Square};

use super::super::attacks;
use super::super::Position;
use super::Landing;

const KING_OFFSETS: [(i8, i8); 8] =
    [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

/// Which board axis a color's king/rooks slide along during castling.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CastleAxis {
    Row,
    Col,
}

/// Per-color castling geometry, derived once from the standard setup.
#[derive(Clone, Copy, Debug)]
pub struct CastleSpec {
    pub axis: CastleAxis,
    /// +1 or -1: direction of travel, along `axis`, toward the kingside rook.
    pub kingside_sign: i8,
    pub king_from: Square,
    pub rook_from_kingside: Square,
    pub rook_from_queenside: Square,
}

#[must_use]
pub fn castle_spec(color: Color) -> CastleSpec {
    match color {
        Color::Red => CastleSpec {
            axis: CastleAxis::Col,
            kingside_sign: 1,
            king_from: Square::new(13, 7),
            rook_from_kingside: Square::new(13, 10),
            rook_from_queenside: Square::new(13, 3),
        },
        Color::Blue => CastleSpec {
            axis: CastleAxis::Row,
            kingside_sign: 1,
            king_from: Square::new(7, 0),
            rook_from_kingside: Square::new(10, 0),
            rook_from_queenside: Square::new(3, 0),
        },
        Color::Yellow => CastleSpec {
            axis: CastleAxis::Col,
            kingside_sign: -1,
            king_from: Square::new(0, 6),
            rook_from_kingside: Square::new(0, 3),
            rook_from_queenside: Square::new(0, 10),
        },
        Color::Green => CastleSpec {
            axis: CastleAxis::Row,
            kingside_sign: -1,
            king_from: Square::new(6, 13),
            rook_from_kingside: Square::new(3, 13),
            rook_from_queenside: Square::new(10, 13),
        },
    }
}

fn offset_along(axis: CastleAxis, amount: i8) -> (i8, i8) {
    match axis {
        CastleAxis::Row => (amount, 0),
        CastleAxis::Col => (0, amount),
    }
}

pub(super) fn generate(position: &Position, color: Color, from: Square, moves: &mut MoveList) {
    let mover = position.piece_at(from);
    for &(dr, dc) in &KING_OFFSETS {
        let to = from.relative(dr, dc);
        match super::probe(position, color, to) {
            Landing::OffBoard | Landing::OwnPiece => {}
            Landing::Empty => moves.push(plain(position, from, to, mover, None)),
            Landing::Capture(victim) => moves.push(plain(position, from, to, mover, Some(victim))),
        }
    }
    generate_castling(position, color, from, moves);
}

fn generate_castling(position: &Position, color: Color, king_from: Square, moves: &mut MoveList) {
    let rights = position.castling_rights(color);
    if !rights.any() {
        return;
    }
    let spec = castle_spec(color);
    if king_from != spec.king_from {
        return;
    }
    let enemy_team = color.team().other();

    if rights.kingside() {
        try_generate_side(position, color, &spec, spec.rook_from_kingside, spec.kingside_sign, enemy_team, moves);
    }
    if rights.queenside() {
        try_generate_side(position, color, &spec, spec.rook_from_queenside, -spec.kingside_sign, enemy_team, moves);
    }
}

#[allow(clippy::too_many_arguments)]
fn try_generate_side(
    position: &Position,
    color: Color,
    spec: &CastleSpec,
    rook_from: Square,
    sign: i8,
    enemy_team: crate::types::Team,
    moves: &mut MoveList,
) {
    if position.piece_at(rook_from).is_none() {
        return;
    }
    let king_from = spec.king_from;
    let (step_r, step_c) = offset_along(spec.axis, sign);
    let crossed = king_from.relative(step_r, step_c);
    let king_to = king_from.relative(2 * step_r, 2 * step_c);
    let rook_to = king_from.relative(step_r, step_c);

    // All squares strictly between king_from and rook_from, exclusive, must
    // be empty (this includes crossed and king_to, and any squares further
    // out toward the rook).
    let mut probe_sq = crossed;
    loop {
        if probe_sq == rook_from {
            break;
        }
        if probe_sq.is_none() || position.piece_at(probe_sq).is_present() {
            return;
        }
        probe_sq = probe_sq.relative(step_r, step_c);
    }

    // King's current square and the first crossed square must be unattacked
    // (§4.1: "the landing square is NOT pre-checked").
    if attacks::is_attacked(position, king_from, enemy_team)
        || attacks::is_attacked(position, crossed, enemy_team)
    {
        return;
    }

    let mover = position.piece_at(king_from);
    let (before, after) = super::rights_transition(position, king_from, king_to, mover.kind(), mover.color(), None);
    moves.push(Move::new(
        king_from,
        king_to,
        mover,
        None,
        None,
        None,
        Some(CastleRookMove { rook_from, rook_to }),
        before,
        after,
    ));
}

fn plain(position: &Position, from: Square, to: Square, mover: Piece, captured: Option<Piece>) -> Move {
    let (before, after) =
        super::rights_transition(position, from, to, mover.kind(), mover.color(), captured);
    Move::new(from, to, mover, captured, None, None, None, before, after)
}
