//! Pseudo-legal move generation for all six piece kinds (§4.1).
//!
//! Every generator here is pseudo-legal: it never checks whether the move
//! leaves the mover's own king in check. Legality filtering happens one
//! layer up, in the search, by making the move and testing
//! [`super::attacks::king_in_check`] (§4.1 "Pseudo-legality").

mod kings;
mod knights;
mod pawns;
mod sliders;

use crate::types::{CastlingRights, CastlingSnapshot, Color, MoveList, Piece, PieceKind, Square, PIECE_LIST_ORDER};

use super::Position;

pub use kings::{castle_spec, CastleAxis, CastleSpec};

/// Computes the castling-rights snapshot pair a move carries (§3): `before`
/// is simply the position's current rights, `after` revokes whichever
/// rights the move extinguishes (king move, rook move off its home square,
/// or capturing an enemy rook on its home square). Filled in at generation
/// time since every move from the same position shares the same `before`.
#[must_use]
fn rights_transition(
    position: &Position,
    from: Square,
    to: Square,
    mover_kind: PieceKind,
    mover_color: Color,
    captured: Option<Piece>,
) -> (CastlingSnapshot, CastlingSnapshot) {
    let mut before = [CastlingRights::ABSENT; 4];
    let mut after = [CastlingRights::ABSENT; 4];
    for &color in &crate::types::ALL_COLORS {
        before[color.index()] = position.castling_rights(color);
        after[color.index()] = before[color.index()];
    }

    if mover_kind == PieceKind::King {
        after[mover_color.index()] = CastlingRights::new(false, false);
    } else if mover_kind == PieceKind::Rook {
        let spec = castle_spec(mover_color);
        if from == spec.rook_from_kingside {
            after[mover_color.index()] = after[mover_color.index()].without_kingside();
        } else if from == spec.rook_from_queenside {
            after[mover_color.index()] = after[mover_color.index()].without_queenside();
        }
    }

    if let Some(victim) = captured {
        if victim.kind() == PieceKind::Rook {
            let spec = castle_spec(victim.color());
            if to == spec.rook_from_kingside {
                after[victim.color().index()] = after[victim.color().index()].without_kingside();
            } else if to == spec.rook_from_queenside {
                after[victim.color().index()] = after[victim.color().index()].without_queenside();
            }
        }
    }

    (before, after)
}

/// Per-color pawn advance direction, `(delta_row, delta_col)` (§4.1).
#[must_use]
pub fn pawn_advance_direction(color: Color) -> (i8, i8) {
    match color {
        Color::Red => (-1, 0),
        Color::Blue => (0, 1),
        Color::Yellow => (1, 0),
        Color::Green => (0, -1),
    }
}

/// The rank/file pawns of this color start on (§3 initial-rank note).
#[must_use]
pub fn pawn_initial_line(color: Color) -> i8 {
    match color {
        Color::Red => 12,
        Color::Blue => 1,
        Color::Yellow => 1,
        Color::Green => 12,
    }
}

/// The rank/file a pawn must reach to promote (§4.1).
#[must_use]
pub fn promotion_line(color: Color) -> i8 {
    match color {
        Color::Red => 3,
        Color::Blue => 10,
        Color::Yellow => 10,
        Color::Green => 3,
    }
}

/// The rank/file index of a color's own back rank (glossary: "row 0
/// (yellow), row 13 (red), col 0 (blue), col 13 (green)").
#[must_use]
pub fn back_rank_line(color: Color) -> i8 {
    match color {
        Color::Red => 13,
        Color::Yellow => 0,
        Color::Blue => 0,
        Color::Green => 13,
    }
}

/// True if `square` sits on `color`'s own back rank.
#[must_use]
pub fn is_back_rank(square: Square, color: Color) -> bool {
    line_of(square, color) == back_rank_line(color)
}

/// True if the pawn's advance axis is the row (Red/Yellow) rather than the
/// column (Blue/Green).
#[must_use]
pub(crate) fn advance_is_row_axis(color: Color) -> bool {
    matches!(color, Color::Red | Color::Yellow)
}

#[must_use]
pub(crate) fn line_of(square: Square, color: Color) -> i8 {
    if advance_is_row_axis(color) {
        square.row()
    } else {
        square.col()
    }
}

/// The coordinate that stays constant along a color's own back rank (the
/// "file" a piece sits on in that color's own frame of reference): the
/// column for Red/Yellow (whose back ranks are horizontal), the row for
/// Blue/Green (whose back ranks are vertical). Used by the evaluator's
/// rook-file-pawn PST term (§4.5 term 2).
#[must_use]
pub(crate) fn file_coord(square: Square, color: Color) -> i8 {
    if advance_is_row_axis(color) {
        square.col()
    } else {
        square.row()
    }
}

/// Generates every pseudo-legal move for the side to move into `moves`.
pub fn generate_pseudo_legal(position: &Position, moves: &mut MoveList) {
    generate_pseudo_legal_for(position, position.turn(), moves)
}

/// Generates every pseudo-legal move for `color` into `moves`, regardless of
/// whose turn it actually is. The evaluator's mobility/activation terms
/// (§4.5) need pseudo-legal move counts for all four colors on one position,
/// not just the side to move; move-ordering and the searcher only ever call
/// [`generate_pseudo_legal`] above.
pub fn generate_pseudo_legal_for(position: &Position, color: Color, moves: &mut MoveList) {
    let lists = position.piece_lists(color);
    for kind in PIECE_LIST_ORDER {
        for &from in lists.of(kind) {
            match kind {
                PieceKind::Pawn => pawns::generate(position, color, from, moves),
                PieceKind::Knight => knights::generate(position, color, from, moves),
                PieceKind::Bishop => sliders::generate_bishop(position, color, from, moves),
                PieceKind::Rook => sliders::generate_rook(position, color, from, moves),
                PieceKind::Queen => sliders::generate_queen(position, color, from, moves),
                PieceKind::King => kings::generate(position, color, from, moves),
            }
        }
    }
}

/// Result of probing a destination square for a non-pawn piece move.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Landing {
    OffBoard,
    Empty,
    OwnPiece,
    Capture(Piece),
}

#[must_use]
fn probe(position: &Position, color: Color, square: Square) -> Landing {
    if square.is_none() {
        return Landing::OffBoard;
    }
    let occupant = position.piece_at(square);
    if occupant.is_none() {
        Landing::Empty
    } else if occupant.team() != color.team() {
        Landing::Capture(occupant)
    } else {
        Landing::OwnPiece
    }
}
