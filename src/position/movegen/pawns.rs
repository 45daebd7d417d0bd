//! Pawn move generation: single/double advance, diagonal captures,
//! en-passant (including the combined standard+en-passant capture), and
//! promotion (§4.1).

use crate::types::{Color, EnPassantCapture, Move, MoveList, Piece, Square, PROMOTION_KINDS};

use super::super::{PawnDoubleStep, Position};
use super::{advance_is_row_axis, line_of, pawn_advance_direction, pawn_initial_line, promotion_line, Landing};

pub(super) fn generate(position: &Position, color: Color, from: Square, moves: &mut MoveList) {
    let mover = position.piece_at(from);
    let (dr, dc) = pawn_advance_direction(color);

    let one_step = from.relative(dr, dc);
    if one_step.is_present() && position.piece_at(one_step).is_none() {
        push_advance(position, moves, from, one_step, mover, None, None);
        if line_of(from, color) == pawn_initial_line(color) {
            let two_step = from.relative(dr * 2, dc * 2);
            if two_step.is_present() && position.piece_at(two_step).is_none() {
                push_advance(position, moves, from, two_step, mover, None, None);
            }
        }
    } else if one_step.is_present() {
        generate_en_passant(position, color, from, one_step, mover, moves);
    }

    generate_diagonal_captures(position, color, from, mover, moves);
}

/// The pawn's single-step destination is occupied by an enemy pawn of a
/// *different team*: check whether it just double-stepped past `from`,
/// per the `n = (4 + own - enemy) mod 4` rule of §4.1.
fn generate_en_passant(
    position: &Position,
    color: Color,
    from: Square,
    traversed: Square,
    mover: Piece,
    moves: &mut MoveList,
) {
    let occupant = position.piece_at(traversed);
    if occupant.is_none() || occupant.kind() != crate::types::PieceKind::Pawn {
        return;
    }
    if occupant.team() == color.team() {
        return;
    }
    let enemy_color = occupant.color();

    let n_turns = (4 + color.index() as i32 - enemy_color.index() as i32) % 4;
    let double_step = find_double_step(position, enemy_color, n_turns, traversed);
    let Some(step) = double_step else { return };
    if step.traversed != traversed {
        return;
    }

    let landing = step.landing;
    let existing = position.piece_at(landing);
    if existing.is_present() && existing.team() == color.team() {
        // Traverse square occupied by a teammate: capture disallowed (§4.1).
        return;
    }
    let combined_capture = existing.as_option().map(|_| existing);

    let ep = EnPassantCapture { square: traversed, captured: occupant };
    push_advance(position, moves, from, landing, mover, combined_capture, Some(ep));
}

/// Finds the `n_turns`-ago move if it was a two-square pawn advance by
/// `enemy_color` ending on `traversed`, consulting the real move stack first
/// and falling back to the color's en-passant initialization slot (§3, §4.1)
/// when the stack doesn't reach back far enough.
fn find_double_step(
    position: &Position,
    enemy_color: Color,
    n_turns: i32,
    traversed: Square,
) -> Option<PawnDoubleStep> {
    let stack = position.move_stack();
    if n_turns > 0 && (n_turns as usize) <= stack.len() {
        let mv = &stack[stack.len() - n_turns as usize];
        if mv.mover_color() == enemy_color && is_two_square_pawn_advance(mv) && mv.to() == traversed {
            return Some(PawnDoubleStep {
                pawn_color: enemy_color,
                traversed: midpoint(mv.from(), mv.to()),
                landing: mv.to(),
            });
        }
        return None;
    }
    if n_turns < 4 {
        if let Some(step) = position.ep_init(enemy_color) {
            if step.traversed == traversed {
                return Some(step);
            }
        }
    }
    None
}

fn is_two_square_pawn_advance(mv: &Move) -> bool {
    mv.mover().kind() == crate::types::PieceKind::Pawn
        && mv.from().chebyshev_distance(mv.to()) == 2
        && (mv.from().row() == mv.to().row() || mv.from().col() == mv.to().col())
}

fn midpoint(from: Square, to: Square) -> Square {
    Square::new((from.row() + to.row()) / 2, (from.col() + to.col()) / 2)
}

fn generate_diagonal_captures(
    position: &Position,
    color: Color,
    from: Square,
    mover: Piece,
    moves: &mut MoveList,
) {
    let (dr, dc) = pawn_advance_direction(color);
    let row_axis = advance_is_row_axis(color);
    for sign in [-1i8, 1i8] {
        let to = if row_axis {
            from.relative(dr, sign)
        } else {
            from.relative(sign, dc)
        };
        if let Landing::Capture(victim) = super::probe(position, color, to) {
            push_advance(position, moves, from, to, mover, Some(victim), None);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn push_advance(
    position: &Position,
    moves: &mut MoveList,
    from: Square,
    to: Square,
    mover: Piece,
    captured: Option<Piece>,
    en_passant: Option<EnPassantCapture>,
) {
    let color = mover.color();
    let (before, after) = super::rights_transition(position, from, to, mover.kind(), color, captured);
    if is_promotion(to, color) {
        for &kind in &PROMOTION_KINDS {
            moves.push(Move::new(from, to, mover, captured, Some(kind), en_passant, None, before, after));
        }
    } else {
        moves.push(Move::new(from, to, mover, captured, None, en_passant, None, before, after));
    }
}

fn is_promotion(to: Square, color: Color) -> bool {
    line_of(to, color) == promotion_line(color)
}
