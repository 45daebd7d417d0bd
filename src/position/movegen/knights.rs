//! Knight move generation (§4.1).

use crate::types::{Color, Move, MoveList, Square};

use super::super::Position;
use super::Landing;

const KNIGHT_OFFSETS: [(i8, i8); 8] =
    [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];

pub(super) fn generate(position: &Position, color: Color, from: Square, moves: &mut MoveList) {
    let mover = position.piece_at(from);
    for &(dr, dc) in &KNIGHT_OFFSETS {
        let to = from.relative(dr, dc);
        match super::probe(position, color, to) {
            Landing::OffBoard | Landing::OwnPiece => {}
            Landing::Empty => moves.push(plain(position, from, to, mover, None)),
            Landing::Capture(victim) => moves.push(plain(position, from, to, mover, Some(victim))),
        }
    }
}

fn plain(
    position: &Position,
    from: Square,
    to: Square,
    mover: crate::types::Piece,
    captured: Option<crate::types::Piece>,
) -> Move {
    let (before, after) =
        super::rights_transition(position, from, to, mover.kind(), mover.color(), captured);
    Move::new(from, to, mover, captured, None, None, None, before, after)
}
