//! Bishop, rook and queen move generation: ray walks that stop at the first
//! occupied square or the edge of the legal-squares region (§4.1).

use crate::types::{Color, Move, MoveList, Piece, Square};

use super::super::Position;
use super::Landing;

const BISHOP_RAYS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ROOK_RAYS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

fn walk(position: &Position, color: Color, from: Square, rays: &[(i8, i8)], moves: &mut MoveList) {
    let mover = position.piece_at(from);
    for &(dr, dc) in rays {
        let mut to = from.relative(dr, dc);
        loop {
            match super::probe(position, color, to) {
                Landing::OffBoard | Landing::OwnPiece => break,
                Landing::Empty => {
                    moves.push(plain(position, from, to, mover, None));
                    to = to.relative(dr, dc);
                }
                Landing::Capture(victim) => {
                    moves.push(plain(position, from, to, mover, Some(victim)));
                    break;
                }
            }
        }
    }
}

fn plain(position: &Position, from: Square, to: Square, mover: Piece, captured: Option<Piece>) -> Move {
    let (before, after) =
        super::rights_transition(position, from, to, mover.kind(), mover.color(), captured);
    Move::new(from, to, mover, captured, None, None, None, before, after)
}

pub(super) fn generate_bishop(position: &Position, color: Color, from: Square, moves: &mut MoveList) {
    walk(position, color, from, &BISHOP_RAYS, moves);
}

pub(super) fn generate_rook(position: &Position, color: Color, from: Square, moves: &mut MoveList) {
    walk(position, color, from, &ROOK_RAYS, moves);
}

pub(super) fn generate_queen(position: &Position, color: Color, from: Square, moves: &mut MoveList) {
    walk(position, color, from, &BISHOP_RAYS, moves);
    walk(position, color, from, &ROOK_RAYS, moves);
}
