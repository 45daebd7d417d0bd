//! Perft: recursive legal-move-count divider, used by `src/bin/perft.rs` and
//! by the move-generator legality tests (§8 "Move-generator legality",
//! grounded on `original_source/board.cc`'s `Board::Perft` and the donor's
//! `board/tests/perft.rs`/`src/perft.rs`).
//!
//! A king capture ends that color's team (§3 "team_eliminated"), not the
//! whole game, so unlike two-player perft, nodes below a king-capturing move
//! are still counted rather than treated as a terminal leaf — the four-
//! player rules let play continue with three (or two) colors left.

use crate::types::MoveList;

use super::{is_legal, movegen, Position};

/// Counts leaf positions reachable from `position` in exactly `depth` plies
/// of legal play. `perft(position, 0) == 1` by convention (the empty
/// sequence is the one leaf).
#[must_use]
pub fn perft(position: &mut Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = MoveList::new();
    movegen::generate_pseudo_legal(position, &mut moves);

    if depth == 1 {
        return moves.iter().filter(|mv| is_legal(position, mv)).count() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves.iter() {
        if !is_legal(position, mv) {
            continue;
        }
        position.make(mv);
        nodes += perft(position, depth - 1);
        position.unmake();
    }
    nodes
}

/// Like [`perft`] but returns the per-root-move split (`perft divide`): for
/// each legal root move, the leaf count `depth - 1` plies further on, so
/// that the counts sum to `perft(position, depth)`. Sorted by origin then
/// destination square for stable output.
#[must_use]
pub fn perft_divide(position: &mut Position, depth: u32) -> Vec<(crate::types::Move, u64)> {
    let mut moves = MoveList::new();
    movegen::generate_pseudo_legal(position, &mut moves);
    let mut legal: Vec<_> = moves.iter().copied().filter(|mv| is_legal(position, mv)).collect();
    legal.sort_by_key(|mv| (mv.from().row(), mv.from().col(), mv.to().row(), mv.to().col()));

    let mut out = Vec::with_capacity(legal.len());
    for mv in legal {
        position.make(&mv);
        let count = if depth == 0 { 1 } else { perft(position, depth - 1) };
        position.unmake();
        out.push((mv, count));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_is_one_leaf() {
        let mut pos = Position::new_standard();
        assert_eq!(perft(&mut pos, 0), 1);
    }

    #[test]
    fn depth_one_matches_the_legal_move_count() {
        let mut pos = Position::new_standard();
        let mut moves = MoveList::new();
        movegen::generate_pseudo_legal(&pos, &mut moves);
        let legal_count = moves.iter().filter(|mv| is_legal(&mut pos, mv)).count() as u64;
        assert_eq!(perft(&mut pos, 1), legal_count);
    }

    #[test]
    fn depth_two_sums_the_divide_breakdown() {
        let mut pos = Position::new_standard();
        let total = perft(&mut pos, 2);
        let divide: u64 = perft_divide(&mut pos, 2).iter().map(|&(_, n)| n).sum();
        assert_eq!(total, divide);
    }

    #[test]
    fn unmake_after_perft_restores_the_position() {
        let mut pos = Position::new_standard();
        let key_before = pos.zobrist_key();
        perft(&mut pos, 3);
        assert_eq!(pos.zobrist_key(), key_before);
    }
}
