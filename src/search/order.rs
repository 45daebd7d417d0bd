//! Per-thread move-ordering memory (§4.7): killers, quiet history, capture
//! history, and counter-moves. Each search thread owns one of these; nothing
//! here is shared across threads (only the transposition table and the
//! cancel flag are, per §5).

use crate::constants::MAX_PLY;
use crate::types::{Color, Move, NUM_LEGAL_SQUARES, NUM_PIECE_KINDS};

const NUM_COLORS: usize = 4;

/// Clamp applied to history/capture-history scores so a long search can't
/// overflow `i32` through repeated `1 << depth` updates (§4.7, §4.8).
const HISTORY_MAX: i32 = 1 << 20;

#[must_use]
fn square_pair_index(from_index: usize, to_index: usize) -> usize {
    from_index * NUM_LEGAL_SQUARES + to_index
}

pub struct OrderingTables {
    killers: Vec<[Option<Move>; 2]>,
    /// `history[kind][from][to]` (§4.7 "quiet scores include ... history").
    history: Vec<i32>,
    /// `capture_history[attacker_kind][attacker_color][victim_kind][victim_color][to]`.
    capture_history: Vec<i32>,
    /// `counter[from][to]` keyed by the *previous* move's squares.
    counter_moves: Vec<Option<Move>>,
}

impl OrderingTables {
    #[must_use]
    pub fn new() -> OrderingTables {
        OrderingTables {
            killers: vec![[None, None]; MAX_PLY],
            history: vec![0; NUM_PIECE_KINDS * NUM_LEGAL_SQUARES * NUM_LEGAL_SQUARES],
            capture_history: vec![
                0;
                NUM_PIECE_KINDS
                    * NUM_COLORS
                    * NUM_PIECE_KINDS
                    * NUM_COLORS
                    * NUM_LEGAL_SQUARES
            ],
            counter_moves: vec![None; NUM_LEGAL_SQUARES * NUM_LEGAL_SQUARES],
        }
    }

    #[must_use]
    pub fn killers(&self, ply: usize) -> [Option<Move>; 2] {
        self.killers.get(ply).copied().unwrap_or([None, None])
    }

    /// Beta-cutoff bookkeeping for a quiet move (§4.8 "Killers and
    /// counter-moves"): promotes `mv` into the ply's killer slot 0, bumping
    /// the previous slot-0 occupant down, unless it's already there.
    pub fn record_killer(&mut self, ply: usize, mv: Move) {
        if ply >= self.killers.len() {
            return;
        }
        let slot = &mut self.killers[ply];
        if slot[0] == Some(mv) {
            return;
        }
        slot[1] = slot[0];
        slot[0] = Some(mv);
    }

    fn history_index(kind: crate::types::PieceKind, from: crate::types::Square, to: crate::types::Square) -> usize {
        (kind.index() * NUM_LEGAL_SQUARES + from.legal_index()) * NUM_LEGAL_SQUARES + to.legal_index()
    }

    #[must_use]
    pub fn history_score(&self, kind: crate::types::PieceKind, from: crate::types::Square, to: crate::types::Square) -> i32 {
        self.history[Self::history_index(kind, from, to)]
    }

    pub fn update_history(&mut self, kind: crate::types::PieceKind, from: crate::types::Square, to: crate::types::Square, bonus: i32) {
        let idx = Self::history_index(kind, from, to);
        let current = self.history[idx];
        self.history[idx] = (current + bonus).clamp(-HISTORY_MAX, HISTORY_MAX);
    }

    fn capture_history_index(
        attacker_kind: crate::types::PieceKind,
        attacker_color: Color,
        victim_kind: crate::types::PieceKind,
        victim_color: Color,
        to: crate::types::Square,
    ) -> usize {
        let mut idx = attacker_kind.index();
        idx = idx * NUM_COLORS + attacker_color.index();
        idx = idx * NUM_PIECE_KINDS + victim_kind.index();
        idx = idx * NUM_COLORS + victim_color.index();
        idx * NUM_LEGAL_SQUARES + to.legal_index()
    }

    #[must_use]
    pub fn capture_history_score(
        &self,
        attacker_kind: crate::types::PieceKind,
        attacker_color: Color,
        victim_kind: crate::types::PieceKind,
        victim_color: Color,
        to: crate::types::Square,
    ) -> i32 {
        self.capture_history
            [Self::capture_history_index(attacker_kind, attacker_color, victim_kind, victim_color, to)]
    }

    pub fn update_capture_history(
        &mut self,
        attacker_kind: crate::types::PieceKind,
        attacker_color: Color,
        victim_kind: crate::types::PieceKind,
        victim_color: Color,
        to: crate::types::Square,
        bonus: i32,
    ) {
        let idx =
            Self::capture_history_index(attacker_kind, attacker_color, victim_kind, victim_color, to);
        let current = self.capture_history[idx];
        self.capture_history[idx] = (current + bonus).clamp(-HISTORY_MAX, HISTORY_MAX);
    }

    #[must_use]
    pub fn counter_move(&self, previous: &Move) -> Option<Move> {
        self.counter_moves[square_pair_index(previous.from().legal_index(), previous.to().legal_index())]
    }

    pub fn set_counter_move(&mut self, previous: &Move, reply: Move) {
        self.counter_moves[square_pair_index(previous.from().legal_index(), previous.to().legal_index())] =
            Some(reply);
    }
}

impl Default for OrderingTables {
    fn default() -> Self {
        OrderingTables::new()
    }
}

/// A capture is "good" (§4.7) when the attacker is worth no more than what
/// it takes — a cheap MVV-LVA filter, distinct from the full SEE pruning
/// quiescence does (§4.8).
#[must_use]
pub fn is_good_capture(mv: &Move) -> bool {
    crate::types::piece_value(mv.mover().kind()) <= mv.captured_value()
}
