//! Staged move ordering (§4.7): PV/TT move, good captures, killers, bad
//! captures, then quiets — each stage scored once and sorted descending,
//! flattened into one ordered sequence the searcher pulls from move by move.

use crate::position::Position;
use crate::tt::CompactMove;
use crate::types::{Move, MoveList, PieceKind};

use super::order::{is_good_capture, OrderingTables};

/// Flat per-kind tiebreak used only within the quiet stage (§4.7 "base kind
/// bonus"); the spec names the term but not its values, so these are a
/// modest, explicit ordering among otherwise-equal quiet moves.
fn base_kind_bonus(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 10,
        PieceKind::Knight => 20,
        PieceKind::Bishop => 20,
        PieceKind::Rook => 15,
        PieceKind::Queen => 25,
        PieceKind::King => 5,
    }
}

/// Bonus added to a move's stage score when it delivers check and the
/// "move-order check bonus" heuristic is enabled (§4.7).
const QUIET_CHECK_BONUS: i32 = 100_000;
const CAPTURE_CHECK_BONUS: i32 = 1_000;
const COUNTER_MOVE_BONUS: i32 = 50;

pub struct MovePickerOptions {
    pub ply: usize,
    pub tt_move: Option<CompactMove>,
    pub include_quiets: bool,
    pub check_bonus_enabled: bool,
}

/// One fully ordered pass over a node's move list, built eagerly (each
/// stage is scored and sorted once, then the stages are concatenated) —
/// observably equivalent to the spec's lazy staged picker since a node only
/// ever walks the list once front-to-back.
pub struct MovePicker {
    ordered: Vec<Move>,
    cursor: usize,
}

impl MovePicker {
    #[must_use]
    pub fn new(
        position: &mut Position,
        moves: &MoveList,
        previous: Option<&Move>,
        tables: &OrderingTables,
        opts: &MovePickerOptions,
    ) -> MovePicker {
        let killers = tables.killers(opts.ply);
        let counter = previous.and_then(|p| tables.counter_move(p));

        let mut pv_move = Vec::new();
        let mut good_captures = Vec::new();
        let mut killer_moves = Vec::new();
        let mut bad_captures = Vec::new();
        let mut quiets = Vec::new();

        for mv in moves {
            if opts.tt_move.is_some_and(|tm| tm.matches(mv)) {
                pv_move.push(*mv);
                continue;
            }
            if mv.is_capture() {
                let score = capture_score(position, mv, tables, opts.check_bonus_enabled);
                if is_good_capture(mv) {
                    good_captures.push((score, *mv));
                } else {
                    bad_captures.push((score, *mv));
                }
                continue;
            }
            if !opts.include_quiets {
                continue;
            }
            if killers[0] == Some(*mv) || killers[1] == Some(*mv) {
                killer_moves.push(*mv);
                continue;
            }
            let score = quiet_score(position, mv, tables, counter, opts.check_bonus_enabled);
            quiets.push((score, *mv));
        }

        good_captures.sort_by_key(|&(s, _)| -s);
        bad_captures.sort_by_key(|&(s, _)| -s);
        quiets.sort_by_key(|&(s, _)| -s);

        let mut ordered = Vec::with_capacity(moves.len());
        ordered.extend(pv_move);
        ordered.extend(good_captures.into_iter().map(|(_, m)| m));
        ordered.extend(killer_moves);
        ordered.extend(bad_captures.into_iter().map(|(_, m)| m));
        ordered.extend(quiets.into_iter().map(|(_, m)| m));

        MovePicker { ordered, cursor: 0 }
    }

    pub fn next(&mut self) -> Option<Move> {
        let mv = self.ordered.get(self.cursor).copied();
        self.cursor += 1;
        mv
    }
}

fn capture_score(position: &mut Position, mv: &Move, tables: &OrderingTables, check_bonus_enabled: bool) -> i32 {
    let attacker_value = crate::types::piece_value(mv.mover().kind());
    let mut score = mv.captured_value() - attacker_value / 100;
    if let Some(captured) = mv.captured() {
        score += tables.capture_history_score(
            mv.mover().kind(),
            mv.mover_color(),
            captured.kind(),
            captured.color(),
            mv.to(),
        );
    }
    if check_bonus_enabled && crate::position::attacks::delivers_check(position, mv) {
        score += CAPTURE_CHECK_BONUS;
    }
    score
}

fn quiet_score(
    position: &mut Position,
    mv: &Move,
    tables: &OrderingTables,
    counter: Option<Move>,
    check_bonus_enabled: bool,
) -> i32 {
    let mut score = base_kind_bonus(mv.mover().kind());
    score += tables.history_score(mv.mover().kind(), mv.from(), mv.to());
    if counter == Some(*mv) {
        score += COUNTER_MOVE_BONUS;
    }
    if check_bonus_enabled && crate::position::attacks::delivers_check(position, mv) {
        score += QUIET_CHECK_BONUS;
    }
    score
}
