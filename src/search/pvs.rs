//! The recursive PVS/negamax core (§4.8): one `search` call per node, with
//! every heuristic from the spec's "Heuristics" list gated behind
//! [`SearchParams`] so each can be disabled independently for regression
//! testing (§10.6).

use crate::constants::{MATE, MATE_THRESHOLD};
use crate::eval::{evaluate, Weights};
use crate::position::attacks::{delivers_check, king_in_check};
use crate::position::make_unmake::captured_a_king;
use crate::position::movegen::generate_pseudo_legal;
use crate::position::Position;
use crate::tt::{Bound, CompactMove, TranspositionTable};
use crate::types::{Move, MoveList};

use super::control::SearchControl;
use super::order::OrderingTables;
use super::params::SearchParams;
use super::picker::{MovePicker, MovePickerOptions};
use super::quiescence::qsearch;
use super::reductions::reduction;
use super::smp::SearchingTable;
use super::stats::SearchStats;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NodeType {
    Root,
    Pv,
    NonPv,
}

impl NodeType {
    #[must_use]
    fn is_pv(self) -> bool {
        matches!(self, NodeType::Root | NodeType::Pv)
    }

    #[must_use]
    fn child(self) -> NodeType {
        match self {
            NodeType::Root | NodeType::Pv => NodeType::Pv,
            NodeType::NonPv => NodeType::NonPv,
        }
    }
}

/// State shared read-only (or atomically) across every thread searching one
/// `go` command (§5).
pub struct SearchShared<'a> {
    pub tt: &'a TranspositionTable,
    pub params: &'a SearchParams,
    pub weights: &'a Weights,
    pub control: &'a SearchControl,
    pub stats: &'a SearchStats,
    pub smp: Option<&'a SearchingTable>,
}

/// Per-thread move-ordering memory, owned exclusively by the thread running
/// `search` (§5 "each thread owns its ... killers/history/counter tables").
#[derive(Default)]
pub struct SearchLocal {
    pub tables: OrderingTables,
}

impl SearchLocal {
    #[must_use]
    pub fn new() -> SearchLocal {
        SearchLocal::default()
    }
}

/// Recursive negamax/PVS search. Returns `None` if cancelled mid-subtree,
/// otherwise `(score, best_move)` from `position.turn()`'s perspective.
#[allow(clippy::too_many_arguments)]
pub fn search(
    shared: &SearchShared,
    local: &mut SearchLocal,
    position: &mut Position,
    node_type: NodeType,
    depth: i32,
    mut alpha: i32,
    beta: i32,
    ply: usize,
    expanded: u32,
    previous: Option<Move>,
    prev_was_null: bool,
    pv: &mut Vec<Move>,
) -> Option<(i32, Option<Move>)> {
    pv.clear();

    if shared.control.should_stop() {
        return None;
    }
    shared.control.record_node();
    SearchStats::bump(&shared.stats.num_nodes);

    if depth <= 0 {
        let score = qsearch(position, alpha, beta, shared.weights, shared.control)?;
        return Some((score, None));
    }

    let is_pv = node_type.is_pv();
    let is_root = matches!(node_type, NodeType::Root);
    let original_alpha = alpha;
    let key = position.zobrist_key();
    let in_check = king_in_check(position, position.turn());

    let mut tt_move: Option<CompactMove> = None;
    if let Some(entry) = shared.tt.probe(key) {
        SearchStats::bump(&shared.stats.num_cache_hits);
        tt_move = entry.mv;
        if !is_pv && i32::from(entry.depth) >= depth {
            let cutoff = match entry.bound {
                Bound::Exact => true,
                Bound::Lower => entry.score >= beta,
                Bound::Upper => entry.score <= alpha,
            };
            if cutoff {
                return Some((entry.score, None));
            }
        }
    }

    let eval_score = evaluate(position, alpha, beta, shared.weights);

    if !is_pv
        && !in_check
        && shared.params.reverse_futility_pruning
        && depth <= shared.params.reverse_futility_max_depth
    {
        let margin = shared.params.reverse_futility_margin_per_ply * depth;
        if eval_score - margin >= beta && eval_score < MATE_THRESHOLD {
            return Some((beta, None));
        }
    }

    if shared.params.null_move_pruning
        && !is_pv
        && !in_check
        && !prev_was_null
        && depth >= shared.params.null_move_min_depth
        && eval_score >= beta
        && !king_in_check(position, position.turn().teammate())
    {
        SearchStats::bump(&shared.stats.num_null_moves_tried);
        let r = shared.params.null_move_reduction(depth);
        let prev_turn = position.turn();
        position.make_null();
        let mut null_pv = Vec::new();
        let null_result = search(
            shared,
            local,
            position,
            NodeType::NonPv,
            depth - r,
            -beta,
            -beta + 1,
            ply + 1,
            expanded,
            None,
            true,
            &mut null_pv,
        );
        position.unmake_null(prev_turn);
        let null_score = match null_result {
            Some((s, _)) => -s,
            None => return None,
        };
        if null_score >= beta && null_score < MATE_THRESHOLD {
            SearchStats::bump(&shared.stats.num_null_moves_pruned);
            return Some((beta, None));
        }
    }

    let mut moves = MoveList::new();
    generate_pseudo_legal(position, &mut moves);

    let mut picker = MovePicker::new(
        position,
        &moves,
        previous.as_ref(),
        &local.tables,
        &MovePickerOptions {
            ply,
            tt_move,
            include_quiets: true,
            check_bonus_enabled: shared.params.move_order_check_bonus,
        },
    );

    let mut best_score = -MATE;
    let mut best_move: Option<Move> = None;
    let mut legal_moves_tried = 0usize;
    let mut quiets_tried = 0usize;
    let mut child_pv = Vec::new();

    let lmp_limit = shared.params.late_move_pruning_limit(depth);
    let lmr_min_move_count = if is_root {
        shared.params.late_move_reduction_min_move_count_at_root
    } else {
        shared.params.late_move_reduction_min_move_count
    };

    // Lazy-SMP move deferral (§4.8 "Move deferral for SMP", §5): at a PV
    // node with sibling threads active, a move another thread has already
    // claimed at this (ply, move) slot is pushed onto `deferred` instead of
    // searched now, and retried once this thread's own picker is exhausted.
    // A thread running alone (`shared.smp` is `None`, as in
    // `iterative_deepening`) always claims successfully and never defers.
    let mut deferred: Vec<Move> = Vec::new();
    let mut cutoff = false;

    macro_rules! process_move {
        ($mv:expr) => {{
            let mv = $mv;
            let is_quiet = mv.is_quiet();

        macro_rules! release_smp_claim {
            () => {
                if is_pv {
                    if let Some(smp) = shared.smp {
                        smp.release(ply, &mv);
                    }
                }
            };
        }

        if !is_pv
            && is_quiet
            && alpha > -MATE_THRESHOLD
            && shared.params.late_move_pruning
            && quiets_tried as i32 >= lmp_limit
        {
            release_smp_claim!();
            continue;
        }

        if !is_pv
            && !in_check
            && !is_quiet
            && shared.params.futility_for_captures
            && depth < shared.params.futility_max_depth
            && legal_moves_tried > 0
        {
            let margin = shared.params.futility_base_margin + shared.params.futility_margin_per_ply * depth;
            if eval_score + margin + mv.captured_value() < alpha {
                release_smp_claim!();
                continue;
            }
        }

        position.make(&mv);

        if captured_a_king(&mv) {
            position.unmake();
            release_smp_claim!();
            return Some((beta, Some(mv)));
        }

        if king_in_check(position, mv.mover_color()) {
            position.unmake();
            release_smp_claim!();
            continue;
        }

        legal_moves_tried += 1;
        if is_quiet {
            quiets_tried += 1;
        }

        let gives_check = delivers_check(position, &mv);
        let mut child_depth = depth - 1;
        if shared.params.check_extensions
            && gives_check
            && legal_moves_tried <= shared.params.check_extension_move_count_limit
            && expanded < shared.params.check_extension_path_cap
        {
            child_depth += 1;
            SearchStats::bump(&shared.stats.num_check_extensions);
        }
        let child_expanded = expanded + u32::from(child_depth > depth - 1);

        let move_number = legal_moves_tried;
        let score;

        macro_rules! recurse {
            ($node:expr, $d:expr, $a:expr, $b:expr, $pv:expr) => {{
                let result = search(
                    shared, local, position, $node, $d, $a, $b, ply + 1, child_expanded, Some(mv), false, $pv,
                );
                match result {
                    Some((s, _)) => -s,
                    None => {
                        position.unmake();
                        return None;
                    }
                }
            }};
        }

        if move_number == 1 {
            score = recurse!(node_type.child(), child_depth, -beta, -alpha, &mut child_pv);
        } else {
            let mut reduction_amount = 0;
            if shared.params.late_move_reduction
                && depth > shared.params.late_move_reduction_min_depth
                && move_number > lmr_min_move_count
                && is_quiet
                && !in_check
            {
                reduction_amount = reduction(depth, move_number);
                if tt_move.is_none() && !is_pv {
                    reduction_amount += 2;
                }
                reduction_amount = reduction_amount.clamp(0, (child_depth - 1).max(0));
            }

            let mut scratch_pv = Vec::new();
            let mut s = if reduction_amount > 0 {
                SearchStats::bump(&shared.stats.num_lmr_searches);
                recurse!(NodeType::NonPv, child_depth - reduction_amount, -alpha - 1, -alpha, &mut scratch_pv)
            } else {
                recurse!(NodeType::NonPv, child_depth, -alpha - 1, -alpha, &mut scratch_pv)
            };

            if reduction_amount > 0 && s > alpha {
                SearchStats::bump(&shared.stats.num_lmr_researches);
                s = recurse!(NodeType::NonPv, child_depth, -alpha - 1, -alpha, &mut child_pv);
            }
            if s > alpha && s < beta && is_pv {
                s = recurse!(node_type.child(), child_depth, -beta, -alpha, &mut child_pv);
            }
            score = s;
        }

        position.unmake();

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
            if is_pv {
                pv.clear();
                pv.push(mv);
                pv.extend(child_pv.iter().copied());
            }
        }

        if score > alpha {
            alpha = score;
        }

        if alpha >= beta {
            if is_quiet {
                if shared.params.killers {
                    local.tables.record_killer(ply, mv);
                    if let Some(prev) = previous {
                        local.tables.set_counter_move(&prev, mv);
                    }
                }
                if shared.params.history {
                    let bonus = 1i32 << depth.clamp(0, 20);
                    local.tables.update_history(mv.mover().kind(), mv.from(), mv.to(), bonus);
                }
            } else if let Some(captured) = mv.captured() {
                let bonus = 1i32 << depth.clamp(0, 20);
                local.tables.update_capture_history(
                    mv.mover().kind(),
                    mv.mover_color(),
                    captured.kind(),
                    captured.color(),
                    mv.to(),
                    bonus,
                );
            }
            release_smp_claim!();
            cutoff = true;
        } else {
            release_smp_claim!();
        }
        }};
    }

    while let Some(mv) = picker.next() {
        if shared.control.should_stop() {
            return None;
        }
        if is_pv {
            if let Some(smp) = shared.smp {
                if !smp.try_claim(ply, &mv) {
                    deferred.push(mv);
                    continue;
                }
            }
        }
        process_move!(mv);
        if cutoff {
            break;
        }
    }

    if !cutoff {
        for mv in deferred {
            if shared.control.should_stop() {
                return None;
            }
            process_move!(mv);
            if cutoff {
                break;
            }
        }
    }

    if legal_moves_tried == 0 {
        let terminal = if in_check { -MATE + ply as i32 } else { 0 };
        return Some((terminal.clamp(original_alpha, beta), None));
    }

    let bound = if best_score <= original_alpha {
        Bound::Upper
    } else if best_score >= beta {
        Bound::Lower
    } else {
        Bound::Exact
    };
    shared.tt.store(
        key,
        depth.clamp(0, i16::MAX as i32) as i16,
        best_score,
        bound,
        is_pv,
        best_move.map(|m| CompactMove::from_move(&m)),
    );

    Some((best_score, best_move))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::search::control::SearchControl;
    use crate::search::params::SearchParams;
    use crate::search::stats::SearchStats;
    use crate::tt::TranspositionTable;

    #[test]
    fn four_bare_kings_search_without_panicking() {
        use crate::types::{Color, PieceKind};
        let mut pos = Position::empty();
        pos.place_piece(crate::types::Square::new(0, 3), Color::Yellow, PieceKind::King);
        pos.place_piece(crate::types::Square::new(13, 3), Color::Red, PieceKind::King);
        pos.place_piece(crate::types::Square::new(3, 3), Color::Blue, PieceKind::King);
        pos.place_piece(crate::types::Square::new(10, 10), Color::Green, PieceKind::King);

        let weights = Weights::default();
        let params = SearchParams::default();
        let tt = TranspositionTable::new(1);
        let control = SearchControl::new(None);
        let stats = SearchStats::new();
        let shared =
            SearchShared { tt: &tt, params: &params, weights: &weights, control: &control, stats: &stats, smp: None };
        let mut local = SearchLocal::new();
        let mut pv = Vec::new();

        let result = search(&shared, &mut local, &mut pos, NodeType::Root, 1, -MATE, MATE, 0, 0, None, false, &mut pv);
        assert!(result.is_some());
    }
}
