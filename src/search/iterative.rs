//! Iterative deepening with aspiration windows (§4.8): repeatedly calls
//! [`pvs::search`] at depths `1..=max_depth`, narrowing the window around
//! the previous depth's score and widening exponentially on fail-high/low —
//! the same shape as the donor's `iterative_deepening_with_sink`, adapted to
//! return structured per-depth reports instead of pushing straight to a UCI
//! sink.

use std::sync::atomic::Ordering;

use crate::constants::{MATE, MATE_THRESHOLD};
use crate::eval::Weights;
use crate::position::Position;
use crate::tt::TranspositionTable;
use crate::types::Move;

use super::control::SearchControl;
use super::params::SearchParams;
use super::pvs::{search, NodeType, SearchLocal, SearchShared};
use super::smp::SearchingTable;
use super::stats::SearchStats;

/// One completed iterative-deepening depth's result.
#[derive(Clone, Debug)]
pub struct DepthReport {
    pub depth: i32,
    pub score: i32,
    pub pv: Vec<Move>,
    pub nodes: u64,
}

/// Depth below which a full `(-MATE, MATE)` window is used outright — too
/// shallow for a narrow aspiration window to pay for itself.
const MIN_ASPIRATION_DEPTH: i32 = 4;

/// Runs iterative deepening up to `max_depth` or until `control` signals a
/// stop. Calls `on_depth` once per completed depth (for UCI `info` lines);
/// returns the last depth that completed a full search, or `None` if even
/// depth 1 was cancelled. `smp` is `Some` when this thread is one of several
/// cooperating threads sharing `tt` (§4.8 "Move deferral for SMP"); a lone
/// thread (the common case, and every unit test here) passes `None`.
#[allow(clippy::too_many_arguments)]
pub fn iterative_deepening(
    position: &mut Position,
    tt: &TranspositionTable,
    params: &SearchParams,
    weights: &Weights,
    control: &SearchControl,
    stats: &SearchStats,
    smp: Option<&SearchingTable>,
    max_depth: i32,
    mut on_depth: impl FnMut(&DepthReport),
) -> Option<DepthReport> {
    let mut local = SearchLocal::new();
    let shared = SearchShared { tt, params, weights, control, stats, smp };

    let mut last_completed: Option<DepthReport> = None;
    let mut previous_score = 0;

    for depth in 1..=max_depth {
        tt.new_generation();

        let use_aspiration = depth >= MIN_ASPIRATION_DEPTH;
        let mut window = if use_aspiration { params.aspiration_window } else { MATE };
        let (mut alpha, mut beta) =
            if use_aspiration { (previous_score - window, previous_score + window) } else { (-MATE, MATE) };

        let mut pv = Vec::new();
        let score = loop {
            pv.clear();
            let outcome =
                search(&shared, &mut local, position, NodeType::Root, depth, alpha, beta, 0, 0, None, false, &mut pv);
            let Some((score, _)) = outcome else {
                break None;
            };

            let failed_low = score <= alpha && alpha > -MATE;
            let failed_high = score >= beta && beta < MATE;
            if failed_low || failed_high {
                window = (window * 2).min(MATE);
                alpha = (previous_score - window).max(-MATE);
                beta = (previous_score + window).min(MATE);
                continue;
            }
            break Some(score);
        };

        let Some(score) = score else {
            break;
        };

        previous_score = score;
        let report =
            DepthReport { depth, score, pv: pv.clone(), nodes: stats.num_nodes.load(Ordering::Relaxed) };
        on_depth(&report);
        last_completed = Some(report);

        if score.abs() >= MATE_THRESHOLD {
            break;
        }
    }

    last_completed
}
