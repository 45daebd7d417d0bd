//! The driver (§2.10, §4.9): turns one root [`Position`] plus a time/depth
//! budget into a best move, fanning the search out across `threads` Lazy-SMP
//! workers that share one transposition table, one cancel flag, and one
//! [`SearchingTable`] move-deferral map (§9 "Lazy SMP with move deferral").

use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::eval::Weights;
use crate::position::Position;
use crate::search::{
    iterative_deepening, DepthReport, SearchControl, SearchParams, SearchStatsSnapshot,
    SearchingTable,
};
use crate::tt::TranspositionTable;
use crate::types::Move;

/// A resolved time/depth budget for one `go` command (§6.1). Construction
/// from raw UCI tokens lives in the `uci` module; this type is the plain
/// result of that resolution.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchLimits {
    pub max_depth: i32,
    pub deadline: Option<Instant>,
}

impl SearchLimits {
    /// No depth or time bound beyond `MAX_PLY` (an `infinite` or `ponder` search).
    #[must_use]
    pub fn unbounded() -> SearchLimits {
        SearchLimits { max_depth: crate::constants::MAX_PLY, deadline: None }
    }

    #[must_use]
    pub fn depth(max_depth: i32) -> SearchLimits {
        SearchLimits { max_depth, deadline: None }
    }

    #[must_use]
    pub fn movetime(movetime: Duration) -> SearchLimits {
        SearchLimits { max_depth: crate::constants::MAX_PLY, deadline: Some(Instant::now() + movetime) }
    }
}

/// The result of one driver [`run`] call, reported up to the `uci` module.
#[derive(Clone, Debug, Default)]
pub struct SearchOutcome {
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: i32,
    pub pv: Vec<Move>,
    pub stats: SearchStatsSnapshot,
}

/// Runs Lazy-SMP iterative deepening from `position` under `limits`, using
/// `options.threads` worker threads sharing `tt`. `on_depth` is called from
/// whichever thread completes a depth first and may be called concurrently
/// by more than one thread (§6.1 `info` lines are allowed to interleave
/// across threads); callers that print to stdout should serialize
/// internally, as the donor's printer thread does.
///
/// Returns [`SearchOutcome::default`] (no best move, depth 0) if every
/// thread was cancelled before completing depth 1 — e.g. an immediate
/// `stop` — or if the root has no legal moves (§7 "Game-over at root").
pub fn run<F>(
    position: &Position,
    tt: &TranspositionTable,
    params: &SearchParams,
    weights: &Weights,
    threads: usize,
    limits: SearchLimits,
    control: &SearchControl,
    on_depth: F,
) -> SearchOutcome
where
    F: Fn(usize, &DepthReport) + Sync,
{
    let threads = threads.max(1);
    tt.new_generation();
    let smp = SearchingTable::new();
    let stats = crate::search::SearchStats::new();
    let winner: Mutex<Option<DepthReport>> = Mutex::new(None);

    std::thread::scope(|scope| {
        for thread_id in 0..threads {
            let mut thread_position = position.clone();
            let smp_ref = &smp;
            let stats_ref = &stats;
            let on_depth_ref = &on_depth;
            let winner_ref = &winner;
            scope.spawn(move || {
                let smp_arg = if threads > 1 { Some(smp_ref) } else { None };
                let result = iterative_deepening(
                    &mut thread_position,
                    tt,
                    params,
                    weights,
                    control,
                    stats_ref,
                    smp_arg,
                    limits.max_depth,
                    |report| on_depth_ref(thread_id, report),
                );
                if let Some(report) = result {
                    let mut guard = winner_ref.lock();
                    if guard.is_none() {
                        *guard = Some(report);
                        control.cancel();
                    }
                }
            });
        }
    });

    match winner.into_inner() {
        Some(report) => SearchOutcome {
            best_move: report.pv.first().copied(),
            score: report.score,
            depth: report.depth,
            pv: report.pv,
            stats: stats.snapshot(),
        },
        None => SearchOutcome { stats: stats.snapshot(), ..SearchOutcome::default() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tt::TranspositionTable;

    #[test]
    fn finds_a_move_from_the_standard_setup_at_low_depth() {
        let position = Position::new_standard();
        let tt = TranspositionTable::new(1);
        let params = SearchParams::default();
        let weights = Weights::default();
        let control = SearchControl::new(None);
        let outcome =
            run(&position, &tt, &params, &weights, 1, SearchLimits::depth(2), &control, |_, _| {});
        assert!(outcome.best_move.is_some());
        assert_eq!(outcome.depth, 2);
    }

    #[test]
    fn multi_threaded_search_still_returns_a_move() {
        let position = Position::new_standard();
        let tt = TranspositionTable::new(1);
        let params = SearchParams::default();
        let weights = Weights::default();
        let control = SearchControl::new(None);
        let outcome =
            run(&position, &tt, &params, &weights, 2, SearchLimits::depth(2), &control, |_, _| {});
        assert!(outcome.best_move.is_some());
    }

    #[test]
    fn an_already_cancelled_control_yields_no_move() {
        let position = Position::new_standard();
        let tt = TranspositionTable::new(1);
        let params = SearchParams::default();
        let weights = Weights::default();
        let control = SearchControl::new(None);
        control.cancel();
        let outcome =
            run(&position, &tt, &params, &weights, 1, SearchLimits::depth(5), &control, |_, _| {});
        assert!(outcome.best_move.is_none());
    }
}
