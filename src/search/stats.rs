//! Per-search diagnostic counters (§10.6), surfaced via `info string` and
//! returned to the driver — never consulted by the move-choosing logic
//! itself.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct SearchStats {
    pub num_nodes: AtomicU64,
    pub num_cache_hits: AtomicU64,
    pub num_null_moves_tried: AtomicU64,
    pub num_null_moves_pruned: AtomicU64,
    pub num_lmr_searches: AtomicU64,
    pub num_lmr_researches: AtomicU64,
    pub num_check_extensions: AtomicU64,
    pub num_lazy_eval: AtomicU64,
}

impl SearchStats {
    #[must_use]
    pub fn new() -> SearchStats {
        SearchStats::default()
    }

    #[inline]
    pub fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn snapshot(&self) -> SearchStatsSnapshot {
        SearchStatsSnapshot {
            num_nodes: self.num_nodes.load(Ordering::Relaxed),
            num_cache_hits: self.num_cache_hits.load(Ordering::Relaxed),
            num_null_moves_tried: self.num_null_moves_tried.load(Ordering::Relaxed),
            num_null_moves_pruned: self.num_null_moves_pruned.load(Ordering::Relaxed),
            num_lmr_searches: self.num_lmr_searches.load(Ordering::Relaxed),
            num_lmr_researches: self.num_lmr_researches.load(Ordering::Relaxed),
            num_check_extensions: self.num_check_extensions.load(Ordering::Relaxed),
            num_lazy_eval: self.num_lazy_eval.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time copy of [`SearchStats`], cheap to pass around and format.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStatsSnapshot {
    pub num_nodes: u64,
    pub num_cache_hits: u64,
    pub num_null_moves_tried: u64,
    pub num_null_moves_pruned: u64,
    pub num_lmr_searches: u64,
    pub num_lmr_researches: u64,
    pub num_check_extensions: u64,
    pub num_lazy_eval: u64,
}

impl SearchStatsSnapshot {
    #[must_use]
    pub fn to_info_string(&self) -> String {
        format!(
            "nodes {} cache_hits {} null_tried {} null_pruned {} lmr_searches {} lmr_researches {} check_ext {} lazy_eval {}",
            self.num_nodes,
            self.num_cache_hits,
            self.num_null_moves_tried,
            self.num_null_moves_pruned,
            self.num_lmr_searches,
            self.num_lmr_researches,
            self.num_check_extensions,
            self.num_lazy_eval,
        )
    }
}
