//! Shared cancellation flag and node counter (§5 "Cancel flag", "Shared
//! mutable state"): one atomic bit, relaxed reads, release-on-set, plus a
//! node counter every thread bumps so the driver can report `nps`.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

/// Cross-thread search control: the cancel flag and a node tally, plus an
/// optional deadline and node budget checked alongside the flag (§5
/// "Timeouts", §6.1 `go nodes <n>`).
#[derive(Debug)]
pub struct SearchControl {
    cancel: AtomicBool,
    nodes: AtomicU64,
    deadline: Option<Instant>,
    node_limit: Option<u64>,
}

impl SearchControl {
    #[must_use]
    pub fn new(deadline: Option<Instant>) -> SearchControl {
        SearchControl { cancel: AtomicBool::new(false), nodes: AtomicU64::new(0), deadline, node_limit: None }
    }

    #[must_use]
    pub fn with_node_limit(deadline: Option<Instant>, node_limit: Option<u64>) -> SearchControl {
        SearchControl { cancel: AtomicBool::new(false), nodes: AtomicU64::new(0), deadline, node_limit }
    }

    #[inline]
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Release);
    }

    /// True once cancelled, either explicitly, because the deadline has
    /// passed, or because the node budget (`go nodes <n>`) is spent.
    /// Checked at the top of every `search`/`qsearch` call (§4.8).
    #[inline]
    #[must_use]
    pub fn should_stop(&self) -> bool {
        if self.cancel.load(Ordering::Relaxed) {
            return true;
        }
        if matches!(self.deadline, Some(d) if Instant::now() >= d) {
            return true;
        }
        matches!(self.node_limit, Some(limit) if self.node_count() >= limit)
    }

    #[inline]
    pub fn record_node(&self) {
        self.nodes.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn add_nodes(&self, n: u64) {
        self.nodes.fetch_add(n, Ordering::Relaxed);
    }

    #[must_use]
    pub fn node_count(&self) -> u64 {
        self.nodes.load(Ordering::Relaxed)
    }
}
