//! Lazy-SMP move deferral (§4.8 "Move deferral for SMP", §5 "Searching
//! table"): a shared array of atomics lets one thread claim a (ply, move)
//! pair so sibling threads skip straight past it, without any locking.
//! A stale flag just causes a pointless defer, never a duplicate claim,
//! since the flag is only cleared after the owning thread's `make` has
//! returned from that subtree.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::constants::MAX_PLY;
use crate::types::Move;

/// Hash buckets per ply; collisions only cause an occasional unnecessary
/// defer; see module doc.
const BUCKETS_PER_PLY: usize = 64;

fn move_bucket(mv: &Move) -> usize {
    let a = mv.from().legal_index();
    let b = mv.to().legal_index();
    (a.wrapping_mul(31).wrapping_add(b)) % BUCKETS_PER_PLY
}

/// Shared across every search thread for one `go` command.
pub struct SearchingTable {
    flags: Vec<AtomicBool>,
}

impl SearchingTable {
    #[must_use]
    pub fn new() -> SearchingTable {
        let mut flags = Vec::with_capacity(MAX_PLY * BUCKETS_PER_PLY);
        flags.resize_with(MAX_PLY * BUCKETS_PER_PLY, || AtomicBool::new(false));
        SearchingTable { flags }
    }

    fn index(&self, ply: usize, mv: &Move) -> usize {
        (ply.min(MAX_PLY - 1)) * BUCKETS_PER_PLY + move_bucket(mv)
    }

    /// Attempts to claim `(ply, mv)` for the calling thread. Returns `true`
    /// if the claim succeeded (the caller should search the move and later
    /// call [`SearchingTable::release`]); `false` means another thread
    /// already owns it and the caller should defer.
    #[must_use]
    pub fn try_claim(&self, ply: usize, mv: &Move) -> bool {
        self.flags[self.index(ply, mv)]
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn release(&self, ply: usize, mv: &Move) {
        self.flags[self.index(ply, mv)].store(false, Ordering::Release);
    }
}

impl Default for SearchingTable {
    fn default() -> Self {
        SearchingTable::new()
    }
}
