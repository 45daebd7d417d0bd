//! Engine-wide constants shared by the evaluator and the searcher.

/// Score magnitude reserved for "checkmate found"; search and evaluation
/// both clamp toward this value rather than a true `i32::MAX`, leaving
/// headroom so mate-in-N scores (`MATE - ply`) never overflow or collide
/// with ordinary evaluation scores (§4.5 "Game-over shortcut", §4.8
/// "Terminal classification").
pub const MATE: i32 = 1_000_000;

/// Any score at or above this magnitude is a mate score rather than a
/// material/positional one; used to gate null-move pruning and reverse
/// futility pruning, which must not fire near forced mates (§4.8).
pub const MATE_THRESHOLD: i32 = MATE - 1_000;

/// Hard cap on search depth/ply, sizing fixed-size per-ply tables (killers,
/// PV length, the SMP "searching" flags table, §4.8, §9).
pub const MAX_PLY: usize = 128;
