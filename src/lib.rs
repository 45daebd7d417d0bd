//! Search-and-evaluation engine for four-player team chess on the 14x14
//! cross board (Red/Blue/Yellow/Green, Red+Yellow vs Blue+Green). The
//! `position` module owns board geometry, move generation, and make/unmake;
//! `eval` is the static evaluator; `search` is the PVS/negamax core plus its
//! pruning heuristics and Lazy-SMP coordination; `tt` is the shared
//! transposition table; `engine` is the driver that turns a position and a
//! time budget into a best move; `uci` is the command-line protocol built
//! on top of it.

pub mod constants;
pub mod engine;
pub mod error;
pub mod eval;
pub mod position;
pub mod search;
pub mod tt;
pub mod types;
pub mod uci;
pub mod zobrist;
