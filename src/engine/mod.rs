//! The driver (§2.10): glues the search engine to a thread pool, an
//! `EngineOptions`-configured transposition table, and a cancel flag,
//! turning one `go` request into a [`driver::SearchOutcome`].

mod driver;
mod options;

pub use driver::{run, SearchLimits, SearchOutcome};
pub use options::{EngineOptions, DEFAULT_HASH_MB};
