//! The UCI-style command loop (§6.1), split into command parsing
//! ([`command`]) and `info`/`bestmove` formatting ([`info`]), with the
//! dispatch loop itself here — mirroring the donor's `uci.rs` plus
//! `uci_info.rs` split, adapted to four time-control fields and a driver
//! that already serializes its own `info` lines instead of routing them
//! through an mpsc channel to a dedicated printer thread.

mod command;
mod info;

use std::io::{BufRead, Write};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::engine::{EngineOptions, SearchLimits};
use crate::error::UciCommandError;
use crate::position::{fen, notation, Position};
use crate::search::{SearchControl, SearchParams};
use crate::tt::TranspositionTable;

use command::{Command, GoLimit, GoRequest, PositionSpec};

/// Something `println!`-style output can be written to, shared between the
/// main command loop and a background search thread. Production code wraps
/// `io::stdout()`; tests wrap a `Vec<u8>` behind the same [`Arc<Mutex<_>>`].
pub trait Sink: Write + Send {}
impl<T: Write + Send> Sink for T {}

struct RunningSearch {
    control: Arc<SearchControl>,
    handle: JoinHandle<()>,
}

/// One UCI session's mutable state: the current position, engine
/// configuration, the shared transposition table, and whichever search is
/// currently running in the background, if any.
pub struct Session {
    position: Position,
    options: EngineOptions,
    params: SearchParams,
    tt: Arc<TranspositionTable>,
    debug: bool,
    writer: Arc<Mutex<Box<dyn Sink>>>,
    running: Option<RunningSearch>,
}

impl Session {
    #[must_use]
    pub fn new(writer: Box<dyn Sink>) -> Session {
        let options = EngineOptions::default();
        let tt = Arc::new(TranspositionTable::new(options.hash_mb));
        Session {
            position: Position::new_standard(),
            options,
            params: SearchParams::default(),
            tt,
            debug: false,
            writer: Arc::new(Mutex::new(writer)),
            running: None,
        }
    }

    fn emit(&self, line: &str) {
        let mut w = self.writer.lock();
        let _ = writeln!(w, "{line}");
        let _ = w.flush();
    }

    /// Cancels and joins whatever search is running, if any. The search
    /// thread prints its own `bestmove` line once it notices the cancel
    /// flag (§7 "Search cancellation" is normal flow, not an error).
    fn stop_running_search(&mut self) {
        if let Some(running) = self.running.take() {
            running.control.cancel();
            let _ = running.handle.join();
        }
    }

    /// Parses and dispatches one command line. Returns `true` once `quit`
    /// has been handled, signaling the caller's loop to stop reading.
    pub fn dispatch(&mut self, line: &str) -> bool {
        let command = match command::parse(line) {
            Ok(command) => command,
            Err(UciCommandError::EmptyCommand) => return false,
            Err(e) => {
                self.emit(&format!("info string invalid command: {e}"));
                return false;
            }
        };

        match command {
            Command::Uci => self.handle_uci(),
            Command::Debug(on) => self.debug = on,
            Command::IsReady => self.emit("readyok"),
            Command::SetOption { name, value } => self.handle_setoption(&name, &value),
            Command::UciNewGame => self.handle_ucinewgame(),
            Command::Position { spec, moves } => self.handle_position(spec, &moves),
            Command::Go(request) => self.handle_go(request),
            Command::Stop => self.stop_running_search(),
            Command::PonderHit => {}
            Command::Quit => {
                self.stop_running_search();
                return true;
            }
        }
        false
    }

    fn handle_uci(&self) {
        self.emit("id name FourPlayerChessEngine");
        self.emit("id author the crate authors");
        for line in EngineOptions::uci_option_lines() {
            self.emit(&line);
        }
        self.emit("uciok");
    }

    fn handle_setoption(&mut self, name: &str, value: &str) {
        if !self.options.set(name, value) {
            self.emit(&format!("info string invalid command: unknown option '{name}'"));
            return;
        }
        if name == "Hash" {
            self.tt = Arc::new(TranspositionTable::new(self.options.hash_mb));
        }
    }

    fn handle_ucinewgame(&mut self) {
        self.stop_running_search();
        self.position = Position::new_standard();
        self.tt = Arc::new(TranspositionTable::new(self.options.hash_mb));
    }

    fn handle_position(&mut self, spec: PositionSpec, moves: &[String]) {
        self.stop_running_search();

        let mut position = match spec {
            PositionSpec::StartPos => Position::new_standard(),
            PositionSpec::Fen(text) => match fen::parse(&text) {
                Ok(position) => position,
                Err(e) => {
                    self.emit(&format!("info string {e}"));
                    return;
                }
            },
        };

        for token in moves {
            match notation::parse(&mut position, token) {
                Ok(mv) => position.make(&mv),
                Err(e) => {
                    self.emit(&format!("info string {e}"));
                    return;
                }
            }
        }

        self.position = position;
    }

    fn handle_go(&mut self, request: GoRequest) {
        self.stop_running_search();

        let limits = resolve_limits(&self.position, request.limit);
        let control = Arc::new(SearchControl::with_node_limit(limits.deadline, request.node_limit()));
        let position = self.position.clone();
        let params = self.params;
        let weights = self.options.weights();
        let threads = self.options.threads;
        let tt = Arc::clone(&self.tt);
        let writer = Arc::clone(&self.writer);
        let thread_control = Arc::clone(&control);

        let handle = std::thread::spawn(move || {
            let outcome = crate::engine::run(
                &position,
                &tt,
                &params,
                &weights,
                threads,
                limits,
                &thread_control,
                |_thread_id, report| {
                    let mut w = writer.lock();
                    let _ = writeln!(w, "{}", info::depth_info_line(report));
                    let _ = w.flush();
                },
            );

            let mut w = writer.lock();
            if outcome.depth == 0 {
                let _ = writeln!(w, "info string game over, no legal moves");
            } else {
                let _ = writeln!(w, "{}", info::bestmove_line(outcome.best_move));
            }
            let _ = w.flush();
        });

        self.running = Some(RunningSearch { control, handle });
    }
}

/// Horizon used when `moves_to_go` wasn't given (§6.1 time-control fields),
/// matching the donor's `uci.rs` time-allocation scheme.
const DEFAULT_MOVES_TO_GO: u32 = 30;

/// Default search depth for a bare `go` with no limit at all.
const DEFAULT_GO_DEPTH: i32 = 6;

/// Resolves one `go` request's [`SearchLimits`], given whose turn it is (the
/// per-color time-control fields are indexed by [`crate::types::Color`]).
fn resolve_limits(position: &Position, limit: Option<GoLimit>) -> SearchLimits {
    match limit {
        None => SearchLimits::depth(DEFAULT_GO_DEPTH),
        Some(GoLimit::Depth(d)) => SearchLimits::depth(d),
        Some(GoLimit::MoveTime(d)) => SearchLimits::movetime(d),
        Some(GoLimit::Nodes(_)) => SearchLimits::unbounded(),
        Some(GoLimit::Mate(moves)) => SearchLimits::depth((moves.max(1) * 2).min(crate::constants::MAX_PLY)),
        Some(GoLimit::Infinite) => SearchLimits::unbounded(),
        Some(GoLimit::TimeControl { remaining, increment, moves_to_go }) => {
            let color = position.turn();
            let Some(time_left) = remaining[color.index()] else {
                return SearchLimits::unbounded();
            };
            let horizon = u64::from(moves_to_go.unwrap_or(DEFAULT_MOVES_TO_GO).max(1));
            let mut alloc_ms = (time_left.as_millis() as u64 / horizon).saturating_sub(50);
            alloc_ms = alloc_ms.saturating_add(increment[color.index()].as_millis() as u64 / 4);
            SearchLimits::movetime(Duration::from_millis(alloc_ms.max(1)))
        }
    }
}

impl GoRequest {
    fn node_limit(&self) -> Option<u64> {
        match self.limit {
            Some(GoLimit::Nodes(n)) => Some(n),
            _ => None,
        }
    }
}

/// Runs the command loop over `input` until `quit`, writing replies through
/// a [`Sink`] wrapping `io::stdout()`. `main.rs`'s entire job is to call
/// this and exit 0 (§6.1 "Exit code 0 on quit").
pub fn run_loop<R: BufRead>(input: R, writer: Box<dyn Sink>) {
    let mut session = Session::new(writer);
    for line in input.lines() {
        let Ok(line) = line else { break };
        if session.dispatch(&line) {
            break;
        }
    }
}
