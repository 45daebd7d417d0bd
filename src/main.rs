//! Binary entry point: wires stdin/stdout to the UCI command loop (§6.1).
//! `env_logger` is only initialized here, behind the `logging` feature — the
//! library itself never touches process-wide logging state (§10.2).

use std::io;

use fourplayer_chess_engine::uci;

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_default_env().init();

    let stdin = io::stdin();
    uci::run_loop(stdin.lock(), Box::new(io::stdout()));
}
