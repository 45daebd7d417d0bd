//! `perft [depth] [fen]` — four-player legal-move-count divider (§10.1),
//! adapted from the donor's `src/bin/perft_divide.rs`. Defaults to the
//! standard setup at depth 3; an explicit FEN (§6.2 dialect) may be given as
//! the remaining arguments, joined back into one string.

use std::env;
use std::time::Instant;

use fourplayer_chess_engine::position::{fen, perft, Position};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let depth: u32 = args.first().and_then(|s| s.parse().ok()).unwrap_or(3);
    let mut position = if args.len() > 1 {
        let fen_text = args[1..].join(" ");
        match fen::parse(&fen_text) {
            Ok(position) => position,
            Err(e) => {
                eprintln!("invalid FEN: {e}");
                std::process::exit(1);
            }
        }
    } else {
        Position::new_standard()
    };

    println!("Perft divide at depth {depth}");
    let start = Instant::now();
    let mut total = 0u64;
    for (mv, count) in perft::perft_divide(&mut position, depth) {
        println!("  {mv}: {count}");
        total += count;
    }
    let elapsed = start.elapsed();
    println!("Total: {total} in {elapsed:?}");
}
