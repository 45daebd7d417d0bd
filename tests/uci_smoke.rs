//! A scripted UCI transcript driven through the public `run_loop` entry
//! point, exercising the handshake, position setup, a bounded search, and
//! shutdown end to end (§6.1).

mod common;

use std::io::Cursor;

use common::{build_fen, p};
use fourplayer_chess_engine::types::{Color, PieceKind};
use fourplayer_chess_engine::uci::{self, Sink};

#[test]
fn scripted_transcript_handshake_through_quit_does_not_panic() {
    let script = "\
uci\n\
isready\n\
setoption name Threads value 1\n\
ucinewgame\n\
position startpos\n\
go depth 2\n\
stop\n\
position startpos moves\n\
go movetime 10\n\
stop\n\
quit\n\
";
    let output: Box<dyn Sink> = Box::new(Vec::<u8>::new());
    uci::run_loop(Cursor::new(script.as_bytes()), output);
}

#[test]
fn an_explicit_fen_position_followed_by_a_short_search_does_not_panic() {
    let fen = build_fen(
        Color::Red,
        [false, false, false, false],
        [false, false, false, false],
        &[
            p(13, 7, Color::Red, PieceKind::King),
            p(0, 6, Color::Yellow, PieceKind::King),
            p(7, 0, Color::Blue, PieceKind::King),
            p(6, 13, Color::Green, PieceKind::King),
        ],
    );
    let script = format!("position fen {fen}\ngo depth 1\nstop\nquit\n");
    let output: Box<dyn Sink> = Box::new(Vec::<u8>::new());
    uci::run_loop(Cursor::new(script.into_bytes()), output);
}

#[test]
fn quit_without_any_prior_command_exits_cleanly() {
    let output: Box<dyn Sink> = Box::new(Vec::<u8>::new());
    uci::run_loop(Cursor::new(b"quit\n".as_slice()), output);
}
