//! `check_mate_status <move1> <move2> ...` — applies a move sequence from
//! the standard setup and reports the resulting position's legal-move count,
//! mate/stalemate status, and per-team elimination, matching the donor's
//! `src/bin/check_mate_status.rs` adapted to four colors and two teams
//! (§4.8 "Terminal classification", §3 `team_eliminated`).

use std::env;

use fourplayer_chess_engine::position::{attacks, is_legal, movegen, notation, Position};
use fourplayer_chess_engine::types::{MoveList, ALL_COLORS};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut position = Position::new_standard();
    for token in &args {
        match notation::parse(&mut position, token) {
            Ok(mv) => position.make(&mv),
            Err(e) => {
                eprintln!("illegal move '{token}': {e}");
                std::process::exit(1);
            }
        }
    }

    let turn = position.turn();
    let mut pseudo = MoveList::new();
    movegen::generate_pseudo_legal(&position, &mut pseudo);
    let legal: Vec<_> = pseudo.iter().copied().filter(|mv| is_legal(&mut position, mv)).collect();
    let in_check = attacks::king_in_check(&position, turn);
    let checkmate = legal.is_empty() && in_check;
    let stalemate = legal.is_empty() && !in_check;

    println!("side_to_move: {turn:?}");
    println!("in_check: {in_check}");
    println!("legal_moves: {}", legal.len());
    println!("checkmate: {checkmate}");
    println!("stalemate: {stalemate}");
    for &color in &ALL_COLORS {
        println!(
            "{color:?}_king_captured: {}  team_eliminated: {}",
            position.king_captured(color),
            position.team_eliminated(color.team())
        );
    }
    for mv in &legal {
        println!("{mv}");
    }
}
