//! Castling-availability and castling-through-check scenarios, built on the
//! real per-color castling geometry rather than guessed squares: Red's king
//! starts at (13,7), its kingside rook at (13,10), its queenside rook at
//! (13,3), matching `position::movegen::kings::castle_spec(Color::Red)`.

mod common;

use common::{build_fen, p};

use fourplayer_chess_engine::position::movegen;
use fourplayer_chess_engine::types::{Color, MoveList, PieceKind};

#[test]
fn castling_available_both_sides_with_a_clear_unattacked_path() {
    let fen = build_fen(
        Color::Red,
        [true, false, false, false],
        [true, false, false, false],
        &[
            p(13, 7, Color::Red, PieceKind::King),
            p(13, 10, Color::Red, PieceKind::Rook),
            p(13, 3, Color::Red, PieceKind::Rook),
            p(0, 6, Color::Yellow, PieceKind::King),
            p(7, 0, Color::Blue, PieceKind::King),
            p(6, 13, Color::Green, PieceKind::King),
        ],
    );
    let position = common::parse(&fen);

    let mut moves = MoveList::new();
    movegen::generate_pseudo_legal(&position, &mut moves);
    let castles: Vec<_> = moves.iter().filter(|mv| mv.is_castle()).collect();

    assert_eq!(castles.len(), 2, "expected both kingside and queenside castling moves, got {}", castles.len());
    assert!(castles.iter().any(|mv| mv.to().row() == 13 && mv.to().col() == 9), "missing kingside castle");
    assert!(castles.iter().any(|mv| mv.to().row() == 13 && mv.to().col() == 5), "missing queenside castle");
}

#[test]
fn castling_through_an_attacked_square_is_not_generated() {
    // A blue rook on the same file as the kingside-crossed square (13,8)
    // covers it, disabling that side only; the queenside path is untouched.
    let fen = build_fen(
        Color::Red,
        [true, false, false, false],
        [true, false, false, false],
        &[
            p(13, 7, Color::Red, PieceKind::King),
            p(13, 10, Color::Red, PieceKind::Rook),
            p(13, 3, Color::Red, PieceKind::Rook),
            p(9, 8, Color::Blue, PieceKind::Rook),
            p(0, 6, Color::Yellow, PieceKind::King),
            p(7, 0, Color::Blue, PieceKind::King),
            p(6, 13, Color::Green, PieceKind::King),
        ],
    );
    let position = common::parse(&fen);

    let mut moves = MoveList::new();
    movegen::generate_pseudo_legal(&position, &mut moves);
    let castles: Vec<_> = moves.iter().filter(|mv| mv.is_castle()).collect();

    assert_eq!(castles.len(), 1, "only the queenside castle should remain legal, got {}", castles.len());
    assert_eq!(castles[0].to().row(), 13);
    assert_eq!(castles[0].to().col(), 5);
}

#[test]
fn castling_rights_absent_generates_no_castle_moves() {
    let fen = build_fen(
        Color::Red,
        [false, false, false, false],
        [false, false, false, false],
        &[
            p(13, 7, Color::Red, PieceKind::King),
            p(13, 10, Color::Red, PieceKind::Rook),
            p(13, 3, Color::Red, PieceKind::Rook),
            p(0, 6, Color::Yellow, PieceKind::King),
            p(7, 0, Color::Blue, PieceKind::King),
            p(6, 13, Color::Green, PieceKind::King),
        ],
    );
    let position = common::parse(&fen);

    let mut moves = MoveList::new();
    movegen::generate_pseudo_legal(&position, &mut moves);
    assert!(moves.iter().all(|mv| !mv.is_castle()));
}
