//! End-to-end mating scenarios driven through the public search driver,
//! covering the "finds a forced mate" and "avoids walking into one" halves
//! of the terminal-classification invariants. Positions are constructed
//! through the public FEN parser (never `Position::place_piece`, which is
//! crate-private) so these exercise the same path a real `position fen`
//! UCI command would.

mod common;

use common::{build_fen, p};

use fourplayer_chess_engine::constants::MATE_THRESHOLD;
use fourplayer_chess_engine::engine::{self, SearchLimits};
use fourplayer_chess_engine::eval::Weights;
use fourplayer_chess_engine::position::{attacks, is_legal, movegen};
use fourplayer_chess_engine::search::{SearchControl, SearchParams};
use fourplayer_chess_engine::tt::TranspositionTable;
use fourplayer_chess_engine::types::{Color, MoveList, PieceKind};

fn run_search(fen: &str, depth: i32) -> engine::SearchOutcome {
    let position = common::parse(fen);
    let tt = TranspositionTable::new(8);
    let params = SearchParams::default();
    let weights = Weights::default();
    let control = SearchControl::new(None);
    engine::run(&position, &tt, &params, &weights, 1, SearchLimits::depth(depth), &control, |_, _| {})
}

/// Yellow's king is boxed in on its home square by its own knights and
/// pawns; a blue queen one diagonal step from giving mate is defended by a
/// blue knight, so the king cannot safely capture it either. Blue to move
/// must find the mating queen move.
fn boxed_yellow_king_mate_fen() -> String {
    build_fen(
        Color::Blue,
        [false, false, false, false],
        [false, false, false, false],
        &[
            p(0, 6, Color::Yellow, PieceKind::King),
            p(0, 5, Color::Yellow, PieceKind::Knight),
            p(0, 7, Color::Yellow, PieceKind::Knight),
            p(1, 5, Color::Yellow, PieceKind::Pawn),
            p(1, 7, Color::Yellow, PieceKind::Pawn),
            p(5, 2, Color::Blue, PieceKind::Queen),
            p(3, 7, Color::Blue, PieceKind::Knight),
            p(7, 0, Color::Blue, PieceKind::King),
            p(13, 7, Color::Red, PieceKind::King),
            p(6, 13, Color::Green, PieceKind::King),
        ],
    )
}

#[test]
fn finds_the_only_mating_move() {
    let outcome = run_search(&boxed_yellow_king_mate_fen(), 3);

    let best = outcome.best_move.expect("a mating move must be found");
    assert_eq!((best.from().row(), best.from().col()), (5, 2), "expected the queen to move");
    assert_eq!((best.to().row(), best.to().col()), (1, 6), "expected the queen to land on the mating square");
    assert!(outcome.score > MATE_THRESHOLD, "score {} should reflect a found mate", outcome.score);
}

#[test]
fn the_mating_square_is_not_a_safe_recapture() {
    let mut position = common::parse(&boxed_yellow_king_mate_fen());
    let mut moves = MoveList::new();
    movegen::generate_pseudo_legal(&position, &mut moves);
    let queen_move = moves
        .iter()
        .copied()
        .find(|mv| (mv.from().row(), mv.from().col()) == (5, 2) && (mv.to().row(), mv.to().col()) == (1, 6))
        .expect("the mating queen move must be pseudo-legal");
    position.make(&queen_move);

    let legal = {
        let mut pseudo = MoveList::new();
        movegen::generate_pseudo_legal(&position, &mut pseudo);
        pseudo.iter().copied().filter(|mv| is_legal(&mut position, mv)).count()
    };
    let in_check = attacks::king_in_check(&position, Color::Yellow);

    assert_eq!(position.turn(), Color::Yellow);
    assert!(in_check, "yellow's king should be in check after the queen move");
    assert_eq!(legal, 0, "yellow should have no legal replies: checkmate");
}

/// Same box around yellow's king, but it is yellow to move, one ply before
/// blue's queen would reach the mating square, and yellow has a knight that
/// can interpose on the queen's diagonal (2,5). Green and Red have only
/// their lone kings, too far away to affect the outcome either way, so the
/// search explores every combination of their replies along with the
/// interposition and must still find a score better than a forced loss.
fn yellow_can_interpose_fen() -> String {
    build_fen(
        Color::Yellow,
        [false, false, false, false],
        [false, false, false, false],
        &[
            p(0, 6, Color::Yellow, PieceKind::King),
            p(0, 5, Color::Yellow, PieceKind::Knight),
            p(0, 7, Color::Yellow, PieceKind::Knight),
            p(1, 5, Color::Yellow, PieceKind::Pawn),
            p(1, 7, Color::Yellow, PieceKind::Pawn),
            p(0, 4, Color::Yellow, PieceKind::Knight),
            p(5, 2, Color::Blue, PieceKind::Queen),
            p(3, 7, Color::Blue, PieceKind::Knight),
            p(7, 0, Color::Blue, PieceKind::King),
            p(13, 7, Color::Red, PieceKind::King),
            p(6, 13, Color::Green, PieceKind::King),
        ],
    )
}

#[test]
fn avoids_the_forced_mate_when_an_interposition_exists() {
    let outcome = run_search(&yellow_can_interpose_fen(), 5);
    assert!(outcome.best_move.is_some());
    assert!(
        outcome.score > -MATE_THRESHOLD,
        "yellow has a defense, so the backed-up score ({}) must not be a forced-mate-against-yellow score",
        outcome.score
    );
}
