//! Position-layer invariants (§8): make/unmake reversibility, Zobrist
//! consistency, null-move involution, king-location cache, material sum,
//! move-generator legality, symmetry, plus castling availability and SEE
//! sanity scenarios.

use crate::types::{ALL_COLORS, MoveList};

use super::movegen;
use super::{is_legal, Position};

fn legal_moves(position: &mut Position) -> Vec<crate::types::Move> {
    let mut pseudo = MoveList::new();
    movegen::generate_pseudo_legal(position, &mut pseudo);
    pseudo.iter().copied().filter(|mv| is_legal(position, mv)).collect()
}

fn assert_material_matches_lists(position: &Position) {
    for &color in &ALL_COLORS {
        let sum: i32 = position
            .piece_lists(color)
            .iter_in_order()
            .map(|(kind, _)| crate::types::piece_value(kind))
            .sum();
        assert_eq!(sum, position.material_of(color), "material sum out of sync for {color:?}");
    }
}

fn assert_zobrist_matches_recompute(position: &Position) {
    let mut clone = position.clone();
    clone.recompute_zobrist();
    assert_eq!(clone.zobrist_key(), position.zobrist_key(), "zobrist key drifted from recomputation");
}

fn assert_king_cache_matches_grid(position: &Position) {
    for &color in &ALL_COLORS {
        let cached = position.king_square(color);
        if cached.is_none() {
            continue;
        }
        let piece = position.piece_at(cached);
        assert!(piece.is_present() && piece.color() == color && piece.kind() == crate::types::PieceKind::King);
    }
}

#[test]
fn make_unmake_restores_every_field_one_ply() {
    let mut pos = Position::new_standard();
    let before_key = pos.zobrist_key();
    let before_material = ALL_COLORS.map(|c| pos.material_of(c));

    for mv in legal_moves(&mut pos) {
        let key_before = pos.zobrist_key();
        pos.make(&mv);
        pos.unmake();
        assert_eq!(pos.zobrist_key(), key_before);
        assert_eq!(pos.zobrist_key(), before_key);
        assert_eq!(ALL_COLORS.map(|c| pos.material_of(c)), before_material);
        assert_material_matches_lists(&pos);
        assert_king_cache_matches_grid(&pos);
    }
}

#[test]
fn make_unmake_restores_through_a_short_sequence() {
    let mut pos = Position::new_standard();
    let mut keys = vec![pos.zobrist_key()];
    let mut applied = Vec::new();

    for _ in 0..6 {
        let moves = legal_moves(&mut pos);
        let Some(mv) = moves.into_iter().next() else { break };
        pos.make(&mv);
        applied.push(mv);
        keys.push(pos.zobrist_key());
        assert_zobrist_matches_recompute(&pos);
    }

    while let Some(expected_key) = keys.pop() {
        assert_eq!(pos.zobrist_key(), expected_key);
        if applied.pop().is_some() {
            pos.unmake();
        }
    }
}

#[test]
fn null_move_is_its_own_inverse() {
    let mut pos = Position::new_standard();
    let turn_before = pos.turn();
    let key_before = pos.zobrist_key();

    pos.make_null();
    assert_ne!(pos.turn(), turn_before);
    pos.unmake_null(turn_before);

    assert_eq!(pos.turn(), turn_before);
    assert_eq!(pos.zobrist_key(), key_before);
}

#[test]
fn king_cache_matches_grid_at_standard_setup() {
    let pos = Position::new_standard();
    assert_king_cache_matches_grid(&pos);
    for &color in &ALL_COLORS {
        assert!(pos.king_square(color).is_present());
    }
}

#[test]
fn material_delta_matches_team_sums() {
    let pos = Position::new_standard();
    assert_material_matches_lists(&pos);
    let expected = pos.material_of(crate::types::Color::Red) + pos.material_of(crate::types::Color::Yellow)
        - pos.material_of(crate::types::Color::Blue)
        - pos.material_of(crate::types::Color::Green);
    assert_eq!(pos.material_delta(), expected);
}

#[test]
fn generated_moves_originate_from_the_side_to_move() {
    let mut pos = Position::new_standard();
    let turn = pos.turn();
    let mut pseudo = MoveList::new();
    movegen::generate_pseudo_legal(&mut pos, &mut pseudo);
    assert!(!pseudo.is_empty());
    for mv in pseudo.iter() {
        assert_eq!(mv.mover_color(), turn);
        assert!(mv.from().is_present());
        assert!(mv.to().is_present());
        let occupant_before_move = pos.piece_at(mv.from());
        assert_eq!(occupant_before_move, mv.mover());
        if let Some(captured) = mv.captured() {
            assert_ne!(captured.color().team(), turn.team());
        }
    }
}

#[test]
fn generating_and_making_always_advances_the_turn() {
    let mut pos = Position::new_standard();
    let turn = pos.turn();
    for mv in legal_moves(&mut pos) {
        pos.make(&mv);
        assert_ne!(pos.turn(), turn);
        pos.unmake();
    }
}

#[test]
fn castling_available_with_clear_unattacked_path() {
    let pos = Position::new_standard();
    let mut moves = MoveList::new();
    movegen::generate_pseudo_legal(&pos, &mut moves);
    let king_from = pos.king_square(pos.turn());
    let castles: Vec<_> = moves.iter().filter(|mv| mv.is_castle() && mv.from() == king_from).collect();
    // Blocked by the knight/bishop/queen still on the back rank at the
    // standard setup; castling rights remain present even though no
    // castling move is legal yet.
    assert!(castles.is_empty());
    assert!(pos.castling_rights(pos.turn()).any());
}

#[test]
fn static_exchange_evaluation_queen_versus_two_pawns() {
    use super::see::see_capture;
    use crate::types::{Color, Move, PieceKind, Square};

    let mut pos = Position::empty();
    pos.place_piece(Square::new(13, 7), Color::Red, PieceKind::King);
    pos.place_piece(Square::new(0, 6), Color::Yellow, PieceKind::King);
    pos.place_piece(Square::new(6, 13), Color::Green, PieceKind::King);

    // A lone queen captures onto a square defended by two blue pawns.
    pos.place_piece(Square::new(7, 7), Color::Red, PieceKind::Queen);
    let capture_square = Square::new(5, 7);
    pos.place_piece(capture_square, Color::Blue, PieceKind::Pawn);
    pos.place_piece(Square::new(6, 6), Color::Blue, PieceKind::Pawn);
    pos.place_piece(Square::new(6, 8), Color::Blue, PieceKind::Pawn);
    pos.place_piece(Square::new(7, 0), Color::Blue, PieceKind::King);
    pos.recompute_zobrist();

    let mover = pos.piece_at(Square::new(7, 7));
    let victim = pos.piece_at(capture_square);
    let mv = Move::new(Square::new(7, 7), capture_square, mover, Some(victim), None, None, None,
        [pos.castling_rights(Color::Red), pos.castling_rights(Color::Blue), pos.castling_rights(Color::Yellow), pos.castling_rights(Color::Green)],
        [pos.castling_rights(Color::Red), pos.castling_rights(Color::Blue), pos.castling_rights(Color::Yellow), pos.castling_rights(Color::Green)]);

    let see = see_capture(&mut pos, &mv);
    assert!(see <= 0, "queen capturing into two defending pawns should not win material, got {see}");
}
