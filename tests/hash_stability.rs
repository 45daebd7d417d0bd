//! Zobrist-hash stability over a real move sequence (§8 "hash stability"),
//! plus a FEN roundtrip mid-sequence. The move sequence is generated by
//! always playing the first legal move in generation order rather than a
//! hand-authored notation string, since there is no way to check a
//! hand-written sequence's legality without running the engine.

use fourplayer_chess_engine::position::{fen, is_legal, movegen, Position};
use fourplayer_chess_engine::types::{MoveList, ALL_COLORS};

fn first_legal_move(position: &mut Position) -> Option<fourplayer_chess_engine::types::Move> {
    let mut moves = MoveList::new();
    movegen::generate_pseudo_legal(position, &mut moves);
    moves.iter().copied().find(|mv| is_legal(position, mv))
}

#[test]
fn incremental_zobrist_matches_recomputation_every_ply_of_a_long_sequence() {
    let mut position = Position::new_standard();

    for ply in 0..40 {
        let Some(mv) = first_legal_move(&mut position) else { break };
        position.make(&mv);

        let mut recomputed = position.clone();
        recomputed.recompute_zobrist();
        assert_eq!(
            position.zobrist_key(),
            recomputed.zobrist_key(),
            "zobrist key drifted from incremental maintenance at ply {ply}"
        );
    }
}

#[test]
fn fen_roundtrip_preserves_hash_and_material_mid_sequence() {
    let mut position = Position::new_standard();

    for _ in 0..15 {
        let Some(mv) = first_legal_move(&mut position) else { break };
        position.make(&mv);
    }

    let text = fen::to_fen(&position);
    let reparsed = fen::parse(&text).expect("a position's own FEN must parse");

    assert_eq!(reparsed.zobrist_key(), position.zobrist_key());
    assert_eq!(reparsed.turn(), position.turn());
    for &color in &ALL_COLORS {
        assert_eq!(reparsed.king_square(color), position.king_square(color));
        assert_eq!(reparsed.material_of(color), position.material_of(color));
        assert_eq!(reparsed.castling_rights(color).kingside(), position.castling_rights(color).kingside());
        assert_eq!(reparsed.castling_rights(color).queenside(), position.castling_rights(color).queenside());
    }
}

#[test]
fn unmaking_the_whole_sequence_restores_the_starting_hash() {
    let mut position = Position::new_standard();
    let start_key = position.zobrist_key();
    let mut applied = 0;

    for _ in 0..40 {
        let Some(mv) = first_legal_move(&mut position) else { break };
        position.make(&mv);
        applied += 1;
    }

    for _ in 0..applied {
        position.unmake();
    }

    assert_eq!(position.zobrist_key(), start_key);
}
