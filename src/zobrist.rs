//! Zobrist hashing for four-player positions.
//!
//! Provides incrementally-updatable 64-bit position hashes for the
//! transposition table (§4.6).

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::types::{Color, PieceKind, Square, NUM_LEGAL_SQUARES, NUM_PIECE_KINDS};

struct ZobristKeys {
    /// `piece_keys[kind][color][legal_square_index]`.
    piece_keys: [[[u64; NUM_LEGAL_SQUARES]; 4]; NUM_PIECE_KINDS],
    /// One key per color to move, XORed in/out as the turn advances.
    turn_keys: [u64; 4],
    /// `castling_keys[color][kingside=0 | queenside=1]`.
    castling_keys: [[u64; 2]; 4],
}

impl ZobristKeys {
    fn new() -> Self {
        // Fixed seed: identical hashes across runs, required for TT tests
        // and for comparing saved positions across process restarts.
        let mut rng = StdRng::seed_from_u64(0x464F55_52504C41); // "FOURPLA"

        let mut piece_keys = [[[0u64; NUM_LEGAL_SQUARES]; 4]; NUM_PIECE_KINDS];
        for kind in &mut piece_keys {
            for color in kind.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let mut turn_keys = [0u64; 4];
        for key in &mut turn_keys {
            *key = rng.gen();
        }

        let mut castling_keys = [[0u64; 2]; 4];
        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        ZobristKeys { piece_keys, turn_keys, castling_keys }
    }
}

static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[inline]
#[must_use]
pub fn piece_key(kind: PieceKind, color: Color, square: Square) -> u64 {
    ZOBRIST.piece_keys[kind.index()][color.index()][square.legal_index()]
}

#[inline]
#[must_use]
pub fn turn_key(color: Color) -> u64 {
    ZOBRIST.turn_keys[color.index()]
}

#[inline]
#[must_use]
pub fn castling_key(color: Color, kingside: bool) -> u64 {
    ZOBRIST.castling_keys[color.index()][usize::from(!kingside)]
}
