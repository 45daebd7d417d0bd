//! Standard initial setup.
//!
//! Square values below are derived from `original_source/board.cc`'s
//! `CreateStandardSetup` (a starting square per color plus a per-color step
//! direction, walked across the 8 back-row piece kinds), not transcribed
//! from the spec's prose, which only gives promotion ranks and general
//! geometry.

use crate::types::{CastlingRights, Color, PieceKind, Square};

use super::Position;

const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

struct ColorSetup {
    color: Color,
    /// Square of the first (queenside rook) piece.
    start: (i8, i8),
    /// Added to `start` per back-rank piece index to get that piece's square.
    step: (i8, i8),
    /// Added to each piece's square to get that color's pawn on the same file/rank.
    pawn_offset: (i8, i8),
}

const SETUPS: [ColorSetup; 4] = [
    ColorSetup { color: Color::Red, start: (13, 3), step: (0, 1), pawn_offset: (-1, 0) },
    ColorSetup { color: Color::Blue, start: (3, 0), step: (1, 0), pawn_offset: (0, 1) },
    ColorSetup { color: Color::Yellow, start: (0, 10), step: (0, -1), pawn_offset: (1, 0) },
    ColorSetup { color: Color::Green, start: (10, 13), step: (-1, 0), pawn_offset: (0, -1) },
];

/// Builds the standard four-player starting position, Red to move, all
/// castling rights present.
#[must_use]
pub fn standard_setup() -> Position {
    let mut position = Position::empty();

    for setup in &SETUPS {
        let mut row = setup.start.0;
        let mut col = setup.start.1;
        for &kind in &BACK_RANK_ORDER {
            let square = Square::new(row, col);
            let pawn_square = Square::new(row + setup.pawn_offset.0, col + setup.pawn_offset.1);
            position.place_piece(square, setup.color, kind);
            position.place_piece(pawn_square, setup.color, PieceKind::Pawn);
            row += setup.step.0;
            col += setup.step.1;
        }
        position.set_castling_rights(setup.color, CastlingRights::new(true, true));
    }

    position.recompute_zobrist();
    position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn king_squares_match_derived_geometry() {
        let pos = standard_setup();
        assert_eq!(pos.king_square(Color::Red), Square::new(13, 7));
        assert_eq!(pos.king_square(Color::Blue), Square::new(7, 0));
        assert_eq!(pos.king_square(Color::Yellow), Square::new(0, 6));
        assert_eq!(pos.king_square(Color::Green), Square::new(6, 13));
    }

    #[test]
    fn every_color_has_sixteen_pieces() {
        let pos = standard_setup();
        for &color in &crate::types::ALL_COLORS {
            assert_eq!(pos.material_of(color), 8 * 50 + 2 * 300 + 2 * 400 + 2 * 500 + 1000 + 10000);
        }
    }

    #[test]
    fn all_castling_rights_present_at_start() {
        let pos = standard_setup();
        for &color in &crate::types::ALL_COLORS {
            let rights = pos.castling_rights(color);
            assert!(rights.kingside() && rights.queenside());
        }
    }
}
