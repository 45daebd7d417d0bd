//! Colors, teams and pieces.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four players. Turn order is `Red -> Blue -> Yellow -> Green`,
/// matching the declaration order below.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Blue = 1,
    Yellow = 2,
    Green = 3,
}

pub const ALL_COLORS: [Color; 4] = [Color::Red, Color::Blue, Color::Yellow, Color::Green];

impl Color {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    #[must_use]
    pub const fn from_index(i: usize) -> Color {
        match i & 3 {
            0 => Color::Red,
            1 => Color::Blue,
            2 => Color::Yellow,
            _ => Color::Green,
        }
    }

    /// The color whose turn follows this one.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Color {
        Color::from_index(self.index() + 1)
    }

    #[inline]
    #[must_use]
    pub const fn team(self) -> Team {
        match self {
            Color::Red | Color::Yellow => Team::RedYellow,
            Color::Blue | Color::Green => Team::BlueGreen,
        }
    }

    /// The teammate of this color (the other color on the same team).
    #[inline]
    #[must_use]
    pub const fn teammate(self) -> Color {
        match self {
            Color::Red => Color::Yellow,
            Color::Yellow => Color::Red,
            Color::Blue => Color::Green,
            Color::Green => Color::Blue,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Blue => 'b',
            Color::Yellow => 'y',
            Color::Green => 'g',
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<Color> {
        match c.to_ascii_lowercase() {
            'r' => Some(Color::Red),
            'b' => Some(Color::Blue),
            'y' => Some(Color::Yellow),
            'g' => Some(Color::Green),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
        };
        write!(f, "{name}")
    }
}

/// One of the two teams: Red+Yellow versus Blue+Green.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Team {
    RedYellow,
    BlueGreen,
}

impl Team {
    #[inline]
    #[must_use]
    pub const fn other(self) -> Team {
        match self {
            Team::RedYellow => Team::BlueGreen,
            Team::BlueGreen => Team::RedYellow,
        }
    }
}

/// A chess piece kind, ordered `Pawn..King` for array indexing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

/// Number of distinct piece kinds.
pub const NUM_PIECE_KINDS: usize = 6;

/// Move-ordering preference for iterating a color's piece lists, per §3:
/// king first (cheap to generate, governs check/castling), then pawns,
/// knights, bishops, rooks, queens.
pub const PIECE_LIST_ORDER: [PieceKind; NUM_PIECE_KINDS] = [
    PieceKind::King,
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

/// The four promotion targets, in the order moves are emitted (§4.1).
pub const PROMOTION_KINDS: [PieceKind; 4] =
    [PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen];

impl PieceKind {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A single byte encoding "no piece" or any of the 24 (color, kind) piece
/// variants: bit 7 presence, bits 5-6 color, bits 2-4 kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece(u8);

const PRESENT_BIT: u8 = 1 << 7;
const COLOR_SHIFT: u8 = 5;
const COLOR_MASK: u8 = 0b0110_0000;
const KIND_SHIFT: u8 = 2;
const KIND_MASK: u8 = 0b0001_1100;

impl Piece {
    pub const NONE: Piece = Piece(0);

    #[inline]
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece(PRESENT_BIT | ((color as u8) << COLOR_SHIFT) | ((kind as u8) << KIND_SHIFT))
    }

    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        self.0 & PRESENT_BIT != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        !self.is_present()
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        Color::from_index(((self.0 & COLOR_MASK) >> COLOR_SHIFT) as usize)
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        match (self.0 & KIND_MASK) >> KIND_SHIFT {
            0 => PieceKind::Pawn,
            1 => PieceKind::Knight,
            2 => PieceKind::Bishop,
            3 => PieceKind::Rook,
            4 => PieceKind::Queen,
            _ => PieceKind::King,
        }
    }

    #[inline]
    #[must_use]
    pub const fn team(self) -> Team {
        self.color().team()
    }

    #[must_use]
    pub fn as_option(self) -> Option<(Color, PieceKind)> {
        if self.is_present() {
            Some((self.color(), self.kind()))
        } else {
            None
        }
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "Piece(none)")
        } else {
            write!(f, "Piece({:?} {:?})", self.color(), self.kind())
        }
    }
}

/// Centipawn piece values, indexed by [`PieceKind::index`] (§4.5 term 1).
pub const PIECE_VALUES: [i32; NUM_PIECE_KINDS] = [50, 300, 400, 500, 1000, 10000];

#[inline]
#[must_use]
pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_roundtrip() {
        for &color in &ALL_COLORS {
            for kind in [
                PieceKind::Pawn,
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Rook,
                PieceKind::Queen,
                PieceKind::King,
            ] {
                let p = Piece::new(color, kind);
                assert!(p.is_present());
                assert_eq!(p.color(), color);
                assert_eq!(p.kind(), kind);
            }
        }
    }

    #[test]
    fn turn_order_cycles() {
        assert_eq!(Color::Red.next(), Color::Blue);
        assert_eq!(Color::Blue.next(), Color::Yellow);
        assert_eq!(Color::Yellow.next(), Color::Green);
        assert_eq!(Color::Green.next(), Color::Red);
    }

    #[test]
    fn teams_are_diagonal() {
        assert_eq!(Color::Red.team(), Color::Yellow.team());
        assert_eq!(Color::Blue.team(), Color::Green.team());
        assert_ne!(Color::Red.team(), Color::Blue.team());
    }
}
