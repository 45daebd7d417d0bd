//! Per-player castling rights, packed into one byte.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `(kingside, queenside, present)` packed into bits 0, 1, 2.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

const KINGSIDE_BIT: u8 = 1 << 0;
const QUEENSIDE_BIT: u8 = 1 << 1;
const PRESENT_BIT: u8 = 1 << 2;

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(PRESENT_BIT);
    pub const ABSENT: CastlingRights = CastlingRights(0);

    #[inline]
    #[must_use]
    pub const fn new(kingside: bool, queenside: bool) -> CastlingRights {
        CastlingRights(
            PRESENT_BIT | ((kingside as u8) * KINGSIDE_BIT) | ((queenside as u8) * QUEENSIDE_BIT),
        )
    }

    #[inline]
    #[must_use]
    pub const fn present(self) -> bool {
        self.0 & PRESENT_BIT != 0
    }

    #[inline]
    #[must_use]
    pub const fn kingside(self) -> bool {
        self.0 & KINGSIDE_BIT != 0
    }

    #[inline]
    #[must_use]
    pub const fn queenside(self) -> bool {
        self.0 & QUEENSIDE_BIT != 0
    }

    #[inline]
    #[must_use]
    pub const fn any(self) -> bool {
        self.0 & (KINGSIDE_BIT | QUEENSIDE_BIT) != 0
    }

    #[must_use]
    pub const fn without_kingside(self) -> CastlingRights {
        CastlingRights::new(false, self.queenside())
    }

    #[must_use]
    pub const fn without_queenside(self) -> CastlingRights {
        CastlingRights::new(self.kingside(), false)
    }
}

impl fmt::Debug for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastlingRights(K={}, Q={})", self.kingside(), self.queenside())
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::NONE
    }
}
