//! Position representation: the square/piece grid, piece lists, castling and
//! en-passant state, and the incrementally maintained Zobrist key and
//! material sums.

pub mod attacks;
pub mod builder;
pub mod fen;
pub mod make_unmake;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod see;

#[cfg(test)]
mod tests;

use crate::types::{
    CastlingRights, Color, Move, Piece, PieceKind, Square, ALL_COLORS, NUM_LEGAL_SQUARES,
    NUM_PIECE_KINDS,
};
use crate::zobrist;

pub use builder::standard_setup;

/// One color's pieces, grouped by kind for move-ordering-friendly iteration
/// in [`crate::types::PIECE_LIST_ORDER`] (§3).
#[derive(Clone, Debug, Default)]
pub struct PieceLists {
    squares: [Vec<Square>; NUM_PIECE_KINDS],
}

impl PieceLists {
    fn new() -> PieceLists {
        PieceLists { squares: Default::default() }
    }

    #[must_use]
    pub fn of(&self, kind: PieceKind) -> &[Square] {
        &self.squares[kind.index()]
    }

    fn add(&mut self, kind: PieceKind, square: Square) {
        self.squares[kind.index()].push(square);
    }

    /// Removes one occurrence of `square` from the kind's list; panics if
    /// the piece-list invariant (§3 invariant i) has been violated.
    fn remove(&mut self, kind: PieceKind, square: Square) {
        let list = &mut self.squares[kind.index()];
        let pos = list.iter().position(|&s| s == square).expect("piece list out of sync with grid");
        list.swap_remove(pos);
    }

    /// Iterates every piece of this color across all kinds, in
    /// [`crate::types::PIECE_LIST_ORDER`].
    pub fn iter_in_order(&self) -> impl Iterator<Item = (PieceKind, Square)> + '_ {
        crate::types::PIECE_LIST_ORDER
            .iter()
            .flat_map(move |&kind| self.squares[kind.index()].iter().map(move |&sq| (kind, sq)))
    }
}

/// One pending "this pawn just double-stepped" fact, recorded so en-passant
/// initialization slots (§3, §4.1) can supply history that predates the
/// in-memory move stack when a position is loaded mid-game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PawnDoubleStep {
    pub pawn_color: Color,
    /// The square the pawn passed over (the en-passant target square).
    pub traversed: Square,
    /// The square the pawn landed on.
    pub landing: Square,
}

#[derive(Clone, Debug)]
pub struct Position {
    grid: [Piece; 196],
    piece_lists: [PieceLists; 4],
    castling_rights: [CastlingRights; 4],
    turn: Color,
    move_stack: Vec<Move>,
    /// Per-color pawn initialization slots (§3): supplies the "most recent
    /// double step" fact for a color when the position was loaded mid-game
    /// and that color's real most-recent move predates `move_stack`.
    ep_init: [Option<PawnDoubleStep>; 4],
    material: [i32; 4],
    king_square: [Square; 4],
    zobrist_key: u64,
}

impl Position {
    #[must_use]
    pub fn empty() -> Position {
        Position {
            grid: [Piece::NONE; 196],
            piece_lists: [PieceLists::new(), PieceLists::new(), PieceLists::new(), PieceLists::new()],
            castling_rights: [CastlingRights::ABSENT; 4],
            turn: Color::Red,
            move_stack: Vec::with_capacity(256),
            ep_init: [None; 4],
            material: [0; 4],
            king_square: [Square::NONE; 4],
            zobrist_key: 0,
        }
    }

    #[must_use]
    pub fn new_standard() -> Position {
        builder::standard_setup()
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.grid[square.dense_index()]
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_square[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self, color: Color) -> CastlingRights {
        self.castling_rights[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn piece_lists(&self, color: Color) -> &PieceLists {
        &self.piece_lists[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn zobrist_key(&self) -> u64 {
        self.zobrist_key
    }

    #[inline]
    #[must_use]
    pub fn move_stack(&self) -> &[Move] {
        &self.move_stack
    }

    #[inline]
    #[must_use]
    pub fn ep_init(&self, color: Color) -> Option<PawnDoubleStep> {
        self.ep_init[color.index()]
    }

    pub fn set_ep_init(&mut self, color: Color, step: Option<PawnDoubleStep>) {
        self.ep_init[color.index()] = step;
    }

    /// `Σ_RY piece_value − Σ_BG piece_value` (§3 invariant ii).
    #[must_use]
    pub fn material_delta(&self) -> i32 {
        self.material[Color::Red.index()] + self.material[Color::Yellow.index()]
            - self.material[Color::Blue.index()]
            - self.material[Color::Green.index()]
    }

    #[must_use]
    pub fn material_of(&self, color: Color) -> i32 {
        self.material[color.index()]
    }

    /// Places a piece on an empty square, updating the grid, piece list,
    /// material sum, king-square cache, and Zobrist key. Panics (debug only)
    /// if the square is already occupied.
    pub(crate) fn place_piece(&mut self, square: Square, color: Color, kind: PieceKind) {
        debug_assert!(self.piece_at(square).is_none());
        let piece = Piece::new(color, kind);
        self.grid[square.dense_index()] = piece;
        self.piece_lists[color.index()].add(kind, square);
        self.material[color.index()] += crate::types::piece_value(kind);
        if kind == PieceKind::King {
            self.king_square[color.index()] = square;
        }
        self.zobrist_key ^= zobrist::piece_key(kind, color, square);
    }

    /// Removes the piece on `square`, returning it. Panics (debug only) if
    /// the square is empty.
    pub(crate) fn remove_piece(&mut self, square: Square) -> Piece {
        let piece = self.piece_at(square);
        debug_assert!(piece.is_present());
        let (color, kind) = (piece.color(), piece.kind());
        self.grid[square.dense_index()] = Piece::NONE;
        self.piece_lists[color.index()].remove(kind, square);
        self.material[color.index()] -= crate::types::piece_value(kind);
        if kind == PieceKind::King {
            self.king_square[color.index()] = Square::NONE;
        }
        self.zobrist_key ^= zobrist::piece_key(kind, color, square);
        piece
    }

    pub(crate) fn set_castling_rights(&mut self, color: Color, rights: CastlingRights) {
        let current = self.castling_rights[color.index()];
        if current.kingside() {
            self.zobrist_key ^= zobrist::castling_key(color, true);
        }
        if current.queenside() {
            self.zobrist_key ^= zobrist::castling_key(color, false);
        }
        self.castling_rights[color.index()] = rights;
        if rights.kingside() {
            self.zobrist_key ^= zobrist::castling_key(color, true);
        }
        if rights.queenside() {
            self.zobrist_key ^= zobrist::castling_key(color, false);
        }
    }

    pub(crate) fn set_turn(&mut self, color: Color) {
        self.zobrist_key ^= zobrist::turn_key(self.turn);
        self.turn = color;
        self.zobrist_key ^= zobrist::turn_key(self.turn);
    }

    /// True once a color's king has been captured (§3 invariant iii: the
    /// king-square cache is the sentinel once that happens).
    #[inline]
    #[must_use]
    pub fn king_captured(&self, color: Color) -> bool {
        self.king_square(color).is_none()
    }

    /// True if `color`'s team has lost its last king (§8 scenario-backed
    /// team-elimination rule, grounded on `original_source/board.cc`'s
    /// `GetGameResult`: a captured king ends the game for that whole team).
    #[must_use]
    pub fn team_eliminated(&self, team: crate::types::Team) -> bool {
        ALL_COLORS
            .iter()
            .filter(|&&c| c.team() == team)
            .any(|&c| self.king_captured(c))
    }

    /// Rebuilds `zobrist_key` from scratch. Used by FEN loading and by tests
    /// that check the incremental key against ground truth (§8).
    pub(crate) fn recompute_zobrist(&mut self) {
        let mut key = zobrist::turn_key(self.turn);
        for &color in &ALL_COLORS {
            for (kind, square) in self.piece_lists[color.index()].iter_in_order() {
                key ^= zobrist::piece_key(kind, color, square);
            }
            let rights = self.castling_rights[color.index()];
            if rights.kingside() {
                key ^= zobrist::castling_key(color, true);
            }
            if rights.queenside() {
                key ^= zobrist::castling_key(color, false);
            }
        }
        self.zobrist_key = key;
    }
}

/// Filters a pseudo-legal move: legal iff making it does not leave its own
/// mover's king in check (§4.1 "Pseudo-legality"). Makes and unmakes `mv` on
/// `position` to decide.
#[must_use]
pub fn is_legal(position: &mut Position, mv: &Move) -> bool {
    let color = mv.mover_color();
    position.make(mv);
    let legal = !attacks::king_in_check(position, color);
    position.unmake();
    legal
}

const _: () = assert!(NUM_LEGAL_SQUARES == 160);
