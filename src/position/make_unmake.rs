//! Make/unmake: symmetric state transitions that keep the grid, piece
//! lists, king-square cache, material sums, castling rights, and Zobrist key
//! all consistent, plus their null-move counterparts (§4.2).

use crate::types::{Color, Move, PieceKind};

use super::Position;

impl Position {
    /// Applies `mv`, appending it to the move stack and advancing the turn.
    /// Pairs with [`Position::unmake`], which must be called with no
    /// intervening `make` to restore the exact prior state (§8).
    pub fn make(&mut self, mv: &Move) {
        let color = mv.mover_color();

        if let Some(ep) = mv.en_passant() {
            self.remove_piece(ep.square);
        }
        if mv.captured().is_some() {
            self.remove_piece(mv.to());
        }

        self.remove_piece(mv.from());
        let landed_kind = mv.promotion().unwrap_or(mv.mover().kind());
        self.place_piece(mv.to(), color, landed_kind);

        if let Some(castle) = mv.castle() {
            self.remove_piece(castle.rook_from);
            self.place_piece(castle.rook_to, color, PieceKind::Rook);
        }

        for &c in &crate::types::ALL_COLORS {
            self.set_castling_rights(c, mv.rights_after()[c.index()]);
        }

        self.move_stack_push(*mv);
        self.set_turn(color.next());
    }

    /// Inverts the most recent [`Position::make`] call exactly (§8).
    pub fn unmake(&mut self) {
        let mv = self.move_stack_pop();
        let color = mv.mover_color();

        self.set_turn(color);

        for &c in &crate::types::ALL_COLORS {
            self.set_castling_rights(c, mv.rights_before()[c.index()]);
        }

        if let Some(castle) = mv.castle() {
            self.remove_piece(castle.rook_to);
            self.place_piece(castle.rook_from, color, PieceKind::Rook);
        }

        self.remove_piece(mv.to());
        self.place_piece(mv.from(), color, mv.mover().kind());

        if let Some(captured) = mv.captured() {
            self.place_piece(mv.to(), captured.color(), captured.kind());
        }
        if let Some(ep) = mv.en_passant() {
            self.place_piece(ep.square, ep.captured.color(), ep.captured.kind());
        }
    }

    /// Flips the turn without moving a piece, for null-move pruning (§4.2,
    /// §4.4). `unmake_null` is its exact inverse.
    pub fn make_null(&mut self) {
        self.set_turn(self.turn().next());
    }

    pub fn unmake_null(&mut self, previous: Color) {
        self.set_turn(previous);
    }

    fn move_stack_push(&mut self, mv: Move) {
        self.move_stack.push(mv);
    }

    fn move_stack_pop(&mut self) -> Move {
        self.move_stack.pop().expect("unmake called with an empty move stack")
    }
}

/// True if `mv` captured a king — the search's immediate-fail-high signal
/// (§4.8 terminal classification), grounded on the original's
/// `CheckWasLastMoveKingCapture`. Combined en-passant captures never take a
/// king (en-passant only ever captures a pawn), so only the standard
/// capture slot is checked.
#[must_use]
pub fn captured_a_king(mv: &Move) -> bool {
    matches!(mv.captured(), Some(p) if p.kind() == PieceKind::King)
}
