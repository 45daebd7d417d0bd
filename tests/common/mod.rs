//! Shared scaffolding for the integration suite: a placement-string builder
//! that walks the board with [`Square::is_none`] the same way
//! `position::fen`'s own tests do, so hand-authored boards can't desync from
//! the corner layout or the rank/file counts the parser enforces.

use fourplayer_chess_engine::position::fen;
use fourplayer_chess_engine::position::Position;
use fourplayer_chess_engine::types::{Color, PieceKind, Square, BOARD_SIDE};

/// One piece to drop onto the board for [`build_fen`].
#[derive(Clone, Copy)]
pub struct Placement {
    pub square: Square,
    pub color: Color,
    pub kind: PieceKind,
}

pub fn p(row: i8, col: i8, color: Color, kind: PieceKind) -> Placement {
    Placement { square: Square::new(row, col), color, kind }
}

/// Builds a full dash-separated FEN string for `turn` from a sparse piece
/// list, with independent kingside/queenside castling-right bits per color
/// (in [`fourplayer_chess_engine::types::ALL_COLORS`] order).
#[must_use]
pub fn build_fen(turn: Color, kingside: [bool; 4], queenside: [bool; 4], pieces: &[Placement]) -> String {
    let bits = |flags: [bool; 4]| {
        flags.iter().map(|&b| if b { "1" } else { "0" }).collect::<Vec<_>>().join(",")
    };

    let mut ranks = Vec::with_capacity(BOARD_SIDE as usize);
    for row in 0..BOARD_SIDE {
        let mut tokens = Vec::new();
        let mut col = 0i8;
        while col < BOARD_SIDE {
            let square = Square::new(row, col);
            if square.is_none() {
                tokens.push("x".to_string());
                col += 1;
                continue;
            }
            if let Some(placed) = pieces.iter().find(|pl| pl.square == square) {
                tokens.push(format!("{}{}", placed.color.as_char(), placed.kind.as_char()));
                col += 1;
                continue;
            }
            let mut run = 0i32;
            while col < BOARD_SIDE {
                let candidate = Square::new(row, col);
                if candidate.is_none() || pieces.iter().any(|pl| pl.square == candidate) {
                    break;
                }
                run += 1;
                col += 1;
            }
            tokens.push(run.to_string());
        }
        ranks.push(tokens.join(","));
    }

    let turn_char = match turn {
        Color::Red => 'R',
        Color::Blue => 'B',
        Color::Yellow => 'Y',
        Color::Green => 'G',
    };

    format!(
        "{turn_char}-0,0,0,0-{}-{}-0-0-{}",
        bits(kingside),
        bits(queenside),
        ranks.join("/")
    )
}

pub fn parse(fen_text: &str) -> Position {
    fen::parse(fen_text).unwrap_or_else(|e| panic!("test FEN failed to parse: {e}\n{fen_text}"))
}
