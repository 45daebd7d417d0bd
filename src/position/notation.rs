//! Four-player algebraic move notation (§6.3):
//! `<colLetter><row>-<colLetter><row>` plus an optional promotion suffix,
//! e.g. `h2-h4` or `n3-n1=Q`. Parsing resolves the notation against the
//! position's legal moves rather than reconstructing a `Move` from scratch,
//! since the notation alone doesn't carry captured pieces, castling rook
//! moves, or castling-rights snapshots.

use crate::error::MoveNotationError;
use crate::types::{Move, PieceKind, Square};

use super::movegen;
use super::Position;

/// Parses `notation` and returns the matching legal move in `position`.
pub fn parse(position: &mut Position, notation: &str) -> Result<Move, MoveNotationError> {
    let (from, to, promotion) = parse_squares(notation)?;

    let mut candidates = crate::types::MoveList::new();
    movegen::generate_pseudo_legal(position, &mut candidates);

    for mv in candidates.iter() {
        if mv.from() != from || mv.to() != to || mv.promotion() != promotion {
            continue;
        }
        if !super::is_legal(position, mv) {
            continue;
        }
        return Ok(*mv);
    }

    Err(MoveNotationError::IllegalMove { notation: notation.to_string() })
}

fn parse_squares(notation: &str) -> Result<(Square, Square, Option<PieceKind>), MoveNotationError> {
    if notation.len() < 5 || notation.len() > 9 {
        return Err(MoveNotationError::InvalidLength { len: notation.len() });
    }
    let Some((origin, rest)) = notation.split_once('-') else {
        return Err(MoveNotationError::InvalidSquare { notation: notation.to_string() });
    };

    let (dest, promotion) = match rest.split_once('=') {
        Some((dest, promo)) => {
            let mut chars = promo.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return Err(MoveNotationError::InvalidPromotion {
                    char: promo.chars().next().unwrap_or('?'),
                });
            };
            let kind = PieceKind::from_char(c)
                .filter(|k| matches!(k, PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen))
                .ok_or(MoveNotationError::InvalidPromotion { char: c })?;
            (dest, Some(kind))
        }
        None => (rest, None),
    };

    let from = parse_square(origin).ok_or_else(|| MoveNotationError::InvalidSquare {
        notation: notation.to_string(),
    })?;
    let to = parse_square(dest).ok_or_else(|| MoveNotationError::InvalidSquare {
        notation: notation.to_string(),
    })?;

    Ok((from, to, promotion))
}

/// Parses one `<colLetter><row>` token, e.g. `h2`, per §6.3: column letters
/// `a..n` map to cols 0..13, row numbers 1..14 with row 14 at the top
/// (`internal_row = 14 - row_number`).
fn parse_square(token: &str) -> Option<Square> {
    let mut chars = token.chars();
    let col_letter = chars.next()?;
    if !col_letter.is_ascii_lowercase() {
        return None;
    }
    let col = (col_letter as u8 - b'a') as i8;
    let row_number: i8 = chars.as_str().parse().ok()?;
    if !(1..=14).contains(&row_number) {
        return None;
    }
    let row = 14 - row_number;
    let square = Square::new(row, col);
    if square.is_none() {
        None
    } else {
        Some(square)
    }
}

/// Formats `mv` in the same notation (used for `bestmove`/PV output).
#[must_use]
pub fn format(mv: &Move) -> String {
    mv.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn parses_standard_pawn_push() {
        let mut pos = Position::new_standard();
        // Red's pawn file h advances from h2 to h4 in the standard setup.
        let mv = parse(&mut pos, "h2-h4").expect("legal opening move");
        assert_eq!(mv.to_string(), "h2-h4");
    }

    #[test]
    fn rejects_illegal_destination() {
        let mut pos = Position::new_standard();
        let err = parse(&mut pos, "h2-h6");
        assert_eq!(err, Err(MoveNotationError::IllegalMove { notation: "h2-h6".to_string() }));
    }

    #[test]
    fn rejects_malformed_square() {
        let mut pos = Position::new_standard();
        let err = parse(&mut pos, "z9-h4");
        assert!(matches!(err, Err(MoveNotationError::InvalidSquare { .. })));
    }

    #[test]
    fn display_roundtrips_through_parse() {
        let mut pos = Position::new_standard();
        let mv = parse(&mut pos, "h2-h4").unwrap();
        let text = format(&mv);
        let mut pos2 = Position::new_standard();
        let reparsed = parse(&mut pos2, &text).unwrap();
        assert_eq!(mv.from(), reparsed.from());
        assert_eq!(mv.to(), reparsed.to());
    }
}
