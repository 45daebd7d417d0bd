//! The dash-separated four-player FEN dialect (§6.2).
//!
//! Seven fields: `<turn>-<eliminated>-<kingside>-<queenside>-<points>-<halfmove>-<placement>`.
//! Grounded on `original_source/utils.cc`'s `ParseBoardFromFEN`: the
//! `eliminated` and `points` fields are accepted but, per that function's own
//! comment ("Not used for teams chess"), never interpreted — elimination is
//! derived instead from which kings are on the board, and points aren't
//! tracked at all. The halfmove field is likewise parsed for format validity
//! but not retained; this engine has no use for the 50-move rule (§6.2, §10.7).

use crate::error::FenError;
use crate::types::{CastlingRights, Color, Piece, PieceKind, Square, ALL_COLORS, BOARD_SIDE};

use super::Position;

const NUM_FIELDS: usize = 7;
const NUM_RANKS: usize = BOARD_SIDE as usize;

/// Parses `fen` into a fresh [`Position`]. Side to move, castling rights and
/// piece placement are taken from the FEN; en-passant eligibility always
/// starts empty, since this dialect carries no en-passant field.
pub fn parse(fen: &str) -> Result<Position, FenError> {
    let fields: Vec<&str> = fen.split('-').collect();
    if fields.len() != NUM_FIELDS {
        return Err(FenError::WrongFieldCount { found: fields.len() });
    }

    let turn = parse_turn(fields[0])?;
    let kingside = parse_castling_field(fields[2])?;
    let queenside = parse_castling_field(fields[3])?;
    parse_halfmove(fields[5])?;

    let mut position = Position::empty();
    parse_placement(fields[6], &mut position)?;

    for &color in &ALL_COLORS {
        let rights = CastlingRights::new(kingside[color.index()], queenside[color.index()]);
        position.set_castling_rights(color, rights);
    }
    position.set_turn(turn);
    position.recompute_zobrist();

    Ok(position)
}

fn parse_turn(field: &str) -> Result<Color, FenError> {
    let mut chars = field.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(FenError::InvalidSideToMove { found: field.to_string() });
    };
    match c {
        'R' => Ok(Color::Red),
        'B' => Ok(Color::Blue),
        'Y' => Ok(Color::Yellow),
        'G' => Ok(Color::Green),
        _ => Err(FenError::InvalidSideToMove { found: field.to_string() }),
    }
}

/// A comma list of 4 `0`/`1` bits, one per color in [`ALL_COLORS`] order.
fn parse_castling_field(field: &str) -> Result<[bool; 4], FenError> {
    let parts: Vec<&str> = field.split(',').collect();
    if parts.len() != 4 {
        return Err(FenError::InvalidCastling { char: field.chars().next().unwrap_or('?') });
    }
    let mut bits = [false; 4];
    for (i, part) in parts.iter().enumerate() {
        bits[i] = match *part {
            "0" => false,
            "1" => true,
            _ => {
                return Err(FenError::InvalidCastling {
                    char: part.chars().next().unwrap_or('?'),
                })
            }
        };
    }
    Ok(bits)
}

fn parse_halfmove(field: &str) -> Result<u32, FenError> {
    field
        .parse::<u32>()
        .map_err(|_| FenError::InvalidCounter { field: "halfmove", found: field.to_string() })
}

fn parse_placement(field: &str, position: &mut Position) -> Result<(), FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != NUM_RANKS {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (row, rank) in ranks.iter().enumerate() {
        let mut col: i32 = 0;
        for token in rank.split(',') {
            if token.is_empty() {
                return Err(FenError::WrongFileCount { rank: row, files: col as usize });
            }
            if token == "x" {
                col += 1;
                continue;
            }
            let first = token.chars().next().expect("non-empty token");
            if let Some(color) = Color::from_char(first) {
                if token.chars().count() != 2 {
                    return Err(FenError::InvalidPiece { char: first });
                }
                let kind_char = token.chars().nth(1).expect("two-char token");
                let kind = PieceKind::from_char(kind_char)
                    .ok_or(FenError::InvalidPiece { char: kind_char })?;
                let square = Square::new(row as i8, col as i8);
                if square.is_none() {
                    return Err(FenError::PieceOnCorner { notation: token.to_string() });
                }
                position.place_piece(square, color, kind);
                col += 1;
            } else {
                let run: i32 = token
                    .parse()
                    .map_err(|_| FenError::InvalidPiece { char: first })?;
                if run <= 0 {
                    return Err(FenError::InvalidPiece { char: first });
                }
                col += run;
            }
        }
        if col != BOARD_SIDE as i32 {
            return Err(FenError::WrongFileCount { rank: row, files: col as usize });
        }
    }

    Ok(())
}

/// Serializes `position` back to this dialect. The `eliminated`, `points` and
/// `halfmove` fields are written as zero placeholders — this engine tracks
/// none of them (elimination is read off the board via
/// [`Position::king_captured`], and halfmove count never accumulates).
#[must_use]
pub fn to_fen(position: &Position) -> String {
    let turn = match position.turn() {
        Color::Red => 'R',
        Color::Blue => 'B',
        Color::Yellow => 'Y',
        Color::Green => 'G',
    };

    let kingside = format_castling(position, |r| r.kingside());
    let queenside = format_castling(position, |r| r.queenside());
    let placement = format_placement(position);

    format!("{turn}-0,0,0,0-{kingside}-{queenside}-0-0-{placement}")
}

fn format_castling(position: &Position, bit: impl Fn(CastlingRights) -> bool) -> String {
    ALL_COLORS
        .iter()
        .map(|&color| if bit(position.castling_rights(color)) { "1" } else { "0" })
        .collect::<Vec<_>>()
        .join(",")
}

fn format_placement(position: &Position) -> String {
    let mut ranks = Vec::with_capacity(NUM_RANKS);
    for row in 0..BOARD_SIDE {
        let mut tokens = Vec::new();
        let mut empty_run = 0i32;
        for col in 0..BOARD_SIDE {
            let square = Square::new(row, col);
            if square.is_none() {
                flush_run(&mut tokens, &mut empty_run);
                tokens.push("x".to_string());
                continue;
            }
            let piece: Piece = position.piece_at(square);
            if piece.is_none() {
                empty_run += 1;
            } else {
                flush_run(&mut tokens, &mut empty_run);
                tokens.push(format!("{}{}", piece.color().as_char(), piece.kind().as_char()));
            }
        }
        flush_run(&mut tokens, &mut empty_run);
        ranks.push(tokens.join(","));
    }
    ranks.join("/")
}

fn flush_run(tokens: &mut Vec<String>, run: &mut i32) {
    if *run > 0 {
        tokens.push(run.to_string());
        *run = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn roundtrips_standard_setup() {
        let standard = Position::new_standard();
        let fen = to_fen(&standard);
        let parsed = parse(&fen).expect("roundtrip FEN must parse");
        assert_eq!(parsed.zobrist_key(), standard.zobrist_key());
        assert_eq!(parsed.turn(), standard.turn());
        for &color in &ALL_COLORS {
            assert_eq!(parsed.king_square(color), standard.king_square(color));
            assert_eq!(parsed.material_of(color), standard.material_of(color));
        }
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(parse("R-0-0-0-0-0"), Err(FenError::WrongFieldCount { found: 6 }));
    }

    #[test]
    fn rejects_bad_turn_char() {
        let err = parse("Z-0,0,0,0-0,0,0,0-0,0,0,0-0-0-x,x,x,x,x,x,x,x,x,x,x,x,x,x/13,1/13,1/13,1/13,1/13,1/13,1/13,1/13,1/13,1/13,1/x,x,x,x,x,x,x,x,x,x,x,x,x,x");
        assert_eq!(err, Err(FenError::InvalidSideToMove { found: "Z".to_string() }));
    }

    #[test]
    fn parses_single_king_board() {
        // Build a minimal legal board: one red king on its home square, all
        // other rows empty, corners marked `x`.
        let mut rows = Vec::with_capacity(14);
        for row in 0..14i8 {
            let mut tokens = Vec::new();
            let mut col = 0i8;
            while col < 14 {
                let square = Square::new(row, col);
                if square.is_none() {
                    tokens.push("x".to_string());
                    col += 1;
                } else if row == 13 && col == 7 {
                    tokens.push("rK".to_string());
                    col += 1;
                } else {
                    let mut run = 0;
                    while col < 14 && Square::new(row, col).is_present() && !(row == 13 && col == 7) {
                        run += 1;
                        col += 1;
                    }
                    tokens.push(run.to_string());
                }
            }
            rows.push(tokens.join(","));
        }
        let placement = rows.join("/");
        let fen = format!("R-0,0,0,0-0,0,0,0-0,0,0,0-0-0-{placement}");
        let pos = parse(&fen).expect("valid minimal FEN");
        assert_eq!(pos.king_square(Color::Red), Square::new(13, 7));
        assert_eq!(pos.material_of(Color::Red), crate::types::piece_value(PieceKind::King));
    }
}
