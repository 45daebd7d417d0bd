//! Error types for FEN parsing, move notation, and the UCI-style command loop.

use std::fmt;

/// Error type for the dash-separated four-player FEN dialect (§6.2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN must have exactly 7 dash-separated fields.
    WrongFieldCount { found: usize },
    /// Board field doesn't have 14 `/`-separated ranks.
    WrongRankCount { found: usize },
    /// A rank's run-length digits plus pieces didn't sum to 14 files.
    WrongFileCount { rank: usize, files: usize },
    /// Unrecognized piece character in the board field.
    InvalidPiece { char: char },
    /// Side-to-move field isn't one of `r`, `b`, `y`, `g`.
    InvalidSideToMove { found: String },
    /// Castling field has an unrecognized character.
    InvalidCastling { char: char },
    /// En-passant field doesn't parse as a square in algebraic notation.
    InvalidEnPassant { found: String },
    /// Halfmove or fullmove counter field isn't a valid non-negative integer.
    InvalidCounter { field: &'static str, found: String },
    /// A piece sits on one of the four illegal corner squares.
    PieceOnCorner { notation: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 7 dash-separated fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN board must have 14 ranks, found {found}")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "FEN rank {rank} has {files} files, expected 14")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected one of r/b/y/g")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant field '{found}'")
            }
            FenError::InvalidCounter { field, found } => {
                write!(f, "Invalid {field} counter '{found}'")
            }
            FenError::PieceOnCorner { notation } => {
                write!(f, "Piece placed on illegal corner square '{notation}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for parsing the four-player algebraic move notation (§6.3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveNotationError {
    /// Notation string has the wrong length (5-9 characters: origin + `-` + dest + optional `=`-promotion).
    InvalidLength { len: usize },
    /// Origin or destination square failed to parse.
    InvalidSquare { notation: String },
    /// Promotion character isn't one of N/B/R/Q.
    InvalidPromotion { char: char },
    /// Well-formed notation, but no legal move in the position matches it.
    IllegalMove { notation: String },
}

impl fmt::Display for MoveNotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveNotationError::InvalidLength { len } => {
                write!(f, "Move notation must be 5-9 characters, found {len}")
            }
            MoveNotationError::InvalidSquare { notation } => {
                write!(f, "Invalid square in move notation '{notation}'")
            }
            MoveNotationError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveNotationError::IllegalMove { notation } => {
                write!(f, "'{notation}' is not a legal move in this position")
            }
        }
    }
}

impl std::error::Error for MoveNotationError {}

/// Error type for the UCI-style command loop (§6.1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommandError {
    /// Command line was empty or all whitespace.
    EmptyCommand,
    /// First token isn't a recognized command.
    UnknownCommand { command: String },
    /// A recognized command was missing a required argument.
    MissingArgument { command: &'static str, argument: &'static str },
    /// An argument token couldn't be parsed as the expected type.
    InvalidArgument { command: &'static str, token: String },
    /// `position fen ...` carried a malformed FEN string.
    Fen(FenError),
    /// `position ... moves ...` carried a malformed or illegal move.
    Move(MoveNotationError),
    /// `setoption` named an option this engine doesn't expose.
    UnknownOption { name: String },
}

impl fmt::Display for UciCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciCommandError::EmptyCommand => write!(f, "empty command"),
            UciCommandError::UnknownCommand { command } => {
                write!(f, "unknown command '{command}'")
            }
            UciCommandError::MissingArgument { command, argument } => {
                write!(f, "'{command}' is missing its '{argument}' argument")
            }
            UciCommandError::InvalidArgument { command, token } => {
                write!(f, "'{command}' received an invalid argument '{token}'")
            }
            UciCommandError::Fen(e) => write!(f, "{e}"),
            UciCommandError::Move(e) => write!(f, "{e}"),
            UciCommandError::UnknownOption { name } => {
                write!(f, "unknown option '{name}'")
            }
        }
    }
}

impl std::error::Error for UciCommandError {}

impl From<FenError> for UciCommandError {
    fn from(e: FenError) -> Self {
        UciCommandError::Fen(e)
    }
}

impl From<MoveNotationError> for UciCommandError {
    fn from(e: MoveNotationError) -> Self {
        UciCommandError::Move(e)
    }
}
