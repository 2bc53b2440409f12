use std::fmt;

/// Errors produced while reading squares or positions from text.
///
/// The rules engine itself never fails; only parsing does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Algebraic square was not a file `a`-`h` followed by a rank `1`-`8`
    InvalidSquare(String),
    /// Unknown piece letter in the placement field
    InvalidPiece(char),
    /// Placement field did not describe exactly 8 ranks of 8 files
    InvalidPlacement(String),
    /// Side to move was neither `w` nor `b`
    InvalidSideToMove(String),
    /// Castling field contained something other than `KQkq` or `-`
    InvalidCastling(String),
    /// En-passant field is not an empty square behind a pawn that just double-pushed
    InvalidEnPassant(String),
    /// Each side needs exactly one king
    InvalidKingCount { white: usize, black: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidSquare(s) => write!(f, "invalid square `{}`", s),
            ParseError::InvalidPiece(c) => write!(f, "invalid piece character `{}`", c),
            ParseError::InvalidPlacement(s) => write!(f, "invalid piece placement `{}`", s),
            ParseError::InvalidSideToMove(s) => write!(f, "invalid side to move `{}`", s),
            ParseError::InvalidCastling(s) => write!(f, "invalid castling field `{}`", s),
            ParseError::InvalidEnPassant(s) => write!(f, "invalid en-passant target `{}`", s),
            ParseError::InvalidKingCount { white, black } => write!(
                f,
                "expected one king per side, found {} white and {} black",
                white, black
            ),
        }
    }
}

impl std::error::Error for ParseError {}
