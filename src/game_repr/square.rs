use std::fmt;
use std::str::FromStr;

use super::error::ParseError;

/// A board coordinate. Row 0 is the eighth rank (black's back row), col 0 is
/// the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Both coordinates must be in `0..8`.
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Square reached by stepping `(dr, dc)`, or `None` off the board
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn file(&self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank(&self) -> char {
        (b'8' - self.row) as char
    }

    pub fn to_algebraic(&self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    /// All 64 squares, row by row from the top left
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ParseError::InvalidSquare(s.to_string()));
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ParseError::InvalidSquare(s.to_string()));
        }
        Ok(Square::new(b'8' - rank, file - b'a'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algebraic_mapping() {
        assert_eq!(Square::new(7, 0).to_algebraic(), "a1");
        assert_eq!(Square::new(0, 7).to_algebraic(), "h8");
        assert_eq!(Square::new(6, 4).to_string(), "e2");
        assert_eq!("e4".parse::<Square>(), Ok(Square::new(4, 4)));
        assert_eq!("a8".parse::<Square>(), Ok(Square::new(0, 0)));
    }

    #[test]
    fn test_invalid_squares() {
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
        assert!("e10".parse::<Square>().is_err());
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 2), Some(Square::new(1, 2)));
        assert_eq!(Square::new(7, 7).offset(1, 1), None);
    }
}
