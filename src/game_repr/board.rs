use std::fmt;
use std::ops::{Index, IndexMut};

use super::{Color, Piece, Square, Type};

const BACK_RANK: [Type; 8] = [
    Type::Rook,
    Type::Knight,
    Type::Bishop,
    Type::Queen,
    Type::King,
    Type::Bishop,
    Type::Knight,
    Type::Rook,
];

/// 8x8 mailbox. `cells[row][col]`, row 0 at the top (rank 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Piece; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[Piece::none(); 8]; 8],
        }
    }

    /// Standard starting layout
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for col in 0..8 {
            board.cells[0][col] = Piece::new(Color::Black, BACK_RANK[col]);
            board.cells[1][col] = Piece::new(Color::Black, Type::Pawn);
            board.cells[6][col] = Piece::new(Color::White, Type::Pawn);
            board.cells[7][col] = Piece::new(Color::White, BACK_RANK[col]);
        }
        board
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self[sq].is_none()
    }

    /// Occupied squares together with their pieces
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all()
            .map(move |sq| (sq, self[sq]))
            .filter(|(_, piece)| !piece.is_none())
    }

    pub fn find(&self, piece: Piece) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, p)| *p == piece)
            .map(|(sq, _)| sq)
    }

    pub fn rows(&self) -> &[[Piece; 8]; 8] {
        &self.cells
    }
}

impl Index<Square> for Board {
    type Output = Piece;

    fn index(&self, sq: Square) -> &Piece {
        &self.cells[sq.row as usize][sq.col as usize]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, sq: Square) -> &mut Piece {
        &mut self.cells[sq.row as usize][sq.col as usize]
    }
}

impl fmt::Display for Board {
    /// Grid of two letter codes, rank 8 first
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|piece| piece.code()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
