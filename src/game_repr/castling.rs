use super::{Color, Square};

/// Which rook a castling right refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    King,
    Queen,
}

impl Side {
    /// Column of this side's rook at the start of the game
    pub fn rook_col(&self) -> u8 {
        match self {
            Side::King => 7,
            Side::Queen => 0,
        }
    }
}

/// Castling eligibility, one flag per (color, side).
///
/// TRUE - castling toward that rook is still allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub wks: bool,
    pub bks: bool,
    pub wqs: bool,
    pub bqs: bool,
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastlingRights {
    pub const fn all() -> Self {
        Self { wks: true, bks: true, wqs: true, bqs: true }
    }

    pub const fn none() -> Self {
        Self { wks: false, bks: false, wqs: false, bqs: false }
    }

    pub fn get(&self, color: Color, side: Side) -> bool {
        match (color, side) {
            (Color::White, Side::King) => self.wks,
            (Color::White, Side::Queen) => self.wqs,
            (Color::Black, Side::King) => self.bks,
            (Color::Black, Side::Queen) => self.bqs,
        }
    }

    pub fn revoke(&mut self, color: Color, side: Side) {
        match (color, side) {
            (Color::White, Side::King) => self.wks = false,
            (Color::White, Side::Queen) => self.wqs = false,
            (Color::Black, Side::King) => self.bks = false,
            (Color::Black, Side::Queen) => self.bqs = false,
        }
    }

    pub fn revoke_all(&mut self, color: Color) {
        self.revoke(color, Side::King);
        self.revoke(color, Side::Queen);
    }

    /// Right tied to a rook standing on `sq`, if `sq` is one of `color`'s
    /// rook home squares
    pub fn rook_home(color: Color, sq: Square) -> Option<Side> {
        if sq.row != color.back_row() {
            return None;
        }
        [Side::King, Side::Queen]
            .into_iter()
            .find(|side| side.rook_col() == sq.col)
    }

    /// FEN castling field, "-" when no right is left
    pub fn to_fen(&self) -> String {
        let field: String = [(self.wks, 'K'), (self.wqs, 'Q'), (self.bks, 'k'), (self.bqs, 'q')]
            .iter()
            .filter(|(set, _)| *set)
            .map(|(_, c)| *c)
            .collect();
        if field.is_empty() {
            "-".to_string()
        } else {
            field
        }
    }
}
