#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    None,
}

impl Type {
    /// Letter used in move notation and FEN (upper case)
    pub fn letter(&self) -> char {
        match self {
            Type::King => 'K',
            Type::Queen => 'Q',
            Type::Rook => 'R',
            Type::Bishop => 'B',
            Type::Knight => 'N',
            Type::Pawn => 'p',
            Type::None => '-',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of a pawn push for this color (white moves toward row 0)
    pub fn forward(&self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// Row the pawns of this color start on
    pub fn pawn_home_row(&self) -> u8 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    /// Row holding the king and rooks at the start of the game
    pub fn back_row(&self) -> u8 {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }

    /// Row a pawn of this color promotes on
    pub fn promotion_row(&self) -> u8 {
        self.opposite().back_row()
    }

    pub fn prefix(&self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }
}

/// Content of a single square. An empty square is `Type::None`; its color is
/// meaningless and always `White`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Default for Piece {
    fn default() -> Self {
        Self::none()
    }
}

impl Piece {
    pub const fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    pub const fn none() -> Self {
        Self {
            color: Color::White,
            piece_type: Type::None,
        }
    }

    pub fn is_none(&self) -> bool {
        self.piece_type == Type::None
    }

    /// True for an occupied square of the given color
    pub fn is(&self, color: Color) -> bool {
        !self.is_none() && self.color == color
    }

    pub fn is_kind(&self, color: Color, piece_type: Type) -> bool {
        self.piece_type == piece_type && self.color == color
    }

    /// (color, kind) pair, `None` for an empty square
    pub fn identity(&self) -> Option<(Color, Type)> {
        if self.is_none() {
            None
        } else {
            Some((self.color, self.piece_type))
        }
    }

    /// Two letter code such as "wK" or "bp", "--" for an empty square
    pub fn code(&self) -> String {
        match self.identity() {
            Some((color, piece_type)) => format!("{}{}", color.prefix(), piece_type.letter()),
            None => "--".to_string(),
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        let piece_type = match c.to_ascii_lowercase() {
            'p' => Type::Pawn,
            'n' => Type::Knight,
            'b' => Type::Bishop,
            'r' => Type::Rook,
            'q' => Type::Queen,
            'k' => Type::King,
            _ => return None,
        };
        Some(Self { color, piece_type })
    }

    /// FEN character, `None` for an empty square
    pub fn to_char(&self) -> Option<char> {
        let c = match self.piece_type {
            Type::Pawn => 'p',
            Type::Knight => 'n',
            Type::Bishop => 'b',
            Type::Rook => 'r',
            Type::Queen => 'q',
            Type::King => 'k',
            Type::None => return None,
        };
        Some(match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        })
    }
}
