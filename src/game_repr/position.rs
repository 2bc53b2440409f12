use rayon::prelude::*;
use smallvec::SmallVec;

use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME STATE, LEGALITY AND MAKE/UNDO
 */

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Authoritative state of one game.
///
/// Mutated only through [`Position::make_move`] and [`Position::undo_move`].
/// The castling and en-passant logs are seeded with the initial value, so
/// they always hold one entry more than `move_log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) white_king: Square,
    pub(crate) black_king: Square,
    pub(crate) move_log: Vec<Move>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) castling_log: Vec<CastlingRights>,
    pub(crate) en_passant: Option<Square>,
    pub(crate) en_passant_log: Vec<Option<Square>>,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Standard starting position, white to move, every castling right set
    pub fn new() -> Self {
        Self::from_parts(Board::starting(), Color::White, CastlingRights::all(), None)
    }

    /// Build a position from raw parts. Rights are taken as given; king squares
    /// are read off the board (defaulting to e1/e8 if a king is missing).
    pub fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant: Option<Square>,
    ) -> Self {
        let white_king = board
            .find(Piece::new(Color::White, Type::King))
            .next()
            .unwrap_or(Square::new(7, 4));
        let black_king = board
            .find(Piece::new(Color::Black, Type::King))
            .next()
            .unwrap_or(Square::new(0, 4));

        Self {
            board,
            side_to_move,
            white_king,
            black_king,
            move_log: Vec::new(),
            castling_rights,
            castling_log: vec![castling_rights],
            en_passant,
            en_passant_log: vec![en_passant],
            checkmate: false,
            stalemate: false,
        }
    }

    pub fn from_fen(fen_str: &str) -> Result<Position, ParseError> {
        let parts: Vec<&str> = fen_str.split_whitespace().collect();

        // Piece placement (always present)
        let placement = parts.first().copied().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(ParseError::InvalidPlacement(placement.to_string()));
        }

        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0u8;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 || u32::from(col) + skip > 8 {
                        return Err(ParseError::InvalidPlacement(placement.to_string()));
                    }
                    col += skip as u8;
                } else {
                    let piece = Piece::from_char(c).ok_or(ParseError::InvalidPiece(c))?;
                    if col >= 8 {
                        return Err(ParseError::InvalidPlacement(placement.to_string()));
                    }
                    board[Square::new(row as u8, col)] = piece;
                    col += 1;
                }
            }
            if col != 8 {
                return Err(ParseError::InvalidPlacement(placement.to_string()));
            }
        }

        let white = board.find(Piece::new(Color::White, Type::King)).count();
        let black = board.find(Piece::new(Color::Black, Type::King)).count();
        if white != 1 || black != 1 {
            return Err(ParseError::InvalidKingCount { white, black });
        }

        let side_to_move = match parts.get(1).copied().unwrap_or("w") {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(ParseError::InvalidSideToMove(other.to_string())),
        };

        // No castling field means every right that the layout still allows
        let mut rights = CastlingRights::none();
        match parts.get(2).copied() {
            None => rights = CastlingRights::all(),
            Some("-") => {}
            Some(field) => {
                for c in field.chars() {
                    match c {
                        'K' => rights.wks = true,
                        'Q' => rights.wqs = true,
                        'k' => rights.bks = true,
                        'q' => rights.bqs = true,
                        _ => return Err(ParseError::InvalidCastling(field.to_string())),
                    }
                }
            }
        }
        let rights = Self::sanitize_rights(&board, rights);

        let en_passant = match parts.get(3).copied() {
            None | Some("-") => None,
            Some(field) => {
                let target = field.parse::<Square>()?;
                // The square the last double push skipped: empty, on rank 3 or 6
                let mover = side_to_move.opposite();
                let skipped_row = (mover.pawn_home_row() as i8 + mover.forward()) as u8;
                if target.row != skipped_row || !board.is_empty(target) {
                    return Err(ParseError::InvalidEnPassant(field.to_string()));
                }
                Some(target)
            }
        };

        Ok(Self::from_parts(board, side_to_move, rights, en_passant))
    }

    /// Drop rights whose king or rook is not on its home square
    fn sanitize_rights(board: &Board, mut rights: CastlingRights) -> CastlingRights {
        for color in [Color::White, Color::Black] {
            let row = color.back_row();
            let king_home = board[Square::new(row, 4)].is_kind(color, Type::King);
            for side in [Side::King, Side::Queen] {
                let rook_home = board[Square::new(row, side.rook_col())].is_kind(color, Type::Rook);
                if rights.get(color, side) && !(king_home && rook_home) {
                    log::debug!("dropping {:?} {:?}-side castling right: pieces not at home", color, side);
                    rights.revoke(color, side);
                }
            }
        }
        rights
    }

    /// Converts the current position to FEN notation (move counters are not tracked)
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for (row, cells) in self.board.rows().iter().enumerate() {
            let mut empty_count = 0;
            for piece in cells {
                match piece.to_char() {
                    Some(c) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(c);
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let en_passant = self
            .en_passant
            .map(|sq| sq.to_algebraic())
            .unwrap_or_else(|| "-".to_string());

        format!("{} {} {} {} 0 1", fen, side, self.castling_rights.to_fen(), en_passant)
    }

    /*-------------------- ACCESSORS --------------------*/

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, sq: Square) -> Piece {
        self.board[sq]
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    pub(crate) fn set_king_square(&mut self, color: Color, sq: Square) {
        match color {
            Color::White => self.white_king = sq,
            Color::Black => self.black_king = sq,
        }
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    pub fn castling_log(&self) -> &[CastlingRights] {
        &self.castling_log
    }

    pub fn en_passant_log(&self) -> &[Option<Square>] {
        &self.en_passant_log
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /// Set by the last [`Position::valid_moves`] call, cleared by undo
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Set by the last [`Position::valid_moves`] call, cleared by undo
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /*-------------------- MAKE / UNDO --------------------*/

    /// Apply a move with all of its side effects. The move is not validated;
    /// callers pass moves taken from [`Position::valid_moves`].
    pub fn make_move(&mut self, mv: Move) {
        let color = mv.piece_moved.color;

        self.board[mv.from] = Piece::none();
        self.board[mv.to] = mv.piece_moved;
        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.opposite();

        if mv.piece_moved.piece_type == Type::King {
            self.set_king_square(color, mv.to);
        }

        // Always promote to a queen
        if mv.is_promotion {
            self.board[mv.to] = Piece::new(color, Type::Queen);
        }

        // The captured pawn sits beside the landing square
        if mv.is_en_passant {
            self.board[mv.capture_square()] = Piece::none();
        }

        let double_push = mv.piece_moved.piece_type == Type::Pawn
            && (mv.from.row as i8 - mv.to.row as i8).abs() == 2;
        self.en_passant = if double_push {
            Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col))
        } else {
            None
        };

        if mv.is_castle {
            let (rook_from, rook_to) = Self::castle_rook_squares(&mv);
            self.board[rook_to] = self.board[rook_from];
            self.board[rook_from] = Piece::none();
        }

        self.update_castling_rights(&mv);
        self.castling_log.push(self.castling_rights);
        self.en_passant_log.push(self.en_passant);
    }

    /// Revert the last move. Does nothing when no move has been made.
    pub fn undo_move(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            return;
        };
        let color = mv.piece_moved.color;

        self.board[mv.from] = mv.piece_moved;
        self.board[mv.to] = mv.piece_captured;
        self.side_to_move = self.side_to_move.opposite();

        if mv.piece_moved.piece_type == Type::King {
            self.set_king_square(color, mv.from);
        }

        if mv.is_en_passant {
            self.board[mv.to] = Piece::none();
            self.board[mv.capture_square()] = mv.piece_captured;
        }

        self.castling_log.pop();
        if let Some(&rights) = self.castling_log.last() {
            self.castling_rights = rights;
        }

        self.en_passant_log.pop();
        if let Some(&target) = self.en_passant_log.last() {
            self.en_passant = target;
        }

        if mv.is_castle {
            let (rook_from, rook_to) = Self::castle_rook_squares(&mv);
            self.board[rook_from] = self.board[rook_to];
            self.board[rook_to] = Piece::none();
        }

        self.checkmate = false;
        self.stalemate = false;
    }

    /// (home, destination) of the rook that travels with a castling king
    fn castle_rook_squares(mv: &Move) -> (Square, Square) {
        let row = mv.to.row;
        if mv.is_kingside_castle() {
            (Square::new(row, Side::King.rook_col()), Square::new(row, mv.to.col - 1))
        } else {
            (Square::new(row, Side::Queen.rook_col()), Square::new(row, mv.to.col + 1))
        }
    }

    fn update_castling_rights(&mut self, mv: &Move) {
        let mover = mv.piece_moved;
        match mover.piece_type {
            Type::King => self.castling_rights.revoke_all(mover.color),
            Type::Rook => {
                if let Some(side) = CastlingRights::rook_home(mover.color, mv.from) {
                    self.castling_rights.revoke(mover.color, side);
                }
            }
            _ => {}
        }

        // Whoever captures it, a rook taken at home loses its owner the right
        let captured = mv.piece_captured;
        if captured.piece_type == Type::Rook {
            if let Some(side) = CastlingRights::rook_home(captured.color, mv.to) {
                self.castling_rights.revoke(captured.color, side);
            }
        }
    }

    /*-------------------- MOVE GENERATION --------------------*/

    /// Pseudo-legal moves for the piece on `from`, castling excluded
    pub fn piece_moves_into(&self, from: Square, moves: &mut SmallVec<[Move; 64]>) {
        match self.board[from].piece_type {
            Type::Pawn => self.pawn_moves_into(from, moves),
            Type::Knight => self.knight_moves_into(from, moves),
            Type::Bishop => self.bishop_moves_into(from, moves),
            Type::Rook => self.rook_moves_into(from, moves),
            Type::Queen => self.queen_moves_into(from, moves),
            Type::King => self.king_moves_into(from, moves),
            Type::None => {}
        }
    }

    /// All moves for the side to move without considering checks
    pub fn all_possible_moves(&self) -> SmallVec<[Move; 64]> {
        let mut moves: SmallVec<[Move; 64]> = SmallVec::new();
        for (sq, piece) in self.board.pieces() {
            if piece.color == self.side_to_move {
                self.piece_moves_into(sq, &mut moves);
            }
        }
        moves
    }

    /// True if any piece of `attacker` could capture on `sq`.
    ///
    /// Walks the attacker's pseudo-legal moves. Pawns count their two
    /// diagonals instead of their pushes, so attacks on empty squares (the
    /// squares a castling king crosses) are seen too.
    pub fn square_attacked_by(&self, sq: Square, attacker: Color) -> bool {
        let mut moves: SmallVec<[Move; 64]> = SmallVec::new();
        for (from, piece) in self.board.pieces() {
            if piece.color != attacker {
                continue;
            }
            if piece.piece_type == Type::Pawn {
                if self.pawn_attacks(from).any(|target| target == sq) {
                    return true;
                }
                continue;
            }

            moves.clear();
            self.piece_moves_into(from, &mut moves);
            if moves.iter().any(|m| m.to == sq) {
                return true;
            }
        }
        false
    }

    /// Can the opponent of the side to move attack `sq`
    pub fn square_under_attack(&self, sq: Square) -> bool {
        self.square_attacked_by(sq, self.side_to_move.opposite())
    }

    /// Is the side to move in check
    pub fn in_check(&self) -> bool {
        self.square_under_attack(self.king_square(self.side_to_move))
    }

    /// All legal moves for the side to move. Also refreshes the checkmate and
    /// stalemate flags.
    pub fn valid_moves(&mut self) -> Vec<Move> {
        let saved_en_passant = self.en_passant;
        let saved_rights = self.castling_rights;
        let mover = self.side_to_move;

        let candidates = self.all_possible_moves();
        let mut moves: SmallVec<[Move; 64]> = SmallVec::with_capacity(candidates.len());

        for mv in candidates {
            self.make_move(mv);
            // Look from the mover's side again: is its king hanging?
            self.side_to_move = mover;
            let exposed = self.in_check();
            self.side_to_move = mover.opposite();
            self.undo_move();

            if !exposed {
                moves.push(mv);
            }
        }

        let king_sq = self.king_square(mover);
        self.castle_moves_into(king_sq, &mut moves);

        let in_check = self.in_check();
        self.checkmate = moves.is_empty() && in_check;
        self.stalemate = moves.is_empty() && !in_check;

        self.en_passant = saved_en_passant;
        self.castling_rights = saved_rights;
        moves.into_vec()
    }

    /// Legal moves of the piece standing on `from`
    pub fn legal_moves(&mut self, from: Square) -> Vec<Move> {
        self.valid_moves().into_iter().filter(|m| m.from == from).collect()
    }

    /// The legal move with these endpoints, flags included
    pub fn find_legal_move(&mut self, from: Square, to: Square) -> Option<Move> {
        let probe = Move::new(from, to, &self.board);
        self.valid_moves().into_iter().find(|m| *m == probe)
    }

    /*-------------------- PERFT --------------------*/

    /// Perft (Performance Test) - counts leaf nodes at a given depth
    pub fn perft(&self, depth: u32) -> u64 {
        let mut pos = self.clone();
        pos.count_nodes(depth)
    }

    fn count_nodes(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.valid_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.make_move(mv);
            nodes += self.count_nodes(depth - 1);
            self.undo_move();
        }
        nodes
    }

    /// Perft count per root move (debugging tool)
    pub fn divide(&self, depth: u32) -> Vec<(Move, u64)> {
        let mut pos = self.clone();
        let moves = pos.valid_moves();

        moves
            .into_iter()
            .map(|mv| {
                pos.make_move(mv);
                let count = pos.count_nodes(depth.saturating_sub(1));
                pos.undo_move();
                (mv, count)
            })
            .collect()
    }

    /// Same count as [`Position::perft`]; every root branch runs on its own copy
    pub fn perft_parallel(&self, depth: u32) -> u64 {
        if depth <= 1 {
            return self.perft(depth);
        }

        let mut root = self.clone();
        let moves = root.valid_moves();

        moves
            .par_iter()
            .map(|&mv| {
                let mut pos = root.clone();
                pos.make_move(mv);
                pos.count_nodes(depth - 1)
            })
            .sum()
    }
}
