use super::error::FenError;
use super::{Bitset, CastlingRights, Color, Piece, Square};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// FEN of the standard chess starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Full board state: eight bitsets plus the FEN metadata fields.
///
/// `pieces` marks occupied squares and `color` marks black pieces (it is
/// only meaningful where `pieces` is set). Every occupied square is set in
/// exactly one of the six kind bitsets.
///
/// The FEN text handed to [`Position::try_from_fen`] is cached verbatim and
/// returned by [`Position::fen`]. Writing to the bitsets directly does not
/// update it; use [`Position::placement_fen`] to read the live board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub(crate) fen: String,
    pub pieces: Bitset,
    pub color: Bitset,
    pub pawns: Bitset,
    pub knights: Bitset,
    pub bishops: Bitset,
    pub rooks: Bitset,
    pub queens: Bitset,
    pub kings: Bitset,
    pub side_to_move: Color,
    /// Plies since the last capture or pawn advance
    pub halfmove_clock: i32,
    /// Incremented after each black move
    pub fullmove_number: i32,
    /// True when the FEN en-passant field is not `-`; the target square is not kept
    pub en_passant_possible: bool,
    pub castling_rights: CastlingRights,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_fen(STARTING_FEN)
    }

    pub(crate) fn empty() -> Self {
        Position {
            fen: String::new(),
            pieces: Bitset::EMPTY,
            color: Bitset::EMPTY,
            pawns: Bitset::EMPTY,
            knights: Bitset::EMPTY,
            bishops: Bitset::EMPTY,
            rooks: Bitset::EMPTY,
            queens: Bitset::EMPTY,
            kings: Bitset::EMPTY,
            side_to_move: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
            en_passant_possible: false,
            castling_rights: CastlingRights::none(),
        }
    }

    /// Empty every bitset and drop all castling rights.
    ///
    /// With `reset_moves` the side to move, both clocks and the en-passant
    /// flag go back to their defaults as well. The cached FEN is untouched.
    pub fn clear(&mut self, reset_moves: bool) {
        for bits in self.bitsets_mut() {
            *bits = Bitset::EMPTY;
        }
        self.castling_rights = CastlingRights::none();
        if reset_moves {
            self.side_to_move = Color::White;
            self.halfmove_clock = 0;
            self.fullmove_number = 1;
            self.en_passant_possible = false;
        }
    }

    /// The FEN this position was decoded from.
    #[must_use]
    pub fn fen(&self) -> &str {
        &self.fen
    }

    #[must_use]
    pub fn pieces_of(&self, piece: Piece) -> Bitset {
        match piece {
            Piece::Pawn => self.pawns,
            Piece::Knight => self.knights,
            Piece::Bishop => self.bishops,
            Piece::Rook => self.rooks,
            Piece::Queen => self.queens,
            Piece::King => self.kings,
        }
    }

    pub(crate) fn pieces_of_mut(&mut self, piece: Piece) -> &mut Bitset {
        match piece {
            Piece::Pawn => &mut self.pawns,
            Piece::Knight => &mut self.knights,
            Piece::Bishop => &mut self.bishops,
            Piece::Rook => &mut self.rooks,
            Piece::Queen => &mut self.queens,
            Piece::King => &mut self.kings,
        }
    }

    fn bitsets_mut(&mut self) -> [&mut Bitset; 8] {
        [
            &mut self.pieces,
            &mut self.color,
            &mut self.pawns,
            &mut self.knights,
            &mut self.bishops,
            &mut self.rooks,
            &mut self.queens,
            &mut self.kings,
        ]
    }

    /// Kind of the piece on `sq`, found by checking the kind bitsets in order.
    #[must_use]
    pub fn piece_kind_at(&self, sq: Square) -> Option<Piece> {
        Piece::ALL
            .into_iter()
            .find(|&piece| self.pieces_of(piece).contains(sq))
    }

    /// Color of the piece on `sq`, or `None` if the square is empty.
    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        if !self.pieces.contains(sq) {
            return None;
        }
        Some(if self.color.contains(sq) {
            Color::Black
        } else {
            Color::White
        })
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        Some((self.color_at(sq)?, self.piece_kind_at(sq)?))
    }

    /// Set the occupancy, color and kind bits for a piece on `sq`.
    ///
    /// Other kind bits on `sq` are left alone; clear the square first when
    /// replacing a piece.
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.pieces.set(sq.0, sq.1, true);
        self.color.set(sq.0, sq.1, color.is_black());
        self.pieces_of_mut(piece).set(sq.0, sq.1, true);
    }

    /// Place the piece described by a FEN letter (uppercase is white).
    pub fn set_piece_char(&mut self, sq: Square, c: char) -> Result<(), FenError> {
        let piece = Piece::from_char(c).ok_or(FenError::UnknownPieceChar { char: c })?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        self.set_piece(sq, color, piece);
        Ok(())
    }

    /// Clear every bit on `sq` in all eight bitsets.
    pub fn clear_square(&mut self, sq: Square) {
        for bits in self.bitsets_mut() {
            bits.set(sq.0, sq.1, false);
        }
    }
}
