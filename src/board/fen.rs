use std::str::FromStr;

use log::debug;

use super::error::{FenError, MoveParseError};
use super::{CastlingRights, Color, Move, Piece, Position, Square};

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// The FEN must have exactly six space-separated fields. Half-move and
    /// full-move numbers are signed integers; unparseable ones are read as 0.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut pos = Position::empty();
        let parts: Vec<&str> = fen.split(' ').collect();

        if parts.len() != 6 {
            return Err(FenError::InvalidFen {
                fields: parts.len(),
            });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }

        for (rank, rank_str) in ranks.iter().enumerate() {
            let mut file = 0;
            for c in rank_str.chars() {
                match c {
                    '1'..='8' => file += c as usize - '0' as usize,
                    _ => {
                        if file >= 8 {
                            return Err(FenError::TooManyFiles {
                                rank,
                                files: file + 1,
                            });
                        }
                        pos.set_piece_char(Square(rank, file), c)?;
                        file += 1;
                    }
                }
            }
            if file > 8 {
                return Err(FenError::TooManyFiles { rank, files: file });
            }
        }

        pos.side_to_move = if parts[1] == "w" {
            Color::White
        } else {
            Color::Black
        };
        pos.castling_rights = CastlingRights::from_token(parts[2]);
        pos.en_passant_possible = parts[3] != "-";
        pos.halfmove_clock = parts[4].parse().unwrap_or(0);
        pos.fullmove_number = parts[5].parse().unwrap_or(0);
        pos.fen = fen.to_string();

        debug!(
            "decoded FEN '{fen}': {} pieces, {} to move",
            pos.pieces.count(),
            pos.side_to_move
        );
        Ok(pos)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Replace the whole position with the one described by `fen`.
    ///
    /// On error the position is left as it was.
    pub fn apply_fen(&mut self, fen: &str) -> Result<(), FenError> {
        *self = Self::try_from_fen(fen)?;
        Ok(())
    }

    /// The FEN text last applied, returned verbatim.
    #[must_use]
    pub fn encode(&self) -> &str {
        self.fen()
    }

    /// Render the FEN piece-placement field from the live bitsets.
    #[must_use]
    pub fn placement_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in 0..8 {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }

    /// Render a full FEN from the live board and metadata.
    ///
    /// The position keeps no en-passant square, so the caller supplies it.
    pub(crate) fn render_fen(&self, en_passant: Option<Square>) -> String {
        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = en_passant.map_or_else(|| "-".to_string(), |sq| sq.to_string());
        format!(
            "{} {} {} {} {} {}",
            self.placement_fen(),
            active,
            self.castling_rights,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in long algebraic notation (e.g. "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move, or an error describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use chess_core::board::Position;
    ///
    /// let pos = Position::new();
    /// let mv = pos.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveParseError> {
        if !notation.is_ascii() || notation.len() < 4 || notation.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: notation.chars().count(),
            });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        };
        let from: Square = notation[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = notation[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match notation[4..].chars().next() {
            Some(c) => match Piece::from_char(c) {
                Some(piece) if !matches!(piece, Piece::Pawn | Piece::King) => Some(piece),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
            None => None,
        };

        self.legal_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
