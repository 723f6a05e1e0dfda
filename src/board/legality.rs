//! Legal move filtering by simulating each candidate on a copy of the board.
//!
//! There is no make/unmake: every candidate gets a fresh copy of the
//! position, the move is applied to the copy, and the copy is asked whether
//! the mover's king is attacked.

use log::{debug, trace, warn};

use super::movegen::castle_rook_files;
use super::{Color, Move, Piece, Position, Square};

impl Position {
    /// Legal moves for the side to move, in generation order.
    ///
    /// # Example
    /// ```
    /// use chess_core::board::Position;
    ///
    /// let pos = Position::new();
    /// assert_eq!(pos.legal_moves().len(), 20);
    /// ```
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let color = self.side_to_move;
        let legal: Vec<Move> = self
            .pseudo_moves_for_color(color)
            .into_iter()
            .filter(|&mv| {
                let keeps_king_safe = !self.make_hypothetical_move(mv).is_king_in_check(color);
                if !keeps_king_safe {
                    trace!("{mv} leaves the {color} king in check");
                }
                keeps_king_safe
            })
            .collect();
        debug!("{} legal moves for {color}", legal.len());
        legal
    }

    /// True if the first king of `color` found is attacked by the other side.
    ///
    /// A position without such a king is never in check.
    #[must_use]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    /// A copy of this position with `mv` applied to the board.
    ///
    /// Only the bitsets change: side to move, clocks and the cached FEN are
    /// carried over as they were. A promotion tag replaces the moving kind on
    /// the destination, and a two-file king move also moves the rook.
    #[must_use]
    pub fn make_hypothetical_move(&self, mv: Move) -> Position {
        let mut next = self.clone();
        let Some(kind) = self.piece_kind_at(mv.from) else {
            warn!("no piece on {} to move for {mv}", mv.from);
            return next;
        };
        let color = self.mover_color(mv.from);

        next.clear_square(mv.from);
        next.clear_square(mv.to);
        next.set_piece(mv.to, color, mv.promotion.unwrap_or(kind));

        if kind == Piece::King && mv.file_distance() == 2 {
            let (rook_from, rook_to) = castle_rook_files(mv.to.1 > mv.from.1);
            let rank = mv.from.0;
            next.clear_square(Square(rank, rook_from));
            next.set_piece(Square(rank, rook_to), color, Piece::Rook);
        }

        next
    }

    /// Apply a move and hand the turn to the other side.
    ///
    /// Clocks follow the usual rules and the FEN is re-rendered from the
    /// board. Castling rights are carried over unchanged and the en-passant
    /// field is always `-`.
    #[must_use]
    pub fn play(&self, mv: Move) -> Position {
        let is_capture = self.square_occupied(mv.to);
        let is_pawn_move = self.pawns.contains(mv.from);

        let mut next = self.make_hypothetical_move(mv);
        next.halfmove_clock = if is_capture || is_pawn_move {
            0
        } else {
            self.halfmove_clock + 1
        };
        if self.side_to_move == Color::Black {
            next.fullmove_number = self.fullmove_number + 1;
        }
        next.side_to_move = self.side_to_move.opponent();
        next.en_passant_possible = false;
        next.fen = next.render_fen(None);
        next
    }

    /// Side to move has no legal moves and is in check.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_king_in_check(self.side_to_move) && self.legal_moves().is_empty()
    }

    /// Side to move has no legal moves and is not in check.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_king_in_check(self.side_to_move) && self.legal_moves().is_empty()
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .into_iter()
            .map(|mv| self.play(mv).perft(depth - 1))
            .sum()
    }
}
