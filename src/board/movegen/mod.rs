//! Pseudo-legal move generation.
//!
//! Generators append to a caller-supplied list and take the mover's color
//! from the piece standing on the source square, not from the side to move.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::castle_rook_files;

use super::offsets::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Color, Move, Piece, Position, Square};

impl Position {
    /// Append the pseudo-legal moves of the piece on `from`.
    ///
    /// An empty square yields nothing.
    pub fn generate_piece_moves(&self, from: Square, moves: &mut Vec<Move>) {
        if !self.square_occupied(from) {
            return;
        }
        let Some(piece) = self.piece_kind_at(from) else {
            return;
        };
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, moves),
            Piece::Knight => self.generate_knight_moves(from, moves),
            Piece::Bishop => self.generate_sliding_moves(from, &BISHOP_DIRECTIONS, moves),
            Piece::Rook => self.generate_sliding_moves(from, &ROOK_DIRECTIONS, moves),
            Piece::Queen => self.generate_sliding_moves(from, &QUEEN_DIRECTIONS, moves),
            Piece::King => self.generate_king_moves(from, moves),
        }
    }

    /// All pseudo-legal moves for `color`, squares visited rank-major.
    #[must_use]
    pub fn pseudo_moves_for_color(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for from in Square::all() {
            if self.square_occupied_by(from, color) {
                self.generate_piece_moves(from, &mut moves);
            }
        }
        moves
    }

    /// Color of the piece on an occupied square, read from the color bitset.
    #[inline]
    pub(crate) fn mover_color(&self, from: Square) -> Color {
        if self.color.contains(from) {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Empty or enemy-occupied, relative to `color`.
    #[inline]
    pub(crate) fn is_target_for(&self, sq: Square, color: Color) -> bool {
        !self.square_occupied_by(sq, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_square_yields_nothing() {
        let pos = Position::new();
        let mut moves = Vec::new();
        pos.generate_piece_moves(Square(4, 4), &mut moves);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_starting_position_pseudo_moves() {
        let pos = Position::new();
        assert_eq!(pos.pseudo_moves_for_color(Color::White).len(), 20);
        assert_eq!(pos.pseudo_moves_for_color(Color::Black).len(), 20);
    }

    #[test]
    fn test_squares_visited_rank_major() {
        let pos = Position::new();
        let moves = pos.pseudo_moves_for_color(Color::White);
        // Pawns on rank 6 come before the knights on rank 7
        let first_knight = moves
            .iter()
            .position(|m| m.from == Square(7, 1))
            .unwrap();
        assert_eq!(first_knight, 16);
        assert!(moves[..16].iter().all(|m| m.from.0 == 6));
        let sources: Vec<Square> = moves.iter().map(|m| m.from).collect();
        let mut sorted = sources.clone();
        sorted.sort_by_key(|sq| sq.as_index());
        assert_eq!(sources, sorted);
    }

    #[test]
    fn test_generator_uses_piece_color() {
        // Black to move, but asking for a white piece generates white moves
        let pos = Position::from_fen("8/8/8/8/8/8/4P3/8 b - - 0 1");
        let mut moves = Vec::new();
        pos.generate_piece_moves(Square(6, 4), &mut moves);
        assert_eq!(
            moves,
            vec![
                Move::new(Square(6, 4), Square(5, 4)),
                Move::new(Square(6, 4), Square(4, 4)),
            ]
        );
    }
}
