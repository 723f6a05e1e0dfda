//! Square occupancy and attack queries.
//!
//! Attacks are recomputed from the bitsets on every call; nothing is cached.

use super::offsets::{BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};
use super::{Bitset, Color, Position, Square};

impl Position {
    #[inline]
    #[must_use]
    pub fn square_occupied(&self, sq: Square) -> bool {
        self.pieces.contains(sq)
    }

    /// True if `sq` holds a piece of `color`.
    #[inline]
    #[must_use]
    pub fn square_occupied_by(&self, sq: Square, color: Color) -> bool {
        self.square_occupied(sq) && self.color.contains(sq) == color.is_black()
    }

    /// True if any piece of `by` attacks `sq`.
    ///
    /// Sliding attacks stop at the first occupied square on each ray,
    /// whatever its color. Pins are not considered.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        // A pawn attacks diagonally forward, so it sits one rank behind the target.
        let pawn_rank = -by.pawn_direction();
        for df in [-1, 1] {
            if let Some(from) = sq.offset(pawn_rank, df) {
                if self.holds(from, self.pawns, by) {
                    return true;
                }
            }
        }

        if self.any_step_holds(sq, &KNIGHT_OFFSETS, self.knights, by) {
            return true;
        }
        if self.any_step_holds(sq, &KING_OFFSETS, self.kings, by) {
            return true;
        }

        let diagonal = self.bishops | self.queens;
        if self.any_ray_ends_on(sq, &BISHOP_DIRECTIONS, diagonal, by) {
            return true;
        }
        let straight = self.rooks | self.queens;
        self.any_ray_ends_on(sq, &ROOK_DIRECTIONS, straight, by)
    }

    /// Every square attacked by `color`, in rank-major order.
    #[must_use]
    pub fn controlled_squares(&self, color: Color) -> Vec<Square> {
        Square::all()
            .filter(|&sq| self.is_square_attacked(sq, color))
            .collect()
    }

    /// First square holding a king of `color`, scanning rank-major.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.kings
            .iter()
            .find(|&sq| self.square_occupied_by(sq, color))
    }

    #[inline]
    fn holds(&self, sq: Square, kind: Bitset, color: Color) -> bool {
        kind.contains(sq) && self.square_occupied_by(sq, color)
    }

    fn any_step_holds(
        &self,
        sq: Square,
        offsets: &[(isize, isize)],
        kind: Bitset,
        color: Color,
    ) -> bool {
        offsets.iter().any(|&(dr, df)| {
            sq.offset(dr, df)
                .is_some_and(|from| self.holds(from, kind, color))
        })
    }

    fn any_ray_ends_on(
        &self,
        sq: Square,
        directions: &[(isize, isize)],
        kinds: Bitset,
        color: Color,
    ) -> bool {
        for &(dr, df) in directions {
            let mut current = sq;
            while let Some(next) = current.offset(dr, df) {
                if self.square_occupied(next) {
                    if self.holds(next, kinds, color) {
                        return true;
                    }
                    break;
                }
                current = next;
            }
        }
        false
    }
}
