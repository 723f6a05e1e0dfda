use super::super::{Move, Position, Square, PROMOTION_PIECES};

impl Position {
    /// Pushes, double pushes from the start rank and diagonal captures.
    ///
    /// En passant is not generated: the position does not keep the target square.
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let color = self.mover_color(from);
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if !self.square_occupied(forward) {
                push_pawn_move(from, forward, moves);

                if from.0 == color.pawn_start_rank() {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if !self.square_occupied(double) {
                            moves.push(Move::new(from, double));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(target) = from.offset(dir, df) {
                if self.square_occupied(target) && !self.square_occupied_by(target, color) {
                    push_pawn_move(from, target, moves);
                }
            }
        }
    }
}

/// A pawn landing on the first or last rank is only ever emitted as promotions.
fn push_pawn_move(from: Square, to: Square, moves: &mut Vec<Move>) {
    if to.0 == 0 || to.0 == 7 {
        for piece in PROMOTION_PIECES {
            moves.push(Move::new_promotion(from, to, piece));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}
