use super::super::offsets::KNIGHT_OFFSETS;
use super::super::{Move, Position, Square};

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut Vec<Move>) {
        self.generate_step_moves(from, &KNIGHT_OFFSETS, moves);
    }

    /// One move per on-board offset that is empty or holds an enemy piece.
    pub(crate) fn generate_step_moves(
        &self,
        from: Square,
        offsets: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        let color = self.mover_color(from);
        for &(dr, df) in offsets {
            if let Some(to) = from.offset(dr, df) {
                if self.is_target_for(to, color) {
                    moves.push(Move::new(from, to));
                }
            }
        }
    }
}
