use super::super::{Move, Position, Square};

impl Position {
    /// Walk each ray until the first occupied square, capturing it if it is an enemy.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        directions: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        let color = self.mover_color(from);
        for &(dr, df) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                if self.square_occupied(to) {
                    if !self.square_occupied_by(to, color) {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
                moves.push(Move::new(from, to));
                current = to;
            }
        }
    }
}
