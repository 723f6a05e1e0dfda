use log::trace;

use super::super::offsets::KING_OFFSETS;
use super::super::{Move, Position, Square};

struct CastleSide {
    kingside: bool,
    /// Files between king and rook that must be empty
    between: &'static [usize],
    /// Files the king crosses or lands on, which must not be attacked
    king_path: &'static [usize],
    king_to: usize,
}

const CASTLE_SIDES: [CastleSide; 2] = [
    CastleSide {
        kingside: true,
        between: &[5, 6],
        king_path: &[5, 6],
        king_to: 6,
    },
    CastleSide {
        kingside: false,
        between: &[1, 2, 3],
        king_path: &[3, 2],
        king_to: 2,
    },
];

/// Rook (from, to) files for a castle towards the king side or queen side.
pub(crate) const fn castle_rook_files(kingside: bool) -> (usize, usize) {
    if kingside {
        (7, 5)
    } else {
        (0, 3)
    }
}

impl Position {
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut Vec<Move>) {
        self.generate_step_moves(from, &KING_OFFSETS, moves);
        self.generate_castling_moves(from, moves);
    }

    /// Castles are emitted as a two-file king move; the rook follows when the move is applied.
    pub(crate) fn generate_castling_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let color = self.mover_color(from);
        let rank = color.back_rank();
        if from != Square(rank, 4) {
            return;
        }
        let enemy = color.opponent();
        if self.is_square_attacked(from, enemy) {
            trace!("{color} king on {from} is in check, no castling");
            return;
        }

        for side in &CASTLE_SIDES {
            if !self.castling_rights.has(color, side.kingside) {
                continue;
            }
            if side
                .between
                .iter()
                .any(|&file| self.square_occupied(Square(rank, file)))
            {
                continue;
            }
            if side
                .king_path
                .iter()
                .any(|&file| self.is_square_attacked(Square(rank, file), enemy))
            {
                continue;
            }
            moves.push(Move::new(from, Square(rank, side.king_to)));
        }
    }
}
