pub mod board;

pub use board::{Bitset, Color, FenError, Move, Piece, Position, Square, STARTING_FEN};
