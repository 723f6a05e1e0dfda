//! Core chess types.
//!
//! - `Bitset` - packed 8x8 boolean grid
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (rank, file) board coordinate
//! - `Move` - source, destination and optional promotion
//! - `CastlingRights` - castling availability from the FEN token

mod bitset;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitset::{Bitset, BitsetIter};
pub use castling::CastlingRights;
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
