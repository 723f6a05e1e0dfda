//! Chess position representation and legal move generation.
//!
//! A [`Position`] is eight packed bitsets (occupancy, color and one per piece
//! kind) plus the FEN metadata. Moves are generated per piece by stepping and
//! ray walking, then filtered by applying each one to a copy of the position
//! and checking whether the mover's king is attacked.
//!
//! Squares are (rank, file) with rank 0 being the first rank written in a
//! FEN string, so white pawns move toward rank 0.
//!
//! # Example
//! ```
//! use chess_core::board::{Color, Position, Square};
//!
//! let pos = Position::try_from_fen("8/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
//! let moves = pos.legal_moves();
//! assert!(moves.iter().any(|m| m.to == Square(7, 6)));
//! assert!(!pos.is_king_in_check(Color::White));
//! ```

mod attacks;
mod builder;
mod debug;
mod error;
mod fen;
mod legality;
mod movegen;
mod offsets;
mod position;
pub mod prelude;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{BitsetError, FenError, MoveParseError, SquareError};
pub use position::{Position, STARTING_FEN};
pub use types::{Bitset, BitsetIter, CastlingRights, Color, Move, Piece, Square};

pub(crate) use types::PROMOTION_PIECES;
