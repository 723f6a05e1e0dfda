//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//!
//! let pos = Position::new();
//! assert_eq!(pos.side_to_move, Color::White);
//! ```

pub use super::{
    Bitset, CastlingRights, Color, FenError, Move, Piece, Position, PositionBuilder, Square,
    STARTING_FEN,
};
