//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts for known positions
//! - `edge_cases.rs` - Castling, promotion, pins and other special positions
//! - `proptest.rs` - Property-based tests
//! - `serialization.rs` - serde round trips (requires the `serde` feature)

mod edge_cases;
