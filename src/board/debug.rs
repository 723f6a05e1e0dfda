use std::fmt::Write;

use super::Position;

const BITSET_LABELS: [&str; 8] = [
    "Pieces", "Color", "Pawns", "Knights", "Bishops", "Rooks", "Queens", "Kings",
];

impl Position {
    /// Render all eight bitsets as labelled 8x8 grids, rank 0 first.
    #[must_use]
    pub fn dump_bitsets(&self) -> String {
        let bitsets = [
            self.pieces,
            self.color,
            self.pawns,
            self.knights,
            self.bishops,
            self.rooks,
            self.queens,
            self.kings,
        ];

        let mut out = String::new();
        for (label, bits) in BITSET_LABELS.iter().zip(bitsets) {
            // Writing to a String cannot fail
            let _ = writeln!(out, "Bitset {label}:");
            let _ = writeln!(out, "{bits}");
        }
        out
    }
}
