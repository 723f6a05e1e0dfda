//! Packed 8x8 boolean grid.

use std::fmt;
use std::ops::BitOr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::BitsetError;

/// A 64-cell boolean grid addressed by (rank, file), packed into a `u64`.
///
/// Cell (rank, file) lives at bit `rank * 8 + file`. Rank and file must be
/// below 8; out-of-range coordinates are a caller error and are not checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bitset(pub u64);

impl Bitset {
    pub const EMPTY: Bitset = Bitset(0);
    pub const FULL: Bitset = Bitset(!0);

    #[inline]
    const fn mask(rank: usize, file: usize) -> u64 {
        1u64 << (rank * 8 + file)
    }

    /// Set every cell to `value`, which must be 0 or 1.
    pub fn fill(&mut self, value: u8) -> Result<(), BitsetError> {
        match value {
            0 => self.0 = 0,
            1 => self.0 = !0,
            _ => return Err(BitsetError::InvalidArgument { value }),
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn get(self, rank: usize, file: usize) -> bool {
        self.0 & Self::mask(rank, file) != 0
    }

    #[inline]
    pub fn set(&mut self, rank: usize, file: usize, value: bool) {
        if value {
            self.0 |= Self::mask(rank, file);
        } else {
            self.0 &= !Self::mask(rank, file);
        }
    }

    /// Returns true if the given square is set
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        self.get(sq.0, sq.1)
    }

    /// In-place elementwise AND.
    #[inline]
    pub fn and(&mut self, other: &Bitset) {
        self.0 &= other.0;
    }

    /// In-place elementwise OR.
    #[inline]
    pub fn or(&mut self, other: &Bitset) {
        self.0 |= other.0;
    }

    /// In-place complement of every cell.
    #[inline]
    pub fn not(&mut self) {
        self.0 = !self.0;
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of set cells.
    #[inline]
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// The grid as 8 rows of 0/1, rank 0 first.
    #[must_use]
    pub fn to_matrix(self) -> [[u8; 8]; 8] {
        let mut matrix = [[0u8; 8]; 8];
        for (rank, row) in matrix.iter_mut().enumerate() {
            for (file, cell) in row.iter_mut().enumerate() {
                *cell = u8::from(self.get(rank, file));
            }
        }
        matrix
    }

    /// Iterate over set cells in rank-major, file-minor order.
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitsetIter {
        BitsetIter(self.0)
    }
}

impl BitOr for Bitset {
    type Output = Bitset;

    fn bitor(self, rhs: Self) -> Self::Output {
        Bitset(self.0 | rhs.0)
    }
}

impl fmt::Display for Bitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0..8 {
            for file in 0..8 {
                if file > 0 {
                    write!(f, " ")?;
                }
                let ch = if self.get(rank, file) { '1' } else { '.' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the squares set in a `Bitset`
pub struct BitsetIter(u64);

impl Iterator for BitsetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(Square::from_index(idx))
    }
}
