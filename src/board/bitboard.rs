//! Bitboard implementation for one color's stones

use serde::{Deserialize, Serialize};

use super::{Pos, TOTAL_CELLS};

const WORDS: usize = 4;

/// Bitboard representation of one color
/// Uses 4 x u64 to represent 225 cells (4 * 64 = 256 >= 225)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bitboard {
    bits: [u64; WORDS],
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        let idx = pos.to_index();
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        let idx = pos.to_index();
        (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Bitwise union, used to count occupied cells across both colors
    #[inline]
    pub fn union(&self, other: &Bitboard) -> Bitboard {
        let mut bits = [0; WORDS];
        for (i, b) in bits.iter_mut().enumerate() {
            *b = self.bits[i] | other.bits[i];
        }
        Bitboard { bits }
    }

    /// Iterate over set bit positions
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            bits: self.bits,
            word_idx: 0,
            current_word: self.bits[0],
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: [u64; WORDS],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= WORDS {
                return None;
            }
            self.current_word = self.bits[self.word_idx];
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        let idx = self.word_idx * 64 + bit_pos;

        // Clear lowest set bit
        self.current_word &= self.current_word - 1;

        // Bits past cell 224 are never set
        if idx < TOTAL_CELLS {
            Some(Pos::from_index(idx))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_count() {
        let mut bb = Bitboard::new();
        assert!(bb.is_empty());
        bb.set(Pos::new(0, 0));
        bb.set(Pos::new(14, 14));
        bb.set(Pos::new(4, 4)); // index 64, crosses into the second word
        assert!(bb.get(Pos::new(0, 0)));
        assert!(bb.get(Pos::new(14, 14)));
        assert!(bb.get(Pos::new(4, 4)));
        assert!(!bb.get(Pos::new(4, 5)));
        assert_eq!(bb.count(), 3);
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut bb = Bitboard::new();
        bb.set(Pos::new(7, 7));
        bb.set(Pos::new(7, 7));
        assert_eq!(bb.count(), 1);
    }

    #[test]
    fn test_iter_ones_in_index_order() {
        let mut bb = Bitboard::new();
        let positions = [Pos::new(14, 14), Pos::new(0, 3), Pos::new(8, 1)];
        for p in positions {
            bb.set(p);
        }
        let found: Vec<Pos> = bb.iter_ones().collect();
        assert_eq!(found, vec![Pos::new(0, 3), Pos::new(8, 1), Pos::new(14, 14)]);
    }

    #[test]
    fn test_union() {
        let mut a = Bitboard::new();
        let mut b = Bitboard::new();
        a.set(Pos::new(1, 1));
        b.set(Pos::new(13, 2));
        let u = a.union(&b);
        assert_eq!(u.count(), 2);
        assert!(u.get(Pos::new(1, 1)) && u.get(Pos::new(13, 2)));
    }
}
