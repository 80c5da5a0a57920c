//! Packed u32 hand score.
//!
//! Layout:
//! bits 20..23 : category (1..10), higher is better
//! bits 16..19 : t0
//! bits 12..15 : t1
//! bits  8..11 : t2
//! bits  4..7  : t3
//! bits  0..3  : t4
//!
//! Each t* is a poker rank value (2..14, or 1 for the low Ace of a wheel),
//! most significant first. Unused slots are 0. Comparing the packed integers
//! is the same as comparing (category, tiebreakers) lexicographically.

use core::fmt;

#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Score(pub u32);

/// Hand categories (higher is better).
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(v: u8) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.value() == v)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High card",
            Category::OnePair => "One pair",
            Category::TwoPair => "Two pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full house",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight flush",
            Category::RoyalFlush => "Royal flush",
        }
    }
}

#[inline(always)]
pub fn pack_score(cat: Category, t: [u8; 5]) -> Score {
    Score(
        ((cat as u32) << 20)
            | (((t[0] & 0xF) as u32) << 16)
            | (((t[1] & 0xF) as u32) << 12)
            | (((t[2] & 0xF) as u32) << 8)
            | (((t[3] & 0xF) as u32) << 4)
            | ((t[4] & 0xF) as u32),
    )
}

impl Score {
    /// Category stored in the top nibble. A zero score (never produced by the
    /// evaluator) reads as HighCard.
    pub fn category(self) -> Category {
        Category::from_value(((self.0 >> 20) & 0xF) as u8).unwrap_or(Category::HighCard)
    }

    pub fn tiebreakers(self) -> [u8; 5] {
        let v = self.0;
        [
            ((v >> 16) & 0xF) as u8,
            ((v >> 12) & 0xF) as u8,
            ((v >> 8) & 0xF) as u8,
            ((v >> 4) & 0xF) as u8,
            (v & 0xF) as u8,
        ]
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.category().name(), self.tiebreakers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack() {
        let s = pack_score(Category::FourOfAKind, [7, 7, 7, 7, 2]);
        assert_eq!(s.category(), Category::FourOfAKind);
        assert_eq!(s.tiebreakers(), [7, 7, 7, 7, 2]);
    }

    #[test]
    fn category_dominates_tiebreakers() {
        let pair_of_aces = pack_score(Category::OnePair, [14, 14, 13, 12, 11]);
        let two_pair_low = pack_score(Category::TwoPair, [3, 3, 2, 2, 4]);
        assert!(two_pair_low > pair_of_aces);
    }

    #[test]
    fn tiebreakers_compare_lexicographically() {
        let a = pack_score(Category::Flush, [13, 9, 8, 4, 2]);
        let b = pack_score(Category::Flush, [13, 9, 7, 6, 5]);
        assert!(a > b);
    }
}
