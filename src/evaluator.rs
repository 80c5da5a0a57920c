//! 5-card hand evaluator and the best-5-of-N selector.
//!
//! The evaluator computes rank multiplicities and suit counts, builds
//! multiplicity masks (singles/pairs/trips/quads), then decides the category in
//! strict priority order and packs the tiebreakers into a [`Score`].

use crate::card::Card;
use crate::cardset::CardSet;
use crate::error::EquityError;
use crate::lut13::{straight_top13, Descending};
use crate::score::{pack_score, Category, Score};

/// Rank masks grouped by how many times each rank occurs.
#[derive(Copy, Clone, Debug, Default)]
struct Groups {
    counts: [u8; 13],
    singles: u16,
    pairs: u16,
    trips: u16,
    quads: u16,
}

impl Groups {
    fn new(counts: [u8; 13]) -> Self {
        let mut g = Groups {
            counts,
            ..Groups::default()
        };
        for (i, &n) in counts.iter().enumerate() {
            let bit = 1u16 << i;
            match n {
                0 => {}
                1 => g.singles |= bit,
                2 => g.pairs |= bit,
                3 => g.trips |= bit,
                _ => g.quads |= bit,
            }
        }
        g
    }

    /// Tiebreak sequence: larger groups first, each group highest rank first,
    /// every rank repeated by its multiplicity.
    ///
    /// Ranks are pulled out of the masks in descending order, so the result
    /// never depends on the order the cards were given in.
    fn tiebreakers(&self) -> [u8; 5] {
        let mut out = [0u8; 5];
        let mut i = 0usize;
        for mask in [self.quads, self.trips, self.pairs, self.singles] {
            for r in Descending::new(mask) {
                for _ in 0..self.counts[r as usize] {
                    if i < out.len() {
                        out[i] = r + 2;
                        i += 1;
                    }
                }
            }
        }
        out
    }
}

/// Straight tiebreakers from the top card value. The wheel reads 5-4-3-2-1.
#[inline(always)]
fn straight_tiebreakers(top: u8) -> [u8; 5] {
    [top, top - 1, top - 2, top - 3, top - 4]
}

/// Score exactly five cards.
///
/// Duplicate cards are a caller bug, but they never make this panic: the hand
/// is simply scored from whatever multiplicities result.
pub fn evaluate(hand: &[Card; 5]) -> Score {
    let mut counts = [0u8; 13];
    let mut suits = [0u8; 4];
    let mut ranks: u16 = 0;
    for c in hand {
        counts[c.rank.idx() as usize] += 1;
        suits[c.suit.idx()] += 1;
        ranks |= c.rank.bit();
    }

    let is_flush = suits.iter().any(|&n| n == 5);
    let straight_top = straight_top13(ranks);
    let g = Groups::new(counts);

    if is_flush && straight_top == 14 {
        return pack_score(Category::RoyalFlush, straight_tiebreakers(14));
    }
    if is_flush && straight_top != 0 {
        return pack_score(Category::StraightFlush, straight_tiebreakers(straight_top));
    }
    if g.quads != 0 {
        return pack_score(Category::FourOfAKind, g.tiebreakers());
    }
    if g.trips != 0 && g.pairs != 0 {
        return pack_score(Category::FullHouse, g.tiebreakers());
    }
    if is_flush {
        return pack_score(Category::Flush, g.tiebreakers());
    }
    if straight_top != 0 {
        return pack_score(Category::Straight, straight_tiebreakers(straight_top));
    }
    if g.trips != 0 {
        return pack_score(Category::ThreeOfAKind, g.tiebreakers());
    }
    if g.pairs.count_ones() >= 2 {
        return pack_score(Category::TwoPair, g.tiebreakers());
    }
    if g.pairs != 0 {
        return pack_score(Category::OnePair, g.tiebreakers());
    }
    pack_score(Category::HighCard, g.tiebreakers())
}

/// Best score over every 5-card subset of `cards` (5 to 7 cards).
///
/// C(6,5) = 6 and C(7,5) = 21 subsets; small enough that plain enumeration
/// beats anything clever. For exactly five cards this is `evaluate`.
pub fn best_hand(cards: &[Card]) -> Score {
    let n = cards.len();
    assert!((5..=7).contains(&n), "best_hand expects 5 to 7 cards, got {n}");

    let mut best = Score(0);
    for a in 0..n - 4 {
        for b in (a + 1)..n - 3 {
            for c in (b + 1)..n - 2 {
                for d in (c + 1)..n - 1 {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        best = best.max(evaluate(&five));
                    }
                }
            }
        }
    }
    best
}

/// Checked entry point for inspection: validates size and uniqueness first.
pub fn evaluate_best_hand(cards: &[Card]) -> Result<Score, EquityError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EquityError::InvalidHandSize(cards.len()));
    }
    CardSet::from_unique(cards.iter().copied())?;
    Ok(best_hand(cards))
}
