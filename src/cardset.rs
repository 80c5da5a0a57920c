//! 52-bit card set: one bit per card id (suit * 13 + rank).

use crate::card::Card;
use crate::error::EquityError;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default, Hash)]
pub struct CardSet(u64);

impl CardSet {
    pub const FULL: CardSet = CardSet((1u64 << 52) - 1);

    #[inline(always)]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline(always)]
    pub const fn contains(self, card: Card) -> bool {
        self.0 & (1u64 << card.id()) != 0
    }

    /// Returns true if the card was already present.
    #[inline(always)]
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.id();
        let already = self.0 & bit != 0;
        self.0 |= bit;
        already
    }

    /// Insert, failing on the first card seen twice.
    #[inline]
    pub fn insert_unique(&mut self, card: Card) -> Result<(), EquityError> {
        if self.insert(card) {
            return Err(EquityError::DuplicateCard(card));
        }
        Ok(())
    }

    pub fn from_unique<I: IntoIterator<Item = Card>>(iter: I) -> Result<Self, EquityError> {
        let mut set = Self::new();
        for c in iter {
            set.insert_unique(c)?;
        }
        Ok(set)
    }

    #[inline(always)]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn complement(self) -> Self {
        Self(!self.0 & Self::FULL.0)
    }

    /// Cards in ascending id order.
    pub fn cards(self) -> impl Iterator<Item = Card> {
        (0u8..52)
            .filter(move |&id| self.0 & (1u64 << id) != 0)
            .map(Card::from_id)
    }
}
