//! Remaining deck: the 52-card deck minus every known card.
//!
//! Built once per run and never mutated afterwards; each trial samples its own
//! completion from it, so trials cannot leak state into each other.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::Card;
use crate::cardset::CardSet;
use crate::error::EquityError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RemainingDeck {
    cards: Vec<Card>,
}

impl RemainingDeck {
    /// All 52 cards minus `known`. Fails on the first duplicate in `known`.
    pub fn build<I: IntoIterator<Item = Card>>(known: I) -> Result<Self, EquityError> {
        let used = CardSet::from_unique(known)?;
        Ok(Self::from_used(used))
    }

    pub fn from_used(used: CardSet) -> Self {
        Self {
            cards: used.complement().cards().collect(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Fail unless `count` cards can be drawn.
    pub fn ensure(&self, count: usize) -> Result<(), EquityError> {
        if count > self.cards.len() {
            return Err(EquityError::InsufficientDeck {
                needed: count,
                available: self.cards.len(),
            });
        }
        Ok(())
    }

    /// Draw `count` distinct cards uniformly at random without replacement.
    pub fn draw_completion<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<Card>, EquityError> {
        self.ensure(count)?;
        Ok(self.cards.choose_multiple(rng, count).copied().collect())
    }

    /// Same as `draw_completion`, writing into `out` (whose length is the count).
    /// Used by the trial loop to avoid an allocation per trial.
    #[inline]
    pub(crate) fn draw_into<R: Rng + ?Sized>(&self, rng: &mut R, out: &mut [Card]) {
        let k = out.len();
        debug_assert!(k <= self.cards.len());
        for (slot, &card) in out.iter_mut().zip(self.cards.choose_multiple(rng, k)) {
            *slot = card;
        }
    }
}
