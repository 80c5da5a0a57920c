//! Error type shared by parsing, deck construction and the equity engine.

use thiserror::Error;

use crate::card::Card;

/// Everything that can go wrong before (or instead of) a simulation run.
///
/// All variants are detected up front; no trial is played on bad input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EquityError {
    #[error("invalid card code: {0:?}")]
    InvalidCardCode(String),

    #[error("card {0} appears more than once")]
    DuplicateCard(Card),

    #[error("deck has {available} cards left but {needed} are needed")]
    InsufficientDeck { needed: usize, available: usize },

    #[error("trial count must be positive (got {0})")]
    InvalidTrialCount(usize),

    #[error("repeat count must be positive (got {0})")]
    InvalidRepeatCount(usize),

    #[error("expected 5 to 7 cards for evaluation, got {0}")]
    InvalidHandSize(usize),

    #[error("at most 5 board cards are allowed, got {0}")]
    TooManyBoardCards(usize),

    #[error("at least one player is required")]
    NoPlayers,

    #[error("at most 23 players fit in one deck, got {0}")]
    TooManyPlayers(usize),

    #[error("simulation cancelled after {completed} trials")]
    Cancelled { completed: usize },
}
