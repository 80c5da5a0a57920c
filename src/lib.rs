//! Texas Hold'em hand evaluation and Monte Carlo equity estimation.

pub mod card;
pub mod cardset;
pub mod config;
pub mod deck;
pub mod equity;
pub mod error;
pub mod evaluator;
pub mod lut13;
pub mod score;

pub use card::{
    parse_board, parse_card, parse_cards, parse_hole_cards, rank_value, suit_from_symbol, Card, Rank,
    Suit,
};
pub use cardset::CardSet;
pub use config::EquityConfig;
pub use deck::RemainingDeck;
pub use error::EquityError;
pub use evaluator::{best_hand, evaluate, evaluate_best_hand};
pub use score::{Category, Score};

pub use equity::{
    estimate_equity,
    estimate_equity_from_codes,
    estimate_equity_repeated,
    estimate_equity_seeded,
    run_trials,
    EquityReport,
    PlayerEquity,
    Simulation,
    MAX_PLAYERS,
};
