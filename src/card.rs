//! Card types (Suit/Rank/Card) and the two-character card codes.
//!
//! These are small `Copy` values that compile down to integer operations.
//! A card code is a rank symbol (`2`..`9`, `T`, `J`, `Q`, `K`, `A`) followed by
//! a suit symbol (`C`, `D`, `H`, `S`), e.g. `AS` for the Ace of Spades.

use core::fmt;
use std::str::FromStr;

use crate::error::EquityError;

/// A playing card suit.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    #[inline(always)]
    pub const fn idx(self) -> usize {
        self as usize
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub fn from_symbol(symbol: char) -> Result<Suit, EquityError> {
        match symbol {
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            other => Err(EquityError::InvalidCardCode(other.to_string())),
        }
    }
}

/// A playing card rank.
///
/// Stored as 0..12 (Two..Ace) so that a rank maps onto one bit of a 13-bit
/// mask. The poker value (2..=14) is `value()`.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    #[inline(always)]
    pub const fn idx(self) -> u8 {
        self as u8
    }

    /// Poker value: 2 for Two up to 14 for Ace.
    #[inline(always)]
    pub const fn value(self) -> u8 {
        self as u8 + 2
    }

    /// Single bit of this rank in a 13-bit rank mask.
    #[inline(always)]
    pub const fn bit(self) -> u16 {
        1u16 << (self as u16)
    }

    /// Convert 0..12 to a Rank (Two..Ace). Input is assumed valid.
    #[inline(always)]
    pub const fn from_idx(x: u8) -> Rank {
        Rank::ALL[(x % 13) as usize]
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            2..=14 => Some(Rank::from_idx(value - 2)),
            _ => None,
        }
    }

    pub fn from_symbol(symbol: char) -> Result<Rank, EquityError> {
        let value = rank_value(symbol)?;
        Ok(Rank::from_idx(value - 2))
    }

    pub const fn symbol(self) -> char {
        match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            r => (b'2' + r as u8) as char,
        }
    }
}

/// Map a rank symbol to its poker value: `'2'..='9'` -> 2..=9, `T` -> 10,
/// `J` -> 11, `Q` -> 12, `K` -> 13, `A` -> 14.
pub fn rank_value(symbol: char) -> Result<u8, EquityError> {
    match symbol {
        '2'..='9' => Ok(symbol as u8 - b'0'),
        'T' => Ok(10),
        'J' => Ok(11),
        'Q' => Ok(12),
        'K' => Ok(13),
        'A' => Ok(14),
        other => Err(EquityError::InvalidCardCode(other.to_string())),
    }
}

/// Map a suit symbol (`C`, `D`, `H`, `S`) to its suit.
pub fn suit_from_symbol(symbol: char) -> Result<Suit, EquityError> {
    Suit::from_symbol(symbol)
}

/// A card = suit + rank.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    #[inline(always)]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Standard 0..51 card id mapping:
    /// suit = id / 13, rank = id % 13.
    #[inline(always)]
    pub const fn from_id(id: u8) -> Self {
        let suit = Suit::ALL[((id / 13) & 0x3) as usize];
        let rank = Rank::from_idx(id % 13);
        Self { suit, rank }
    }

    /// Convert to 0..51 id (inverse of from_id).
    #[inline(always)]
    pub const fn id(self) -> u8 {
        (self.suit as u8) * 13 + (self.rank as u8)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = EquityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_card(s)
    }
}

/// Parse a two-character code such as `"AS"` or `"TD"`.
pub fn parse_card(code: &str) -> Result<Card, EquityError> {
    let invalid = || EquityError::InvalidCardCode(code.to_string());
    let mut chars = code.chars();
    let (r, s) = match (chars.next(), chars.next(), chars.next()) {
        (Some(r), Some(s), None) => (r, s),
        _ => return Err(invalid()),
    };
    let rank = Rank::from_symbol(r).map_err(|_| invalid())?;
    let suit = Suit::from_symbol(s).map_err(|_| invalid())?;
    Ok(Card::new(suit, rank))
}

/// Parse a list of codes separated by whitespace and/or commas.
pub fn parse_cards(codes: &str) -> Result<Vec<Card>, EquityError> {
    codes
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(parse_card)
        .collect()
}

/// Parse exactly two hole cards, e.g. `"AS KS"`.
pub fn parse_hole_cards(codes: &str) -> Result<[Card; 2], EquityError> {
    match parse_cards(codes)?.as_slice() {
        &[a, b] => Ok([a, b]),
        _ => Err(EquityError::InvalidCardCode(codes.to_string())),
    }
}

/// Parse 0..=5 community cards, e.g. `"2H 5S 9D"`.
pub fn parse_board(codes: &str) -> Result<Vec<Card>, EquityError> {
    let board = parse_cards(codes)?;
    if board.len() > 5 {
        return Err(EquityError::TooManyBoardCards(board.len()));
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_values() {
        assert_eq!(rank_value('2'), Ok(2));
        assert_eq!(rank_value('9'), Ok(9));
        assert_eq!(rank_value('T'), Ok(10));
        assert_eq!(rank_value('A'), Ok(14));
        assert!(matches!(rank_value('1'), Err(EquityError::InvalidCardCode(_))));
        assert!(matches!(rank_value('X'), Err(EquityError::InvalidCardCode(_))));
    }

    #[test]
    fn suit_symbols() {
        assert_eq!(suit_from_symbol('C'), Ok(Suit::Clubs));
        assert_eq!(suit_from_symbol('S'), Ok(Suit::Spades));
        for s in Suit::ALL {
            assert_eq!(suit_from_symbol(s.symbol()), Ok(s));
        }
        assert_eq!(suit_from_symbol('s'), Err(EquityError::InvalidCardCode("s".into())));
    }

    #[test]
    fn parse_and_display() {
        let c = parse_card("AS").unwrap();
        assert_eq!(c, Card::new(Suit::Spades, Rank::Ace));
        assert_eq!(c.rank.value(), 14);
        assert_eq!(c.to_string(), "AS");

        let t: Card = "TD".parse().unwrap();
        assert_eq!(t, Card::new(Suit::Diamonds, Rank::Ten));
        assert_eq!(t.to_string(), "TD");
    }

    #[test]
    fn parse_rejects_bad_codes() {
        for bad in ["", "A", "ASX", "1S", "AX", "as", "10S"] {
            assert_eq!(
                parse_card(bad),
                Err(EquityError::InvalidCardCode(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn id_roundtrip_covers_deck() {
        for id in 0u8..52 {
            assert_eq!(Card::from_id(id).id(), id);
        }
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).id(), 51);
    }

    #[test]
    fn bulk_parsing() {
        let hole = parse_hole_cards("AS KS").unwrap();
        assert_eq!(hole[1], Card::new(Suit::Spades, Rank::King));
        assert!(parse_hole_cards("AS").is_err());

        let board = parse_board("2H,5S 9D").unwrap();
        assert_eq!(board.len(), 3);
        assert_eq!(parse_board("").unwrap(), vec![]);
        assert_eq!(
            parse_board("2H 3H 4H 5H 6H 7H"),
            Err(EquityError::TooManyBoardCards(6))
        );
    }
}
