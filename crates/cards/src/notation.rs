// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards notation.
use std::{borrow::Cow, fmt, str::FromStr};
use thiserror::Error;

/// Card parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCardError {
    /// The rank part of a card is not a rank.
    #[error("Invalid rank '{0}'")]
    InvalidRank(String),
    /// The suit letter is not one of c, d, h, s.
    #[error("Invalid suit '{0}'")]
    InvalidSuit(char),
    /// The token is too short to contain a rank and a suit.
    #[error("Invalid card '{0}'")]
    InvalidCard(String),
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    /// Parses a rank, accepts `10` for the ten and letters in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_lowercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "t" => Rank::Ten,
            "j" => Rank::Jack,
            "q" => Rank::Queen,
            "k" => Rank::King,
            "a" => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };

        Ok(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Gets a suit from its letter in any case.
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };

        write!(f, "{suit}")
    }
}

/// A Poker card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rank, suit) = split_token(s).ok_or_else(|| ParseCardError::InvalidCard(s.into()))?;
        let suit = Suit::from_char(suit).ok_or(ParseCardError::InvalidSuit(suit))?;
        Ok(Card::new(rank.parse()?, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Splits a token into its rank part and the trailing suit letter.
fn split_token(token: &str) -> Option<(&str, char)> {
    let suit = token.chars().last()?;
    let rank = &token[..token.len() - suit.len_utf8()];
    if rank.is_empty() {
        None
    } else {
        Some((rank, suit))
    }
}

/// Normalizes a single card token.
///
/// The rank is rewritten in upper case with `10` as `T`, the suit letter is
/// kept as it is. A token that is not a card is returned unchanged.
pub fn normalize_token(token: &str) -> Cow<'_, str> {
    let Some((rank, suit)) = split_token(token) else {
        return Cow::Borrowed(token);
    };

    match (rank.parse::<Rank>(), Suit::from_char(suit)) {
        (Ok(rank), Some(_)) => Cow::Owned(format!("{rank}{suit}")),
        _ => Cow::Borrowed(token),
    }
}

/// Normalizes a whitespace separated sequence of card tokens.
pub fn normalize(cards: &str) -> String {
    cards
        .split_whitespace()
        .map(normalize_token)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_sequence() {
        assert_eq!(normalize("10h kc 2s"), "Th Kc 2s");
        assert_eq!(normalize("ah qd jc 10s"), "Ah Qd Jc Ts");
        assert_eq!(normalize("  as   kh "), "As Kh");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_passthrough() {
        assert_eq!(normalize("9d"), "9d");
        assert_eq!(normalize("xx"), "xx");
        assert_eq!(normalize("11h"), "11h");
        assert_eq!(normalize("kx"), "kx");
        assert_eq!(normalize("h"), "h");
        assert_eq!(normalize("10h ?? 3c"), "Th ?? 3c");
    }

    #[test]
    fn normalize_keeps_suit_case() {
        assert_eq!(normalize_token("10H"), "TH");
        assert_eq!(normalize_token("kS"), "KS");
        assert_eq!(normalize_token("aD"), "AD");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize("10h kc qd 4s ah tc");
        assert_eq!(once, "Th Kc Qd 4s Ah Tc");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_borrows_unchanged_tokens() {
        assert!(matches!(normalize_token("xx"), Cow::Borrowed("xx")));
        assert!(matches!(normalize_token("7c"), Cow::Owned(_)));
    }

    #[test]
    fn card_parse() {
        let c: Card = "10h".parse().unwrap();
        assert_eq!(c, Card::new(Rank::Ten, Suit::Hearts));
        assert_eq!(c.to_string(), "Th");

        let c: Card = "KD".parse().unwrap();
        assert_eq!(c.rank(), Rank::King);
        assert_eq!(c.suit(), Suit::Diamonds);
        assert_eq!(c.to_string(), "Kd");

        assert_eq!(
            "1h".parse::<Card>(),
            Err(ParseCardError::InvalidRank("1".to_string()))
        );
        assert_eq!("ax".parse::<Card>(), Err(ParseCardError::InvalidSuit('x')));
        assert_eq!(
            "s".parse::<Card>(),
            Err(ParseCardError::InvalidCard("s".to_string()))
        );
    }

    #[test]
    fn all_cards_round_trip() {
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
            }
        }
    }
}
