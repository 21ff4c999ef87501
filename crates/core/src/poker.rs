// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Types used in a Poker hand history.
use serde::{Deserialize, Serialize};
use std::{fmt, iter, ops};

/// Chips amount.
///
/// Amounts are signed as net winnings for a losing player are negative, and
/// fractional for games with blinds like 0.5/1.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chips(f64);

impl Chips {
    /// The zero chips.
    pub const ZERO: Chips = Chips(0.0);

    /// Decimal places shown for fractional amounts.
    const DECIMALS: usize = 6;

    /// Creates chips with the given value.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The amount.
    pub fn amount(&self) -> f64 {
        self.0
    }

    /// The absolute amount.
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Checks if this amount is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Checks if this amount is less than zero.
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }
}

impl From<f64> for Chips {
    fn from(val: f64) -> Self {
        Chips(val)
    }
}

impl From<Chips> for f64 {
    fn from(val: Chips) -> Self {
        val.0
    }
}

impl ops::Add for Chips {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Chips(self.0 + rhs.0)
    }
}

impl ops::AddAssign for Chips {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl ops::Sub<Chips> for Chips {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl iter::Sum for Chips {
    fn sum<I: Iterator<Item = Chips>>(iter: I) -> Self {
        iter.fold(Chips::ZERO, |acc, c| acc + c)
    }
}

impl fmt::Display for Chips {
    /// Whole amounts have no decimal point, fractional amounts are rounded
    /// and have no trailing zeros.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = format!("{:.*}", Self::DECIMALS, self.0);
        let amount = amount.trim_end_matches('0').trim_end_matches('.');
        match amount {
            "-0" => f.write_str("0"),
            _ => f.write_str(amount),
        }
    }
}

/// A betting round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    /// Betting before any board card.
    Preflop,
    /// Betting after the first three board cards.
    Flop,
    /// Betting after the fourth board card.
    Turn,
    /// Betting after the fifth board card.
    River,
}

impl Street {
    /// The number of streets.
    pub const COUNT: usize = 4;

    /// Returns all streets in betting order.
    pub fn streets() -> impl DoubleEndedIterator<Item = Street> {
        [Street::Preflop, Street::Flop, Street::Turn, Street::River].into_iter()
    }

    /// The street that starts when the board reaches `count` cards.
    pub fn starting_at(count: usize) -> Option<Street> {
        Street::streets()
            .skip(1)
            .find(|street| street.board_len() == count)
    }

    /// The number of board cards when this street starts.
    pub fn board_len(&self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// Position of this street in betting order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The section label used in transcripts.
    pub fn label(&self) -> &'static str {
        match self {
            Street::Preflop => "PREFLOP",
            Street::Flop => "FLOP",
            Street::Turn => "TURN",
            Street::River => "RIVER",
        }
    }

    /// How a fold on this street reads in a summary line.
    pub fn fold_phrase(&self) -> &'static str {
        match self {
            Street::Preflop => "before Flop",
            Street::Flop => "on the Flop",
            Street::Turn => "on the Turn",
            Street::River => "on the River",
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
