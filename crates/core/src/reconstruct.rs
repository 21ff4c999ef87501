// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Betting streets reconstruction.
//!
//! Recorded bet amounts are the player total for the current street, a hand
//! history shows the chips added by each action instead. A [Reconstruction]
//! folds the hand events in order, tracks the street from the number of board
//! cards revealed and the amount the next player is facing, and collects the
//! actions for each street.
use ahash::AHashMap;
use log::{debug, warn};
use std::fmt;

use crate::{
    hand::{Event, EventType, Hand},
    poker::{Chips, Street},
};

/// A player action as shown in a transcript.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionKind {
    /// Opening bet of the given amount.
    Bet(Chips),
    /// Raise by an amount to a total.
    Raise {
        /// The chips added over the facing bet.
        by: Chips,
        /// The player total for the street.
        to: Chips,
    },
    /// Call with the given amount.
    Call(Chips),
    /// Check.
    Check,
    /// Fold.
    Fold,
}

/// A player action on a street.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    /// The acting player name.
    pub actor: String,
    /// The action.
    pub kind: ActionKind,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actor = &self.actor;
        match &self.kind {
            ActionKind::Bet(amount) => write!(f, "{actor}: bets {amount}"),
            ActionKind::Raise { by, to } => write!(f, "{actor}: raises {by} to {to}"),
            ActionKind::Call(amount) => write!(f, "{actor}: calls {amount}"),
            ActionKind::Check => write!(f, "{actor}: checks"),
            ActionKind::Fold => write!(f, "{actor}: folds"),
        }
    }
}

/// The streets reconstruction state for a single hand.
#[derive(Debug)]
pub struct Reconstruction {
    /// The street for the next action.
    street: Street,
    /// The amount the next player is facing on this street.
    last_bet: Chips,
    /// The board cards in reveal order.
    board: Vec<String>,
    /// The actions for each street.
    actions: [Vec<Action>; Street::COUNT],
    /// The street where each player first folded.
    folds: AHashMap<i64, Street>,
}

impl Reconstruction {
    /// Creates a new reconstruction, preflop starts facing the big blind.
    pub fn new(big_blind: Chips) -> Self {
        Self {
            street: Street::Preflop,
            last_bet: big_blind,
            board: Vec::default(),
            actions: Default::default(),
            folds: AHashMap::default(),
        }
    }

    /// Runs the reconstruction over all the hand events.
    pub fn run(hand: &Hand) -> Self {
        let mut rec = Self::new(hand.blinds.big_blind_amt);
        for event in &hand.events {
            rec.apply(hand, event);
        }

        debug!(
            "Hand {} reconstructed up to {} with {} board cards",
            hand.hand_num,
            rec.street,
            rec.board.len()
        );

        rec
    }

    /// Applies an event.
    pub fn apply(&mut self, hand: &Hand, event: &Event) {
        let kind = match event.event_type {
            EventType::BoardCard => {
                match event.board_cards.as_deref().map(str::trim) {
                    Some(card) if !card.is_empty() => self.reveal(card),
                    _ => warn!("Skipping board card event without a card"),
                }
                return;
            }
            EventType::Bet | EventType::Raise => self.wager(event.bet_amt),
            EventType::Call => ActionKind::Call(event.bet_amt - self.last_bet),
            EventType::Check => ActionKind::Check,
            EventType::Fold => {
                self.folds.entry(event.player_num).or_insert(self.street);
                ActionKind::Fold
            }
            EventType::Other => {
                debug!("Skipping event from player {}", event.player_num);
                return;
            }
        };

        self.actions[self.street.index()].push(Action {
            actor: hand.player_name(event.player_num).into_owned(),
            kind,
        });
    }

    fn reveal(&mut self, card: &str) {
        self.board.push(card.to_string());
        if let Some(street) = Street::starting_at(self.board.len()) {
            self.street = street;
            self.last_bet = Chips::ZERO;
        }
    }

    fn wager(&mut self, amount: Chips) -> ActionKind {
        let kind = if self.last_bet == Chips::ZERO || amount == self.last_bet {
            ActionKind::Bet(amount)
        } else {
            ActionKind::Raise {
                by: amount - self.last_bet,
                to: amount,
            }
        };

        self.last_bet = amount;
        kind
    }

    /// The street for the next action.
    pub fn street(&self) -> Street {
        self.street
    }

    /// The amount the next player is facing.
    pub fn last_bet(&self) -> Chips {
        self.last_bet
    }

    /// The revealed board cards.
    pub fn board(&self) -> &[String] {
        &self.board
    }

    /// Checks if the board has enough cards for a street.
    pub fn reached(&self, street: Street) -> bool {
        self.board.len() >= street.board_len()
    }

    /// The actions on a street.
    pub fn actions(&self, street: Street) -> &[Action] {
        &self.actions[street.index()]
    }

    /// The street where a player folded.
    pub fn folded_on(&self, player_num: i64) -> Option<Street> {
        self.folds.get(&player_num).copied()
    }
}
