// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand record types.
//!
//! The record is a JSON document with a list of hands, each hand carries the
//! players, the blinds structure and a chronological list of events:
//!
//! ```json
//! {
//!   "Hands": [{
//!     "HandNum": 12,
//!     "GameVariant": "HOLDEM",
//!     "BetStructure": "NOLIMIT",
//!     "StartDateTimeUTC": "2025-10-26T03:12:45.1234567Z",
//!     "FlopDrawBlinds": {
//!       "SmallBlindAmt": 1, "BigBlindAmt": 2, "ButtonPlayerNum": 1,
//!       "SmallBlindPlayerNum": 1, "BigBlindPlayerNum": 2
//!     },
//!     "Players": [{
//!       "PlayerNum": 1, "Name": "alice", "StartStackAmt": 200,
//!       "CumulativeWinningsAmt": 2, "HoleCards": ["ah kd"]
//!     }],
//!     "Events": [
//!       { "EventType": "CALL", "PlayerNum": 1, "BetAmt": 2 },
//!       { "EventType": "BOARD CARD", "BoardCards": "10s" }
//!     ]
//!   }]
//! }
//! ```
use chrono::{DateTime, NaiveDateTime, Utc};
use log::warn;
use serde::{Deserialize, Deserializer};
use std::borrow::Cow;

use crate::{
    error::{ConvertError, Result},
    poker::Chips,
};

/// The record with the hands exported by the tracking system.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HandRecord {
    /// The recorded hands.
    pub hands: Vec<Hand>,
}

/// A recorded hand.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Hand {
    /// The hand number.
    #[serde(default)]
    pub hand_num: u64,
    /// The game variant label, for example `HOLDEM`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub game_variant: String,
    /// The bet structure label, for example `NOLIMIT`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bet_structure: String,
    /// The players at the table.
    pub players: Vec<Player>,
    /// The hand events in chronological order.
    pub events: Vec<Event>,
    /// The blinds structure.
    #[serde(rename = "FlopDrawBlinds")]
    pub blinds: Blinds,
    /// The hand start time.
    #[serde(rename = "StartDateTimeUTC")]
    pub start_date_time_utc: String,
}

/// A player in a hand.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Player {
    /// The player number, also used as seat number.
    pub player_num: i64,
    /// The player display name, not guaranteed to be unique.
    pub name: String,
    /// The player stack at the start of the hand.
    #[serde(default)]
    pub start_stack_amt: Chips,
    /// The player net winnings for this hand.
    #[serde(default)]
    pub cumulative_winnings_amt: Chips,
    /// The recorded hole cards, empty if unknown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub hole_cards: Vec<String>,
}

impl Player {
    /// The first recorded hole cards entry, blank entries are not recorded.
    pub fn first_card(&self) -> Option<&str> {
        self.hole_cards
            .iter()
            .map(|c| c.trim())
            .find(|c| !c.is_empty())
    }
}

/// The kind of a hand event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EventType {
    /// A player bets.
    #[serde(rename = "BET")]
    Bet,
    /// A player calls.
    #[serde(rename = "CALL")]
    Call,
    /// A player raises.
    #[serde(rename = "RAISE")]
    Raise,
    /// A player checks.
    #[serde(rename = "CHECK")]
    Check,
    /// A player folds.
    #[serde(rename = "FOLD")]
    Fold,
    /// A board card is revealed.
    #[serde(rename = "BOARD CARD")]
    BoardCard,
    /// Any other event.
    #[serde(other)]
    Other,
}

/// A hand event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Event {
    /// The event kind.
    pub event_type: EventType,
    /// The acting player number.
    #[serde(default)]
    pub player_num: i64,
    /// The player total bet for the current street.
    #[serde(default)]
    pub bet_amt: Chips,
    /// The revealed card for board card events.
    #[serde(default)]
    pub board_cards: Option<String>,
}

/// The blinds structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Blinds {
    /// The small blind amount.
    pub small_blind_amt: Chips,
    /// The big blind amount.
    pub big_blind_amt: Chips,
    /// The player with the button.
    pub button_player_num: i64,
    /// The player that posts the small blind.
    pub small_blind_player_num: i64,
    /// The player that posts the big blind.
    pub big_blind_player_num: i64,
}

impl Hand {
    /// Reads a JSON hand record and returns its first hand.
    pub fn from_json(json: &str) -> Result<Hand> {
        let record: HandRecord = serde_json::from_str(json)?;
        if record.hands.len() > 1 {
            warn!(
                "Hand record contains {} hands, converting only the first",
                record.hands.len()
            );
        }

        record.hands.into_iter().next().ok_or(ConvertError::NoHands)
    }

    /// Finds the first player with the given number.
    pub fn player(&self, player_num: i64) -> Option<&Player> {
        self.players.iter().find(|p| p.player_num == player_num)
    }

    /// The name of a player, or `Player<N>` if no player has that number.
    pub fn player_name(&self, player_num: i64) -> Cow<'_, str> {
        match self.player(player_num) {
            Some(player) => Cow::Borrowed(player.name.as_str()),
            None => {
                warn!("No player with number {player_num}");
                Cow::Owned(format!("Player{player_num}"))
            }
        }
    }

    /// The hand start time.
    ///
    /// Accepts RFC 3339 timestamps with any fractional precision, timestamps
    /// without an offset are read as UTC.
    pub fn start_time(&self) -> Result<DateTime<Utc>> {
        let ts = self.start_date_time_utc.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
            return Ok(dt.with_timezone(&Utc));
        }

        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(ts, fmt).ok())
            .map(|dt| dt.and_utc())
            .ok_or_else(|| ConvertError::InvalidTimestamp(ts.to_string()))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
