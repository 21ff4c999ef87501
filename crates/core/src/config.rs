// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Transcript configuration.
use serde::Deserialize;

/// How the turn and river board cards are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoardReveal {
    /// The flop cards followed by the new card, `[Ah Kd 2c] [9s]`.
    #[default]
    FlopAndCard,
    /// All the earlier board cards followed by the new card.
    Cumulative,
}

/// How a player with zero net winnings is reported in the summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroOutcome {
    /// Always reported as folded before the flop.
    #[default]
    FoldedPreflop,
    /// Reported from the street where the player folded, or as mucked if the
    /// player never folded.
    FromActions,
}

/// Transcript configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The hand identifier, if not set uses the record hand number.
    pub hand_id: Option<u64>,
    /// The table name.
    pub table_name: String,
    /// The maximum number of seats at the table.
    pub max_seats: u8,
    /// The currency label shown in the table line.
    pub currency_label: String,
    /// The label appended to the header timestamp.
    pub timezone_label: String,
    /// Offset added to player numbers to get the displayed seat numbers.
    pub seat_offset: i64,
    /// How turn and river cards are shown.
    pub board_reveal: BoardReveal,
    /// How players with zero winnings are reported.
    pub zero_outcome: ZeroOutcome,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hand_id: None,
            table_name: "Home Game".to_string(),
            max_seats: 5,
            currency_label: "Play Money".to_string(),
            timezone_label: "ET".to_string(),
            seat_offset: 0,
            board_reveal: BoardReveal::default(),
            zero_outcome: ZeroOutcome::default(),
        }
    }
}

impl Config {
    /// The displayed seat for a player number.
    pub fn seat(&self, player_num: i64) -> i64 {
        player_num + self.seat_offset
    }
}
