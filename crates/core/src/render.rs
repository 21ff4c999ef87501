// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand history transcript rendering.
use chrono::{DateTime, Utc};
use log::info;
use pokerscribe_cards::normalize;
use std::fmt;

use crate::{
    config::{BoardReveal, Config, ZeroOutcome},
    error::Result,
    hand::{Hand, Player},
    poker::{Chips, Street},
    reconstruct::Reconstruction,
};

/// A player result in the summary section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The player won the given net amount.
    Won(Chips),
    /// The player lost chips.
    Lost,
    /// Zero net winnings, reported as a preflop fold.
    EvenOrFoldedPreflop,
    /// Zero net winnings after folding on a street.
    FoldedOn(Street),
    /// Zero net winnings without folding.
    Mucked,
}

impl Outcome {
    /// Gets a player outcome.
    pub fn of(player: &Player, rec: &Reconstruction, config: &Config) -> Outcome {
        let winnings = player.cumulative_winnings_amt;
        if winnings.is_positive() {
            Outcome::Won(winnings)
        } else if winnings.is_negative() {
            Outcome::Lost
        } else {
            match config.zero_outcome {
                ZeroOutcome::FoldedPreflop => Outcome::EvenOrFoldedPreflop,
                ZeroOutcome::FromActions => rec
                    .folded_on(player.player_num)
                    .map_or(Outcome::Mucked, Outcome::FoldedOn),
            }
        }
    }
}

/// Renders a hand transcript.
///
/// The start time is checked before anything is written so that a failed
/// conversion never produces a partial transcript.
pub fn render(hand: &Hand, config: &Config) -> Result<String> {
    let start_time = hand.start_time()?;
    let rec = Reconstruction::run(hand);

    let mut transcript = Transcript {
        hand,
        config,
        rec: &rec,
        out: String::with_capacity(1024),
    };

    transcript.header(start_time);
    transcript.seats();
    transcript.hole_cards();
    transcript.streets();
    transcript.showdown();
    transcript.summary();

    info!(
        "Converted hand {} with {} players, {} events and {} board cards",
        transcript.hand_id(),
        hand.players.len(),
        hand.events.len(),
        rec.board().len()
    );

    Ok(transcript.out)
}

/// Transcript writer.
struct Transcript<'a> {
    hand: &'a Hand,
    config: &'a Config,
    rec: &'a Reconstruction,
    out: String,
}

impl Transcript<'_> {
    fn line(&mut self, line: impl fmt::Display) {
        self.out.push_str(&line.to_string());
        self.out.push('\n');
    }

    fn hand_id(&self) -> u64 {
        self.config.hand_id.unwrap_or(self.hand.hand_num)
    }

    fn header(&mut self, start_time: DateTime<Utc>) {
        let (hand, config) = (self.hand, self.config);
        let hand_id = self.hand_id();
        let blinds = &hand.blinds;
        let game = [
            variant_label(&hand.game_variant),
            limit_label(&hand.bet_structure),
        ]
        .into_iter()
        .filter(|label| !label.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        self.line(format_args!(
            "PokerStars Hand #{hand_id}:  {game} ({}/{}) - {} {}",
            blinds.small_blind_amt,
            blinds.big_blind_amt,
            start_time.format("%Y-%m-%d %H:%M:%S"),
            config.timezone_label,
        ));

        self.line(format_args!(
            "Table '{}' {}-max ({}) Seat #{} is the button",
            config.table_name,
            config.max_seats,
            config.currency_label,
            config.seat(blinds.button_player_num),
        ));
    }

    fn seats(&mut self) {
        let (hand, config) = (self.hand, self.config);
        for player in &hand.players {
            self.line(format_args!(
                "Seat {}: {} ({} in chips)",
                config.seat(player.player_num),
                player.name,
                player.start_stack_amt,
            ));
        }

        let blinds = &hand.blinds;
        self.line(format_args!(
            "{}: posts small blind {}",
            hand.player_name(blinds.small_blind_player_num),
            blinds.small_blind_amt
        ));
        self.line(format_args!(
            "{}: posts big blind {}",
            hand.player_name(blinds.big_blind_player_num),
            blinds.big_blind_amt
        ));
    }

    fn hole_cards(&mut self) {
        self.line("*** HOLE CARDS ***");
        let hand = self.hand;
        for player in &hand.players {
            if let Some(card) = player.first_card() {
                self.line(format_args!("Dealt to {} [{}]", player.name, normalize(card)));
            }
        }
    }

    fn streets(&mut self) {
        let rec = self.rec;
        for street in Street::streets() {
            if !rec.reached(street) {
                break;
            }

            if let Some(reveal) = self.reveal(street) {
                self.line(reveal);
            }

            for action in rec.actions(street) {
                self.line(action);
            }
        }
    }

    /// The line that opens a street after the preflop.
    fn reveal(&self, street: Street) -> Option<String> {
        let board = self.rec.board();
        let flop = Street::Flop.board_len();
        match street {
            Street::Preflop => None,
            Street::Flop => Some(format!("*** FLOP *** [{}]", cards(&board[..flop]))),
            Street::Turn | Street::River => {
                let last = street.board_len() - 1;
                let shown = match self.config.board_reveal {
                    BoardReveal::FlopAndCard => flop,
                    BoardReveal::Cumulative => last,
                };
                Some(format!(
                    "*** {street} *** [{}] [{}]",
                    cards(&board[..shown]),
                    cards(&board[last..=last])
                ))
            }
        }
    }

    fn showdown(&mut self) {
        self.line("*** SHOW DOWN ***");
        let hand = self.hand;
        for player in &hand.players {
            if let Some(card) = player.first_card() {
                self.line(format_args!("{}: shows [{}]", player.name, normalize(card)));
            }
        }

        // Only the first winner is reported.
        let winner = hand
            .players
            .iter()
            .find(|p| p.cumulative_winnings_amt.is_positive());
        if let Some(winner) = winner {
            self.line(format_args!(
                "{}: collected {} from pot",
                winner.name, winner.cumulative_winnings_amt
            ));
        }
    }

    fn summary(&mut self) {
        self.line("*** SUMMARY ***");

        let (hand, config, rec) = (self.hand, self.config, self.rec);
        let pot = hand
            .players
            .iter()
            .map(|p| p.cumulative_winnings_amt.abs())
            .sum::<Chips>();
        self.line(format_args!("Total pot {pot} | Rake 0"));
        self.line(format_args!("Board [{}]", cards(rec.board())));

        for player in &hand.players {
            let result = match (Outcome::of(player, rec, config), player.first_card()) {
                (Outcome::Won(amount), Some(card)) => {
                    format!("showed [{}] and won ({amount})", normalize(card))
                }
                (Outcome::Won(amount), None) => format!("collected ({amount})"),
                (Outcome::Lost, Some(card)) => format!("showed [{}] and lost", normalize(card)),
                (Outcome::Lost, None) => "lost".to_string(),
                (Outcome::EvenOrFoldedPreflop, _) => "folded before Flop (didn't bet)".to_string(),
                (Outcome::FoldedOn(street), _) => format!("folded {}", street.fold_phrase()),
                (Outcome::Mucked, Some(card)) => format!("mucked [{}]", normalize(card)),
                (Outcome::Mucked, None) => "mucked".to_string(),
            };

            self.line(format_args!(
                "Seat {}: {} {result}",
                config.seat(player.player_num),
                player.name
            ));
        }
    }
}

/// Normalized cards separated by a space.
fn cards(cards: &[String]) -> String {
    normalize(&cards.join(" "))
}

fn variant_label(variant: &str) -> &str {
    match variant.to_ascii_uppercase().as_str() {
        "HOLDEM" => "Hold'em",
        "OMAHA" => "Omaha",
        _ => variant,
    }
}

fn limit_label(structure: &str) -> &str {
    match structure.to_ascii_uppercase().as_str() {
        "NOLIMIT" => "No Limit",
        "POTLIMIT" => "Pot Limit",
        "LIMIT" => "Limit",
        _ => structure,
    }
}
