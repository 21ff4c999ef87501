// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerscribe CLI, converts a hand record into a hand history file.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{error, info};
use std::{path::PathBuf, process::ExitCode};

use pokerscribe_core::{BoardReveal, Config, ZeroOutcome};

mod files;

/// Turn and river board display.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Reveal {
    /// Flop cards followed by the new card.
    FlopAndCard,
    /// All earlier board cards followed by the new card.
    Cumulative,
}

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// The JSON hand record to convert.
    #[clap(long, short, default_value = "hand.json")]
    input: PathBuf,
    /// The hand history output file, use `-` for stdout.
    #[clap(long, short, default_value = "hand-history.txt")]
    output: PathBuf,
    /// A JSON configuration file, flags override its values.
    #[clap(long, short)]
    config: Option<PathBuf>,
    /// The hand identifier, defaults to the record hand number.
    #[clap(long)]
    hand_id: Option<u64>,
    /// The table name.
    #[clap(long)]
    table: Option<String>,
    /// The maximum number of seats at the table.
    #[clap(long, value_parser = clap::value_parser!(u8).range(2..=10))]
    max_seats: Option<u8>,
    /// Offset added to player numbers to get seat numbers.
    #[clap(long, allow_negative_numbers = true)]
    seat_offset: Option<i64>,
    /// How turn and river board cards are shown.
    #[clap(long, value_enum)]
    board_reveal: Option<Reveal>,
    /// Report players with zero winnings from their actions instead of as
    /// preflop folds.
    #[clap(long)]
    precise_outcomes: bool,
}

impl Cli {
    /// Builds the conversion config from the config file and the flags.
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => files::read_config(path)?,
            None => Config::default(),
        };

        if let Some(hand_id) = self.hand_id {
            config.hand_id = Some(hand_id);
        }

        if let Some(table) = &self.table {
            config.table_name = table.clone();
        }

        if let Some(max_seats) = self.max_seats {
            config.max_seats = max_seats;
        }

        if let Some(seat_offset) = self.seat_offset {
            config.seat_offset = seat_offset;
        }

        if let Some(reveal) = self.board_reveal {
            config.board_reveal = match reveal {
                Reveal::FlopAndCard => BoardReveal::FlopAndCard,
                Reveal::Cumulative => BoardReveal::Cumulative,
            };
        }

        if self.precise_outcomes {
            config.zero_outcome = ZeroOutcome::FromActions;
        }

        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config()?;
    let record = files::read_record(&cli.input)?;
    let transcript = pokerscribe_core::convert(&record, &config)?;
    files::write_transcript(&cli.output, &transcript)?;

    if !files::is_stdout(&cli.output) {
        info!("Hand history written to {}", cli.output.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "pokerscribe",
            "--hand-id",
            "202510260001",
            "--seat-offset",
            "-1",
            "--board-reveal",
            "cumulative",
            "--precise-outcomes",
        ]);

        let config = cli.config().unwrap();
        assert_eq!(config.hand_id, Some(202510260001));
        assert_eq!(config.seat_offset, -1);
        assert_eq!(config.board_reveal, BoardReveal::Cumulative);
        assert_eq!(config.zero_outcome, ZeroOutcome::FromActions);
        assert_eq!(config.table_name, "Home Game");
        assert_eq!(cli.input, PathBuf::from("hand.json"));
        assert_eq!(cli.output, PathBuf::from("hand-history.txt"));
    }

    #[test]
    fn default_flags() {
        let cli = Cli::parse_from(["pokerscribe", "-i", "in.json", "-o", "-"]);
        let config = cli.config().unwrap();
        assert_eq!(config.hand_id, None);
        assert_eq!(config.board_reveal, BoardReveal::FlopAndCard);
        assert_eq!(config.zero_outcome, ZeroOutcome::FoldedPreflop);
        assert!(files::is_stdout(&cli.output));
    }

    #[test]
    fn cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
