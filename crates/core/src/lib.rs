// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerscribe hand history conversion engine.
//!
//! Converts a hand record exported by a table tracking system into a text
//! hand history that poker clients and trackers can import:
//!
//! ```no_run
//! # use pokerscribe_core::{Config, convert};
//! let json = std::fs::read_to_string("hand.json").unwrap();
//! let transcript = convert(&json, &Config::default()).unwrap();
//! print!("{transcript}");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod config;
pub mod error;
pub mod hand;
pub mod poker;
pub mod reconstruct;
pub mod render;

pub use config::{BoardReveal, Config, ZeroOutcome};
pub use error::{ConvertError, Result};
pub use hand::Hand;

/// Converts the first hand in a JSON hand record into a transcript.
pub fn convert(json: &str, config: &Config) -> Result<String> {
    let hand = Hand::from_json(json)?;
    convert_hand(&hand, config)
}

/// Converts a hand into a transcript.
pub fn convert_hand(hand: &Hand, config: &Config) -> Result<String> {
    render::render(hand, config)
}
