// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerscribe cards types.
//!
//! This crate define the rank and suit types used by hand histories:
//!
//! ```
//! # use pokerscribe_cards::{Card, Rank, Suit};
//! let th: Card = "10h".parse().unwrap();
//! assert_eq!(th, Card::new(Rank::Ten, Suit::Hearts));
//! assert_eq!(th.to_string(), "Th");
//! ```
//!
//! and the notation normalizer that rewrites shorthand card tokens into the
//! notation used by hand history clients:
//!
//! ```
//! # use pokerscribe_cards::normalize;
//! assert_eq!(normalize("10h kc 2s"), "Th Kc 2s");
//! ```
//!
//! Normalization is lenient, tokens that are not cards are passed through:
//!
//! ```
//! # use pokerscribe_cards::normalize;
//! assert_eq!(normalize("xx"), "xx");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod notation;
pub use notation::{Card, ParseCardError, Rank, Suit, normalize, normalize_token};
