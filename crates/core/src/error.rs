// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Conversion errors.
use thiserror::Error;

/// Conversion result.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that fail a conversion, no transcript is produced.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The record could not be read, or a required field is missing.
    #[error("Invalid hand record: {0}")]
    Json(#[from] serde_json::Error),

    /// The record contains no hands.
    #[error("The hand record contains no hands")]
    NoHands,

    /// The hand start time is not a valid timestamp.
    #[error("Invalid hand start time '{0}'")]
    InvalidTimestamp(String),
}
