// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Input and output files.
use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use pokerscribe_core::Config;

/// Checks if a path is the stdout marker.
pub fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Reads a JSON hand record.
pub fn read_record(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))
}

/// Reads a JSON config file.
pub fn read_config(path: &Path) -> Result<Config> {
    let json =
        fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Invalid config {}", path.display()))
}

/// Writes a transcript to a file or to stdout.
pub fn write_transcript(path: &Path, transcript: &str) -> Result<()> {
    if is_stdout(path) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(transcript.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    fs::write(path, transcript).with_context(|| format!("Cannot write {}", path.display()))
}
