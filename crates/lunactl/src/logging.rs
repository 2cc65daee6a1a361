//! Chat transcript logging - JSONL append, one line per turn.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use luna_common::ChatTurn;

/// Append one turn to the transcript file, creating it (and its parent
/// directory) on first use.
pub fn append_turn(path: &Path, turn: &ChatTurn) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string(turn)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", json)?;
    Ok(())
}
