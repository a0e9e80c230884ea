//! High-score persistence.
//!
//! One JSON object per line, appended at game over. Reading degrades
//! instead of failing: a missing or unreadable file is an empty board,
//! a corrupt line is skipped with a warning. Losing a high score must
//! never take the game down with it.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        ScoreEntry {
            name: name.into(),
            score,
        }
    }
}

/// Scores loaded from disk, best first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    entries: Vec<ScoreEntry>,
}

impl Scoreboard {
    /// Load and sort the score file. Never fails: problems degrade to
    /// fewer entries.
    pub fn load(path: impl AsRef<Path>) -> Scoreboard {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %path.display(), %err, "score file unreadable");
                }
                return Scoreboard::default();
            }
        };
        let mut entries = Vec::new();
        for (lineno, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<ScoreEntry>(line) {
                Ok(entry) => entries.push(entry),
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        line = lineno + 1,
                        %err,
                        "skipping corrupt score line"
                    );
                }
            }
        }
        // stable: ties keep their file order
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        Scoreboard { entries }
    }

    /// Append one entry to the score file, creating it as needed.
    pub fn append(path: impl AsRef<Path>, entry: &ScoreEntry) -> Result<()> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening score file {}", path.display()))?;
        let line = serde_json::to_string(entry).context("encoding score entry")?;
        writeln!(file, "{line}")
            .with_context(|| format!("writing score file {}", path.display()))?;
        Ok(())
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn best(&self) -> Option<&ScoreEntry> {
        self.entries.first()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
