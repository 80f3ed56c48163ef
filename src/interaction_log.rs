//! Per-day JSON log of AI prompts (`~/.c9ai/logs/YYYY-MM-DD.json`).

use crate::error::Result;
use crate::model::Model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub model: Model,
    pub prompt: String,
    /// Process id of the shell that sent the prompt.
    pub session: u32,
}

impl LogEntry {
    pub fn new(model: Model, prompt: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            model,
            prompt: prompt.to_string(),
            session: std::process::id(),
        }
    }
}

fn day_file(logs_dir: &Path, timestamp: DateTime<Utc>) -> PathBuf {
    logs_dir.join(format!("{}.json", timestamp.format("%Y-%m-%d")))
}

fn append_entry(logs_dir: &Path, entry: &LogEntry) -> Result<()> {
    let path = day_file(logs_dir, entry.timestamp);
    let mut entries: Vec<LogEntry> = if path.exists() {
        serde_json::from_str(&std::fs::read_to_string(&path)?)?
    } else {
        Vec::new()
    };
    entries.push(entry.clone());
    std::fs::write(&path, serde_json::to_string_pretty(&entries)?)?;
    Ok(())
}

/// Record a prompt. Logging never interrupts the caller; failures are only
/// traced.
pub fn record(logs_dir: &Path, model: Model, prompt: &str) {
    if let Err(e) = append_entry(logs_dir, &LogEntry::new(model, prompt)) {
        tracing::debug!("Could not write interaction log: {}", e);
    }
}

/// Number of day files in the logs directory.
pub fn session_days(logs_dir: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in std::fs::read_dir(logs_dir)? {
        if entry?.path().extension().is_some_and(|ext| ext == "json") {
            count += 1;
        }
    }
    Ok(count)
}
