//! Diagnostics logging and the submission journal.
//!
//! The terminal belongs to the UI, so `tracing` output goes to
//! `<log_dir>/inquiry-desk.log`. When the journal is enabled, every settled
//! submission is also appended to a daily file named
//! `inquiries_<date>.log` in the same directory.

use crate::config::{expand_home, LoggingConfig};
use crate::form::controller::Settlement;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the
/// configured level.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let path = log_dir.join("inquiry-desk.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;
    Ok(())
}

/// One settled submission, as recorded in the journal.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub timestamp: String,
    pub settlement: Settlement,
    pub detail: String,
}

impl JournalEntry {
    pub fn line(&self) -> String {
        let outcome = match self.settlement {
            Settlement::Success => "ACCEPTED",
            Settlement::ServerRejected => "REJECTED",
            Settlement::TransportFailure => "FAILED",
        };
        if self.detail.is_empty() {
            format!("[{}] {}", self.timestamp, outcome)
        } else {
            format!("[{}] {} {}", self.timestamp, outcome, self.detail)
        }
    }
}

/// Appends settled submissions to daily journal files.
///
/// File handles are cached for the lifetime of the journal. Write failures
/// are logged and otherwise ignored.
pub struct SubmissionJournal {
    enabled: bool,
    log_dir: PathBuf,
    file_handles: HashMap<String, File>,
}

impl SubmissionJournal {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.journal,
            log_dir: expand_home(&config.log_dir),
            file_handles: HashMap::new(),
        }
    }

    pub fn record(&mut self, entry: &JournalEntry) {
        if !self.enabled {
            return;
        }

        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let filename = format!("inquiries_{}.log", date);

        if !self.file_handles.contains_key(&filename) {
            let _ = fs::create_dir_all(&self.log_dir);
            let path = self.log_dir.join(&filename);
            match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => {
                    self.file_handles.insert(filename.clone(), file);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "cannot open journal");
                    return;
                }
            }
        }

        if let Some(handle) = self.file_handles.get_mut(&filename) {
            if let Err(e) = writeln!(handle, "{}", entry.line()) {
                tracing::warn!(error = %e, "journal write failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(settlement: Settlement, detail: &str) -> JournalEntry {
        JournalEntry {
            timestamp: "12:00:00".into(),
            settlement,
            detail: detail.into(),
        }
    }

    #[test]
    fn test_entry_line() {
        assert_eq!(
            entry(Settlement::Success, "inquiry_id=7").line(),
            "[12:00:00] ACCEPTED inquiry_id=7"
        );
        assert_eq!(
            entry(Settlement::TransportFailure, "").line(),
            "[12:00:00] FAILED"
        );
    }

    #[test]
    fn test_disabled_journal_writes_nothing() {
        let dir = std::env::temp_dir().join(format!("inquiry-desk-journal-off-{}", std::process::id()));
        let mut journal = SubmissionJournal::new(&LoggingConfig {
            log_dir: dir.display().to_string(),
            level: "info".into(),
            journal: false,
        });
        journal.record(&entry(Settlement::Success, ""));
        assert!(!dir.exists());
    }

    #[test]
    fn test_enabled_journal_appends() {
        let dir = std::env::temp_dir().join(format!("inquiry-desk-journal-on-{}", std::process::id()));
        let mut journal = SubmissionJournal::new(&LoggingConfig {
            log_dir: dir.display().to_string(),
            level: "info".into(),
            journal: true,
        });
        journal.record(&entry(Settlement::ServerRejected, "status=400 error=duplicate"));
        journal.record(&entry(Settlement::Success, ""));
        drop(journal);

        let file = fs::read_dir(&dir).unwrap().next().unwrap().unwrap().path();
        let text = fs::read_to_string(&file).unwrap();
        assert_eq!(
            text,
            "[12:00:00] REJECTED status=400 error=duplicate\n[12:00:00] ACCEPTED\n"
        );
        let _ = fs::remove_dir_all(&dir);
    }
}
