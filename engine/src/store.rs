//! Transcript persistence.
//!
//! The store keeps the in-memory transcript and one JSON record on disk
//! eventually consistent: every append and clear updates the record before
//! returning. Clearing deletes the record rather than writing an empty
//! array, so "never used" and "explicitly cleared" are both representable
//! at restore time (both resolve to an empty in-memory transcript today).
//!
//! The store's own transcript is the single source of truth for what gets
//! written; persistence never serializes an external snapshot.

use std::fs;
use std::path::PathBuf;

use polycalc_types::{Transcript, TranscriptEntry};

#[derive(Debug)]
pub struct TranscriptStore {
    transcript: Transcript,
    path: PathBuf,
}

impl TranscriptStore {
    /// Filename for the persisted transcript record.
    pub const FILENAME: &'static str = "transcript.json";

    /// Create a store backed by the given record path, starting empty.
    /// Call [`TranscriptStore::restore`] once at session start.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            transcript: Transcript::new(),
            path,
        }
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Load the persisted record if it exists and decodes.
    ///
    /// A corrupt record is treated as absent: logged, never fatal, and the
    /// transcript stays empty. Returns how many entries were restored.
    pub fn restore(&mut self) -> usize {
        if !self.path.exists() {
            return 0;
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Failed to read transcript record: {e}");
                return 0;
            }
        };

        match serde_json::from_str::<Transcript>(&raw) {
            Ok(restored) => {
                let count = restored.len();
                self.transcript = restored;
                count
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Corrupt transcript record, starting empty: {e}"
                );
                0
            }
        }
    }

    /// Append an entry and synchronously persist the record.
    ///
    /// A persistence failure is logged and swallowed; the in-memory
    /// transcript keeps the entry either way.
    pub fn append(&mut self, entry: TranscriptEntry) {
        self.transcript.append(entry);
        if let Err(e) = self.persist() {
            tracing::warn!("Failed to persist transcript: {e}");
        }
    }

    /// Empty the transcript and delete the persisted record.
    pub fn clear(&mut self) {
        self.transcript.clear();
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Failed to delete transcript record: {e}");
            }
        }
    }

    /// Write the current in-memory transcript to the record path.
    pub fn persist(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let encoded = serde_json::to_string_pretty(self.transcript())?;
        fs::write(&self.path, encoded)?;
        Ok(())
    }
}
