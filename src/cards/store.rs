//! File-backed card persistence
//!
//! One JSON array in one file. Reads that fail for any reason produce the
//! empty collection; writes that fail are logged and dropped. Nothing here
//! blocks the UI with an error.

use super::types::{now_millis, Card, StoredCard};
use crate::{FlexNotesError, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// File name under the data directory; the array of cards lives here.
const STORAGE_FILE: &str = "cards.json";

pub struct CardStore {
    path: PathBuf,
}

impl CardStore {
    /// Store under the platform data directory
    /// (e.g. `~/.local/share/flexnotes/cards.json`).
    pub fn open_default() -> Result<Self> {
        let dir = dirs::data_local_dir()
            .ok_or_else(|| FlexNotesError::StorageError("no data directory".to_string()))?
            .join("flexnotes");
        Ok(Self::at(dir.join(STORAGE_FILE)))
    }

    /// Store at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load all cards, normalizing legacy record shapes.
    ///
    /// A missing file, unreadable file, or anything other than a JSON array
    /// yields the empty collection. Failures are logged, never surfaced.
    pub fn load(&self) -> Vec<Card> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No card file at {:?}, starting empty", self.path);
                return Vec::new();
            }
            Err(e) => {
                warn!("Failed to read cards from {:?}: {}", self.path, e);
                return Vec::new();
            }
        };

        let stored: Vec<StoredCard> = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Failed to parse cards from {:?}: {}", self.path, e);
                return Vec::new();
            }
        };

        let load_millis = now_millis();
        stored
            .into_iter()
            .enumerate()
            .map(|(i, record)| record.normalize(load_millis, i))
            .collect()
    }

    /// Write the full collection.
    ///
    /// Callers treat this as fire-and-forget: log the error and move on.
    pub fn save(&self, cards: &[Card]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| FlexNotesError::StorageError(e.to_string()))?;
        }

        let json = serde_json::to_string(cards)?;
        fs::write(&self.path, json).map_err(|e| FlexNotesError::StorageError(e.to_string()))?;

        debug!("Saved {} cards to {:?}", cards.len(), self.path);
        Ok(())
    }
}
