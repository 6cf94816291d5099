//! CSV-backed deck storage.
//!
//! The deck is a flat two-column file with an `en,de` header. A missing or
//! effectively empty file falls back to a built-in starter deck so the
//! trainer works out of the box; the first appended row replaces the
//! fallback, it does not extend it.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;

use vocab_core::WordPair;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// One row of the deck file.
#[derive(Debug, Serialize, Deserialize)]
struct DeckRow {
    #[serde(default)]
    en: String,
    #[serde(default)]
    de: String,
}

/// Flat CSV deck with a built-in starter fallback.
pub struct DeckStore {
    path: PathBuf,
    // Serializes appends; readers go unguarded.
    write_guard: Mutex<()>,
}

impl DeckStore {
    /// Create a store for the given deck file. The file may not exist yet.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_guard: Mutex::new(()),
        }
    }

    /// Deck file path from the DECK_PATH env var, default "deck.csv".
    pub fn from_env() -> Self {
        let path = std::env::var("DECK_PATH").unwrap_or_else(|_| "deck.csv".to_string());
        Self::new(PathBuf::from(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the deck, skipping rows with an empty side.
    ///
    /// A missing file, or a file without a single valid row, yields the
    /// starter deck instead.
    pub fn load(&self) -> Result<Vec<WordPair>, DeckError> {
        if !self.path.exists() {
            return Ok(starter_deck());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;

        let mut words = Vec::new();
        for row in reader.deserialize() {
            let row: DeckRow = row?;
            if let Some(pair) = WordPair::new(&row.en, &row.de) {
                words.push(pair);
            }
        }

        if words.is_empty() {
            return Ok(starter_deck());
        }
        Ok(words)
    }

    /// Append one pair to the deck file, writing the `en,de` header first
    /// when the file is new.
    pub async fn add(&self, pair: &WordPair) -> Result<(), DeckError> {
        let _guard = self.write_guard.lock().await;

        let write_header = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);
        writer.serialize(DeckRow {
            en: pair.en.clone(),
            de: pair.de.clone(),
        })?;
        writer.flush()?;

        tracing::info!("Added pair to {}: {}", self.path.display(), pair.en);
        Ok(())
    }

    /// Serialize the current deck (starter fallback included) to CSV.
    pub fn export(&self) -> Result<String, DeckError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for pair in self.load()? {
            writer.serialize(DeckRow {
                en: pair.en,
                de: pair.de,
            })?;
        }
        writer.flush()?;

        let bytes = writer
            .into_inner()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
        String::from_utf8(bytes)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()).into())
    }
}

/// The original ten A1 pairs shipped with the trainer.
pub fn starter_deck() -> Vec<WordPair> {
    [
        ("Hello", "Hallo"),
        ("Goodbye", "Tschüss"),
        ("Please", "Bitte"),
        ("Thank you", "Danke"),
        ("Excuse me / Sorry", "Entschuldigung"),
        ("Yes", "Ja"),
        ("No", "Nein"),
        ("Water", "Wasser"),
        ("Bread", "Brot"),
        ("To speak", "Sprechen"),
    ]
    .into_iter()
    .filter_map(|(en, de)| WordPair::new(en, de))
    .collect()
}
