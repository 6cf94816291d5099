//! Core types for the vocabulary trainer.

use serde::{Deserialize, Serialize};

/// A vocabulary card: an English term and its German reference translation.
///
/// The German side may encode several acceptable variants ("Hallo / Servus")
/// and parenthesized hints ("das Wasser (drink)") in one string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    pub en: String,
    pub de: String,
}

impl WordPair {
    /// Build a pair from raw strings, trimming both sides.
    ///
    /// Returns `None` when either side is empty after trimming.
    pub fn new(en: &str, de: &str) -> Option<Self> {
        let en = en.trim();
        let de = de.trim();
        if en.is_empty() || de.is_empty() {
            return None;
        }
        Some(Self {
            en: en.to_string(),
            de: de.to_string(),
        })
    }
}

/// Practice mode of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizMode {
    Flashcards,
    Typing,
    Choice,
}

impl Default for QuizMode {
    fn default() -> Self {
        Self::Flashcards
    }
}

impl QuizMode {
    /// Mode name as it appears in API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flashcards => "flashcards",
            Self::Typing => "typing",
            Self::Choice => "choice",
        }
    }
}

/// Prompt direction of a session.
///
/// Typed practice is always English to German; flashcards and multiple
/// choice support both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    EnToDe,
    DeToEn,
}

impl Default for Direction {
    fn default() -> Self {
        Self::EnToDe
    }
}

impl Direction {
    /// Side of the pair shown as the prompt.
    pub fn prompt<'a>(&self, pair: &'a WordPair) -> &'a str {
        match self {
            Self::EnToDe => &pair.en,
            Self::DeToEn => &pair.de,
        }
    }

    /// Side of the pair expected as the answer.
    pub fn answer<'a>(&self, pair: &'a WordPair) -> &'a str {
        match self {
            Self::EnToDe => &pair.de,
            Self::DeToEn => &pair.en,
        }
    }
}
