//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from vocab-core
pub use vocab_core::types::{Direction, QuizMode, WordPair};

// === Auth types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

// === Deck types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct DeckResponse {
    pub words: Vec<WordPair>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddWordRequest {
    pub en: String,
    pub de: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddWordResponse {
    pub word: WordPair,
    pub count: usize,
}

// === Session types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub mode: QuizMode,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub strict: bool,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    pub mode: QuizMode,
    pub direction: Direction,
    pub strict: bool,
    pub card: CardView,
}

/// What a client may see of the current card. Never carries the answer;
/// choice mode options are the one exception.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardView {
    pub index: usize,
    pub total: usize,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Progress {
    pub index: usize,
    pub total: usize,
    pub correct: usize,
    pub finished: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub mode: QuizMode,
    pub direction: Direction,
    pub strict: bool,
    pub started_at: DateTime<Utc>,
    pub progress: Progress,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub accepted: bool,
    /// Present on acceptance only; a rejected answer reveals nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shown_answer: Option<String>,
    pub progress: Progress,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChoiceRequest {
    pub selected: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChoiceResponse {
    pub correct: bool,
    pub correct_answer: String,
    pub progress: Progress,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RateRequest {
    pub knew_it: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RevealResponse {
    pub answer: String,
}
