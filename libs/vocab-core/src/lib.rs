//! Core answer-grading library shared by the trainer applications.
//!
//! Provides:
//! - Canonical-token normalization (articles, umlauts, punctuation)
//! - Variant extraction from reference translations
//! - Fuzzy answer matching (Levenshtein distance with length-based tolerance)
//! - Shared types (WordPair, QuizMode, Direction)

pub mod matching;
pub mod normalize;
pub mod types;
pub mod variants;

pub use matching::{check, levenshtein, tolerance, CheckResult};
pub use normalize::normalize;
pub use types::{Direction, QuizMode, WordPair};
pub use variants::{extract_variants, strip_parentheses};
