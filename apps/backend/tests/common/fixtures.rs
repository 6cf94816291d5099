//! Test fixtures and factory functions for creating test data.

use serde_json::json;

/// Five-pair deck used by most tests.
///
/// Covers the interesting answer shapes: variants, articles, parenthesized
/// hints and umlauts.
pub const SAMPLE_DECK_CSV: &str = "\
en,de
Hello,Hallo / Servus
Goodbye,Tschüss
Water,das Wasser (drink)
Thank you,Danke
Bread,das Brot
";

/// Create a login request body.
pub fn login_request(password: &str) -> serde_json::Value {
    json!({ "password": password })
}

/// Create an add-word request body.
pub fn add_word_request(en: &str, de: &str) -> serde_json::Value {
    json!({ "en": en, "de": de })
}

/// Create a session create request body.
pub fn create_session_request(
    mode: &str,
    direction: &str,
    strict: bool,
    limit: Option<usize>,
) -> serde_json::Value {
    json!({
        "mode": mode,
        "direction": direction,
        "strict": strict,
        "limit": limit
    })
}

/// Create a typed answer request body.
pub fn answer_request(answer: &str) -> serde_json::Value {
    json!({ "answer": answer })
}

/// Create a choice selection request body.
pub fn choice_request(selected: &str) -> serde_json::Value {
    json!({ "selected": selected })
}

/// Create a flashcard rating request body.
pub fn rate_request(knew_it: bool) -> serde_json::Value {
    json!({ "knew_it": knew_it })
}
