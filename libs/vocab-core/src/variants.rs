//! Variant extraction from reference translations.
//!
//! A reference translation can encode several acceptable answers in one
//! string ("Hallo / Servus", "Entschuldigung, Verzeihung") plus hints in
//! parentheses that are never part of the expected answer.

use once_cell::sync::Lazy;
use regex::Regex;

static PAREN_HINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\([^)]*\)").unwrap());
static ALTERNATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*[/;,]\s*|\s+oder\s+").unwrap());

/// Remove parenthesized hints, and the whitespace run before each, then trim.
pub fn strip_parentheses(reference: &str) -> String {
    PAREN_HINT.replace_all(reference, "").trim().to_string()
}

/// Split a reference translation into its acceptable variants.
///
/// Parenthesized hints are removed first; the remainder is split on `/`,
/// `;`, `,`, or the standalone word "oder". Fragments are trimmed and empty
/// ones dropped. Always yields at least one element: a reference consisting
/// only of hints produces a single empty variant.
pub fn extract_variants(reference: &str) -> Vec<String> {
    let base = strip_parentheses(reference);
    let variants: Vec<String> = ALTERNATION
        .split(&base)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(String::from)
        .collect();

    if variants.is_empty() {
        vec![base]
    } else {
        variants
    }
}
