//! Answer matching for typed practice.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;
use crate::variants::extract_variants;

/// Result of grading a typed answer against a reference translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the answer was accepted.
    pub accepted: bool,
    /// Variant to display: the matched one, or the primary variant on reject.
    pub shown_answer: String,
}

/// Grade a free-text answer against a reference translation.
///
/// Tolerant mode tries every variant of the reference in order and accepts
/// an exact canonical match or one within [`tolerance`] edits. Strict mode
/// only accepts an exact canonical match against the primary (first)
/// variant. Input that normalizes to the empty string is always rejected in
/// tolerant mode.
pub fn check(user_input: &str, reference: &str, strict: bool) -> CheckResult {
    let variants = extract_variants(reference);

    if strict {
        return CheckResult {
            accepted: normalize(user_input) == normalize(&variants[0]),
            shown_answer: variants[0].clone(),
        };
    }

    let user_token = normalize(user_input);
    if user_token.is_empty() {
        return CheckResult {
            accepted: false,
            shown_answer: variants[0].clone(),
        };
    }

    for variant in &variants {
        let variant_token = normalize(variant);
        if user_token == variant_token
            || levenshtein(&user_token, &variant_token) <= tolerance(variant_token.len())
        {
            return CheckResult {
                accepted: true,
                shown_answer: variant.clone(),
            };
        }
    }

    CheckResult {
        accepted: false,
        shown_answer: variants[0].clone(),
    }
}

/// Maximum edit distance accepted for a reference token of `len` characters.
pub fn tolerance(len: usize) -> usize {
    match len {
        0..=4 => 1,
        5..=7 => 2,
        _ => 3,
    }
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let mut longer: Vec<char> = a.chars().collect();
    let mut shorter: Vec<char> = b.chars().collect();
    if longer.len() < shorter.len() {
        std::mem::swap(&mut longer, &mut shorter);
    }

    // Two rows instead of the full matrix, sized by the shorter string.
    let mut prev = (0..=shorter.len()).collect::<Vec<_>>();
    let mut curr = vec![0; shorter.len() + 1];

    for i in 1..=longer.len() {
        curr[0] = i;

        for j in 1..=shorter.len() {
            let cost = if longer[i - 1] == shorter[j - 1] { 0 } else { 1 };

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[shorter.len()]
}
