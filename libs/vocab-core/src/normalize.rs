//! Canonical-token normalization for answer grading.
//!
//! Raw learner input and reference variants are reduced to a comparison-only
//! form: lowercase ASCII letters and digits, no leading article, no umlauts,
//! no punctuation. The canonical form is never displayed.

use once_cell::sync::Lazy;
use regex::Regex;

/// Grammatical articles dropped when they are the first token.
const ARTICLES: [&str; 8] = [
    "der", "die", "das", "ein", "eine", "einen", "einem", "einer",
];

/// Transliteration table, applied in order, left to right.
const TRANSLITERATIONS: [(char, &str); 4] = [
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('ß', "ss"),
];

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Reduce a string to its canonical comparison form.
///
/// Trims and lower-cases, drops a leading grammatical article, rewrites
/// umlauts and ß to their ASCII spellings, then strips every character
/// outside `[a-z0-9]`. Total for any input; the empty string maps to itself.
pub fn normalize(text: &str) -> String {
    let mut s = strip_leading_article(&text.trim().to_lowercase());
    for (from, to) in TRANSLITERATIONS {
        s = s.replace(from, to);
    }
    NON_ALNUM.replace_all(&s, "").into_owned()
}

/// Drop the first whitespace-separated token when it is an article.
///
/// Only the first token is ever checked; articles elsewhere are kept.
fn strip_leading_article(s: &str) -> String {
    let mut tokens = s.split_whitespace();
    match tokens.next() {
        Some(first) if ARTICLES.contains(&first) => tokens.collect::<Vec<_>>().join(" "),
        _ => s.to_string(),
    }
}
