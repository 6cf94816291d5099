//! Multiple-choice option sampling.

use rand::seq::SliceRandom;
use rand::Rng;

/// Options per card, correct answer included.
pub const OPTION_COUNT: usize = 4;

/// Build the option list for one card: the correct answer plus up to three
/// distractors drawn uniformly without replacement from `pool`, shuffled.
///
/// The pool is deduplicated preserving order and never contributes the
/// correct answer itself. Tiny pools simply yield fewer options.
pub fn build_options<R: Rng + ?Sized>(rng: &mut R, correct: &str, pool: &[String]) -> Vec<String> {
    let mut distractors: Vec<&String> = Vec::new();
    for text in pool {
        if text != correct && !distractors.contains(&text) {
            distractors.push(text);
        }
    }

    let take = distractors.len().min(OPTION_COUNT - 1);
    let mut options: Vec<String> = distractors
        .choose_multiple(rng, take)
        .map(|s| s.to_string())
        .collect();
    options.push(correct.to_string());
    options.shuffle(rng);
    options
}
