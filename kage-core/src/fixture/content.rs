//! Fixture content generation.
//!
//! Human-readable names, titles, and bodies drawn from fixed word pools
//! through the seeded rng. Everything here is a pure function of the rng
//! state, so a given seed always yields the same text in the same order.

use super::rng::DeterministicRng;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Brendan", "Dennis", "Frances", "Grace", "Hedy", "John",
    "Katherine", "Ken", "Linus", "Margaret", "Niklaus", "Radia", "Sophie",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Backus", "Hamilton", "Hopper", "Johnson", "Kay", "Kernighan", "Lamarr",
    "Liskov", "Lovelace", "McCarthy", "Perlman", "Ritchie", "Thompson", "Torvalds", "Wirth",
];

const WORDS: &[&str] = &[
    "anchor", "archive", "cedar", "clover", "compass", "copper", "ember", "engine",
    "garden", "granite", "harbor", "hollow", "lantern", "letter", "library", "market",
    "meadow", "morning", "orchard", "paper", "quarry", "river", "saddle", "signal",
    "sparrow", "stone", "thread", "timber", "violet", "willow", "window", "winter",
];

const TITLE_WORDS_COUNT_MIN: usize = 3;
const TITLE_WORDS_COUNT_MAX: usize = 5;
const BODY_WORDS_COUNT_MIN: usize = 8;
const BODY_WORDS_COUNT_MAX: usize = 14;

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn words(rng: &mut DeterministicRng, min: usize, max: usize) -> String {
    let count = min + rng.next_below(max - min + 1);
    let picked: Vec<&str> = (0..count).map(|_| *rng.pick(WORDS)).collect();
    picked.join(" ")
}

/// A "First Last" display name.
pub fn full_name(rng: &mut DeterministicRng) -> String {
    format!("{} {}", rng.pick(FIRST_NAMES), rng.pick(LAST_NAMES))
}

/// A post headline of 3 to 5 words, sentence-capitalized.
pub fn title(rng: &mut DeterministicRng) -> String {
    capitalize(&words(rng, TITLE_WORDS_COUNT_MIN, TITLE_WORDS_COUNT_MAX))
}

/// A one-sentence post body of 8 to 14 words.
pub fn short_description(rng: &mut DeterministicRng) -> String {
    let mut sentence = capitalize(&words(rng, BODY_WORDS_COUNT_MIN, BODY_WORDS_COUNT_MAX));
    sentence.push('.');
    sentence
}
