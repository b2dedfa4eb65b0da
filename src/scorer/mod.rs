pub mod dictionary;

pub use self::dictionary::Dictionary;
use crate::config::ScoringWeights;
use crate::consts::{ETAOIN, UNKNOWN_MARKER};

/// Rates how English a decoded candidate looks. The base signal is the
/// share of whitespace tokens that are dictionary words, matched whole-token
/// only: a dictionary word is never credited when it occurs inside a longer
/// token. Unresolved markers in the text are charged per occurrence so a
/// partial mapping cannot score well by shrinking its mismatch surface.
pub struct Scorer {
    dictionary: Dictionary,
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new(dictionary: Dictionary, weights: ScoringWeights) -> Self {
        Self {
            dictionary,
            weights,
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Dictionary-word count over the text's tokens.
    pub fn match_count(&self, text: &str) -> usize {
        tokens(text).filter(|t| self.dictionary.contains(t)).count()
    }

    /// Score of a decoded candidate. Returns 0.0 when the text has no
    /// usable tokens (empty input is not an error here).
    pub fn score(&self, text: &str) -> f64 {
        let mut total = 0usize;
        let mut hits = 0usize;
        for token in tokens(text) {
            total += 1;
            if self.dictionary.contains(&token) {
                hits += 1;
            }
        }
        if total == 0 {
            return 0.0;
        }

        let mut score = hits as f64 / total as f64;

        let unknowns = text.chars().filter(|&c| c == UNKNOWN_MARKER).count();
        score -= self.weights.unknown_penalty * unknowns as f64;

        // Optional "etaoin" membership bonus; off unless explicitly weighted.
        if self.weights.etaoin_bonus != 0.0 {
            score += self.weights.etaoin_bonus * etaoin_share(text);
        }

        score
    }
}

/// Whitespace tokens with surrounding punctuation stripped, lowercased.
/// Tokens that strip to nothing are dropped.
fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(|raw| {
        let word = raw.trim_matches(|c: char| c.is_ascii_punctuation());
        if word.is_empty() {
            None
        } else {
            Some(word.to_ascii_lowercase())
        }
    })
}

/// Share of letters that belong to the high-frequency "etaoin" set.
fn etaoin_share(text: &str) -> f64 {
    let mut letters = 0usize;
    let mut members = 0usize;
    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            letters += 1;
            if ETAOIN.contains(&(ch.to_ascii_lowercase() as u8)) {
                members += 1;
            }
        }
    }
    if letters == 0 {
        0.0
    } else {
        members as f64 / letters as f64
    }
}
