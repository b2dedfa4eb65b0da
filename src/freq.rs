// ===== cipherforge/src/freq.rs =====
use crate::consts::ALPHABET_LEN;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Index of an ASCII letter into the 26-slot alphabet, case-folded.
/// None for anything that is not an ASCII letter.
pub fn letter_index(ch: char) -> Option<usize> {
    if ch.is_ascii_alphabetic() {
        Some((ch.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Lowercase letter for an alphabet index. Callers guarantee `idx < 26`.
pub fn index_letter(idx: usize) -> char {
    debug_assert!(idx < ALPHABET_LEN);
    (b'a' + idx as u8) as char
}

/// Lowercased copy of `text` keeping letters and whitespace only.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Per-letter occurrence counts over a text. Computed once per ciphertext
/// and read-only afterwards. Letters that never appear are present with
/// count 0, not omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    counts: [u32; ALPHABET_LEN],
    total: u32,
}

impl FrequencyTable {
    pub fn analyze(text: &str) -> Self {
        let mut counts = [0u32; ALPHABET_LEN];
        let mut total = 0u32;
        for ch in text.chars() {
            if let Some(idx) = letter_index(ch) {
                counts[idx] += 1;
                total += 1;
            }
        }
        Self { counts, total }
    }

    pub fn count(&self, idx: usize) -> u32 {
        self.counts[idx]
    }

    /// Total number of letters seen.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Relative frequency of a letter. 0.0 across the board for empty input.
    pub fn frequency(&self, idx: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.counts[idx]) / f64::from(self.total)
    }

    /// All 26 letter indices sorted by descending count. Ties break
    /// alphabetically so the ranking (and everything seeded from it)
    /// is reproducible.
    pub fn ranked(&self) -> [u8; ALPHABET_LEN] {
        let mut order: Vec<u8> = (0..ALPHABET_LEN as u8).collect();
        order.sort_by_key(|&i| (Reverse(self.counts[i as usize]), i));
        let mut ranked = [0u8; ALPHABET_LEN];
        ranked.copy_from_slice(&order);
        ranked
    }
}
