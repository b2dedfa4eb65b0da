// ===== cipherforge/src/caesar.rs =====
use crate::scorer::Scorer;
use serde::Serialize;
use std::cmp::Ordering;

/// Decrypts a Caesar cipher by shifting letters back by `key`, preserving
/// case; non-letters pass through.
pub fn shift(text: &str, key: u8) -> String {
    let key = key % 26;
    text.chars()
        .map(|ch| {
            if ch.is_ascii_alphabetic() {
                let base = if ch.is_ascii_uppercase() { b'A' } else { b'a' };
                let idx = ch as u8 - base;
                (base + (idx + 26 - key) % 26) as char
            } else {
                ch
            }
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct ShiftCandidate {
    pub shift: u8,
    pub score: f64,
    pub plaintext: String,
}

/// Tries all 26 shifts and ranks the candidates by score descending,
/// then by shift ascending.
pub fn brute_force(ciphertext: &str, scorer: &Scorer) -> Vec<ShiftCandidate> {
    let mut candidates: Vec<ShiftCandidate> = (0..26)
        .map(|key| {
            let plaintext = shift(ciphertext, key);
            let score = scorer.score(&plaintext);
            ShiftCandidate {
                shift: key,
                score,
                plaintext,
            }
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.shift.cmp(&b.shift))
    });
    candidates
}
