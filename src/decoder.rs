use crate::consts::UNKNOWN_MARKER;
use crate::freq::{index_letter, letter_index};
use crate::mapping::Mapping;

/// Applies a mapping to ciphertext. Letters substitute through the
/// lowercase cipher->plain lookup with original case reapplied; unresolved
/// slots emit the unknown marker; everything else passes through untouched.
/// Output has the same char length and the same non-letter positions as
/// the input.
pub fn decode(text: &str, mapping: &Mapping) -> String {
    text.chars()
        .map(|ch| match letter_index(ch) {
            Some(idx) => match mapping.plain_for(idx) {
                Some(p) => {
                    let plain = index_letter(p as usize);
                    if ch.is_ascii_uppercase() {
                        plain.to_ascii_uppercase()
                    } else {
                        plain
                    }
                }
                None => UNKNOWN_MARKER,
            },
            None => ch,
        })
        .collect()
}
