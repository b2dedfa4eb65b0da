// ===== cipherforge/src/optimizer/seeder.rs =====
use crate::consts::{ALPHABET_LEN, ENGLISH_FREQ_ORDER};
use crate::freq::FrequencyTable;
use crate::mapping::Mapping;

/// Builds the initial guess mapping by aligning ciphertext letter-frequency
/// rank with the canonical English frequency order: the most common cipher
/// letter maps to 'e', the next to 't', and so on. Both sides are
/// permutations, so the output is always a complete bijection, even when
/// some cipher letters never appear (their ranking degenerates to
/// alphabetical order).
pub fn seed_mapping(freq: &FrequencyTable) -> Mapping {
    let ranked = freq.ranked();
    let mut table = [0u8; ALPHABET_LEN];
    for (rank, &cipher) in ranked.iter().enumerate() {
        table[cipher as usize] = ENGLISH_FREQ_ORDER[rank] - b'a';
    }
    Mapping::from_resolved(table)
}
