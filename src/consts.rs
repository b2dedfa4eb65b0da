// ===== cipherforge/src/consts.rs =====
/// Number of letters in the working alphabet (ASCII a..z).
pub const ALPHABET_LEN: usize = 26;

/// Canonical English letter order by typical text frequency, most common first.
/// Used to seed the initial guess mapping from ciphertext letter ranks.
pub const ENGLISH_FREQ_ORDER: &[u8; ALPHABET_LEN] = b"etaoinshrdlcumwfgypbvkjxqz";

/// Emitted by the decoder wherever a mapping slot is unresolved.
/// Cannot collide with ASCII ciphertext, so penalty counts stay exact.
pub const UNKNOWN_MARKER: char = char::REPLACEMENT_CHARACTER;

/// High-frequency letters eligible for the optional membership bonus.
pub const ETAOIN: &[u8] = b"etaoin";

/// Default swap budget per hill-climbing restart.
pub const DEFAULT_ITERATIONS: usize = 10_000;

/// Default number of independent restarts.
pub const DEFAULT_RESTARTS: usize = 8;

/// Default RNG seed. Attacks are reproducible unless the caller overrides it;
/// there is deliberately no wall-clock fallback.
pub const DEFAULT_SEED: u64 = 0xF0C4;
