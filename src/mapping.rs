use crate::consts::{ALPHABET_LEN, UNKNOWN_MARKER};
use crate::freq::{index_letter, letter_index};
use crate::{CfResult, CipherForgeError};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A cipher-to-plaintext letter table. Slot `i` holds the plaintext letter
/// index assigned to cipher letter `i`, or None while unresolved.
///
/// A complete mapping is a strict bijection over the alphabet. `assign` and
/// `swap` are the only mutators; both preserve the invariant, so any mix of
/// search moves and manual edits goes through the same checked path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    plain: [Option<u8>; ALPHABET_LEN],
}

impl Mapping {
    /// Every letter maps to itself.
    pub fn identity() -> Self {
        let mut plain = [None; ALPHABET_LEN];
        for (i, slot) in plain.iter_mut().enumerate() {
            *slot = Some(i as u8);
        }
        Self { plain }
    }

    /// All slots unresolved.
    pub fn empty() -> Self {
        Self {
            plain: [None; ALPHABET_LEN],
        }
    }

    /// Builds a complete mapping from a full cipher->plain table,
    /// rejecting duplicate plaintext assignments.
    pub fn from_table(table: [u8; ALPHABET_LEN]) -> CfResult<Self> {
        let mut seen = [false; ALPHABET_LEN];
        for &p in &table {
            let idx = p as usize;
            if idx >= ALPHABET_LEN {
                return Err(CipherForgeError::InvalidMapping(format!(
                    "plaintext index {} out of range",
                    idx
                )));
            }
            if seen[idx] {
                return Err(CipherForgeError::InvalidMapping(format!(
                    "plaintext letter '{}' assigned twice",
                    index_letter(idx)
                )));
            }
            seen[idx] = true;
        }
        let mut plain = [None; ALPHABET_LEN];
        for (i, &p) in table.iter().enumerate() {
            plain[i] = Some(p);
        }
        Ok(Self { plain })
    }

    /// Internal constructor for callers that produce a permutation by
    /// construction (the seeder). Not part of the public surface.
    pub(crate) fn from_resolved(table: [u8; ALPHABET_LEN]) -> Self {
        let mut plain = [None; ALPHABET_LEN];
        for (i, &p) in table.iter().enumerate() {
            debug_assert!((p as usize) < ALPHABET_LEN);
            plain[i] = Some(p);
        }
        Self { plain }
    }

    /// Plaintext letter index for a cipher letter index, if resolved.
    pub fn plain_for(&self, cipher: usize) -> Option<u8> {
        self.plain[cipher]
    }

    /// Assigns a plaintext letter to a cipher letter. Rejected if the
    /// plaintext letter is already held by a different cipher letter;
    /// on rejection the mapping is left unchanged.
    pub fn assign(&mut self, cipher: usize, plain: u8) -> CfResult<()> {
        for (other, slot) in self.plain.iter().enumerate() {
            if other != cipher && *slot == Some(plain) {
                return Err(CipherForgeError::InvalidMapping(format!(
                    "plaintext '{}' is already assigned to cipher '{}'",
                    index_letter(plain as usize),
                    index_letter(other)
                )));
            }
        }
        self.plain[cipher] = Some(plain);
        Ok(())
    }

    /// Exchanges the plaintext assignments of two cipher letters.
    /// Trivially bijection-preserving, so it cannot fail.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.plain.swap(a, b);
    }

    /// True when every slot is resolved (strict bijection).
    pub fn is_complete(&self) -> bool {
        self.plain.iter().all(Option::is_some)
    }

    /// Number of unresolved slots.
    pub fn unresolved(&self) -> usize {
        self.plain.iter().filter(|s| s.is_none()).count()
    }

    /// Plain->cipher view of a complete mapping (the recovered encryption
    /// key). Errors on a partial mapping.
    pub fn inverse(&self) -> CfResult<Mapping> {
        let mut table = [0u8; ALPHABET_LEN];
        for (cipher, slot) in self.plain.iter().enumerate() {
            match slot {
                Some(p) => table[*p as usize] = cipher as u8,
                None => {
                    return Err(CipherForgeError::InvalidMapping(format!(
                        "cipher letter '{}' is unresolved",
                        index_letter(cipher)
                    )))
                }
            }
        }
        Mapping::from_table(table)
    }

    /// (cipher letter, plaintext letter) pairs in a..z order, with the
    /// unknown marker standing in for unresolved slots.
    pub fn pairs(&self) -> Vec<(char, char)> {
        self.plain
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let plain = slot.map_or(UNKNOWN_MARKER, |p| index_letter(p as usize));
                (index_letter(i), plain)
            })
            .collect()
    }
}

impl fmt::Display for Mapping {
    /// 26-char string: position = cipher letter, char = plaintext letter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.plain {
            let ch = slot.map_or(UNKNOWN_MARKER, |p| index_letter(p as usize));
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl FromStr for Mapping {
    type Err = CipherForgeError;

    /// Parses the 26-char table form produced by Display. Letters resolve
    /// a slot; '?' or the unknown marker leave it unresolved. Duplicate
    /// plaintext letters are rejected.
    fn from_str(s: &str) -> CfResult<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != ALPHABET_LEN {
            return Err(CipherForgeError::InvalidMapping(format!(
                "mapping string must be {} chars, got {}",
                ALPHABET_LEN,
                chars.len()
            )));
        }

        let mut mapping = Mapping::empty();
        for (cipher, &ch) in chars.iter().enumerate() {
            match ch {
                '?' | UNKNOWN_MARKER => {}
                _ => match letter_index(ch) {
                    Some(p) => mapping.assign(cipher, p as u8)?,
                    None => {
                        return Err(CipherForgeError::InvalidMapping(format!(
                            "'{}' is not a letter or placeholder",
                            ch
                        )))
                    }
                },
            }
        }
        Ok(mapping)
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Mapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
