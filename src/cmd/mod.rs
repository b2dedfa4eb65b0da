pub mod attack;
pub mod caesar;
pub mod freq;

use cipherforge::{CfResult, CipherForgeError};
use std::fs;
use std::path::PathBuf;

/// Ciphertext comes inline or from --file; exactly one is required.
pub fn read_input(text: Option<String>, file: Option<PathBuf>) -> CfResult<String> {
    match (text, file) {
        (Some(t), None) => Ok(t),
        (None, Some(path)) => Ok(fs::read_to_string(path)?.trim_end().to_string()),
        _ => Err(CipherForgeError::Config(
            "provide ciphertext inline or via --file, not both".to_string(),
        )),
    }
}
