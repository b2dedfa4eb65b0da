pub mod caesar;
pub mod config;
pub mod consts;
pub mod decoder;
pub mod freq;
pub mod mapping;
pub mod optimizer;
pub mod reports;
pub mod scorer;
// cmd is a module of the binary crate (main.rs).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid Mapping: {0}")]
    InvalidMapping(String),

    #[error("ciphertext contains no letters after normalization")]
    EmptyInput,
}

pub type CfResult<T> = Result<T, CipherForgeError>;
