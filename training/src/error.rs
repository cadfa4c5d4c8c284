use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("checkpoint error: {0}")]
    Candle(#[from] candle_core::Error),
    #[error("chart error: {0}")]
    Chart(String),
    #[error("{what}: expected length {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("unsupported text encoding '{0}'")]
    UnsupportedEncoding(String),
    #[error("unknown dataset '{name}' (no directory at {})", .path.display())]
    UnknownDataset { name: String, path: PathBuf },
    #[error("model error: {0}")]
    Model(String),
}

pub type Result<T> = std::result::Result<T, Error>;
