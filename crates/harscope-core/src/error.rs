use thiserror::Error;

/// Failure to load a capture. Every variant displays only the underlying
/// message so callers can prefix it with their own context.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    InvalidStructure(String),
}

pub type Result<T> = std::result::Result<T, Error>;
