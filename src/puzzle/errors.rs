use thiserror::Error;

/// Errors raised while constructing a puzzle bank
#[derive(Error, Debug)]
pub enum BankError {
    #[error("puzzle bank is empty")]
    Empty,
    #[error("failed to parse puzzle bank: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("bank entry {index} is invalid: {reason}")]
    InvalidEntry { index: usize, reason: String },
}
