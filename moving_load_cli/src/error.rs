use moving_load_core::CalcError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Structured form of the error for machine consumers, when one exists.
    pub fn to_json(&self) -> Option<String> {
        match self {
            CliError::Calc(e) => serde_json::to_string_pretty(e).ok(),
            _ => None,
        }
    }
}
