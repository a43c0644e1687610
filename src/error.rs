use thiserror::Error;

/// Errors raised by the crate itself.
///
/// Failures of a fragment source are never wrapped in this type; they are
/// handed back to the caller as the source's own error.
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SplitError>;
