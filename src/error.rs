//! Errors for configuration and loading faults.
//!
//! User-facing validation problems (bad lines, unknown cards, rule
//! violations) are never errors here: they are collected as messages in a
//! `ValidationOutcome`. `ValidatorError` covers the faults a caller has to
//! handle before or around a run.

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ValidatorError>;

#[derive(Debug, thiserror::Error)]
pub enum ValidatorError {
    /// The requested format name is not in the catalog.
    #[error("invalid rules format: {0}")]
    UnknownFormat(String),

    /// Two catalog entries share a name.
    #[error("format \"{0}\" is defined more than once")]
    DuplicateFormat(String),

    /// A known rule was configured with parameters it cannot use.
    #[error("rule \"{rule}\" expects {expected}")]
    InvalidRuleParameters {
        rule: &'static str,
        expected: &'static str,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
