//! Validator configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::formats::BUDGET_COMMANDER;
use crate::report::DEFAULT_MESSAGE_CHAR_LIMIT;

/// Runtime settings for a `Validator`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Maximum characters per error digest message.
    pub message_char_limit: usize,

    /// Format used when a request does not name one.
    pub default_format: String,

    /// Log filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            message_char_limit: DEFAULT_MESSAGE_CHAR_LIMIT,
            default_format: BUDGET_COMMANDER.to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl ValidatorConfig {
    /// Parse a config from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Set the message size limit.
    #[must_use]
    pub fn with_message_char_limit(mut self, limit: usize) -> Self {
        self.message_char_limit = limit;
        self
    }

    /// Set the default format.
    #[must_use]
    pub fn with_default_format(mut self, format: impl Into<String>) -> Self {
        self.default_format = format.into();
        self
    }

    /// Set the fallback log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
