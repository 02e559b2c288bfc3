//! Replay configuration.

use serde::{Deserialize, Serialize};

use crate::ReplayError;

/// Environment variable overriding [`ReplayConfig::max_input_len`].
pub const ENV_MAX_INPUT_LEN: &str = "FUZZBRIDGE_MAX_INPUT_LEN";

/// Environment variable overriding [`ReplayConfig::fail_on_nonzero`].
pub const ENV_FAIL_ON_NONZERO: &str = "FUZZBRIDGE_FAIL_ON_NONZERO";

/// Default input size ceiling: 1 MiB.
pub const DEFAULT_MAX_INPUT_LEN: usize = 1 << 20;

/// Settings for a replay run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ReplayConfig {
    /// Inputs longer than this are rejected before reaching the target.
    pub max_input_len: usize,

    /// Treat any non-zero status as a replay failure.
    pub fail_on_nonzero: bool,
}

impl ReplayConfig {
    /// Create a config with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self { max_input_len: DEFAULT_MAX_INPUT_LEN, fail_on_nonzero: false }
    }

    /// Set the input size ceiling.
    #[must_use]
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    /// Set whether non-zero statuses fail the run.
    #[must_use]
    pub fn with_fail_on_nonzero(mut self, fail_on_nonzero: bool) -> Self {
        self.fail_on_nonzero = fail_on_nonzero;
        self
    }

    /// Build a config from defaults plus process environment overrides.
    ///
    /// # Errors
    /// Returns [`ReplayError::InvalidConfig`] if an override cannot be parsed.
    pub fn from_env() -> Result<Self, ReplayError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from defaults plus overrides supplied by `lookup`.
    ///
    /// # Errors
    /// Returns [`ReplayError::InvalidConfig`] if an override cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ReplayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(raw) = lookup(ENV_MAX_INPUT_LEN) {
            let max = raw.trim().parse::<usize>().map_err(|e| ReplayError::InvalidConfig {
                var: ENV_MAX_INPUT_LEN.to_owned(),
                reason: e.to_string(),
            })?;
            if max == 0 {
                return Err(ReplayError::InvalidConfig {
                    var: ENV_MAX_INPUT_LEN.to_owned(),
                    reason: "must be greater than zero".to_owned(),
                });
            }
            config.max_input_len = max;
        }

        if let Some(raw) = lookup(ENV_FAIL_ON_NONZERO) {
            config.fail_on_nonzero = parse_flag(&raw).ok_or_else(|| ReplayError::InvalidConfig {
                var: ENV_FAIL_ON_NONZERO.to_owned(),
                reason: format!("expected a boolean, got '{raw}'"),
            })?;
        }

        Ok(config)
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
