use std::env;

use crate::ErrorPolicy;

/// Environment variable selecting the `ErrorPolicy`.
pub const ON_ERROR_VAR: &str = "WEEKDAY_ON_ERROR";
/// Environment variable holding the log filter directive.
pub const LOG_FILTER_VAR: &str = "RUST_LOG";
/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid WEEKDAY_ON_ERROR value: {0:?} (expected \"abort\" or \"skip\")")]
    InvalidPolicy(String),
}

/// Runtime settings for the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub on_error: ErrorPolicy,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::default(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl Config {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidPolicy` if `WEEKDAY_ON_ERROR` is set to an
    /// unknown value.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`; unset keys take their defaults.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidPolicy` for an unknown error policy.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let on_error = match lookup(ON_ERROR_VAR) {
            Some(value) => value.parse()?,
            None => ErrorPolicy::default(),
        };

        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        Ok(Self {
            on_error,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.on_error, ErrorPolicy::Abort);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (ON_ERROR_VAR, "skip"),
            (LOG_FILTER_VAR, "weekday_names=debug"),
        ]))
        .unwrap();
        assert_eq!(config.on_error, ErrorPolicy::Skip);
        assert_eq!(config.log_filter, "weekday_names=debug");
    }

    #[test]
    fn test_blank_log_filter_falls_back() {
        let config = Config::from_lookup(lookup_from(&[(LOG_FILTER_VAR, "  ")])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_invalid_policy() {
        let result = Config::from_lookup(lookup_from(&[(ON_ERROR_VAR, "retry")]));
        assert_eq!(result, Err(ConfigError::InvalidPolicy("retry".to_owned())));
        assert_eq!(
            result.unwrap_err().to_string(),
            r#"Invalid WEEKDAY_ON_ERROR value: "retry" (expected "abort" or "skip")"#
        );
    }
}
