use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::matching::DEFAULT_LIMIT;
use crate::sources::linkedin::DEFAULT_BASE_URL;

/// Runtime configuration loaded from environment variables (and `.env` if present).
/// Every field has a default; CLI flags override these values.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub model_path: Option<PathBuf>,
    pub location: String,
    pub limit: usize,
    pub http_timeout_secs: u64,
    pub jobs_base_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, so parsing can be tested without touching
    /// the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            model_path: lookup("JOBMATCH_MODEL_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            location: lookup("JOBMATCH_LOCATION").unwrap_or_else(|| "India".to_string()),
            limit: match lookup("JOBMATCH_LIMIT") {
                Some(v) => v
                    .parse::<usize>()
                    .context("JOBMATCH_LIMIT must be a non-negative integer")?,
                None => DEFAULT_LIMIT,
            },
            http_timeout_secs: match lookup("JOBMATCH_HTTP_TIMEOUT_SECS") {
                Some(v) => v
                    .parse::<u64>()
                    .context("JOBMATCH_HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
                None => 30,
            },
            jobs_base_url: lookup("JOBMATCH_JOBS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
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
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.model_path, None);
        assert_eq!(config.location, "India");
        assert_eq!(config.limit, DEFAULT_LIMIT);
        assert_eq!(config.http_timeout_secs, 30);
        assert_eq!(config.jobs_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_values_are_read() {
        let config = Config::from_lookup(lookup_from(&[
            ("JOBMATCH_MODEL_PATH", "models/role.json"),
            ("JOBMATCH_LOCATION", "Berlin"),
            ("JOBMATCH_LIMIT", "10"),
            ("JOBMATCH_HTTP_TIMEOUT_SECS", "5"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.model_path, Some(PathBuf::from("models/role.json")));
        assert_eq!(config.location, "Berlin");
        assert_eq!(config.limit, 10);
        assert_eq!(config.http_timeout_secs, 5);
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_invalid_limit_is_rejected_with_context() {
        let err = Config::from_lookup(lookup_from(&[("JOBMATCH_LIMIT", "four")])).unwrap_err();
        assert!(err.to_string().contains("JOBMATCH_LIMIT"));
    }

    #[test]
    fn test_blank_model_path_is_treated_as_unset() {
        let config = Config::from_lookup(lookup_from(&[("JOBMATCH_MODEL_PATH", "  ")])).unwrap();
        assert!(config.model_path.is_none());
    }
}
