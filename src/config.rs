//! Runtime configuration
//!
//! Settings come from environment variables; command-line flags override
//! them. Nothing is read from or written to disk.

use std::env;

// Environment variable names
const ENV_NO_SEED: &str = "EXPATCMD_NO_SEED";
const ENV_CHART_WIDTH: &str = "EXPATCMD_CHART_WIDTH";
const ENV_LOG: &str = "EXPATCMD_LOG";
const ENV_RUST_LOG: &str = "RUST_LOG";

pub const DEFAULT_CHART_WIDTH: usize = 30;
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Chart bars narrower than this are unreadable
const MIN_CHART_WIDTH: usize = 10;
const MAX_CHART_WIDTH: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Start with the example expats instead of an empty list
    pub seed_examples: bool,
    /// Width in columns of the longest chart bar
    pub chart_width: usize,
    /// tracing-subscriber filter directive
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_examples: true,
            chart_width: DEFAULT_CHART_WIDTH,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    /// `EXPATCMD_LOG` takes precedence over `RUST_LOG`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed_examples = lookup(ENV_NO_SEED)
            .map(|v| !is_truthy(&v))
            .unwrap_or(defaults.seed_examples);

        let chart_width = lookup(ENV_CHART_WIDTH)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .map(clamp_width)
            .unwrap_or(defaults.chart_width);

        let log_filter = lookup(ENV_LOG)
            .or_else(|| lookup(ENV_RUST_LOG))
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            seed_examples,
            chart_width,
            log_filter,
        }
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(mut self, empty: bool, width: Option<usize>) -> Self {
        if empty {
            self.seed_examples = false;
        }
        if let Some(w) = width {
            self.chart_width = clamp_width(w);
        }
        self
    }
}

fn clamp_width(width: usize) -> usize {
    width.clamp(MIN_CHART_WIDTH, MAX_CHART_WIDTH)
}

fn is_truthy(s: &str) -> bool {
    matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
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
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert!(config.seed_examples);
    }

    #[test]
    fn test_env_values() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_NO_SEED, "yes"),
            (ENV_CHART_WIDTH, "50"),
            (ENV_LOG, "expatcmd=debug"),
        ]));
        assert!(!config.seed_examples);
        assert_eq!(config.chart_width, 50);
        assert_eq!(config.log_filter, "expatcmd=debug");
    }

    #[test]
    fn test_log_filter_falls_back_to_rust_log() {
        let config = Config::from_lookup(lookup_from(&[(ENV_RUST_LOG, "info")]));
        assert_eq!(config.log_filter, "info");

        let config = Config::from_lookup(lookup_from(&[(ENV_RUST_LOG, "info"), (ENV_LOG, "debug")]));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_bad_width_ignored_and_clamped() {
        let config = Config::from_lookup(lookup_from(&[(ENV_CHART_WIDTH, "wide")]));
        assert_eq!(config.chart_width, DEFAULT_CHART_WIDTH);

        let config = Config::from_lookup(lookup_from(&[(ENV_CHART_WIDTH, "2")]));
        assert_eq!(config.chart_width, MIN_CHART_WIDTH);
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(true, Some(500));
        assert!(!config.seed_examples);
        assert_eq!(config.chart_width, MAX_CHART_WIDTH);

        let config = Config::default().with_overrides(false, None);
        assert_eq!(config, Config::default());
    }
}
