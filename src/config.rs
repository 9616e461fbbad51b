//! Threshold configuration.
//!
//! The threshold bounds the element count at or below which the O(n²)
//! allocation-free scans are preferred over the allocating general
//! algorithms. It is fixed once chosen: either installed explicitly with
//! [`install`], or read from `NARROW_THRESHOLD` the first time
//! [`global`] is consulted. Callers that want a different value for a
//! particular call build an [`Operators`](crate::ops::Operators) with their
//! own `Config`.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Threshold used when nothing else is configured.
pub const DEFAULT_THRESHOLD: usize = 8;

/// Environment variable consulted by [`Config::from_env`].
pub const THRESHOLD_ENV: &str = "NARROW_THRESHOLD";

static GLOBAL: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pairwise scans are used for counts `<= threshold`.
    pub threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        return Config { threshold: DEFAULT_THRESHOLD };
    }
}

impl Config {
    pub fn new(threshold: usize) -> Config {
        return Config { threshold };
    }

    pub fn with_threshold(mut self, threshold: usize) -> Config {
        self.threshold = threshold;
        return self;
    }

    /// Whether a sequence of `count` elements is small enough for the
    /// pairwise algorithms.
    #[inline]
    pub fn is_small(&self, count: usize) -> bool {
        return count <= self.threshold;
    }

    /// Read the threshold from the environment, falling back to defaults.
    ///
    /// An unparsable value is logged and ignored.
    pub fn from_env() -> Config {
        match Self::try_from_env() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(%err, "ignoring {}", THRESHOLD_ENV);
                Config::default()
            }
        }
    }

    /// Read the threshold from the environment, rejecting unparsable values.
    pub fn try_from_env() -> Result<Config> {
        let mut config = Config::default();
        if let Ok(raw) = std::env::var(THRESHOLD_ENV) {
            config.threshold = raw.trim().parse::<usize>().map_err(|e| {
                Error::Config(format!("{}={:?}: {}", THRESHOLD_ENV, raw, e))
            })?;
        }
        return Ok(config);
    }
}

/// Install the process-wide configuration. Fails if a configuration is
/// already in place, including one initialised implicitly by [`global`].
pub fn install(config: Config) -> Result<()> {
    GLOBAL.set(config).map_err(|_| Error::AlreadyConfigured)?;
    tracing::debug!(threshold = config.threshold, "installed configuration");
    return Ok(());
}

/// The process-wide configuration, read from the environment on first use.
pub fn global() -> &'static Config {
    return GLOBAL.get_or_init(Config::from_env);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold() {
        let config = Config::default();
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert!(config.is_small(DEFAULT_THRESHOLD));
        assert!(!config.is_small(DEFAULT_THRESHOLD + 1));
    }

    #[test]
    fn builder_overrides_threshold() {
        let config = Config::default().with_threshold(2);
        assert!(config.is_small(2));
        assert!(!config.is_small(3));
        assert_eq!(Config::new(0).threshold, 0);
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());

        let config: Config = serde_json::from_str(r#"{"threshold": 32}"#).unwrap();
        assert_eq!(config.threshold, 32);
        assert_eq!(serde_json::to_string(&config).unwrap(), r#"{"threshold":32}"#);
    }

    #[test]
    fn global_is_stable() {
        let a = global();
        let b = global();
        assert!(std::ptr::eq(a, b));
        assert_eq!(install(Config::new(1)), Err(Error::AlreadyConfigured));
    }
}
