use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::carousel::AUTO_ADVANCE_INTERVAL;

// Environment variables read at startup (a `.env` file is honored).
pub const STORE_PATH_ENV_VAR: &str = "NUTRI_BALANCE_STORE";
pub const CAROUSEL_SECS_ENV_VAR: &str = "NUTRI_BALANCE_CAROUSEL_SECS";

const DEFAULT_STORE_PATH: &str = ".nutri_balance/store.json";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub store_path: PathBuf,
    pub carousel_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            carousel_interval: AUTO_ADVANCE_INTERVAL,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source, falling back to defaults
    /// for unset or blank values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup(STORE_PATH_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            config.store_path = PathBuf::from(path.trim());
        }

        if let Some(secs) = lookup(CAROUSEL_SECS_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("{} must be a whole number of seconds, got '{}'", CAROUSEL_SECS_ENV_VAR, secs))?;
            if secs == 0 {
                anyhow::bail!("{} must be greater than zero", CAROUSEL_SECS_ENV_VAR);
            }
            config.carousel_interval = Duration::from_secs(secs);
        }

        Ok(config)
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
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.carousel_interval, Duration::from_secs(5));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (STORE_PATH_ENV_VAR, "/tmp/meals.json"),
            (CAROUSEL_SECS_ENV_VAR, " 2 "),
        ]))
        .unwrap();
        assert_eq!(config.store_path, PathBuf::from("/tmp/meals.json"));
        assert_eq!(config.carousel_interval, Duration::from_secs(2));
    }

    #[test]
    fn test_invalid_interval_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(CAROUSEL_SECS_ENV_VAR, "soon")])).unwrap_err();
        assert!(err.to_string().contains(CAROUSEL_SECS_ENV_VAR));
        assert!(AppConfig::from_lookup(lookup_from(&[(CAROUSEL_SECS_ENV_VAR, "0")])).is_err());
    }
}
