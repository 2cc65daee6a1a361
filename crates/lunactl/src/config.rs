//! lunactl configuration - optional config.toml with serde defaults.
//!
//! Location: $LUNA_CONFIG, else the platform config dir
//! (e.g. ~/.config/luna/config.toml). A missing or unreadable file means
//! defaults; an invalid file is reported and ignored.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where session and transcript files live; overrides the XDG chain.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Seed for reply randomness; set for reproducible conversations.
    #[serde(default)]
    pub default_seed: Option<u64>,
}

impl Config {
    /// Config file path, if one can be determined on this system.
    pub fn path() -> Option<PathBuf> {
        if let Ok(path) = env::var("LUNA_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("luna/config.toml"))
    }

    /// Load the config file, falling back to defaults when absent.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(raw) => Self::parse(&raw),
            Err(_) => Self::default(),
        }
    }

    fn parse(raw: &str) -> Self {
        match toml::from_str(raw) {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "invalid config file, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("");
        assert!(config.state_dir.is_none());
        assert!(config.default_seed.is_none());
    }

    #[test]
    fn test_fields_parse() {
        let config = Config::parse("state_dir = \"/tmp/luna\"\ndefault_seed = 42\n");
        assert_eq!(config.state_dir, Some(PathBuf::from("/tmp/luna")));
        assert_eq!(config.default_seed, Some(42));
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let config = Config::parse("default_seed = \"not a number\"");
        assert!(config.default_seed.is_none());
    }
}
