//! Configuration management

use crate::domain::default_questions;
use crate::error::{ReviewError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file to load
pub const CONFIG_ENV: &str = "REVIEW_CONFIG";
/// Environment variable overriding the store path
pub const STORE_ENV: &str = "REVIEW_FILE";
/// Config file picked up from the current directory
pub const DEFAULT_CONFIG_FILE: &str = "review.toml";
pub const DEFAULT_STORE_FILE: &str = "reviews.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file holding all reviews
    pub store_path: PathBuf,
    /// Question titles for new reviews, in order
    pub questions: Vec<String>,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            questions: default_questions(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load config from REVIEW_CONFIG or ./review.toml, then apply REVIEW_FILE.
    /// Falls back to defaults when no config file exists.
    pub fn load() -> Result<Self> {
        let config = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::load_from_file(Path::new(&path))?,
            Err(_) => {
                let local = Path::new(DEFAULT_CONFIG_FILE);
                if local.is_file() {
                    Self::load_from_file(local)?
                } else {
                    Config::default()
                }
            }
        };

        let config = config.with_store_override(std::env::var_os(STORE_ENV).map(PathBuf::from));
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file; missing keys take their defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ReviewError::Config(format!("Config file not found: {}", path.display()))
            } else {
                ReviewError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the store path when an override is given
    pub fn with_store_override(mut self, store_path: Option<PathBuf>) -> Self {
        if let Some(path) = store_path {
            self.store_path = path;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.questions.is_empty() {
            return Err(ReviewError::Config(
                "questions must not be empty".to_string(),
            ));
        }
        if self.questions.iter().any(|q| q.trim().is_empty()) {
            return Err(ReviewError::Config(
                "questions must not contain blank titles".to_string(),
            ));
        }
        if self.store_path.as_os_str().is_empty() {
            return Err(ReviewError::Config("store_path must not be empty".to_string()));
        }
        Ok(())
    }
}
