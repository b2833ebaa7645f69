use crate::core::board::SortField;
use crate::core::feed::DEFAULT_FEED_URL;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    #[serde(default = "default_feed_timeout")]
    pub feed_timeout_secs: u64,
    #[serde(default = "default_sort")]
    pub default_sort: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}
fn default_feed_timeout() -> u64 {
    15
}
fn default_sort() -> String {
    "name".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            feed_url: default_feed_url(),
            feed_timeout_secs: default_feed_timeout(),
            default_sort: default_sort(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// `~/.opsboard` (falls back to the current directory without a home).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".opsboard")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("opsboard.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("opsboard.sqlite")
    }

    /// Load configuration from file, or defaults if missing or unreadable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| serde_yaml::from_str(&content).map_err(|e| e.to_string()));

        match parsed {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!(
                    "Ignoring configuration file {}: {e}",
                    path.display()
                ));
                Self::default()
            }
        }
    }

    pub fn sort_field(&self) -> SortField {
        SortField::from_config(&self.default_sort).unwrap_or_default()
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Create the config directory and, unless `is_test`, the config file.
    /// Returns the database path the configuration points at.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::write(Self::config_file(), serde_yaml::to_string(&config)?)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(config.database)
    }
}
