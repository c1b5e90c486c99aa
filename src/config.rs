//! Application configuration.

use crate::consts::dashboard_consts::{API_URL_ENV, DEFAULT_API_URL, SESSION_COOKIE_ENV};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs, io};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid API URL '{0}': expected an http:// or https:// address")]
    InvalidUrl(String),

    #[error("Could not determine the home directory")]
    NoHomeDir,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the blood bank backend.
    pub api_url: String,
    /// Pre-issued backend session cookie, forwarded verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_cookie: Option<String>,
}

/// Connection settings supplied by one source (flags or environment).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub session_cookie: Option<String>,
}

impl Overrides {
    pub fn from_env() -> Self {
        Self {
            api_url: env::var(API_URL_ENV).ok().filter(|v| !v.is_empty()),
            session_cookie: env::var(SESSION_COOKIE_ENV).ok().filter(|v| !v.is_empty()),
        }
    }
}

impl Config {
    pub fn new(api_url: String, session_cookie: Option<String>) -> Self {
        Config {
            api_url,
            session_cookie,
        }
    }

    /// Merge settings: flags win over environment, environment over the saved
    /// file, and the built-in default URL comes last.
    pub fn resolve(flags: Overrides, environment: Overrides, saved: Option<Config>) -> Self {
        let (saved_url, saved_cookie) = match saved {
            Some(config) => (Some(config.api_url), config.session_cookie),
            None => (None, None),
        };

        Config {
            api_url: flags
                .api_url
                .or(environment.api_url)
                .or(saved_url)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            session_cookie: flags
                .session_cookie
                .or(environment.session_cookie)
                .or(saved_cookie),
        }
    }

    /// Check that the API URL is an absolute http(s) address.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match Url::parse(&self.api_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
            _ => Err(ConfigError::InvalidUrl(self.api_url.clone())),
        }
    }

    /// Loads configuration from a JSON file at the given path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path)?;
        Ok(serde_json::from_slice(&buf)?)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), ConfigError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Location of the saved configuration: `~/.bloodbank/config.json`.
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let home = home::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".bloodbank").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn url(value: &str) -> Overrides {
        Overrides {
            api_url: Some(value.to_string()),
            session_cookie: None,
        }
    }

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::new(
            "http://localhost:5000".to_string(),
            Some("session=abc".to_string()),
        );
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let config = Config::new("http://localhost:5000".to_string(), None);
        let result = config.save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    // Clearing removes the file and tolerates a file that is already gone.
    fn test_clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::new("http://localhost:5000".to_string(), None)
            .save(&path)
            .unwrap();

        Config::clear(&path).unwrap();
        assert!(!path.exists());
        Config::clear(&path).unwrap();
    }

    #[test]
    fn test_resolve_precedence() {
        let saved = Config::new(
            "http://saved:5000".to_string(),
            Some("session=saved".to_string()),
        );

        let resolved = Config::resolve(
            url("http://flag:5000"),
            url("http://env:5000"),
            Some(saved.clone()),
        );
        assert_eq!(resolved.api_url, "http://flag:5000");
        assert_eq!(resolved.session_cookie.as_deref(), Some("session=saved"));

        let resolved = Config::resolve(
            Overrides::default(),
            url("http://env:5000"),
            Some(saved.clone()),
        );
        assert_eq!(resolved.api_url, "http://env:5000");

        let resolved = Config::resolve(Overrides::default(), Overrides::default(), Some(saved));
        assert_eq!(resolved.api_url, "http://saved:5000");

        let resolved = Config::resolve(Overrides::default(), Overrides::default(), None);
        assert_eq!(resolved.api_url, DEFAULT_API_URL);
        assert_eq!(resolved.session_cookie, None);
    }

    #[test]
    fn test_validate_requires_http_url() {
        assert!(
            Config::new("https://bank.example.org".to_string(), None)
                .validate()
                .is_ok()
        );
        assert!(matches!(
            Config::new("not-a-url".to_string(), None).validate(),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert!(matches!(
            Config::new("ftp://bank.example.org".to_string(), None).validate(),
            Err(ConfigError::InvalidUrl(_))
        ));
    }
}
