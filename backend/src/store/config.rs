//! Service configuration file support.
//!
//! Settings are read from `analytics.toml` and can be overridden by
//! environment variables.
//!
//! # Environment Variables
//! - `ANALYTICS_DATA_PATH`: path of the analytics document
//! - `ANALYTICS_FALLBACK`: serve the bundled example when loading fails (`true`/`false`)
//! - `HOST`: bind address (default `0.0.0.0`)
//! - `PORT`: bind port (default `8080`)

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::LoadError;
use super::source::{DocumentSource, FallbackSource, FileSource};

/// Complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Where to read the analytics document from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    #[serde(default = "default_fallback")]
    pub fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("public/slurm_analysis.json")
}

fn default_fallback() -> bool {
    true
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            fallback: default_fallback(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            LoadError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: AnalyticsConfig = toml::from_str(&content).map_err(|e| {
            LoadError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `analytics.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, LoadError> {
        let search_paths = [
            PathBuf::from("analytics.toml"),
            PathBuf::from("backend/analytics.toml"),
            PathBuf::from("../analytics.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::debug!("Using configuration file {}", path.display());
                return Self::from_file(&path);
            }
        }

        Err(LoadError::configuration(
            "No analytics.toml found in standard locations",
        ))
    }

    /// Configuration file if present, defaults otherwise, then environment
    /// overrides.
    pub fn load() -> Result<Self, LoadError> {
        let base = match Self::from_default_location() {
            Ok(config) => config,
            Err(LoadError::Configuration { message, .. })
                if message.starts_with("No analytics.toml") =>
            {
                log::debug!("No configuration file found; using defaults");
                Self::default()
            }
            Err(e) => return Err(e),
        };
        base.with_env_overrides()
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, LoadError> {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, LoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("ANALYTICS_DATA_PATH") {
            self.data.path = PathBuf::from(path);
        }
        if let Some(raw) = lookup("ANALYTICS_FALLBACK") {
            self.data.fallback = parse_bool(&raw).ok_or_else(|| {
                LoadError::configuration(format!(
                    "ANALYTICS_FALLBACK must be true or false, got '{}'",
                    raw
                ))
            })?;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(raw) = lookup("PORT") {
            self.server.port = raw.parse().map_err(|_| {
                LoadError::configuration(format!("PORT must be a valid port number, got '{}'", raw))
            })?;
        }
        Ok(self)
    }

    /// `host:port` bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// The document source described by this configuration.
    pub fn build_source(&self) -> Arc<dyn DocumentSource> {
        let file: Arc<dyn DocumentSource> = Arc::new(FileSource::new(&self.data.path));
        if self.data.fallback {
            Arc::new(FallbackSource::with_bundled(file))
        } else {
            file
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
