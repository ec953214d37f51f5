//! Runtime settings.
//!
//! Settings come from three layers: built-in defaults, an optional JSON file
//! and command line flags (which clap also fills from environment variables).
//! Later layers win.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::Cli;

/// Settings file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "folio.json";
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_RECIPIENT: &str = "vallari.ashar13@gmail.com";
pub const DEFAULT_LOG_FILE: &str = "folio.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("live relay mode requires `{0}` to be set")]
    MissingRelayToken(&'static str),
}

/// How contact messages are delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RelayMode {
    /// Wait a fixed delay, then report success. Nothing leaves the machine.
    #[default]
    Simulated,
    /// Send through the EmailJS REST API.
    Live,
}

impl fmt::Display for RelayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayMode::Simulated => f.write_str("simulated"),
            RelayMode::Live => f.write_str("live"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub mode: RelayMode,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    /// EmailJS public key, sent as `user_id`.
    pub public_key: Option<String>,
    /// Optional EmailJS private key, sent as `accessToken`.
    pub access_token: Option<String>,
    pub endpoint: String,
    pub timeout_secs: u64,
    pub simulated_delay_ms: u64,
    /// Inbox the relay delivers to.
    pub recipient: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            mode: RelayMode::Simulated,
            service_id: None,
            template_id: None,
            public_key: None,
            access_token: None,
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_secs: 10,
            simulated_delay_ms: 1000,
            recipient: DEFAULT_RECIPIENT.into(),
        }
    }
}

/// The identifying tokens a live relay needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub access_token: Option<String>,
}

impl RelayConfig {
    pub fn credentials(&self) -> Result<RelayCredentials, ConfigError> {
        fn required(value: &Option<String>, name: &'static str) -> Result<String, ConfigError> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
                .ok_or(ConfigError::MissingRelayToken(name))
        }

        Ok(RelayCredentials {
            service_id: required(&self.service_id, "service_id")?,
            template_id: required(&self.template_id, "template_id")?,
            public_key: required(&self.public_key, "public_key")?,
            access_token: self.access_token.clone().filter(|t| !t.trim().is_empty()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub relay: RelayConfig,
    /// Replaces the packaged resume when set.
    pub resume_path: Option<PathBuf>,
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            relay: RelayConfig::default(),
            resume_path: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from `folio.json` in the working
    /// directory if it exists. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies command line (and environment) overrides.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(mode) = cli.relay {
            self.relay.mode = mode;
        }
        if let Some(v) = &cli.service_id {
            self.relay.service_id = Some(v.clone());
        }
        if let Some(v) = &cli.template_id {
            self.relay.template_id = Some(v.clone());
        }
        if let Some(v) = &cli.public_key {
            self.relay.public_key = Some(v.clone());
        }
        if let Some(v) = &cli.access_token {
            self.relay.access_token = Some(v.clone());
        }
        if let Some(v) = &cli.recipient {
            self.relay.recipient = v.clone();
        }
        if let Some(v) = &cli.resume {
            self.resume_path = Some(v.clone());
        }
        if let Some(v) = &cli.log_file {
            self.log_file = v.clone();
        }
        self
    }

    /// Rejects a live relay that is missing any of its tokens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.relay.mode == RelayMode::Live {
            self.relay.credentials()?;
        }
        Ok(())
    }
}
