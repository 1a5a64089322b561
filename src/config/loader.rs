//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::auth::{AuthKey, DEFAULT_REAUTHENTICATION_INTERVAL};
use crate::error::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub account: AccountConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub ffmpeg: FfmpegConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Premium account credentials. Both or neither must be set.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AccountConfig {
    /// radiko premium mail address.
    #[serde(default)]
    pub mail: Option<String>,

    /// radiko premium password.
    #[serde(default)]
    pub password: Option<String>,
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("mail", &self.mail)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl AccountConfig {
    /// Mail and password when both are configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.mail.as_deref(), self.password.as_deref()) {
            (Some(mail), Some(password)) => Some((mail, password)),
            _ => None,
        }
    }
}

/// Authentication settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Seconds a token is reused before authenticating again.
    #[serde(default = "default_reauthentication_interval")]
    pub reauthentication_interval_secs: u64,

    /// Override for the player key material.
    #[serde(default)]
    pub auth_key: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            reauthentication_interval_secs: default_reauthentication_interval(),
            auth_key: None,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field(
                "reauthentication_interval_secs",
                &self.reauthentication_interval_secs,
            )
            .field("auth_key", &self.auth_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// ffmpeg location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FfmpegConfig {
    /// Directory containing the ffmpeg binary. Uses PATH when unset.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
        }
    }
}

/// Recording output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for recordings without an explicit output path.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

fn default_reauthentication_interval() -> u64 {
    DEFAULT_REAUTHENTICATION_INTERVAL.as_secs()
}

fn default_timeout() -> u64 {
    30
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Platform config file location, e.g. `~/.config/rdkdler/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("net", "iwazou", "rdkdler")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Get the effective output directory.
    pub fn output_directory(&self) -> PathBuf {
        self.output
            .directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    pub fn reauthentication_interval(&self) -> Duration {
        Duration::from_secs(self.auth.reauthentication_interval_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_secs)
    }

    /// Configured key material, or the built-in default.
    pub fn auth_key(&self) -> AuthKey {
        self.auth
            .auth_key
            .as_deref()
            .map(AuthKey::new)
            .unwrap_or_default()
    }
}
