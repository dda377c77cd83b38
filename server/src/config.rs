//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before this runs. Every variable is optional;
//! malformed values are errors rather than silently falling back.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use market::{Viewer, fixtures};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Which viewer every request is served as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewerMode {
    #[default]
    Anonymous,
    Member,
}

impl ViewerMode {
    #[must_use]
    pub fn viewer(self) -> Viewer {
        match self {
            Self::Anonymous => Viewer::Anonymous,
            Self::Member => Viewer::Member(fixtures::demo_member()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// How long `POST /api/listings` holds a request before answering.
    pub submit_delay: Duration,
    pub viewer: ViewerMode,
    pub cors_allow_any: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            viewer: ViewerMode::Anonymous,
            cors_allow_any: true,
        }
    }
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SUBMIT_DELAY_MS`: default 2000
    /// - `VIEWER`: `anonymous` (default) or `member`
    /// - `CORS_ALLOW_ANY`: default true
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] naming the first malformed variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = env_parse(&lookup, "PORT", defaults.port)?;
        let delay_ms = env_parse(&lookup, "SUBMIT_DELAY_MS", DEFAULT_SUBMIT_DELAY_MS)?;
        let viewer = parse_viewer(lookup("VIEWER").as_deref())?;
        let cors_allow_any = env_parse(&lookup, "CORS_ALLOW_ANY", defaults.cors_allow_any)?;

        Ok(Self { port, submit_delay: Duration::from_millis(delay_ms), viewer, cors_allow_any })
    }
}

fn env_parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}

fn parse_viewer(raw: Option<&str>) -> Result<ViewerMode, ConfigError> {
    match raw.map(str::trim).unwrap_or("anonymous") {
        "anonymous" | "" => Ok(ViewerMode::Anonymous),
        "member" => Ok(ViewerMode::Member),
        other => Err(ConfigError::Invalid { var: "VIEWER", value: other.to_owned() }),
    }
}
