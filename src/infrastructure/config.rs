use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;

use crate::domain::{LoggerError, Result};

/// When to color the status field.
///
/// Lines sent to the `tracing` sink are never ANSI-colored; `auto` and
/// `always` tag them with the tier (`401[warning]`) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when the sink's stream is a terminal and `NO_COLOR` / `CLICOLOR` allow it.
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(LoggerError::config(format!("unknown color mode: {other}"))),
        }
    }
}

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Tracing,
    Stdout,
    Stderr,
}

impl FromStr for SinkKind {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tracing" => Ok(Self::Tracing),
            "stdout" => Ok(Self::Stdout),
            "stderr" => Ok(Self::Stderr),
            other => Err(LoggerError::config(format!("unknown log sink: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub color: ColorMode,
    pub sink: SinkKind,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub logger: LoggerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            logger: LoggerConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Reads `CONFIG_PATH` if set, then applies environment overrides.
    pub fn load() -> Result<Self> {
        let config = match std::env::var("CONFIG_PATH") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Applies `SERVER_HOST`, `SERVER_PORT`, `REQUEST_LOG_COLOR` and
    /// `REQUEST_LOG_SINK` as returned by `lookup`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(host) = lookup("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.port = port
                .parse()
                .map_err(|_| LoggerError::config(format!("invalid SERVER_PORT: {port}")))?;
        }
        if let Some(color) = lookup("REQUEST_LOG_COLOR") {
            self.logger.color = color.parse()?;
        }
        if let Some(sink) = lookup("REQUEST_LOG_SINK") {
            self.logger.sink = sink.parse()?;
        }
        Ok(self)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .host
            .parse()
            .map_err(|_| LoggerError::config(format!("invalid host: {}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
