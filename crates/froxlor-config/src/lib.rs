//! Shared configuration for the Froxlor CLI binaries.
//!
//! The [`Config`] struct gathers everything the shell needs to know before
//! the prompt loop starts: where the panel API listens, where hook modules
//! live, and how logging should behave. Defaults are derived per platform in
//! [`defaults`]; the CLI crate layers command-line flags and environment
//! variables on top.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

pub mod defaults;
mod logging;
mod socket;

pub use logging::{LogFormat, LogFormatParseError};
pub use socket::{SocketEndpoint, SocketParseError};

/// Runtime configuration shared by the CLI shell and the hook dispatcher.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    /// Endpoint of the panel API the shell forwards commands to.
    #[serde(default = "defaults::default_api_endpoint")]
    pub api_endpoint: SocketEndpoint,
    /// Base directory scanned for `module.<Name>.<ext>` hook modules.
    #[serde(default = "defaults::default_modules_dir")]
    pub modules_dir: Utf8PathBuf,
    /// Log filter expression consumed by `tracing-subscriber`.
    #[serde(default = "defaults::default_log_filter_string")]
    pub log_filter: String,
    /// Output format for emitted log events.
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_endpoint: defaults::default_api_endpoint(),
            modules_dir: defaults::default_modules_dir(),
            log_filter: defaults::default_log_filter_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Returns the configured panel API endpoint.
    #[must_use]
    pub const fn api_endpoint(&self) -> &SocketEndpoint {
        &self.api_endpoint
    }

    /// Returns the hook module base directory.
    #[must_use]
    pub fn modules_dir(&self) -> &camino::Utf8Path {
        self.modules_dir.as_path()
    }

    /// Returns the log filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Returns the configured log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_platform_defaults() {
        let config = Config::default();
        assert_eq!(config.log_filter(), defaults::DEFAULT_LOG_FILTER);
        assert_eq!(config.log_format(), LogFormat::Compact);
        assert_eq!(config.modules_dir(), defaults::default_modules_dir());
    }

    #[test]
    fn config_round_trips_through_serde() {
        let config = Config {
            api_endpoint: SocketEndpoint::tcp("panel.example", 9721),
            modules_dir: Utf8PathBuf::from("/srv/froxlor/modules"),
            log_filter: String::from("debug"),
            log_format: LogFormat::Json,
        };
        let encoded = serde_json::to_string(&config).expect("serialise config");
        let decoded: Config = serde_json::from_str(&encoded).expect("deserialise config");
        assert_eq!(decoded, config);
    }
}
