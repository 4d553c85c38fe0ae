//! Installation of the global `tracing` subscriber.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::{config::LoggerSettings, Error, Result};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum LogLevel {
    #[serde(rename = "off")]
    Off,
    #[serde(rename = "trace")]
    Trace,
    #[serde(rename = "debug")]
    Debug,
    #[serde(rename = "info")]
    #[default]
    Info,
    #[serde(rename = "warn")]
    Warn,
    #[serde(rename = "error")]
    Error,
}

impl LogLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Format {
    #[serde(rename = "compact")]
    #[default]
    Compact,
    #[serde(rename = "pretty")]
    Pretty,
    #[serde(rename = "json")]
    Json,
}

/// Builds the filter for the supplied settings.
///
/// `RUST_LOG` wins over configuration when it is set.
///
/// # Errors
///
/// Returns [`Error::Logger`] when a configured override is not a valid
/// filter directive.
pub fn filter(config: &LoggerSettings) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directive = config.override_filter.clone().unwrap_or_else(|| {
        format!("{}={}", env!("CARGO_CRATE_NAME"), config.level.as_str())
    });
    EnvFilter::try_new(directive).map_err(|err| Error::Logger(err.to_string()))
}

/// Installs the subscriber described by `config`.
///
/// Does nothing when logging is disabled.
///
/// # Errors
///
/// Returns [`Error::Logger`] when the filter is invalid or a global
/// subscriber is already installed.
pub fn init(config: &LoggerSettings) -> Result<()> {
    if !config.enable {
        return Ok(());
    }
    let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        Format::Compact => fmt::layer().compact().with_writer(std::io::stderr).boxed(),
        Format::Pretty => fmt::layer().pretty().with_writer(std::io::stderr).boxed(),
        Format::Json => fmt::layer().json().with_writer(std::io::stderr).boxed(),
    };
    tracing_subscriber::registry()
        .with(layer.with_filter(filter(config)?))
        .try_init()
        .map_err(|err| Error::Logger(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{filter, LogLevel};
    use crate::config::LoggerSettings;

    #[test]
    fn levels_render_as_filter_names() {
        assert_eq!(LogLevel::Debug.as_str(), "debug");
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn malformed_overrides_are_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let settings = LoggerSettings {
            override_filter: Some("owl_structural=verbose".to_string()),
            ..LoggerSettings::default()
        };
        assert!(filter(&settings).is_err());
    }

    #[test]
    fn disabled_logger_is_a_no_op() {
        let settings = LoggerSettings {
            enable: false,
            ..LoggerSettings::default()
        };
        assert!(super::init(&settings).is_ok());
    }
}
