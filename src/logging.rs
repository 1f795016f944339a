//! Process-wide log setup.
//!
//! Log records go to stderr so stdout carries nothing but translation
//! output. The subscriber is installed once, before the first event.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Crate whose events the chosen level applies to.
const LOG_TARGET: &str = "mtl_cli";

/// Verbosity of log records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Filter directives: our crate at this level, dependencies at warn or quieter.
    fn directives(self) -> String {
        match self {
            Self::Off => "off".to_string(),
            Self::Error => format!("error,{LOG_TARGET}=error"),
            level => format!("warn,{LOG_TARGET}={}", level.as_str()),
        }
    }
}

/// Layout of log records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Timestamp, level, message.
    #[default]
    Full,
    /// Level and message only.
    Compact,
    /// One JSON object per record.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

/// Installs the global subscriber.
///
/// Later calls are ignored, so tests and the binary can both call it.
pub fn init(config: LogConfig) {
    let filter = EnvFilter::new(config.level.directives());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!crate::output::is_no_color());

    let _ = match config.format {
        LogFormat::Full => builder.with_target(false).try_init(),
        LogFormat::Compact => builder.with_target(false).without_time().compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives() {
        assert_eq!(LogLevel::Off.directives(), "off");
        assert_eq!(LogLevel::Error.directives(), "error,mtl_cli=error");
        assert_eq!(LogLevel::Info.directives(), "warn,mtl_cli=info");
        assert_eq!(LogLevel::Trace.directives(), "warn,mtl_cli=trace");
    }

    #[test]
    fn test_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.format, LogFormat::Full);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(LogConfig::default());
        init(LogConfig {
            level: LogLevel::Debug,
            format: LogFormat::Json,
        });
    }
}
