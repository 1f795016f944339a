use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::num::NonZeroU32;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::logging::{LogConfig, LogFormat, LogLevel};
use crate::paths;
use crate::translation::{
    DEFAULT_API_KEY_ENV, DEFAULT_HUB_ENDPOINT, DEFAULT_INFERENCE_ENDPOINT, HubConfig,
    validate_language,
};

pub const DEFAULT_SOURCE_LANG: &str = "de";
pub const DEFAULT_TARGET_LANG: &str = "en";
pub const DEFAULT_MAX_LENGTH: NonZeroU32 = match NonZeroU32::new(512) {
    Some(n) => n,
    None => panic!("default max length must be positive"),
};

/// Default settings in the `[mtl]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MtlConfig {
    /// Default source language (ISO 639-1 code).
    pub from: Option<String>,
    /// Default target language (ISO 639-1 code).
    pub to: Option<String>,
    /// Model identifier used instead of the one derived from the language pair.
    pub model: Option<String>,
    /// Upper bound on the tokenized input length.
    pub max_length: Option<i64>,
    pub log_level: Option<LogLevel>,
    pub log_format: Option<LogFormat>,
}

/// The `[hub]` section: where models are resolved and run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubSection {
    /// Model registry base URL.
    pub endpoint: Option<String>,
    /// Inference API base URL.
    pub inference_endpoint: Option<String>,
    /// API token stored directly in config (not recommended).
    pub api_key: Option<String>,
    /// Environment variable name containing the API token.
    pub api_key_env: Option<String>,
}

impl HubSection {
    /// Gets the API token, preferring the environment variable over the config file.
    pub fn get_api_key(&self) -> Option<String> {
        let env_var = self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV);
        if let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/mtl/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub mtl: MtlConfig,
    #[serde(default)]
    pub hub: HubSection,
}

/// Options given on the command line; they take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub model: Option<String>,
    /// Raw `--max-length` value, validated during resolution.
    pub max_length: Option<String>,
    pub log_level: Option<LogLevel>,
    pub log_format: Option<LogFormat>,
}

/// Resolved configuration after merging CLI arguments, config file and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub source_lang: String,
    pub target_lang: String,
    pub model_override: Option<String>,
    pub max_length: NonZeroU32,
    pub hub: HubConfig,
}

/// Resolves the logging configuration on its own, so logging can be set up
/// before anything else is validated.
pub fn resolve_log_config(options: &ResolveOptions, config_file: &ConfigFile) -> LogConfig {
    LogConfig {
        level: options
            .log_level
            .or(config_file.mtl.log_level)
            .unwrap_or_default(),
        format: options
            .log_format
            .or(config_file.mtl.log_format)
            .unwrap_or_default(),
    }
}

/// Resolves settings by merging CLI options with config file settings.
///
/// Priority: CLI options, then the config file, then built-in defaults.
pub fn resolve_settings(options: &ResolveOptions, config_file: &ConfigFile) -> Result<Settings> {
    let source_lang = options
        .from
        .as_ref()
        .or(config_file.mtl.from.as_ref())
        .map_or_else(|| DEFAULT_SOURCE_LANG.to_string(), Clone::clone);
    validate_language(&source_lang, "source")?;

    let target_lang = options
        .to
        .as_ref()
        .or(config_file.mtl.to.as_ref())
        .map_or_else(|| DEFAULT_TARGET_LANG.to_string(), Clone::clone);
    validate_language(&target_lang, "target")?;

    let model_override = options
        .model
        .as_ref()
        .or(config_file.mtl.model.as_ref())
        .cloned();
    if model_override.as_deref().is_some_and(|m| m.trim().is_empty()) {
        return Err(Error::config("Model identifier must not be empty"));
    }

    let max_length = match (&options.max_length, config_file.mtl.max_length) {
        (Some(raw), _) => parse_max_length(raw)?,
        (None, Some(value)) => positive_max_length(value, &value.to_string())?,
        (None, None) => DEFAULT_MAX_LENGTH,
    };

    let hub = HubConfig {
        endpoint: config_file
            .hub
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_HUB_ENDPOINT.to_string()),
        inference_endpoint: config_file
            .hub
            .inference_endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_INFERENCE_ENDPOINT.to_string()),
        api_key: config_file.hub.get_api_key(),
    };

    Ok(Settings {
        source_lang,
        target_lang,
        model_override,
        max_length,
        hub,
    })
}

/// Parses a `--max-length` value; it must be a positive integer.
pub fn parse_max_length(raw: &str) -> Result<NonZeroU32> {
    let value: i64 = raw.trim().parse().map_err(|_| {
        Error::config(format!(
            "Invalid max length '{raw}': expected a positive integer"
        ))
    })?;
    positive_max_length(value, raw)
}

fn positive_max_length(value: i64, raw: &str) -> Result<NonZeroU32> {
    u32::try_from(value)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| {
            Error::config(format!(
                "Invalid max length '{raw}': must be a positive integer no larger than {}",
                u32::MAX
            ))
        })
}

/// Loads configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is read from `$XDG_CONFIG_HOME/mtl/config.toml`
    /// or `~/.config/mtl/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager reading from an explicit path.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Loads the config file. A missing file yields the defaults; an
    /// unreadable or malformed one is a configuration error.
    pub fn load(&self) -> Result<ConfigFile> {
        let contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ConfigFile::default()),
            Err(e) => {
                return Err(Error::config(format!(
                    "Failed to read config file {}: {e}",
                    self.config_path.display()
                )));
            }
        };

        toml::from_str(&contents).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file {}: {e}",
                self.config_path.display()
            ))
        })
    }
}
