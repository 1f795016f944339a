mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_MAX_LENGTH, DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG,
    HubSection, MtlConfig, ResolveOptions, Settings, parse_max_length, resolve_log_config,
    resolve_settings,
};
