use thiserror::Error;

use super::schema::RowActionsConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse row actions config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parse configuration from TOML text. Missing keys take their defaults.
pub fn parse_config(source: &str) -> Result<RowActionsConfig, ConfigError> {
    Ok(toml::from_str(source)?)
}

/// Load configuration from an optional TOML source.
pub fn load_config(source: Option<&str>) -> Result<RowActionsConfig, ConfigError> {
    match source.map(str::trim) {
        Some(text) if !text.is_empty() => parse_config(text),
        _ => Ok(RowActionsConfig::default()),
    }
}
