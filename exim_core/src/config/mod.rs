//! Configuration loading from TOML files

mod rules;

pub use rules::{ActorSeed, DiceRules, HouseRules, SheetRules, DEFAULT_FAILURE_THRESHOLD};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate house rules from a TOML file
pub fn load_house_rules(path: &Path) -> Result<HouseRules, ConfigError> {
    let rules: HouseRules = load_toml(path)?;
    rules.validate()?;
    Ok(rules)
}

/// Parse and validate house rules from a TOML string
pub fn parse_house_rules(content: &str) -> Result<HouseRules, ConfigError> {
    let rules: HouseRules = parse_toml(content)?;
    rules.validate()?;
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let err = load_house_rules(Path::new("/nonexistent/exim.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_bad_toml() {
        let err = parse_house_rules("[dice\nfailure_threshold = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
