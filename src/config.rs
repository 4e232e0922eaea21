// Tue Jan 13 2026 - Alex

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_ACCEPTED_PREFIX: &str = "_Tt";
/// `Module.Name` with both parts non-empty. Stricter than a bare "contains a
/// dot" check: `.x` and `Foo.` are not qualified names.
pub const DEFAULT_NAMESPACE_PATTERN: &str = r"^[^.]+\..+$";
pub const DEFAULT_EXCLUDED_PREFIX: &str = "Swift.";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid namespace pattern: {0}")]
    InvalidPattern(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    pub accepted_prefixes: Vec<String>,
    pub namespace_pattern: Option<String>,
    pub excluded_prefixes: Vec<String>,
    pub log_level: String,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            accepted_prefixes: vec![DEFAULT_ACCEPTED_PREFIX.to_string()],
            namespace_pattern: Some(DEFAULT_NAMESPACE_PATTERN.to_string()),
            excluded_prefixes: vec![DEFAULT_EXCLUDED_PREFIX.to_string()],
            log_level: "warn".to_string(),
        }
    }
}

impl HookConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_accepted_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.accepted_prefixes = prefixes;
        self
    }

    pub fn with_namespace_pattern(mut self, pattern: Option<String>) -> Self {
        self.namespace_pattern = pattern;
        self
    }

    pub fn with_excluded_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.excluded_prefixes = prefixes;
        self
    }

    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.accepted_prefixes.is_empty() && self.namespace_pattern.is_none() {
            return Err(ConfigError::Invalid(
                "at least one accepted prefix or a namespace pattern is required".to_string(),
            ));
        }
        if self.accepted_prefixes.iter().any(|p| p.is_empty()) {
            return Err(ConfigError::Invalid("accepted prefixes must not be empty".to_string()));
        }
        if let Some(pattern) = &self.namespace_pattern {
            Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern(e.to_string()))?;
        }
        Ok(())
    }
}
