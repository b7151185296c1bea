use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::errors::{ BehaviorError, BehaviorResult };

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl From<ConfigError> for BehaviorError {
    fn from(err: ConfigError) -> Self {
        BehaviorError::ConfigError(err.to_string())
    }
}

/// Settings for the demo scenarios
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Value produced by the demo initializers
    pub greeting: String,

    /// How many times each demo reads its property
    pub reads: usize,

    /// Reader threads for the synchronized demo
    pub threads: usize,

    /// Log level used when the command line does not set one
    pub log_level: Option<String>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        PlaygroundConfig {
            greeting: "hello".to_string(),
            reads: 2,
            threads: 4,
            log_level: None,
        }
    }
}

impl PlaygroundConfig {
    /// Load the config file when one is given, otherwise use the defaults
    pub fn load(path: Option<&Path>) -> BehaviorResult<Self> {
        match path {
            Some(path) => Ok(Self::from_file(path)?),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: PlaygroundConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == 0 {
            return Err(ConfigError::InvalidValue {
                field: "threads".to_string(),
                reason: "at least one reader thread is required".to_string(),
            });
        }
        Ok(())
    }

    /// Apply command line overrides on top of the file values
    pub fn with_overrides(
        mut self,
        greeting: Option<&str>,
        reads: Option<usize>,
        threads: Option<usize>
    ) -> Result<Self, ConfigError> {
        if let Some(greeting) = greeting {
            self.greeting = greeting.to_string();
        }
        if let Some(reads) = reads {
            self.reads = reads;
        }
        if let Some(threads) = threads {
            self.threads = threads;
        }
        self.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ ErrorSeverity, RecoverableError };

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = PlaygroundConfig::from_yaml("greeting: hi\n").unwrap();
        assert_eq!(config.greeting, "hi");
        assert_eq!(config.reads, 2);
        assert_eq!(config.threads, 4);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn load_without_path_uses_defaults() {
        assert_eq!(PlaygroundConfig::load(None).unwrap(), PlaygroundConfig::default());
    }

    #[test]
    fn load_failure_is_a_recoverable_behavior_error() {
        let err = PlaygroundConfig::load(Some(Path::new("/nonexistent/behaviors.yaml"))).unwrap_err();
        assert!(matches!(err, BehaviorError::ConfigError(ref message) if message.contains("Failed to read")));
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert_eq!(err.recovery_strategy(), Some("Check the YAML config file".to_string()));
    }

    #[test]
    fn invalid_override_converts_to_config_error() {
        let err = PlaygroundConfig::default().with_overrides(None, None, Some(0)).unwrap_err();
        let err = BehaviorError::from(err);
        assert_eq!(
            err,
            BehaviorError::ConfigError(
                "Invalid value for threads: at least one reader thread is required".to_string()
            )
        );
    }

    #[test]
    fn zero_threads_is_rejected() {
        let err = PlaygroundConfig::from_yaml("threads: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn overrides_win_over_file_values() {
        let config = PlaygroundConfig::from_yaml("greeting: hi\nreads: 5\n")
            .unwrap()
            .with_overrides(Some("hello"), None, Some(8))
            .unwrap();
        assert_eq!(config.greeting, "hello");
        assert_eq!(config.reads, 5);
        assert_eq!(config.threads, 8);
    }
}
