use thiserror::Error;

/// Contract violations a behavior can report about its own slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("read before it was assigned")]
    ReadBeforeAssign,

    #[error("assigned more than once")]
    AssignedTwice,
}

/// Custom error types for the behaviors crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BehaviorError {
    #[error("Precondition violation: property `{property}` {violation}")]
    PreconditionViolation { property: String, violation: Violation },

    #[error("Unknown behavior: {0}")]
    UnknownBehavior(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type specific to behavior operations
pub type BehaviorResult<T> = Result<T, BehaviorError>;

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Fatal,
    Error,
    Warning,
    Info,
}

/// Recoverable vs. non-recoverable errors
pub trait RecoverableError {
    fn is_recoverable(&self) -> bool;
    fn severity(&self) -> ErrorSeverity;
    fn recovery_strategy(&self) -> Option<String>;
}

impl RecoverableError for BehaviorError {
    fn is_recoverable(&self) -> bool {
        !matches!(self, BehaviorError::PreconditionViolation { .. })
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            BehaviorError::PreconditionViolation { .. } => ErrorSeverity::Fatal,
            BehaviorError::UnknownBehavior(_) | BehaviorError::ConfigError(_) => ErrorSeverity::Error,
        }
    }

    fn recovery_strategy(&self) -> Option<String> {
        match self {
            BehaviorError::PreconditionViolation { .. } => None,
            BehaviorError::UnknownBehavior(_) => {
                Some("Run `behaviors list` to see the available behaviors".to_string())
            }
            BehaviorError::ConfigError(_) => Some("Check the YAML config file".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precondition_violations_are_fatal() {
        let err = BehaviorError::PreconditionViolation {
            property: "initialized_later".to_string(),
            violation: Violation::ReadBeforeAssign,
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert_eq!(
            err.to_string(),
            "Precondition violation: property `initialized_later` read before it was assigned"
        );
    }

    #[test]
    fn unknown_behavior_suggests_list() {
        let err = BehaviorError::UnknownBehavior("copying".to_string());
        assert!(err.is_recoverable());
        assert!(err.recovery_strategy().unwrap().contains("behaviors list"));
    }
}
