//! Unified error hierarchy for vdotrs
//!
//! The calculation core is infallible; these errors come from input
//! validation, strict time parsing, configuration and output.

use thiserror::Error;

use crate::time_format::TimeParseError;

/// Top-level error type for vdotrs operations
#[derive(Debug, Error)]
pub enum VdotError {
    /// Rejected race input
    #[error("Invalid {parameter}: {value} ({reason})")]
    InvalidInput {
        parameter: String,
        value: String,
        reason: String,
    },

    /// Strict time string parsing errors
    #[error("Time parse error: {0}")]
    TimeParse(#[from] TimeParseError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for vdotrs operations
pub type Result<T> = std::result::Result<T, VdotError>;

impl VdotError {
    pub fn invalid_input(
        parameter: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        VdotError::InvalidInput {
            parameter: parameter.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            VdotError::InvalidInput { .. } | VdotError::TimeParse(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            VdotError::InvalidInput {
                parameter, reason, ..
            } => format!("Please check the race {}: {}", parameter, reason),
            VdotError::TimeParse(err) => {
                format!("Could not read the race time ({}). Use H:MM:SS, MM:SS or SS.", err)
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error that prevents the operation
    Error,
    /// Bad user input; the user can retry
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_severity() {
        let err = VdotError::invalid_input("distance", -5.0, "must be positive");
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert_eq!(err.severity().to_tracing_level(), tracing::Level::WARN);

        let err = VdotError::Configuration("bad".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_display() {
        let err = VdotError::invalid_input("duration", 0, "must be at least one second");
        assert_eq!(
            err.to_string(),
            "Invalid duration: 0 (must be at least one second)"
        );
    }

    #[test]
    fn test_user_messages() {
        let err = VdotError::from(TimeParseError::Empty);
        assert!(err.user_message().contains("Could not read"));

        let err = VdotError::invalid_input("distance", 0, "must be positive");
        assert!(err.user_message().contains("race distance"));
    }
}
