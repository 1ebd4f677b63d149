use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RteGenError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {} as {format}: {message}", .path.display())]
    ParseError {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Configuration validation error in field '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for field '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Component model error: {message}")]
    ModelError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Model,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RteGenError {
    pub fn model(message: impl Into<String>) -> Self {
        Self::ModelError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) | Self::ReadError { .. } | Self::ParseError { .. } => {
                ErrorCategory::Input
            }
            Self::WriteError { .. } => ErrorCategory::Output,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::ModelError { .. } => ErrorCategory::Model,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Model => ErrorSeverity::High,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Process exit code the binary uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(_) | Self::ReadError { .. } => {
                "Check that the input file exists and is readable".to_string()
            }
            Self::ParseError { format, .. } => {
                format!("Make sure the component description is valid {}", format)
            }
            Self::WriteError { path, .. } => format!(
                "Check that the directory of {} exists and is writable",
                path.display()
            ),
            Self::ConfigValidationError { field, .. } | Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting on the command line or in the settings file", field)
            }
            Self::ModelError { .. } => {
                "Complete the component description, or rerun without --strict to skip incomplete entries"
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not load the component description: {}", self),
            ErrorCategory::Output => format!("Could not write the generated file: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Model => format!("Incomplete component model: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RteGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_failures_are_critical() {
        let err = RteGenError::WriteError {
            path: PathBuf::from("missing/Rte_Door.c"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        assert_eq!(err.category(), ErrorCategory::Output);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert!(err.recovery_suggestion().contains("missing/Rte_Door.c"));
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        let parse = RteGenError::ParseError {
            path: PathBuf::from("component.yaml"),
            format: "YAML".to_string(),
            message: "did not find expected key".to_string(),
        };
        let setting = RteGenError::InvalidConfigValueError {
            field: "policy".to_string(),
            value: "lenient".to_string(),
            reason: "Valid values: permissive, strict".to_string(),
        };
        assert_eq!(parse.severity(), ErrorSeverity::Medium);
        assert_eq!(parse.exit_code(), 2);
        assert_eq!(setting.category(), ErrorCategory::Configuration);
        assert_eq!(setting.exit_code(), 1);
        // no error maps to a successful exit
        assert_ne!(parse.exit_code(), 0);
    }

    #[test]
    fn test_model_errors_exit_with_one() {
        let err = RteGenError::model("port 'InSpeed' references unknown interface 'Speed'");
        assert_eq!(err.category(), ErrorCategory::Model);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("InSpeed"));
    }
}
