use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZooError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Snapshot encoding error: {message}")]
    EncodeError { message: String },

    #[error("Snapshot decoding error: {message}")]
    DecodeError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown grammatical case: {tag}")]
    UnknownCaseError { tag: String },

    #[error("Lexicon error: {message}")]
    LexiconError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Persistence,
    Configuration,
    Linguistic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for a run that failed with this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ZooError {
    pub fn decode(message: impl Into<String>) -> Self {
        Self::DecodeError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ZooError::IoError(_) => ErrorCategory::Io,
            ZooError::EncodeError { .. } | ZooError::DecodeError { .. } => {
                ErrorCategory::Persistence
            }
            ZooError::ConfigError { .. }
            | ZooError::ConfigValidationError { .. }
            | ZooError::InvalidConfigValueError { .. }
            | ZooError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ZooError::UnknownCaseError { .. } | ZooError::LexiconError { .. } => {
                ErrorCategory::Linguistic
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ZooError::UnknownCaseError { .. } => ErrorSeverity::Medium,
            ZooError::ConfigError { .. }
            | ZooError::ConfigValidationError { .. }
            | ZooError::InvalidConfigValueError { .. }
            | ZooError::MissingConfigError { .. }
            | ZooError::LexiconError { .. }
            | ZooError::DecodeError { .. } => ErrorSeverity::High,
            ZooError::IoError(_) | ZooError::EncodeError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ZooError::IoError(_) => "Check that the path exists and is readable/writable",
            ZooError::EncodeError { .. } => "The zoo could not be serialized; try the json format",
            ZooError::DecodeError { .. } => {
                "The state file is corrupt or was not written by menagerie; save it again"
            }
            ZooError::ConfigError { .. } | ZooError::ConfigValidationError { .. } => {
                "Fix the roster file syntax and try again"
            }
            ZooError::InvalidConfigValueError { .. } => "Correct the highlighted roster value",
            ZooError::MissingConfigError { .. } => "Add the missing field to the roster file",
            ZooError::UnknownCaseError { .. } => {
                "Use one of: nomn, gent, datv, accs, ablt, loct"
            }
            ZooError::LexiconError { .. } => "Check the lexicon entry's paradigm, stem and forms",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ZooError::IoError(e) => format!("File access failed: {}", e),
            ZooError::DecodeError { .. } => "Could not read the saved zoo state".to_string(),
            ZooError::EncodeError { .. } => "Could not save the zoo state".to_string(),
            ZooError::MissingConfigError { field } => {
                format!("Roster is missing '{}'", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ZooError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_are_critical() {
        let err = ZooError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_every_failure_exits_non_zero() {
        let errors = [
            ZooError::UnknownCaseError {
                tag: "voct".to_string(),
            },
            ZooError::decode("bad magic"),
            ZooError::EncodeError {
                message: "wing span is NaN".to_string(),
            },
        ];
        let codes: Vec<i32> = errors.iter().map(|e| e.severity().exit_code()).collect();
        assert_eq!(codes, vec![2, 1, 3]);
    }

    #[test]
    fn test_decode_error_category() {
        let err = ZooError::decode("bad magic");
        assert_eq!(err.category(), ErrorCategory::Persistence);
        assert!(err.to_string().contains("bad magic"));
        assert_eq!(err.user_friendly_message(), "Could not read the saved zoo state");
    }
}
