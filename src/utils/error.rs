use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignupError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation failed for: {}", fields.join(", "))]
    ValidationError { fields: Vec<String> },

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Webhook responded with HTTP {status}")]
    HttpStatus { status: u16, body: String },

    #[error("Webhook request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("Malformed webhook response: {message}")]
    MalformedResponse { message: String },

    #[error("Submission failed: {reason}")]
    SubmissionFailed { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Submission,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SignupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::ValidationError { .. } | Self::SubmissionInFlight => ErrorCategory::Validation,
            Self::HttpStatus { .. }
            | Self::Timeout { .. }
            | Self::NetworkError { .. }
            | Self::MalformedResponse { .. }
            | Self::SubmissionFailed { .. } => ErrorCategory::Submission,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Submission => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the binary. Rejected input is never a success.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 4,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    /// Whether resubmitting the same values could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            Self::Timeout { .. }
            | Self::NetworkError { .. }
            | Self::MalformedResponse { .. }
            | Self::SubmissionFailed { .. } => true,
            _ => false,
        }
    }

    /// Message shown to the person filling in the form.
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Submission => {
                "Something went wrong. Please try again or contact support.".to_string()
            }
            ErrorCategory::Validation => match self {
                Self::SubmissionInFlight => "Your signup is already being sent.".to_string(),
                _ => "Please correct the highlighted fields.".to_string(),
            },
            ErrorCategory::Configuration => format!("The signup form is misconfigured: {}", self),
            ErrorCategory::System => format!("Unexpected system error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check the config file and command line flags".to_string()
            }
            Self::MissingConfigError { field } => {
                format!("Provide '{}' in the config file or on the command line", field)
            }
            Self::ValidationError { .. } => "Fix the listed fields and submit again".to_string(),
            Self::SubmissionInFlight => "Wait for the current submission to finish".to_string(),
            Self::HttpStatus { status, .. } if *status < 500 => {
                "The webhook rejected the payload; check the webhook configuration".to_string()
            }
            Self::HttpStatus { .. }
            | Self::Timeout { .. }
            | Self::NetworkError { .. }
            | Self::MalformedResponse { .. }
            | Self::SubmissionFailed { .. } => {
                "Submit again; your input has been kept".to_string()
            }
            Self::IoError(_) | Self::SerializationError(_) => {
                "Check file permissions and available disk space".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SignupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_errors_are_medium_and_retryable() {
        let err = SignupError::HttpStatus {
            status: 500,
            body: String::new(),
        };
        assert_eq!(err.category(), ErrorCategory::Submission);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.is_retryable());
        assert_eq!(
            err.user_friendly_message(),
            "Something went wrong. Please try again or contact support."
        );

        let rejected = SignupError::HttpStatus {
            status: 400,
            body: String::new(),
        };
        assert!(!rejected.is_retryable());
    }

    #[test]
    fn test_validation_error_lists_fields() {
        let err = SignupError::ValidationError {
            fields: vec!["name".to_string(), "phone".to_string()],
        };
        assert_eq!(err.to_string(), "Validation failed for: name, phone");
        assert_eq!(err.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_rejected_input_exits_non_zero() {
        let invalid = SignupError::ValidationError {
            fields: vec!["gdprConsentAndUpdates".to_string()],
        };
        assert_eq!(invalid.exit_code(), 4);
        assert_ne!(SignupError::SubmissionInFlight.exit_code(), 0);

        let failed = SignupError::SubmissionFailed {
            reason: "HTTP 500".to_string(),
        };
        assert_eq!(failed.exit_code(), 2);
        assert_eq!(
            SignupError::ConfigError {
                message: "bad".to_string()
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = SignupError::MissingConfigError {
            field: "webhook.url".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("webhook.url"));
    }
}
