use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to load configuration file: {0}")]
    EnvFileError(#[from] dotenvy::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Logger initialization failed: {message}")]
    LoggerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Network,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::EnvFileError(_)
            | ReportError::MissingConfigError { .. }
            | ReportError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ReportError::SerializationError(_) => ErrorCategory::Input,
            ReportError::ApiError(_) => ErrorCategory::Network,
            ReportError::ProcessingError { .. } => ErrorCategory::Processing,
            ReportError::IoError(_) | ReportError::LoggerError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Input | ErrorCategory::Processing => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Exit code for the binary, derived from severity.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    /// Status the request ended with; 0 when no response was received.
    pub fn http_status(&self) -> u16 {
        match self {
            ReportError::ApiError(e) => e.status().map_or(0, |status| status.as_u16()),
            _ => 0,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::ApiError(e) => format!("Could not reach the target URL: {}", e),
            ReportError::IoError(e) => format!("File operation failed: {}", e),
            ReportError::SerializationError(e) => {
                format!("Input is not a JSON array of integers: {}", e)
            }
            ReportError::EnvFileError(e) => format!("Could not load configuration: {}", e),
            ReportError::MissingConfigError { field } => {
                format!("{} is not set in the configuration", field)
            }
            ReportError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            ReportError::ProcessingError { message } => message.clone(),
            ReportError::LoggerError { message } => {
                format!("Could not initialize the logger: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReportError::ApiError(_) => "Check that TARGET_URL points to a reachable host",
            ReportError::IoError(_) => "Check that the paths exist and are writable",
            ReportError::SerializationError(_) => "Provide input such as [1, 2, 3]",
            ReportError::EnvFileError(_) => "Pass an existing env file with -config",
            ReportError::MissingConfigError { .. } => "Add TARGET_URL=<url> to the env file",
            ReportError::InvalidConfigValueError { .. } => "Fix the value and run again",
            ReportError::ProcessingError { .. } => "Use smaller numbers",
            ReportError::LoggerError { .. } => "Check that the log file path is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
