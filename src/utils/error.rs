use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Content error in section '{section}': {message}")]
    ContentError { section: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
    Configuration,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PortfolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PortfolioError::IoError(_) => ErrorCategory::Io,
            PortfolioError::SerializationError(_) => ErrorCategory::Serialization,
            PortfolioError::ConfigValidationError { .. }
            | PortfolioError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PortfolioError::ContentError { .. } => ErrorCategory::Content,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PortfolioError::SerializationError(_) => ErrorSeverity::Medium,
            PortfolioError::ConfigValidationError { .. }
            | PortfolioError::InvalidConfigValueError { .. }
            | PortfolioError::ContentError { .. } => ErrorSeverity::High,
            PortfolioError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PortfolioError::IoError(_) => {
                "Check that the content file exists and is readable".to_string()
            }
            PortfolioError::SerializationError(_) => {
                "Retry the command; if it persists, report the content that triggered it".to_string()
            }
            PortfolioError::ConfigValidationError { field, .. } => {
                format!("Fix the TOML syntax near '{}'", field)
            }
            PortfolioError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' in the content file", field)
            }
            PortfolioError::ContentError { section, .. } => {
                format!("Review the items of section '{}'", section)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read portfolio content: {}", self),
            ErrorCategory::Serialization => format!("Could not render portfolio content: {}", self),
            ErrorCategory::Configuration => format!("Portfolio configuration is invalid: {}", self),
            ErrorCategory::Content => format!("Portfolio content is incomplete: {}", self),
        }
    }

    /// 依嚴重程度對應 CLI 退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
