use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Error parsing line {line}: {row} ({reason})")]
    RowParseError {
        line: usize,
        row: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::InputNotFound { .. } | ReportError::IoError(_) => ErrorCategory::Input,
            ReportError::CsvError(_) | ReportError::RowParseError { .. } => ErrorCategory::Data,
            ReportError::SerializationError(_) => ErrorCategory::Output,
            ReportError::ConfigError { .. }
            | ReportError::ConfigValidationError { .. }
            | ReportError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // a bad row only costs that row
            ReportError::RowParseError { .. } => ErrorSeverity::Low,
            ReportError::ConfigError { .. }
            | ReportError::ConfigValidationError { .. }
            | ReportError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            ReportError::InputNotFound { .. }
            | ReportError::CsvError(_)
            | ReportError::SerializationError(_) => ErrorSeverity::High,
            ReportError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ReportError::InputNotFound { path } => format!(
                "Please ensure '{}' exists in the current directory or pass --input",
                path
            ),
            ReportError::CsvError(_) => {
                "Check that the input is plain comma separated text".to_string()
            }
            ReportError::IoError(_) => "Check file permissions and available disk space".to_string(),
            ReportError::SerializationError(_) => "Try the text output format".to_string(),
            ReportError::ConfigError { .. }
            | ReportError::ConfigValidationError { .. }
            | ReportError::InvalidConfigValueError { .. } => {
                "Review the configuration values and try again".to_string()
            }
            ReportError::RowParseError { .. } => {
                "Fix the salary or years of service value in that row".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::InputNotFound { path } => {
                format!("Error reading the CSV file: {} not found", path)
            }
            ReportError::IoError(e) => format!("Error reading the CSV file: {}", e),
            ReportError::RowParseError { row, .. } => format!("Error parsing line: {}", row),
            other => format!("An unexpected error occurred: {}", other),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
