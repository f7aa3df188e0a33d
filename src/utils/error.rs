use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SumstatsError {
    #[error("Failed to read input file '{path}': {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Missing required columns: {}", .missing.join(", "))]
    SchemaError { missing: Vec<String> },

    #[error("Non-numeric value '{value}' in column '{column}' at line {line}")]
    TypeCoercionError {
        column: String,
        line: u64,
        value: String,
    },

    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Read,
    Schema,
    TypeCoercion,
    Write,
    Internal,
}

impl ErrorCategory {
    /// Process exit status reported for this category. Never zero.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCategory::Internal => 1,
            ErrorCategory::Config => 2,
            ErrorCategory::Read => 3,
            ErrorCategory::Schema => 4,
            ErrorCategory::TypeCoercion => 5,
            ErrorCategory::Write => 6,
        }
    }
}

impl SumstatsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SumstatsError::ReadError { .. } => ErrorCategory::Read,
            SumstatsError::SchemaError { .. } => ErrorCategory::Schema,
            SumstatsError::TypeCoercionError { .. } => ErrorCategory::TypeCoercion,
            SumstatsError::WriteError { .. } => ErrorCategory::Write,
            SumstatsError::ConfigError { .. }
            | SumstatsError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            SumstatsError::CsvError(_) | SumstatsError::IoError(_) => ErrorCategory::Internal,
        }
    }

    /// Single line shown to the user on failure.
    pub fn user_friendly_message(&self) -> String {
        self.to_string()
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Config => "Check the command line arguments and the TOML config file",
            ErrorCategory::Read => {
                "Make sure the input exists and is a tab-separated file with a header row"
            }
            ErrorCategory::Schema => {
                "Harmonize the input first or map the column names in the [columns] config section"
            }
            ErrorCategory::TypeCoercion => {
                "Remove or fix rows whose beta, standard_error or p_value is not a number"
            }
            ErrorCategory::Write => "Make sure the output directory exists and is writable",
            ErrorCategory::Internal => "Re-run with --verbose for more detail",
        }
    }
}

pub type Result<T> = std::result::Result<T, SumstatsError>;
