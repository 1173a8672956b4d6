use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("No train identifier found in {input:?}")]
    NoMatchFound { input: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Result of {field} out of range: {value}")]
    OutOfRange { field: String, value: String },
}

impl FormatError {
    pub fn is_no_match(&self) -> bool {
        matches!(self, FormatError::NoMatchFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
