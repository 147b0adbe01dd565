use thiserror::Error;

/// OID filter error types
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Failed to insert the entry {value} as it contains illegal characters")]
    InvalidCharacter { value: String },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FilterError {
    /// The rejected value, if this error came from an insertion.
    pub fn invalid_value(&self) -> Option<&str> {
        match self {
            FilterError::InvalidCharacter { value } => Some(value),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
