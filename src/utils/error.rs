use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LintError {
    #[error("cannot read {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    DecodeError(#[from] serde_yaml::Error),

    #[error("empty document")]
    EmptyDocument,

    #[error("device {model:?}: {violation}")]
    SchemaError {
        model: String,
        violation: SchemaViolation,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

/// A value outside one of the catalog allow-lists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaViolation {
    #[error("port type {0:?} unknown")]
    UnknownPortType(String),

    #[error("switch chip {0:?} unknown")]
    UnknownSwitchChip(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Read,
    Decode,
    Schema,
    Config,
}

impl LintError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LintError::ReadError { .. } => ErrorKind::Read,
            LintError::DecodeError(_) | LintError::EmptyDocument => ErrorKind::Decode,
            LintError::SchemaError { .. } => ErrorKind::Schema,
            LintError::ConfigError { .. } => ErrorKind::Config,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        LintError::ConfigError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LintError>;
