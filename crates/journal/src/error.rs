use thiserror::Error;

use crate::{RecordId, RecordKind};

/// Errors returned by journal stores and configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JournalError {
    #[error("{kind} {id} not found")]
    NotFound { kind: RecordKind, id: RecordId },

    #[error("field `{field}` cannot be changed")]
    ImmutableField { field: String },

    #[error("invalid {kind} record: {source}")]
    InvalidRecord {
        kind: RecordKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("a blob named `{0}` already exists")]
    Conflict(String),

    #[error("invalid blob name `{0}`")]
    InvalidBlobName(String),

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

impl JournalError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, JournalError>;
