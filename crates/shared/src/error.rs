use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{RecordId, ResourceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    FetchFailed,
    WriteFailed,
    NotFound,
    Validation,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOp {
    Create,
    Update,
    Delete,
}

impl WriteOp {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Why a record form cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("phone number must have exactly 10 digits, got {len}")]
    InvalidPhone { len: usize },
    #[error("unknown committee name: {0}")]
    UnknownCommittee(String),
    #[error("unknown color option: {0}")]
    UnknownColor(String),
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to load {kind} records: {source}")]
    FetchFailed {
        kind: ResourceKind,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to {} {kind} record: {source}", .op.as_str())]
    WriteFailed {
        kind: ResourceKind,
        op: WriteOp,
        #[source]
        source: anyhow::Error,
    },
    #[error("no {kind} record with id {id}")]
    NotFound { kind: ResourceKind, id: RecordId },
    #[error("invalid form: {0}")]
    Validation(#[from] FormError),
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl DirectoryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::FetchFailed { .. } => ErrorCode::FetchFailed,
            Self::WriteFailed { .. } => ErrorCode::WriteFailed,
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::Validation(_) => ErrorCode::Validation,
            Self::Config { .. } => ErrorCode::Config,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
