//! Error types for orientql

use thiserror::Error;

/// Result type alias for orientql operations
pub type OqlResult<T> = Result<T, OqlError>;

/// Error types for building and rendering statements
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OqlError {
    /// No explicit target was set and the attached document has neither
    /// a record id nor a class name
    #[error("Missing target: set a record, class or cluster, or attach a document that has one")]
    MissingTarget,

    /// Condition chain used out of order
    #[error("Malformed condition: {0}")]
    MalformedCondition(String),

    /// Value that has no literal form in the dialect
    #[error("Unsupported value kind: {0}")]
    UnsupportedValueKind(String),

    /// Empty or otherwise unusable field, class or cluster name
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Text that does not parse as `#<cluster>:<position>`
    #[error("Invalid record id: {0}")]
    InvalidRecordId(String),

    /// JSON that cannot be turned into a document
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

impl OqlError {
    /// Create a malformed condition error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedCondition(message.into())
    }

    /// Create an unsupported value error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedValueKind(message.into())
    }

    /// Create an invalid identifier error
    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        Self::InvalidIdentifier(message.into())
    }

    /// Check if this is a missing target error
    pub fn is_missing_target(&self) -> bool {
        matches!(self, Self::MissingTarget)
    }

    /// Check if this is a malformed condition error
    pub fn is_malformed_condition(&self) -> bool {
        matches!(self, Self::MalformedCondition(_))
    }

    /// Check if this is an unsupported value error
    pub fn is_unsupported_value(&self) -> bool {
        matches!(self, Self::UnsupportedValueKind(_))
    }
}
