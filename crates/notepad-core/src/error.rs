//! Error types for the note store

use thiserror::Error;

/// Errors terminating a note store operation.
///
/// All three kinds surface to the presentation layer as a single
/// `Failed(message)` state; the message is the adapter's or ledger's
/// human-readable text, passed through unmodified. Nothing here is retried
/// automatically.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotesError {
    /// The adapter rejected the transaction before execution
    /// (network, authorization, or payload formation problems).
    #[error("{message}")]
    Submission { message: String },

    /// The transaction sealed but the ledger reported an execution error.
    #[error("{message}")]
    Execution { message: String },

    /// A read-only query failed at the adapter level.
    #[error("{message}")]
    Query { message: String },
}

impl NotesError {
    /// The user-displayable message carried by any variant.
    pub fn message(&self) -> &str {
        match self {
            Self::Submission { message } | Self::Execution { message } | Self::Query { message } => {
                message
            }
        }
    }
}

/// Result type for note store operations.
pub type NotesResult<T> = Result<T, NotesError>;
