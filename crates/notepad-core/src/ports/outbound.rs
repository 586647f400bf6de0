//! Driven Ports (SPI - Outbound Dependencies)
//!
//! The ledger client adapter. It owns wallet discovery, key management, RPC
//! encoding, and the identity/session handle; the controller only drives it
//! through this trait and treats it as externally synchronized.

use crate::payloads::{QueryScript, TransactionScript};
use async_trait::async_trait;
use ledger_values::LedgerValue;
use std::fmt;
use thiserror::Error;

/// The authenticated user's session handle, as exposed by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Account address of the signed-in user, hex-encoded.
    pub address: String,
}

/// Opaque identifier of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionId(pub String);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Terminal result of a sealed transaction.
///
/// An empty `error_message` means the transaction executed successfully;
/// anything else is the ledger's human-readable execution error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SealedResult {
    /// Ledger-side execution error, empty on success.
    pub error_message: String,
}

impl SealedResult {
    /// Whether the sealed transaction executed without error.
    pub fn is_success(&self) -> bool {
        self.error_message.is_empty()
    }
}

/// Failure reported by the adapter itself.
///
/// The message is shown to the user verbatim, so adapters are expected to
/// produce displayable text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct GatewayError {
    /// Human-readable failure description.
    pub message: String,
}

impl GatewayError {
    /// Create an error from displayable text.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The ledger client adapter.
///
/// `await_sealed` deliberately blocks the calling thread until the
/// transaction reaches its terminal, irreversible status; callers must run
/// it on a worker lane, never on the async executor's main lane. Timeouts,
/// if any, are the adapter's concern.
#[async_trait]
pub trait LedgerGateway: Send + Sync {
    /// The currently signed-in identity, if any.
    fn current_identity(&self) -> Option<Identity>;

    /// Run the wallet authentication flow and return the new identity.
    async fn authenticate(&self) -> Result<Identity, GatewayError>;

    /// Execute a read-only query and return its decoded-to-tree result.
    async fn execute_query(&self, script: QueryScript) -> Result<LedgerValue, GatewayError>;

    /// Submit a mutating transaction; success means accepted, not executed.
    async fn submit_transaction(
        &self,
        script: TransactionScript,
        gas_limit: u64,
    ) -> Result<TransactionId, GatewayError>;

    /// Block until the transaction is sealed and return its terminal result.
    fn await_sealed(&self, id: &TransactionId) -> Result<SealedResult, GatewayError>;

    /// Discard the current identity/session handle.
    fn sign_out(&self);
}
