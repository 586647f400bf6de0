//! Ports module
//!
//! - inbound: the operation surface the presentation layer drives
//! - outbound: the ledger client adapter the controller depends on

pub mod inbound;
pub mod outbound;

pub use inbound::NotepadApi;
pub use outbound::{GatewayError, Identity, LedgerGateway, SealedResult, TransactionId};
