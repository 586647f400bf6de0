//! # notepad-core
//!
//! The core of a note-taking client whose persistence layer is a public
//! blockchain ledger. Notes live in a per-account notepad resource on the
//! ledger; this crate coordinates everything between the presentation layer
//! and the ledger client adapter.
//!
//! ## Architecture
//!
//! Hexagonal (Ports/Adapters):
//!
//! ```text
//! notepad-core/
//! ├── domain/     # Note record, operation state machine
//! ├── ports/      # NotepadApi (inbound) + LedgerGateway (outbound)
//! ├── payloads.rs # Templated transaction/query program texts
//! ├── decoder.rs  # Ledger value tree -> Vec<Note>
//! ├── service.rs  # NotepadService orchestrating everything
//! └── config.rs   # NotepadConfig
//! ```
//!
//! ## Control flow
//!
//! Presentation invokes an operation → the controller checks the signed-in
//! identity → state goes in-flight → the payload is submitted through the
//! gateway → the sealing wait runs on a blocking worker lane → on success
//! the controller re-queries (or clears) its note collection → state returns
//! to idle, or to failed carrying the adapter's message. The presentation
//! layer observes `state` and `notes` through `tokio::sync::watch` channels.
//!
//! ## Example
//!
//! ```rust,ignore
//! use notepad_core::{NotepadApi, NotepadConfig, NotepadService};
//!
//! let service = NotepadService::new(NotepadConfig::default(), gateway);
//! let mut state = service.watch_state();
//!
//! service.create_note("groceries", "milk, eggs").await;
//! assert!(!state.borrow().is_failed());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod decoder;
pub mod domain;
pub mod error;
pub mod payloads;
pub mod ports;
pub mod service;

pub use config::NotepadConfig;
pub use decoder::decode_notes;
pub use domain::{Note, OperationState};
pub use error::{NotesError, NotesResult};
pub use payloads::{QueryScript, TransactionScript};
pub use ports::inbound::NotepadApi;
pub use ports::outbound::{GatewayError, Identity, LedgerGateway, SealedResult, TransactionId};
pub use service::NotepadService;
