//! Note Store Controller - Core orchestration logic
//!
//! Owns the observable `OperationState` and note collection, builds payloads
//! from the templates, drives the ledger gateway, and waits for transaction
//! finality on a blocking worker lane.
//!
//! ## Shared mutation algorithm
//!
//! 1. Identity guard: signed out means silent no-op.
//! 2. In-flight guard: overlapping operations are ignored, not queued.
//! 3. State goes in-flight; the transaction is submitted.
//! 4. The sealing wait runs under `spawn_blocking` so the blocking adapter
//!    call never stalls the async executor.
//! 5. The sealed result is joined back on the controller's task, which is
//!    the only place state and notes are written.

use crate::config::NotepadConfig;
use crate::decoder;
use crate::domain::{Note, OperationState};
use crate::error::{NotesError, NotesResult};
use crate::payloads::{self, TransactionScript};
use crate::ports::inbound::NotepadApi;
use crate::ports::outbound::{Identity, LedgerGateway, TransactionId};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// The note store controller.
///
/// State and notes live in `watch` channels: the channel value is the
/// authoritative copy, and every write is immediately visible to observers.
/// The presentation layer subscribes via [`Self::watch_state`] and
/// [`Self::watch_notes`] and drives the controller through [`NotepadApi`].
pub struct NotepadService<G>
where
    G: LedgerGateway + 'static,
{
    config: NotepadConfig,
    gateway: Arc<G>,
    state_tx: watch::Sender<OperationState>,
    notes_tx: watch::Sender<Option<Vec<Note>>>,
}

impl<G> NotepadService<G>
where
    G: LedgerGateway + 'static,
{
    /// Create a controller over an injected gateway.
    pub fn new(config: NotepadConfig, gateway: Arc<G>) -> Self {
        let (state_tx, _) = watch::channel(OperationState::Idle);
        let (notes_tx, _) = watch::channel(None);
        Self {
            config,
            gateway,
            state_tx,
            notes_tx,
        }
    }

    /// Subscribe to operation state changes.
    pub fn watch_state(&self) -> watch::Receiver<OperationState> {
        self.state_tx.subscribe()
    }

    /// Subscribe to note collection changes.
    pub fn watch_notes(&self) -> watch::Receiver<Option<Vec<Note>>> {
        self.notes_tx.subscribe()
    }

    fn set_state(&self, state: OperationState) {
        self.state_tx.send_replace(state);
    }

    fn set_notes(&self, notes: Option<Vec<Note>>) {
        self.notes_tx.send_replace(notes);
    }

    /// Identity guard shared by every operation that touches the ledger.
    fn signed_in(&self) -> Option<Identity> {
        let identity = self.gateway.current_identity();
        if identity.is_none() {
            debug!("operation ignored: no signed-in identity");
        }
        identity
    }

    /// Atomically move to in-flight unless an operation is already pending.
    fn begin(&self) -> bool {
        let mut began = false;
        self.state_tx.send_if_modified(|state| {
            if state.is_in_flight() {
                return false;
            }
            *state = OperationState::InFlight;
            began = true;
            true
        });
        if !began {
            debug!("operation ignored: another operation is in flight");
        }
        began
    }

    fn fail(&self, error: NotesError) {
        warn!(%error, "operation failed");
        self.set_state(OperationState::Failed(error.message().to_string()));
    }

    /// Submit a transaction and wait for it to seal.
    ///
    /// The blocking wait runs on the runtime's blocking pool; joining the
    /// handle delivers the result back onto this task before any state is
    /// written.
    async fn submit_and_seal(&self, script: TransactionScript) -> NotesResult<()> {
        let id = self
            .gateway
            .submit_transaction(script, self.config.gas_limit)
            .await
            .map_err(|e| NotesError::Submission { message: e.message })?;
        debug!(transaction_id = %id, "transaction accepted, awaiting seal");
        self.wait_for_seal(id).await
    }

    async fn wait_for_seal(&self, id: TransactionId) -> NotesResult<()> {
        let gateway = Arc::clone(&self.gateway);
        let handle = tokio::task::spawn_blocking(move || gateway.await_sealed(&id));
        let sealed = match handle.await {
            Ok(result) => result.map_err(|e| NotesError::Submission { message: e.message })?,
            Err(join_error) => {
                return Err(NotesError::Submission {
                    message: join_error.to_string(),
                })
            }
        };
        if sealed.is_success() {
            Ok(())
        } else {
            Err(NotesError::Execution {
                message: sealed.error_message,
            })
        }
    }

    /// Query, decode, and replace the collection. Assumes state is already
    /// in flight; used both by `refresh` and as the post-seal continuation
    /// of mutating operations.
    async fn run_refresh(&self, identity: &Identity) {
        let script = payloads::all_notes_query(&self.config, &identity.address);
        match self.gateway.execute_query(script).await {
            Ok(value) => {
                let notes = decoder::decode_notes(&value);
                debug!(
                    count = notes.as_ref().map(Vec::len),
                    "note collection refreshed"
                );
                self.set_notes(notes);
                self.set_state(OperationState::Idle);
            }
            Err(e) => self.fail(NotesError::Query { message: e.message }),
        }
    }
}

#[async_trait]
impl<G> NotepadApi for NotepadService<G>
where
    G: LedgerGateway + 'static,
{
    async fn refresh(&self) {
        let Some(identity) = self.signed_in() else {
            return;
        };
        if !self.begin() {
            return;
        }
        self.run_refresh(&identity).await;
    }

    async fn create_note(&self, title: &str, body: &str) {
        let Some(identity) = self.signed_in() else {
            return;
        };
        if !self.begin() {
            return;
        }
        let script = payloads::create_note_transaction(&self.config, title, body);
        match self.submit_and_seal(script).await {
            Ok(()) => self.run_refresh(&identity).await,
            Err(error) => self.fail(error),
        }
    }

    async fn delete_note(&self, id: u64) {
        let Some(identity) = self.signed_in() else {
            return;
        };
        let known = self
            .notes_tx
            .borrow()
            .as_ref()
            .is_some_and(|notes| notes.iter().any(|note| note.id == id));
        if !known {
            debug!(note_id = id, "delete ignored: id not in loaded collection");
            return;
        }
        if !self.begin() {
            return;
        }
        let script = payloads::delete_note_transaction(&self.config, id);
        match self.submit_and_seal(script).await {
            Ok(()) => self.run_refresh(&identity).await,
            Err(error) => self.fail(error),
        }
    }

    async fn delete_notepad(&self) {
        if self.signed_in().is_none() {
            return;
        }
        if !self.begin() {
            return;
        }
        let script = payloads::delete_notepad_transaction(&self.config);
        match self.submit_and_seal(script).await {
            Ok(()) => {
                // The resource is gone; clear locally instead of re-querying.
                self.set_notes(None);
                self.set_state(OperationState::Idle);
            }
            Err(error) => self.fail(error),
        }
    }

    fn acknowledge_error(&self) {
        self.state_tx.send_if_modified(|state| {
            if !state.is_failed() {
                return false;
            }
            *state = OperationState::Idle;
            true
        });
    }

    async fn authenticate(&self) {
        match self.gateway.authenticate().await {
            Ok(identity) => info!(address = %identity.address, "signed in"),
            Err(error) => warn!(%error, "authentication failed"),
        }
    }

    fn sign_out(&self) {
        self.gateway.sign_out();
    }

    fn state(&self) -> OperationState {
        self.state_tx.borrow().clone()
    }

    fn notes(&self) -> Option<Vec<Note>> {
        self.notes_tx.borrow().clone()
    }
}
