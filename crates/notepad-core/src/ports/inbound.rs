//! Driving Ports (API - Inbound)
//!
//! The operation surface the presentation layer calls. Every operation is
//! fire-and-observe: nothing returns a value, outcomes land in the observable
//! `state` and `notes` snapshots.

use crate::domain::{Note, OperationState};
use async_trait::async_trait;

/// Primary note store API.
///
/// Mutating operations and `refresh` require a signed-in identity; invoked
/// without one they are silent no-ops. Operations issued while another is
/// in flight are ignored rather than queued.
#[async_trait]
pub trait NotepadApi: Send + Sync {
    /// Re-query the ledger and replace the note collection.
    async fn refresh(&self);

    /// Append a note, provisioning the notepad resource on first use.
    ///
    /// Sealing successfully triggers exactly one re-query.
    async fn create_note(&self, title: &str, body: &str);

    /// Delete a note by id.
    ///
    /// Ignored when `id` is not part of the currently loaded collection.
    async fn delete_note(&self, id: u64);

    /// Destroy the whole notepad resource.
    ///
    /// On success the collection is cleared without a re-query.
    async fn delete_notepad(&self);

    /// Dismiss a failed state, returning to idle. Idempotent.
    fn acknowledge_error(&self);

    /// Run the wallet authentication flow.
    async fn authenticate(&self);

    /// Discard the current session. Leaves state and notes untouched.
    fn sign_out(&self);

    /// Snapshot of the current operation state.
    fn state(&self) -> OperationState;

    /// Snapshot of the current note collection.
    ///
    /// `None` means no notepad is provisioned or nothing is loaded yet;
    /// an empty vector means the notepad exists and is empty.
    fn notes(&self) -> Option<Vec<Note>>;
}
