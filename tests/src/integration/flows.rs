//! # Integration Test Flows
//!
//! Exercises the whole stack against the in-memory ledger: payload
//! formation in notepad-core, script recognition and execution in the
//! harness, value-tree construction in ledger-values, and decoding back
//! into the controller's observable collection.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::harness::InMemoryLedger;
    use notepad_core::{
        LedgerGateway, Note, NotepadApi, NotepadConfig, NotepadService, OperationState,
    };

    fn service_over(ledger: InMemoryLedger) -> (NotepadService<InMemoryLedger>, Arc<InMemoryLedger>) {
        let ledger = Arc::new(ledger);
        (
            NotepadService::new(NotepadConfig::default(), Arc::clone(&ledger)),
            ledger,
        )
    }

    // =========================================================================
    // FULL LIFECYCLE CHOREOGRAPHY
    // =========================================================================

    /// First create provisions the notepad, later ones only append; delete
    /// removes by id; destroying the notepad returns the account to the
    /// unprovisioned state.
    #[tokio::test]
    async fn test_full_notepad_lifecycle() {
        let (service, ledger) = service_over(InMemoryLedger::signed_in("f8d6e0586b0a20c7"));

        // Nothing provisioned yet: refresh observes an absent notepad.
        service.refresh().await;
        assert_eq!(service.state(), OperationState::Idle);
        assert_eq!(service.notes(), None);

        // First create provisions and appends; re-query happens automatically.
        service.create_note("groceries", "milk, eggs").await;
        assert!(ledger.notepad_exists());
        assert_eq!(
            service.notes(),
            Some(vec![Note::new(0, "groceries", "milk, eggs")])
        );

        // Second create appends to the existing notepad.
        service.create_note("chores", "laundry").await;
        assert_eq!(
            service.notes(),
            Some(vec![
                Note::new(0, "groceries", "milk, eggs"),
                Note::new(1, "chores", "laundry"),
            ])
        );

        // Delete by id removes exactly that note.
        service.delete_note(0).await;
        assert_eq!(service.notes(), Some(vec![Note::new(1, "chores", "laundry")]));

        // Destroying the notepad clears everything, no re-query.
        service.delete_notepad().await;
        assert!(!ledger.notepad_exists());
        assert_eq!(service.notes(), None);
        assert_eq!(service.state(), OperationState::Idle);
    }

    /// An empty-but-provisioned notepad is observable as an empty
    /// collection, distinct from the unprovisioned `None`.
    #[tokio::test]
    async fn test_empty_notepad_is_distinct_from_absent() {
        let (service, _ledger) = service_over(InMemoryLedger::signed_in("f8d6e0586b0a20c7"));

        service.create_note("only", "note").await;
        service.delete_note(0).await;

        assert_eq!(service.notes(), Some(vec![]));
        assert_eq!(service.state(), OperationState::Idle);
    }

    /// Titles and bodies with quotes, backslashes, and newlines survive the
    /// script interpolation round trip.
    #[tokio::test]
    async fn test_special_characters_round_trip_through_scripts() {
        let (service, _ledger) = service_over(InMemoryLedger::signed_in("f8d6e0586b0a20c7"));

        let title = "say \"hi\"";
        let body = "line one\nline\\two\ttabbed";
        service.create_note(title, body).await;

        assert_eq!(service.state(), OperationState::Idle);
        assert_eq!(service.notes(), Some(vec![Note::new(0, title, body)]));
    }

    // =========================================================================
    // ERROR CHOREOGRAPHY
    // =========================================================================

    /// A ledger-side execution error surfaces verbatim and leaves the
    /// previously loaded collection untouched.
    #[tokio::test]
    async fn test_execution_error_preserves_collection() {
        let (service, ledger) = service_over(InMemoryLedger::signed_in("f8d6e0586b0a20c7"));

        service.create_note("keep", "me").await;
        let before = service.notes();

        ledger.inject_seal_error("insufficient storage");
        service.create_note("doomed", "note").await;

        assert_eq!(
            service.state(),
            OperationState::Failed("insufficient storage".to_string())
        );
        assert_eq!(service.notes(), before);

        // Acknowledging returns to idle and the next operation succeeds.
        service.acknowledge_error();
        assert_eq!(service.state(), OperationState::Idle);

        service.create_note("doomed", "note").await;
        assert_eq!(service.notes().map(|n| n.len()), Some(2));
    }

    /// Signing out gates every mutating operation without touching state.
    #[tokio::test]
    async fn test_sign_out_gates_mutations() {
        let (service, ledger) = service_over(InMemoryLedger::signed_in("f8d6e0586b0a20c7"));

        service.create_note("mine", "before sign-out").await;
        let before = service.notes();

        service.sign_out();
        assert!(ledger.current_identity().is_none());

        service.create_note("ignored", "no identity").await;
        service.delete_notepad().await;

        assert_eq!(service.state(), OperationState::Idle);
        assert_eq!(service.notes(), before);
        assert!(ledger.notepad_exists());
    }

    /// Authentication restores the identity and operations work again.
    #[tokio::test]
    async fn test_authenticate_restores_access() {
        let (service, _ledger) = service_over(InMemoryLedger::signed_out());

        service.create_note("ignored", "signed out").await;
        assert_eq!(service.notes(), None);

        service.authenticate().await;
        service.create_note("works", "now").await;

        assert_eq!(service.notes(), Some(vec![Note::new(0, "works", "now")]));
    }

    /// Observers see the final state and collection of each operation.
    #[tokio::test]
    async fn test_watchers_track_the_lifecycle() {
        let (service, _ledger) = service_over(InMemoryLedger::signed_in("f8d6e0586b0a20c7"));
        let mut state_rx = service.watch_state();
        let mut notes_rx = service.watch_notes();

        service.create_note("watched", "note").await;

        assert_eq!(*state_rx.borrow_and_update(), OperationState::Idle);
        assert_eq!(
            *notes_rx.borrow_and_update(),
            Some(vec![Note::new(0, "watched", "note")])
        );

        service.delete_notepad().await;
        assert_eq!(*notes_rx.borrow_and_update(), None);
    }
}
