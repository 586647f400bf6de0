//! Decoding of ledger query results into notes
//!
//! The enumerate-all-notes query returns `Optional<Array<Struct>>`: nil when
//! the account has no published notepad, otherwise an array of note structs
//! with fields ordered `[id, title, body]`.
//!
//! Decoding is deliberately lenient at the element level: a malformed record
//! is skipped, never allowed to blank out the rest of the notepad. Shape
//! mismatches at the root decode to an absent collection. Nothing in here
//! panics on malformed input.

use crate::domain::Note;
use ledger_values::LedgerValue;
use tracing::debug;

/// Decode a query result into the note collection.
///
/// Returns `None` when the root optional is absent (no notepad provisioned)
/// or the root is not the expected shape; otherwise `Some` with every
/// well-formed note, in the order the ledger returned them.
pub fn decode_notes(root: &LedgerValue) -> Option<Vec<Note>> {
    let inner = match root.as_optional() {
        Some(Some(inner)) => inner,
        // Absent optional: the account has no published notepad yet.
        Some(None) => return None,
        None => {
            debug!(?root, "query result root is not an optional");
            return None;
        }
    };

    let items = inner.as_array()?;

    let notes: Vec<Note> = items.iter().filter_map(decode_note).collect();
    if notes.len() != items.len() {
        debug!(
            skipped = items.len() - notes.len(),
            "skipped malformed note records"
        );
    }
    Some(notes)
}

/// Decode a single note struct; `None` skips the record.
fn decode_note(value: &LedgerValue) -> Option<Note> {
    let fields = value.as_struct()?;
    let id = fields.field_at(0)?.as_u64()?;
    let title = fields.field_at(1)?.as_string()?;
    let body = fields.field_at(2)?.as_string()?;
    Some(Note::new(id, title, body))
}
