//! The note record

use serde::{Deserialize, Serialize};

/// A single note as stored in the account's notepad resource.
///
/// Notes are immutable values. The identifier is assigned by the ledger-side
/// contract when the note is appended; the client never invents one. Outside
/// of tests, instances are only materialized by decoding a query result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Ledger-assigned identifier, unique within one notepad.
    pub id: u64,
    /// Note title.
    pub title: String,
    /// Note body.
    pub body: String,
}

impl Note {
    /// Create a note from already-decoded parts.
    pub fn new(id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}
