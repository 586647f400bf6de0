//! Payload templates for ledger transactions and queries
//!
//! The ledger executes programs written in its own contract language; the
//! core treats those programs as opaque strings. Each builder interpolates
//! its parameters into a fixed template and guarantees only that the result
//! is syntactically safe for valid inputs. User-provided strings are escaped
//! before interpolation so a title like `"; panic("` cannot break out of its
//! string literal.

use crate::config::NotepadConfig;
use std::fmt;

/// Program text for a mutating transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionScript(String);

impl TransactionScript {
    /// The script text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Program text for a read-only query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryScript(String);

impl QueryScript {
    /// The script text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape a user-provided string for interpolation into a script string
/// literal.
pub fn escape_string(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\0' => escaped.push_str("\\0"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Normalize an account address to `0x`-prefixed form.
fn prefixed_address(address: &str) -> String {
    if let Some(stripped) = address.strip_prefix("0x") {
        format!("0x{stripped}")
    } else {
        format!("0x{address}")
    }
}

/// Transaction: ensure the notepad resource exists, then append a note.
///
/// Provisioning is idempotent and happens inside the same transaction as the
/// append, so the check-then-create needs no client-side coordination. When
/// the resource is created it is also published under the public path so
/// read-only queries can reach it.
pub fn create_note_transaction(config: &NotepadConfig, title: &str, body: &str) -> TransactionScript {
    let title = escape_string(title);
    let body = escape_string(body);
    TransactionScript(format!(
        r#"import NotepadManagerV1 from {contract}

transaction {{
    prepare(acct: AuthAccount) {{
        var notepad = acct.borrow<&NotepadManagerV1.Notepad>(from: /storage/{storage})

        if notepad == nil {{ // Create it and make it public
            acct.save(<- NotepadManagerV1.createNotepad(), to: /storage/{storage})
            acct.link<&NotepadManagerV1.Notepad>(/public/{public}, target: /storage/{storage})
        }}

        var theNotepad = acct.borrow<&NotepadManagerV1.Notepad>(from: /storage/{storage})
        theNotepad?.addNote(title: "{title}", body: "{body}")
    }}
}}
"#,
        contract = config.contract_address,
        storage = config.storage_path,
        public = config.public_path,
    ))
}

/// Transaction: delete one note by its ledger-assigned id.
pub fn delete_note_transaction(config: &NotepadConfig, note_id: u64) -> TransactionScript {
    TransactionScript(format!(
        r#"import NotepadManagerV1 from {contract}

transaction {{
    prepare(acct: AuthAccount) {{
        let notepad = acct.borrow<&NotepadManagerV1.Notepad>(from: /storage/{storage})
        notepad?.deleteNote(noteID: {note_id})
    }}
}}
"#,
        contract = config.contract_address,
        storage = config.storage_path,
    ))
}

/// Transaction: destroy the whole notepad resource.
pub fn delete_notepad_transaction(config: &NotepadConfig) -> TransactionScript {
    TransactionScript(format!(
        r#"import NotepadManagerV1 from {contract}

transaction {{
    prepare(acct: AuthAccount) {{
        var notepad <- acct.load<@NotepadManagerV1.Notepad>(from: /storage/{storage})!
        NotepadManagerV1.deleteNotepad(notepad: <- notepad)
    }}
}}
"#,
        contract = config.contract_address,
        storage = config.storage_path,
    ))
}

/// Query: enumerate every note in an account's published notepad.
///
/// Resolves the public capability of the target account; when the capability
/// or resource is unavailable the script returns nil, which decodes to an
/// absent collection. Never mutates ledger state.
pub fn all_notes_query(config: &NotepadConfig, account_address: &str) -> QueryScript {
    QueryScript(format!(
        r#"import NotepadManagerV1 from {contract}

pub fun main(): [NotepadManagerV1.NoteDTO]? {{
    let notepadAccount = getAccount({account})

    let notepadCapability = notepadAccount.getCapability<&NotepadManagerV1.Notepad>(/public/{public})

    let notepadReference = notepadCapability.borrow()

    return notepadReference == nil ? nil : notepadReference?.allNotes()
}}
"#,
        contract = config.contract_address,
        account = prefixed_address(account_address),
        public = config.public_path,
    ))
}
