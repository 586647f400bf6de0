//! Operation state machine observed by the presentation layer
//!
//! State Machine:
//! ```text
//! [IDLE] ──operation submitted──→ [IN-FLIGHT]
//!    ↑                                 │
//!    │                                 ├── sealed ok / query ok ──→ [IDLE]
//!    │                                 │
//!    │                                 └── any error ──→ [FAILED {message}]
//!    │                                                        │
//!    └───────────────── error acknowledged ───────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Loading state of the note store.
///
/// Exactly one variant holds at any time, and only the controller writes it.
/// `Failed` persists until the user acknowledges the error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OperationState {
    /// No operation pending, no error.
    #[default]
    Idle,
    /// A query or mutation has been submitted and not yet resolved.
    InFlight,
    /// The last operation ended in error; the message is user-displayable.
    Failed(String),
}

impl OperationState {
    /// Whether an operation is currently pending.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// Whether the last operation ended in error.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The error message, when failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}
