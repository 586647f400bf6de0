//! Domain module for the note store
//!
//! ## Core Modules
//! - note: the immutable note record
//! - operation_state: the observable loading state machine

pub mod note;
pub mod operation_state;

pub use note::Note;
pub use operation_state::OperationState;
