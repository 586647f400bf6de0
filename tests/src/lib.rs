//! # Ledgerpad Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── harness.rs        # In-memory ledger emulating the notepad contract
//! └── integration/      # Cross-crate choreography flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p notepad-tests
//!
//! # By category
//! cargo test -p notepad-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;
