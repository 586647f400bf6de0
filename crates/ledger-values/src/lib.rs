//! # ledger-values
//!
//! The dynamically-typed value tree that ledger queries return.
//!
//! ## Overview
//!
//! Query results come back from the access node as a generic tree of tagged
//! values: scalars, optionals, arrays, and structs with named fields. The
//! tree is only loosely typed, so every consumer states the shape it expects
//! through the fallible accessors on [`LedgerValue`] and handles a mismatch
//! explicitly. None of the accessors panic; a shape mismatch is always
//! observable as `None`.
//!
//! ```rust
//! use ledger_values::LedgerValue;
//!
//! let value = LedgerValue::Array(vec![LedgerValue::UInt64(7)]);
//! let items = value.as_array().unwrap();
//! assert_eq!(items[0].as_u64(), Some(7));
//! assert_eq!(items[0].as_string(), None);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use serde::{Deserialize, Serialize};

/// A single value in a ledger query result.
///
/// Optionals are modeled explicitly: `Optional(None)` is an absent value the
/// ledger returned on purpose and is distinct from a missing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerValue {
    /// Unsigned 64-bit integer.
    UInt64(u64),
    /// Signed 64-bit integer.
    Int64(i64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    String(String),
    /// Account address, hex-encoded without a `0x` prefix.
    Address(String),
    /// Optional wrapper; `None` means the ledger returned nil.
    Optional(Option<Box<LedgerValue>>),
    /// Ordered array of values.
    Array(Vec<LedgerValue>),
    /// Composite value with named, ordered fields.
    Struct(StructValue),
}

/// A composite value: qualified type identifier plus ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructValue {
    /// Fully-qualified type identifier as reported by the ledger.
    pub id: String,
    /// Fields in declaration order.
    pub fields: Vec<StructField>,
}

/// A named field inside a [`StructValue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructField {
    /// Field name.
    pub name: String,
    /// Field value.
    pub value: LedgerValue,
}

impl StructValue {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&LedgerValue> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.value)
    }

    /// Look up a field by declaration position.
    pub fn field_at(&self, index: usize) -> Option<&LedgerValue> {
        self.fields.get(index).map(|f| &f.value)
    }
}

impl LedgerValue {
    /// Interpret as an unsigned 64-bit integer.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UInt64(n) => Some(*n),
            _ => None,
        }
    }

    /// Interpret as a signed 64-bit integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(n) => Some(*n),
            _ => None,
        }
    }

    /// Interpret as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Interpret as a string slice.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Interpret as an account address.
    pub fn as_address(&self) -> Option<&str> {
        match self {
            Self::Address(a) => Some(a.as_str()),
            _ => None,
        }
    }

    /// Interpret as an optional, exposing presence and the inner value.
    ///
    /// Returns `None` when the value is not an optional at all;
    /// `Some(None)` when it is an absent optional.
    pub fn as_optional(&self) -> Option<Option<&LedgerValue>> {
        match self {
            Self::Optional(inner) => Some(inner.as_deref()),
            _ => None,
        }
    }

    /// Interpret as an array.
    pub fn as_array(&self) -> Option<&[LedgerValue]> {
        match self {
            Self::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Interpret as a struct.
    pub fn as_struct(&self) -> Option<&StructValue> {
        match self {
            Self::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Wrap a value in a present optional.
    pub fn some(value: LedgerValue) -> Self {
        Self::Optional(Some(Box::new(value)))
    }

    /// An absent optional.
    pub fn none() -> Self {
        Self::Optional(None)
    }
}
