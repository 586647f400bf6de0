//! Cross-crate integration flows

pub mod flows;
