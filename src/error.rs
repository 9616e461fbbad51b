//! Contract violations raised by the operator surface.
//!
//! Fast-path misses and threshold fallbacks are ordinary branch outcomes and
//! never show up here.

use thiserror::Error;

/// Canonical result for the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{operator}: sequence contains no elements")]
    NoElements { operator: &'static str },

    #[error("{operator}: count must be non-negative, got {count}")]
    NegativeCount { operator: &'static str, count: i64 },

    #[error("{operator}: index {index} is past the end of the sequence")]
    IndexOutOfRange { operator: &'static str, index: usize },

    #[error("configuration was already installed")]
    AlreadyConfigured,

    #[error("invalid configuration: {0}")]
    Config(String),
}
