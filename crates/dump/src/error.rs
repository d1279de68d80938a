//! Error types for rendering a [`Dump`](crate::Dump)

use std::fmt;

/// Result type for dump rendering operations
pub type DumpResult<T> = Result<T, DumpError>;

/// Errors that can occur while rendering a dump
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DumpError {
    /// `with_names` left a name list whose length differs from the number
    /// of captured expressions
    #[error("name override has {actual} names but dump! captured {expected} values")]
    NameCountMismatch {
        /// Number of expressions captured by `dump!`
        expected: usize,
        /// Number of names currently set
        actual: usize,
    },

    /// The output sink refused a write
    #[error("failed to write dump output")]
    Write(#[from] fmt::Error),
}
