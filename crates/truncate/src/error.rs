//! Truncation Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A truncation error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for truncation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be parsed into a navigable document tree.
    #[display("malformed HTML")]
    MalformedHtml(#[error(not(source))] String),
    /// A truncation unit string did not name a known counting strategy.
    #[display("unknown truncation unit: {_0}")]
    UnknownUnit(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // The input is either parseable or it's not.
        false
    }
}
