//! Splitter error types.

use thiserror::Error;

/// Errors from building a [`SplitterConfig`](crate::SplitterConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A configured local account is not a syntactically valid address.
    #[error("invalid local account: {account}")]
    InvalidAccount {
        /// The offending account string, whitespace-trimmed.
        account: String,
    },
}

/// Per-transaction validation failures.
///
/// These are always recovered locally: the splitter skips the offending
/// transaction together with the rest of its sender's queue and moves
/// on. They never surface as a `split` failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Gas limit outside the configured bounds.
    #[error("gas limit out of bounds: got={got}, lower_bound={lower_bound}, upper_bound={upper_bound}")]
    GasOutOfBounds {
        /// The transaction's gas limit.
        got: u64,
        /// Minimum allowed per-transaction gas limit.
        lower_bound: u64,
        /// Maximum allowed per-transaction gas limit.
        upper_bound: u64,
    },

    /// The transaction's canonical encoding alone exceeds the per-list
    /// byte limit.
    #[error("transaction too large: size={size}, limit={limit}")]
    TxTooLarge {
        /// Canonical encoded size of the transaction, in bytes.
        size: usize,
        /// Configured per-list byte limit.
        limit: u64,
    },
}
