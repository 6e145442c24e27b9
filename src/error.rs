//! Error types for the huffpack library.

use thiserror::Error;

/// Result type alias for huffpack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while compressing or decompressing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A non-empty input was required (e.g. building a tree from an empty table).
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),
    /// Container bytes are malformed: truncated, inconsistent, or tampered.
    #[error("Format error: {0}")]
    Format(String),
    /// A byte being packed has no code in the code table.
    #[error("Byte {0:#04x} has no code in the code table")]
    UnknownSymbol(u8),
    /// A byte value occurs more often than the container's frequency field can hold.
    #[error("Byte {symbol:#04x} occurs {count} times, more than the container can record")]
    InputTooLarge {
        /// The byte value whose count overflowed.
        symbol: u8,
        /// Its occurrence count.
        count: u64,
    },
}

impl Error {
    pub(crate) fn format(msg: impl Into<String>) -> Self {
        Error::Format(msg.into())
    }
}
