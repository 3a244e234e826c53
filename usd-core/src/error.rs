//! Error types for usd decode operations.
//!
//! Clean end of stream is not an error: decoders report it as `Ok(None)`.
//! Everything in [`UsdError`] terminates a dump.

use std::io;
use thiserror::Error;

/// The main error type for usd operations.
#[derive(Debug, Error)]
pub enum UsdError {
    /// I/O error from the underlying byte source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The bytes read so far cannot form a character under the active encoding.
    #[error("Invalid sequence: {bytes:02X?}")]
    InvalidSequence {
        /// The offending raw bytes, in input order.
        bytes: Vec<u8>,
    },

    /// The stream ended inside a character that had already been started.
    #[error("Unexpected end of stream: expected {expected} more bytes")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },

    /// A byte order value outside {Big, Little}.
    #[error("Unknown byte order: {value}")]
    UnknownByteOrder {
        /// The rejected value, as given.
        value: String,
    },
}

/// Result type alias for usd operations.
pub type Result<T> = std::result::Result<T, UsdError>;

impl UsdError {
    /// Create an invalid sequence error.
    pub fn invalid_sequence(bytes: impl Into<Vec<u8>>) -> Self {
        Self::InvalidSequence {
            bytes: bytes.into(),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Create an unknown byte order error.
    pub fn unknown_byte_order(value: impl Into<String>) -> Self {
        Self::UnknownByteOrder {
            value: value.into(),
        }
    }

    /// Whether the error describes the input data (as opposed to the
    /// configuration or the source itself).
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSequence { .. } | Self::UnexpectedEof { .. }
        )
    }

    /// The raw bytes carried by an invalid sequence error.
    pub fn sequence(&self) -> Option<&[u8]> {
        match self {
            Self::InvalidSequence { bytes } => Some(bytes),
            _ => None,
        }
    }
}
