//! # usd Core
//!
//! Character decoders for the usd Unicode sequence dumper.
//!
//! Each decoder consumes exactly one character from a [`ByteSource`] and
//! returns the code point together with the bytes it consumed:
//!
//! - [`decode_utf8`]
//! - [`decode_utf16`] (big or little endian)
//! - [`decode_utf32`] (big or little endian)
//!
//! The outcome of a call is one of:
//!
//! | Result                                 | Meaning                                    |
//! |----------------------------------------|--------------------------------------------|
//! | `Ok(Some(decoded))`                    | one character and its byte run             |
//! | `Ok(None)`                             | clean end of stream at a character boundary|
//! | `Err(UsdError::InvalidSequence { .. })`| bytes that cannot form a character        |
//! | `Err(UsdError::UnexpectedEof { .. })`  | stream ended inside a started character    |
//! | `Err(UsdError::Io(_))`                 | the source itself failed                   |
//!
//! Decoders keep no state between calls. [`Chars`] wraps a source and an
//! [`Encoding`] into an iterator that stops at the first error.
//!
//! ## Example
//!
//! ```rust
//! use usd_core::{ByteOrder, Encoding, decode_utf16};
//! use std::io::Cursor;
//!
//! let mut source = Cursor::new(vec![0xD8, 0x3D, 0xDC, 0x27]);
//! let decoded = decode_utf16(ByteOrder::Big, &mut source).unwrap().unwrap();
//! assert_eq!(decoded.code_point.to_string(), "U+1F427");
//! assert_eq!(decoded.bytes.to_string(), "0xD8 0x3D 0xDC 0x27");
//!
//! let chars: Vec<_> = usd_core::Chars::new(Encoding::Utf8, Cursor::new("añ".as_bytes()))
//!     .map(|c| c.unwrap().code_point.value())
//!     .collect();
//! assert_eq!(chars, vec![0x61, 0xF1]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod byte_order;
pub mod codepoint;
pub mod decoder;
pub mod encode;
pub mod error;
pub mod source;
mod utf16;
mod utf32;
mod utf8;

// Re-exports for convenience
pub use byte_order::ByteOrder;
pub use codepoint::{ByteRun, CodePoint, Decoded};
pub use decoder::{Chars, Encoding};
pub use error::{Result, UsdError};
pub use source::ByteSource;
pub use utf8::decode_utf8;
pub use utf16::decode_utf16;
pub use utf32::decode_utf32;
