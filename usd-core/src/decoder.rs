//! Encoding selection and iteration over decoded characters.

use crate::byte_order::ByteOrder;
use crate::codepoint::Decoded;
use crate::error::Result;
use crate::source::ByteSource;
use crate::{decode_utf8, decode_utf16, decode_utf32};
use std::fmt;

/// A supported encoding, with its byte order where one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// UTF-8.
    Utf8,
    /// UTF-16 in the given byte order.
    Utf16(ByteOrder),
    /// UTF-32 in the given byte order.
    Utf32(ByteOrder),
}

impl Encoding {
    /// Decode one character from `source` with this encoding.
    ///
    /// See [`decode_utf8`], [`decode_utf16`] and [`decode_utf32`].
    pub fn decode<S: ByteSource + ?Sized>(self, source: &mut S) -> Result<Option<Decoded>> {
        match self {
            Self::Utf8 => decode_utf8(source),
            Self::Utf16(order) => decode_utf16(order, source),
            Self::Utf32(order) => decode_utf32(order, source),
        }
    }

    /// Byte order, if the encoding has one.
    pub fn byte_order(self) -> Option<ByteOrder> {
        match self {
            Self::Utf8 => None,
            Self::Utf16(order) | Self::Utf32(order) => Some(order),
        }
    }

    /// Size in bytes of one code unit.
    pub fn unit_size(self) -> usize {
        match self {
            Self::Utf8 => 1,
            Self::Utf16(_) => 2,
            Self::Utf32(_) => 4,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8 => f.write_str("UTF-8"),
            Self::Utf16(ByteOrder::Big) => f.write_str("UTF-16BE"),
            Self::Utf16(ByteOrder::Little) => f.write_str("UTF-16LE"),
            Self::Utf32(ByteOrder::Big) => f.write_str("UTF-32BE"),
            Self::Utf32(ByteOrder::Little) => f.write_str("UTF-32LE"),
        }
    }
}

/// Iterator over the characters of a source.
///
/// Yields `Ok` for each decoded character, then ends at clean end of stream.
/// After the first `Err` it yields nothing more; no attempt is made to skip
/// past a bad sequence.
#[derive(Debug)]
pub struct Chars<S> {
    encoding: Encoding,
    source: S,
    done: bool,
}

impl<S: ByteSource> Chars<S> {
    /// Create an iterator decoding `source` with `encoding`.
    pub fn new(encoding: Encoding, source: S) -> Self {
        Self {
            encoding,
            source,
            done: false,
        }
    }

    /// The encoding in use.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Consume the iterator and return the source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: ByteSource> Iterator for Chars<S> {
    type Item = Result<Decoded>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.encoding.decode(&mut self.source) {
            Ok(Some(decoded)) => Some(Ok(decoded)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<S: ByteSource> std::iter::FusedIterator for Chars<S> {}
