//! Pull-based byte input for the decoders.
//!
//! [`ByteSource`] is the only thing a decoder needs from its input: one byte
//! at a time, or "as many of the next N bytes as exist". It is implemented for
//! every [`BufRead`], so `StdinLock`, `BufReader<File>` and `Cursor<&[u8]>` all
//! work directly.
//!
//! [`read_unit`] is the shared fixed-width read. It reports a short read
//! separately from an empty one so each decoder can decide what truncation
//! means in its own context.

use crate::error::Result;
use std::io::{self, BufRead};

/// A buffered, pull-based source of bytes.
pub trait ByteSource {
    /// Read one byte, or `None` at end of stream.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Fill `buf` from the source, stopping early only at end of stream.
    ///
    /// Returns the number of bytes written to the front of `buf`.
    fn read_up_to(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

impl<R: BufRead + ?Sized> ByteSource for R {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.fill_buf() {
                Ok([]) => return Ok(None),
                Ok(available) => {
                    let byte = available[0];
                    self.consume(1);
                    return Ok(Some(byte));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn read_up_to(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

/// Outcome of a fixed-width read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill<const N: usize> {
    /// All `N` bytes were read.
    Full([u8; N]),
    /// The source was already exhausted; nothing was read.
    Empty,
    /// The source ran out after `len` bytes (`0 < len < N`).
    Partial {
        /// The bytes that were read; only the first `len` are meaningful.
        bytes: [u8; N],
        /// Number of bytes actually read.
        len: usize,
    },
}

/// Read exactly `N` bytes from `source`, classifying a short read.
pub fn read_unit<const N: usize, S: ByteSource + ?Sized>(source: &mut S) -> Result<Fill<N>> {
    let mut bytes = [0u8; N];
    let len = source.read_up_to(&mut bytes)?;
    Ok(match len {
        0 => Fill::Empty,
        n if n == N => Fill::Full(bytes),
        len => Fill::Partial { bytes, len },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UsdError;
    use std::io::{BufReader, Cursor, Read};

    /// Hands out one byte per `read` call and interrupts every other call.
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        interrupt: bool,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "again"));
            }
            if self.pos >= self.data.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.data[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    #[test]
    fn test_read_byte() {
        let mut source = Cursor::new(vec![0x41, 0x42]);
        assert_eq!(source.read_byte().unwrap(), Some(0x41));
        assert_eq!(source.read_byte().unwrap(), Some(0x42));
        assert_eq!(source.read_byte().unwrap(), None);
        assert_eq!(source.read_byte().unwrap(), None);
    }

    #[test]
    fn test_read_unit_full_empty_partial() {
        let mut source = Cursor::new(vec![1, 2, 3, 4, 5]);
        assert_eq!(read_unit::<4, _>(&mut source).unwrap(), Fill::Full([1, 2, 3, 4]));
        assert_eq!(
            read_unit::<4, _>(&mut source).unwrap(),
            Fill::Partial {
                bytes: [5, 0, 0, 0],
                len: 1
            }
        );
        assert_eq!(read_unit::<4, _>(&mut source).unwrap(), Fill::Empty);
    }

    #[test]
    fn test_short_reads_are_accumulated() {
        let trickle = Trickle {
            data: vec![0xAA, 0xBB, 0xCC],
            pos: 0,
            interrupt: false,
        };
        let mut source = BufReader::with_capacity(1, trickle);
        assert_eq!(read_unit::<2, _>(&mut source).unwrap(), Fill::Full([0xAA, 0xBB]));
        assert_eq!(source.read_byte().unwrap(), Some(0xCC));
        assert_eq!(source.read_byte().unwrap(), None);
    }

    #[test]
    fn test_io_error_propagates() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("general I/O error"))
            }
        }

        let mut source = BufReader::new(Broken);
        assert!(source.read_byte().is_err());
        let err = read_unit::<2, _>(&mut source).unwrap_err();
        assert!(matches!(err, UsdError::Io(_)));
    }
}
