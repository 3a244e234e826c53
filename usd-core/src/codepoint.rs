//! Decoded character values.
//!
//! A [`Decoded`] pairs the [`CodePoint`] a decoder produced with the
//! [`ByteRun`] it consumed. Both are `Copy`; nothing refers back into the
//! source.

use std::fmt;

/// A decoded 32-bit value.
///
/// Usually a Unicode scalar value, but UTF-8 surrogate encodings and UTF-32
/// input can yield surrogates or values above `U+10FFFF`. Use
/// [`CodePoint::to_char`] to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePoint(u32);

impl CodePoint {
    /// Wrap a raw value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The raw value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The character, if the value is a Unicode scalar value.
    pub const fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    /// Whether the value is a Unicode scalar value.
    pub const fn is_scalar_value(self) -> bool {
        self.to_char().is_some()
    }
}

impl From<char> for CodePoint {
    fn from(c: char) -> Self {
        Self(c as u32)
    }
}

/// `U+XXXX` notation, at least four upper-case hex digits.
impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

/// The exact input bytes that produced one code point (1 to 4 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteRun {
    bytes: [u8; 4],
    len: u8,
}

impl ByteRun {
    /// Maximum run length of any supported encoding.
    pub const MAX_LEN: usize = 4;

    /// Copy `bytes` into a new run.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is empty or longer than [`ByteRun::MAX_LEN`].
    pub fn new(bytes: &[u8]) -> Self {
        assert!(
            !bytes.is_empty() && bytes.len() <= Self::MAX_LEN,
            "byte run must hold 1..=4 bytes, got {}",
            bytes.len()
        );
        let mut run = [0u8; 4];
        run[..bytes.len()].copy_from_slice(bytes);
        Self {
            bytes: run,
            len: bytes.len() as u8,
        }
    }

    /// The bytes of the run.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Number of bytes in the run.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false; a run holds at least one byte.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for ByteRun {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for ByteRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteRun({:02X?})", self.as_bytes())
    }
}

/// Space separated `0xNN` tokens, e.g. `0xF0 0x9F 0x9B 0x80`.
impl fmt::Display for ByteRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.as_bytes().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "0x{:02X}", byte)?;
        }
        Ok(())
    }
}

impl PartialEq<[u8]> for ByteRun {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for ByteRun {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other
    }
}

/// One successfully decoded character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded value.
    pub code_point: CodePoint,
    /// The bytes consumed to produce it.
    pub bytes: ByteRun,
}

impl Decoded {
    /// Create a new decoded character.
    pub fn new(code_point: u32, bytes: &[u8]) -> Self {
        Self {
            code_point: CodePoint::new(code_point),
            bytes: ByteRun::new(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_point_display() {
        assert_eq!(CodePoint::new(0x41).to_string(), "U+0041");
        assert_eq!(CodePoint::new(0x1F6C0).to_string(), "U+1F6C0");
        assert_eq!(CodePoint::new(0).to_string(), "U+0000");
        assert_eq!(CodePoint::new(0xFFFF_FFFF).to_string(), "U+FFFFFFFF");
    }

    #[test]
    fn test_code_point_validity() {
        assert_eq!(CodePoint::from('あ').to_char(), Some('あ'));
        assert!(!CodePoint::new(0xD800).is_scalar_value());
        assert!(!CodePoint::new(0x11_0000).is_scalar_value());
    }

    #[test]
    fn test_byte_run_display() {
        assert_eq!(ByteRun::new(&[0x41]).to_string(), "0x41");
        assert_eq!(
            ByteRun::new(&[0xF0, 0x9F, 0x9B, 0x80]).to_string(),
            "0xF0 0x9F 0x9B 0x80"
        );
        assert_eq!(format!("{:?}", ByteRun::new(&[0x0A, 0x00])), "ByteRun([0A, 00])");
    }

    #[test]
    fn test_byte_run_equality() {
        let run = ByteRun::new(&[0xFE, 0xFF]);
        assert_eq!(run.len(), 2);
        assert!(!run.is_empty());
        assert_eq!(run, [0xFE_u8, 0xFF]);
        assert_ne!(run, ByteRun::new(&[0xFE, 0xFF, 0x00]));
    }

    #[test]
    #[should_panic(expected = "byte run must hold")]
    fn test_byte_run_rejects_oversize() {
        let _ = ByteRun::new(&[0; 5]);
    }
}
