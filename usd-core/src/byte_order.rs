//! Byte order for multi-byte code units.

use crate::error::{Result, UsdError};
use std::fmt;
use std::str::FromStr;

/// Byte order used to reassemble UTF-16 and UTF-32 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Most significant byte first.
    #[default]
    Big,
    /// Least significant byte first.
    Little,
}

impl ByteOrder {
    /// Reassemble a 16-bit unit.
    #[inline]
    pub fn u16_from(self, bytes: [u8; 2]) -> u16 {
        match self {
            Self::Big => u16::from_be_bytes(bytes),
            Self::Little => u16::from_le_bytes(bytes),
        }
    }

    /// Reassemble a 32-bit unit.
    #[inline]
    pub fn u32_from(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::Big => u32::from_be_bytes(bytes),
            Self::Little => u32::from_le_bytes(bytes),
        }
    }

    /// Split a 16-bit unit into bytes.
    #[inline]
    pub fn u16_to(self, unit: u16) -> [u8; 2] {
        match self {
            Self::Big => unit.to_be_bytes(),
            Self::Little => unit.to_le_bytes(),
        }
    }

    /// Split a 32-bit unit into bytes.
    #[inline]
    pub fn u32_to(self, unit: u32) -> [u8; 4] {
        match self {
            Self::Big => unit.to_be_bytes(),
            Self::Little => unit.to_le_bytes(),
        }
    }

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Big => "Big",
            Self::Little => "Little",
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ByteOrder {
    type Err = UsdError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "big" | "be" => Ok(Self::Big),
            "little" | "le" => Ok(Self::Little),
            _ => Err(UsdError::unknown_byte_order(s)),
        }
    }
}

impl TryFrom<u8> for ByteOrder {
    type Error = UsdError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Big),
            1 => Ok(Self::Little),
            other => Err(UsdError::unknown_byte_order(other.to_string())),
        }
    }
}
