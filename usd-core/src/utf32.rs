//! UTF-32 character decoder.
//!
//! The four bytes are reassembled and returned unchanged. Values above
//! `U+10FFFF` and values in the surrogate range are not rejected; callers
//! that care should check [`CodePoint::is_scalar_value`].
//!
//! [`CodePoint::is_scalar_value`]: crate::CodePoint::is_scalar_value

use crate::byte_order::ByteOrder;
use crate::codepoint::Decoded;
use crate::error::{Result, UsdError};
use crate::source::{ByteSource, Fill, read_unit};

/// Decode one UTF-32 unit from `source`.
///
/// Returns `Ok(None)` when the source is exhausted before the first byte.
///
/// # Errors
///
/// - [`UsdError::UnexpectedEof`] when one to three bytes remain.
/// - [`UsdError::Io`] when the source fails.
pub fn decode_utf32<S: ByteSource + ?Sized>(
    order: ByteOrder,
    source: &mut S,
) -> Result<Option<Decoded>> {
    match read_unit::<4, _>(source)? {
        Fill::Full(bytes) => Ok(Some(Decoded::new(order.u32_from(bytes), &bytes))),
        Fill::Empty => Ok(None),
        Fill::Partial { len, .. } => {
            log::trace!("utf-32: stream ends {} bytes into a unit", len);
            Err(UsdError::unexpected_eof(4 - len))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_out_of_range_value_is_kept() {
        let mut source = Cursor::new(vec![0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0xD8, 0x00]);
        let decoded = decode_utf32(ByteOrder::Big, &mut source).unwrap().unwrap();
        assert_eq!(decoded.code_point.value(), 0xFFFF_FFFF);
        assert!(!decoded.code_point.is_scalar_value());

        let decoded = decode_utf32(ByteOrder::Big, &mut source).unwrap().unwrap();
        assert_eq!(decoded.code_point.value(), 0xD800);
    }

    #[test]
    fn test_missing_bytes_reported() {
        let mut source = Cursor::new(vec![0x00]);
        let err = decode_utf32(ByteOrder::Little, &mut source).unwrap_err();
        assert!(matches!(err, UsdError::UnexpectedEof { expected: 3 }));
    }
}
