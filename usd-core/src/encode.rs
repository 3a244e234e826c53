//! Encoders producing the byte run a decoder would consume.
//!
//! These mirror the decoders exactly, including their permissiveness: the
//! UTF-8 and UTF-32 encoders accept any value the matching decoder can
//! produce, not just scalar values.

use crate::byte_order::ByteOrder;
use crate::codepoint::{ByteRun, CodePoint};

/// Encode `code_point` as UTF-8 using the shortest form.
///
/// Returns `None` for values above `0x1F_FFFF`, which four bytes cannot hold.
pub fn encode_utf8(code_point: CodePoint) -> Option<ByteRun> {
    let v = code_point.value();
    let mut buf = [0u8; 4];
    let len = match v {
        0..=0x7F => {
            buf[0] = v as u8;
            1
        }
        0x80..=0x7FF => {
            buf[0] = 0xC0 | (v >> 6) as u8;
            buf[1] = 0x80 | (v & 0x3F) as u8;
            2
        }
        0x800..=0xFFFF => {
            buf[0] = 0xE0 | (v >> 12) as u8;
            buf[1] = 0x80 | ((v >> 6) & 0x3F) as u8;
            buf[2] = 0x80 | (v & 0x3F) as u8;
            3
        }
        0x1_0000..=0x1F_FFFF => {
            buf[0] = 0xF0 | (v >> 18) as u8;
            buf[1] = 0x80 | ((v >> 12) & 0x3F) as u8;
            buf[2] = 0x80 | ((v >> 6) & 0x3F) as u8;
            buf[3] = 0x80 | (v & 0x3F) as u8;
            4
        }
        _ => return None,
    };
    Some(ByteRun::new(&buf[..len]))
}

/// Encode `code_point` as UTF-16, using a surrogate pair above the BMP.
///
/// Returns `None` for values above `U+10FFFF`.
pub fn encode_utf16(code_point: CodePoint, order: ByteOrder) -> Option<ByteRun> {
    let v = code_point.value();
    match v {
        0..=0xFFFF => Some(ByteRun::new(&order.u16_to(v as u16))),
        0x1_0000..=0x10_FFFF => {
            let offset = v - 0x1_0000;
            let high = order.u16_to(0xD800 | (offset >> 10) as u16);
            let low = order.u16_to(0xDC00 | (offset & 0x3FF) as u16);
            Some(ByteRun::new(&[high[0], high[1], low[0], low[1]]))
        }
        _ => None,
    }
}

/// Encode `code_point` as a UTF-32 unit.
pub fn encode_utf32(code_point: CodePoint, order: ByteOrder) -> ByteRun {
    ByteRun::new(&order.u32_to(code_point.value()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_matches_std() {
        for c in ['A', 'é', 'あ', '🛀', '\u{7FF}', '\u{FFFF}', '\u{10FFFF}'] {
            let mut buf = [0u8; 4];
            let expected = c.encode_utf8(&mut buf).as_bytes();
            assert_eq!(encode_utf8(c.into()).unwrap().as_bytes(), expected);
        }
    }

    #[test]
    fn test_utf16_matches_std() {
        for c in ['a', '\u{FEFF}', '🐧', '\u{10000}'] {
            let mut units = [0u16; 2];
            let units = c.encode_utf16(&mut units);
            let expected: Vec<u8> = units.iter().flat_map(|u| u.to_le_bytes()).collect();
            assert_eq!(
                encode_utf16(c.into(), ByteOrder::Little).unwrap().as_bytes(),
                &expected[..]
            );
        }
    }

    #[test]
    fn test_out_of_range() {
        assert!(encode_utf8(CodePoint::new(0x20_0000)).is_none());
        assert!(encode_utf16(CodePoint::new(0x11_0000), ByteOrder::Big).is_none());
        assert_eq!(
            encode_utf32(CodePoint::new(0x11_0000), ByteOrder::Big).as_bytes(),
            &[0x00, 0x11, 0x00, 0x00]
        );
    }
}
