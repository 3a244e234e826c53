//! UTF-8 character decoder.
//!
//! Continuation bytes are checked for the `10xxxxxx` pattern, but the decoded
//! value is not checked further: overlong forms and encoded surrogates come
//! back as whatever the bit-packing yields.

use crate::codepoint::Decoded;
use crate::error::{Result, UsdError};
use crate::source::{ByteSource, Fill, read_unit};

/// Number of continuation bytes announced by a lead byte, or `None` if the
/// byte cannot start a multi-byte sequence.
#[inline]
fn continuation_len(lead: u8) -> Option<usize> {
    if lead & 0b1110_0000 == 0b1100_0000 {
        Some(1)
    } else if lead & 0b1111_0000 == 0b1110_0000 {
        Some(2)
    } else if lead & 0b1111_1000 == 0b1111_0000 {
        Some(3)
    } else {
        None
    }
}

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

/// Payload bits of the lead byte for a sequence of `tail` continuation bytes.
#[inline]
fn lead_bits(lead: u8, tail: usize) -> u32 {
    let mask = match tail {
        1 => 0b0001_1111,
        2 => 0b0000_1111,
        _ => 0b0000_0111,
    };
    u32::from(lead & mask)
}

/// Read the `N` continuation bytes following `lead`, validate them and
/// assemble the code point.
fn decode_tail<const N: usize, S: ByteSource + ?Sized>(
    lead: u8,
    source: &mut S,
) -> Result<Decoded> {
    let tail: [u8; N] = match read_unit::<N, _>(source)? {
        Fill::Full(tail) => tail,
        Fill::Empty => return Err(UsdError::unexpected_eof(N)),
        Fill::Partial { len, .. } => return Err(UsdError::unexpected_eof(N - len)),
    };

    let mut run = [0u8; 4];
    run[0] = lead;
    run[1..=N].copy_from_slice(&tail);

    let mut code_point = lead_bits(lead, N);
    for (i, &byte) in tail.iter().enumerate() {
        if !is_continuation(byte) {
            log::trace!("utf-8: byte {:#04X} at offset {} is not a continuation", byte, i + 1);
            return Err(UsdError::invalid_sequence(&run[..=N]));
        }
        code_point = (code_point << 6) | u32::from(byte & 0b0011_1111);
    }

    Ok(Decoded::new(code_point, &run[..=N]))
}

/// Decode one UTF-8 character from `source`.
///
/// Returns `Ok(None)` when the source is exhausted before the first byte.
///
/// # Errors
///
/// - [`UsdError::InvalidSequence`] for a byte that cannot lead a sequence
///   (carrying just that byte) or a bad continuation byte (carrying the lead
///   byte and every continuation byte read).
/// - [`UsdError::UnexpectedEof`] when the stream ends after the lead byte.
/// - [`UsdError::Io`] when the source fails.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use usd_core::decode_utf8;
///
/// let mut source = Cursor::new(vec![0xF0, 0x9F, 0x9B, 0x80]);
/// let decoded = decode_utf8(&mut source).unwrap().unwrap();
/// assert_eq!(decoded.code_point.value(), 0x1F6C0);
/// assert_eq!(decoded.bytes.as_bytes(), &[0xF0, 0x9F, 0x9B, 0x80]);
/// assert!(decode_utf8(&mut source).unwrap().is_none());
/// ```
pub fn decode_utf8<S: ByteSource + ?Sized>(source: &mut S) -> Result<Option<Decoded>> {
    let Some(lead) = source.read_byte()? else {
        return Ok(None);
    };

    if lead <= 0x7F {
        return Ok(Some(Decoded::new(u32::from(lead), &[lead])));
    }

    let decoded = match continuation_len(lead) {
        Some(1) => decode_tail::<1, _>(lead, source)?,
        Some(2) => decode_tail::<2, _>(lead, source)?,
        Some(_) => decode_tail::<3, _>(lead, source)?,
        None => {
            log::trace!("utf-8: {:#04X} cannot start a sequence", lead);
            return Err(UsdError::invalid_sequence([lead]));
        }
    };
    Ok(Some(decoded))
}
