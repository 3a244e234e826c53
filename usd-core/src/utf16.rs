//! UTF-16 character decoder.

use crate::byte_order::ByteOrder;
use crate::codepoint::Decoded;
use crate::error::{Result, UsdError};
use crate::source::{ByteSource, Fill, read_unit};

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Combine a surrogate pair into a supplementary-plane code point.
#[inline]
fn combine_surrogates(high: u16, low: u16) -> u32 {
    0x1_0000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
}

/// Decode one UTF-16 character from `source`.
///
/// Returns `Ok(None)` when the source is exhausted before the first unit.
///
/// A stream that ends one byte into the *first* unit is an invalid sequence,
/// while one that ends inside the second unit of a surrogate pair is an
/// unexpected end of stream.
///
/// # Errors
///
/// - [`UsdError::InvalidSequence`] for a lone trailing byte, or a high
///   surrogate followed by a unit that is not a low surrogate (carrying both
///   units' bytes).
/// - [`UsdError::UnexpectedEof`] when a high surrogate is not followed by a
///   complete second unit.
/// - [`UsdError::Io`] when the source fails.
///
/// Unpaired low surrogates are returned as-is.
pub fn decode_utf16<S: ByteSource + ?Sized>(
    order: ByteOrder,
    source: &mut S,
) -> Result<Option<Decoded>> {
    let first = match read_unit::<2, _>(source)? {
        Fill::Full(bytes) => bytes,
        Fill::Empty => return Ok(None),
        Fill::Partial { bytes, len } => {
            log::trace!("utf-16: stream ends inside the first unit");
            return Err(UsdError::invalid_sequence(&bytes[..len]));
        }
    };

    let high = order.u16_from(first);
    if !HIGH_SURROGATES.contains(&high) {
        return Ok(Some(Decoded::new(u32::from(high), &first)));
    }

    let second = match read_unit::<2, _>(source)? {
        Fill::Full(bytes) => bytes,
        Fill::Empty => return Err(UsdError::unexpected_eof(2)),
        Fill::Partial { len, .. } => return Err(UsdError::unexpected_eof(2 - len)),
    };
    let run = [first[0], first[1], second[0], second[1]];

    let low = order.u16_from(second);
    if !LOW_SURROGATES.contains(&low) {
        log::trace!("utf-16: {:#06X} does not pair with {:#06X}", low, high);
        return Err(UsdError::invalid_sequence(run));
    }

    Ok(Some(Decoded::new(combine_surrogates(high, low), &run)))
}
