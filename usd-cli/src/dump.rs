//! The dump loop: decode characters one at a time and append a row for each.

use crate::display::{CharNames, to_row};
use crate::table::TableEncoder;
use thiserror::Error;
use usd_core::{ByteSource, Encoding, UsdError};

/// A decode failure, with the position of the character that failed.
#[derive(Debug, Error)]
#[error("{source} (character {index}, byte offset {offset})")]
pub struct DumpError {
    /// Zero-based index of the character that could not be decoded.
    pub index: usize,
    /// Byte offset where that character starts.
    pub offset: u64,
    /// The underlying decode error.
    pub source: UsdError,
}

/// Totals of a completed dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DumpSummary {
    /// Number of characters decoded.
    pub characters: usize,
    /// Number of bytes consumed.
    pub bytes: u64,
}

/// Decode `source` to its end, appending one row per character to `table`.
///
/// Stops at the first decode error. Rows appended before the error stay in
/// `table`; rendering is left to the caller.
pub fn dump<S: ByteSource>(
    encoding: Encoding,
    mut source: S,
    names: &dyn CharNames,
    table: &mut dyn TableEncoder,
) -> Result<DumpSummary, DumpError> {
    let mut summary = DumpSummary::default();

    loop {
        let decoded = match encoding.decode(&mut source) {
            Ok(Some(decoded)) => decoded,
            Ok(None) => break,
            Err(error) => {
                log::debug!(
                    "{}: stopped after {} characters ({} bytes)",
                    encoding,
                    summary.characters,
                    summary.bytes
                );
                return Err(DumpError {
                    index: summary.characters,
                    offset: summary.bytes,
                    source: error,
                });
            }
        };

        log::trace!("{} {}", decoded.code_point, decoded.bytes);
        summary.characters += 1;
        summary.bytes += decoded.bytes.len() as u64;
        table.append(to_row(&decoded, names));
    }

    log::debug!(
        "{}: {} characters decoded ({} bytes)",
        encoding,
        summary.characters,
        summary.bytes
    );
    Ok(summary)
}
