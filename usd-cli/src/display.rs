//! Display form of a decoded character.

use crate::table::Row;
use usd_core::{CodePoint, Decoded};

/// Character name lookup.
pub trait CharNames {
    /// Name of `code_point`, or an empty string when it has none.
    fn name(&self, code_point: CodePoint) -> String;
}

/// Names from the Unicode Character Database.
///
/// Control characters, which have no name of their own, are reported as
/// `<control>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeNames;

impl CharNames for UnicodeNames {
    fn name(&self, code_point: CodePoint) -> String {
        match code_point.to_char() {
            Some(c) if c.is_control() => "<control>".to_string(),
            Some(c) => unicode_names2::name(c)
                .map(|name| name.to_string())
                .unwrap_or_default(),
            None => String::new(),
        }
    }
}

/// Printable form of `code_point`.
///
/// Non-printable characters and the backslash are escaped the way Rust
/// debug-formats them. Quotes are left alone. Values that are not Unicode
/// scalar values show as U+FFFD.
pub fn glyph(code_point: CodePoint) -> String {
    match code_point.to_char() {
        Some(c @ ('\'' | '"')) => c.to_string(),
        Some(c) => c.escape_debug().to_string(),
        None => char::REPLACEMENT_CHARACTER.to_string(),
    }
}

/// Build the table row for one decoded character.
pub fn to_row(decoded: &Decoded, names: &dyn CharNames) -> Row {
    Row {
        character: glyph(decoded.code_point),
        code_point: decoded.code_point.to_string(),
        name: names.name(decoded.code_point),
        hex: decoded.bytes.to_string(),
    }
}
