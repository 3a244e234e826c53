//! Table encoders for dump output.
//!
//! Every encoder buffers the header and rows it is given and writes them all
//! on [`TableEncoder::render`].

pub mod csv;
pub mod json;
pub mod pretty;
pub mod tsv;

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

pub use self::csv::CsvTableEncoder;
pub use json::JsonTableEncoder;
pub use pretty::PrettyTableEncoder;
pub use tsv::TsvTableEncoder;

/// Column titles of the dump table.
pub const HEADER: [&str; 4] = ["Character", "Code Point", "Name", "Hex"];

/// One row of the dump table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Display glyph.
    pub character: String,
    /// Code point in `U+XXXX` form.
    pub code_point: String,
    /// Unicode character name.
    pub name: String,
    /// Byte run as `0xNN` tokens.
    pub hex: String,
}

impl Row {
    /// The four fields in column order.
    pub fn fields(&self) -> [&str; 4] {
        [&self.character, &self.code_point, &self.name, &self.hex]
    }
}

/// A sink for table rows.
pub trait TableEncoder {
    /// Set the header row. Without a call to this, no header is written.
    fn set_header(&mut self, header: [&str; 4]);

    /// Append a row.
    fn append(&mut self, row: Row);

    /// Write the header and all rows, then flush.
    fn render(&mut self) -> io::Result<()>;
}

/// Output file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FileType {
    /// Bordered table for terminals
    #[default]
    None,
    /// Comma separated values
    Csv,
    /// Tab separated values
    Tsv,
    /// JSON array of objects
    Json,
}

impl FileType {
    /// Create the encoder for this file type writing to `writer`.
    pub fn encoder<'a, W: Write + 'a>(self, writer: W) -> Box<dyn TableEncoder + 'a> {
        match self {
            Self::None => Box::new(PrettyTableEncoder::new(writer)),
            Self::Csv => Box::new(CsvTableEncoder::new(writer)),
            Self::Tsv => Box::new(TsvTableEncoder::new(writer)),
            Self::Json => Box::new(JsonTableEncoder::new(writer)),
        }
    }
}

/// Build a row from string slices. Test helper shared by the encoders.
#[cfg(test)]
pub(crate) fn row(fields: [&str; 4]) -> Row {
    Row {
        character: fields[0].to_string(),
        code_point: fields[1].to_string(),
        name: fields[2].to_string(),
        hex: fields[3].to_string(),
    }
}
