//! TSV output: fields joined by tabs, one row per line, no quoting.

use super::{Row, TableEncoder};
use std::io::{self, Write};

/// Encoder for tab separated values.
pub struct TsvTableEncoder<W: Write> {
    writer: W,
    header: Option<[String; 4]>,
    rows: Vec<Row>,
}

impl<W: Write> TsvTableEncoder<W> {
    /// Create a new encoder writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header: None,
            rows: Vec::new(),
        }
    }
}

impl<W: Write> TableEncoder for TsvTableEncoder<W> {
    fn set_header(&mut self, header: [&str; 4]) {
        self.header = Some(header.map(str::to_string));
    }

    fn append(&mut self, row: Row) {
        self.rows.push(row);
    }

    fn render(&mut self) -> io::Result<()> {
        if let Some(header) = &self.header {
            writeln!(self.writer, "{}", header.join("\t"))?;
        }
        for row in &self.rows {
            writeln!(self.writer, "{}", row.fields().join("\t"))?;
        }
        self.writer.flush()
    }
}
