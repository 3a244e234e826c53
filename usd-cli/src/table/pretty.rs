//! Bordered table for terminal output.
//!
//! ```text
//! +-----------+------------+------------------------+------+
//! | CHARACTER | CODE POINT |          NAME          | HEX  |
//! +-----------+------------+------------------------+------+
//! | A         | U+0041     | LATIN CAPITAL LETTER A | 0x41 |
//! +-----------+------------+------------------------+------+
//! ```
//!
//! Column widths are measured in terminal cells, so wide glyphs stay aligned.

use super::{Row, TableEncoder};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Encoder for the bordered table format.
pub struct PrettyTableEncoder<W: Write> {
    writer: W,
    header: Option<[String; 4]>,
    rows: Vec<Row>,
}

impl<W: Write> PrettyTableEncoder<W> {
    /// Create a new encoder writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header: None,
            rows: Vec::new(),
        }
    }

    fn column_widths(&self) -> [usize; 4] {
        let mut widths = [0usize; 4];
        let header = self.header.iter().map(|h| h.each_ref().map(String::as_str));
        for fields in header.chain(self.rows.iter().map(Row::fields)) {
            for (width, field) in widths.iter_mut().zip(fields) {
                *width = (*width).max(field.width());
            }
        }
        widths
    }

    fn write_border(&mut self, widths: &[usize; 4]) -> io::Result<()> {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        writeln!(self.writer, "{}", line)
    }

    fn write_line(&mut self, fields: [&str; 4], widths: &[usize; 4], center: bool) -> io::Result<()> {
        let mut line = String::from("|");
        for (field, width) in fields.iter().zip(widths) {
            let pad = width - field.width();
            let (left, right) = if center {
                (pad / 2, pad - pad / 2)
            } else {
                (0, pad)
            };
            line.push(' ');
            line.push_str(&" ".repeat(left));
            line.push_str(field);
            line.push_str(&" ".repeat(right));
            line.push_str(" |");
        }
        writeln!(self.writer, "{}", line)
    }
}

impl<W: Write> TableEncoder for PrettyTableEncoder<W> {
    fn set_header(&mut self, header: [&str; 4]) {
        self.header = Some(header.map(str::to_uppercase));
    }

    fn append(&mut self, row: Row) {
        self.rows.push(row);
    }

    fn render(&mut self) -> io::Result<()> {
        if self.header.is_none() && self.rows.is_empty() {
            return self.writer.flush();
        }

        let widths = self.column_widths();
        self.write_border(&widths)?;

        if let Some(header) = self.header.take() {
            self.write_line(header.each_ref().map(String::as_str), &widths, true)?;
            self.write_border(&widths)?;
            self.header = Some(header);
        }

        let rows = std::mem::take(&mut self.rows);
        for row in &rows {
            self.write_line(row.fields(), &widths, false)?;
        }
        if !rows.is_empty() {
            self.write_border(&widths)?;
        }
        self.rows = rows;

        self.writer.flush()
    }
}
