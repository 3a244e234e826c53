//! CSV output (RFC 4180 quoting).

use super::{Row, TableEncoder};
use std::io::{self, Write};

/// Encoder for comma separated values.
pub struct CsvTableEncoder<W: Write> {
    writer: W,
    header: Option<[String; 4]>,
    rows: Vec<Row>,
}

impl<W: Write> CsvTableEncoder<W> {
    /// Create a new encoder writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header: None,
            rows: Vec::new(),
        }
    }
}

impl<W: Write> TableEncoder for CsvTableEncoder<W> {
    fn set_header(&mut self, header: [&str; 4]) {
        self.header = Some(header.map(str::to_string));
    }

    fn append(&mut self, row: Row) {
        self.rows.push(row);
    }

    fn render(&mut self) -> io::Result<()> {
        let mut csv = ::csv::Writer::from_writer(&mut self.writer);
        if let Some(header) = &self.header {
            csv.write_record(header)?;
        }
        for row in &self.rows {
            csv.write_record(row.fields())?;
        }
        csv.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{HEADER, row};

    #[test]
    fn test_render() {
        let mut out = Vec::new();
        let mut encoder = CsvTableEncoder::new(&mut out);
        encoder.set_header(HEADER);
        encoder.append(row(["A", "U+0041", "LATIN CAPITAL LETTER A", "0x41"]));
        encoder.append(row(["🛀", "U+1F6C0", "BATH", "0xF0 0x9F 0x9B 0x80"]));
        encoder.render().unwrap();
        drop(encoder);

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Character,Code Point,Name,Hex\n\
             A,U+0041,LATIN CAPITAL LETTER A,0x41\n\
             🛀,U+1F6C0,BATH,0xF0 0x9F 0x9B 0x80\n"
        );
    }

    #[test]
    fn test_quoting() {
        let mut out = Vec::new();
        let mut encoder = CsvTableEncoder::new(&mut out);
        encoder.append(row([",", "U+002C", "COMMA", "0x2C"]));
        encoder.append(row(["\"", "U+0022", "QUOTATION MARK", "0x22"]));
        encoder.render().unwrap();
        drop(encoder);

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\",\",U+002C,COMMA,0x2C\n\"\"\"\",U+0022,QUOTATION MARK,0x22\n"
        );
    }
}
