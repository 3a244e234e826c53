//! JSON output: an array of row objects. The header is implied by the keys.

use super::{Row, TableEncoder};
use std::io::{self, Write};

/// Encoder for a JSON array of rows.
pub struct JsonTableEncoder<W: Write> {
    writer: W,
    rows: Vec<Row>,
}

impl<W: Write> JsonTableEncoder<W> {
    /// Create a new encoder writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows: Vec::new(),
        }
    }
}

impl<W: Write> TableEncoder for JsonTableEncoder<W> {
    fn set_header(&mut self, _header: [&str; 4]) {}

    fn append(&mut self, row: Row) {
        self.rows.push(row);
    }

    fn render(&mut self) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.rows)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::row;

    #[test]
    fn test_render() {
        let mut out = Vec::new();
        let mut encoder = JsonTableEncoder::new(&mut out);
        encoder.append(row(["△", "U+25B3", "WHITE UP-POINTING TRIANGLE", "0x00 0x00 0x25 0xB3"]));
        encoder.render().unwrap();
        drop(encoder);

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "character": "△",
                "code_point": "U+25B3",
                "name": "WHITE UP-POINTING TRIANGLE",
                "hex": "0x00 0x00 0x25 0xB3",
            }])
        );
    }

    #[test]
    fn test_render_empty() {
        let mut out = Vec::new();
        let mut encoder = JsonTableEncoder::new(&mut out);
        encoder.render().unwrap();
        drop(encoder);
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
