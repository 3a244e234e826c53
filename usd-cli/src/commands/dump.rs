//! Dump command implementation.

use crate::display::UnicodeNames;
use crate::dump::dump;
use crate::table::{FileType, HEADER};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use usd_core::Encoding;

/// Options shared by the utf8, utf16 and utf32 commands.
#[derive(Debug, Clone, Default)]
pub struct DumpOptions {
    /// Output file type.
    pub file_type: FileType,
    /// Input file; standard input when `None`.
    pub input: Option<PathBuf>,
    /// Whether to write the header row.
    pub header: bool,
}

pub fn cmd_dump(encoding: Encoding, options: &DumpOptions) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    dump_to(encoding, options, stdout.lock())
}

/// Decode the configured input and render the table to `out`.
///
/// Rows decoded before a failure are rendered before the failure is returned.
fn dump_to<W: Write>(
    encoding: Encoding,
    options: &DumpOptions,
    out: W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut table = options.file_type.encoder(BufWriter::new(out));
    if options.header {
        table.set_header(HEADER);
    }

    let result = match &options.input {
        Some(path) => {
            log::debug!("reading {} from {}", encoding, path.display());
            let file = File::open(path)?;
            dump(encoding, BufReader::new(file), &UnicodeNames, table.as_mut())
        }
        None => {
            log::debug!("reading {} from standard input", encoding);
            dump(encoding, io::stdin().lock(), &UnicodeNames, table.as_mut())
        }
    };

    table.render()?;
    result?;
    Ok(())
}
