//! usd CLI - Unicode sequence dump
//!
//! Reads a UTF-8, UTF-16 or UTF-32 byte stream and prints one table row per
//! character: the glyph, its code point, its Unicode name and its bytes.

mod commands;
mod display;
mod dump;
mod table;

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use commands::{DumpOptions, cmd_completions, cmd_dump};
use log::LevelFilter;
use std::path::PathBuf;
use table::FileType;
use usd_core::{ByteOrder, Encoding, UsdError};

#[derive(Parser)]
#[command(name = "usd")]
#[command(
    author,
    version,
    about = "Unicode sequence dump - show the characters of a UTF-8/16/32 stream"
)]
#[command(long_about = "
usd decodes a byte stream one character at a time and prints, for each
character, its glyph, code point, Unicode name and raw bytes. Decoding stops
at the first invalid or truncated sequence.

Examples:
  printf 'A\\360\\237\\233\\200' | usd
  usd utf16 --endian Little -i text.utf16le
  usd utf32 -t csv < text.utf32
  usd --no-header -t tsv utf8 -i README.md
  usd completions bash > usd.bash
")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output file type
    #[arg(short = 't', long, value_enum, ignore_case = true, default_value = "none", global = true)]
    file_type: FileType,

    /// Read from a file instead of standard input
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Do not print the header row
    #[arg(long, global = true)]
    no_header: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump UTF-8 (default)
    Utf8,

    /// Dump UTF-16
    Utf16 {
        /// Byte order (Big|Little)
        #[arg(short, long, default_value = "Big", value_parser = parse_byte_order)]
        endian: ByteOrder,
    },

    /// Dump UTF-32
    Utf32 {
        /// Byte order (Big|Little)
        #[arg(short, long, default_value = "Big", value_parser = parse_byte_order)]
        endian: ByteOrder,
    },

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_byte_order(s: &str) -> Result<ByteOrder, UsdError> {
    s.parse()
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = DumpOptions {
        file_type: cli.file_type,
        input: cli.input,
        header: !cli.no_header,
    };

    let result = match cli.command.unwrap_or(Commands::Utf8) {
        Commands::Utf8 => cmd_dump(Encoding::Utf8, &options),
        Commands::Utf16 { endian } => cmd_dump(Encoding::Utf16(endian), &options),
        Commands::Utf32 { endian } => cmd_dump(Encoding::Utf32(endian), &options),
        Commands::Completions { shell } => cmd_completions(shell, Cli::command()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
