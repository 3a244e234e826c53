//! Command implementations for the usd CLI.

pub mod completions;
pub mod dump;

pub use completions::cmd_completions;
pub use dump::{DumpOptions, cmd_dump};
