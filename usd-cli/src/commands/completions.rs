//! Completions command implementation.

use clap::Command;
use clap_complete::{Shell, generate};
use std::io;

pub fn cmd_completions(shell: Shell, mut command: Command) -> Result<(), Box<dyn std::error::Error>> {
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
