use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context as _;
use clap::Parser as _;

use crate::cli::Subcommands;

mod check;
mod cli;
mod format;
mod highlight;
mod interactive;
mod pipeline;
mod selector;
mod tree;

fn main() -> anyhow::Result<()> {
    let matches = cli::Cli::parse();

    match matches.subcommands {
        Some(Subcommands::Check { file }) => check::check(&read_input(file.as_deref())?),
        Some(Subcommands::Format { file }) => format::format(&read_input(file.as_deref())?),
        None => {
            let initial = matches.file.as_deref().map(read_file).transpose()?;
            interactive::show(initial)
        }
    }
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file {}", path.display()))
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => read_file(path),
        None => io::read_to_string(io::stdin()).context("failed to read stdin"),
    }
}
