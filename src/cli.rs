use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

#[derive(Debug, Subcommand)]
pub enum Subcommands {
    /// Check whether the input is valid JSON.
    ///
    /// Reads the given file, or stdin when no file is specified, and decodes it.
    /// Valid and empty inputs exit successfully without any output.
    /// Invalid input prints the decoders diagnostic to stderr and exits non zero.
    ///
    /// This is useful for scripting and git hooks:
    ///
    /// `jsonui check config.json && echo ok`
    #[command(visible_alias = "c")]
    Check {
        /// File to read.
        ///
        /// Reads from stdin when not specified.
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Print JSON in its canonical pretty form.
    ///
    /// Decodes the input and prints it to stdout with 2 space indentation.
    /// Empty input prints nothing.
    /// Invalid input prints the decoders diagnostic to stderr and exits non zero.
    ///
    /// `curl --silent https://api.example.com/data | jsonui format`
    #[command(visible_alias = "f", visible_alias = "fmt")]
    Format {
        /// File to read.
        ///
        /// Reads from stdin when not specified.
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Parser)]
#[command(about, version)]
pub struct Cli {
    #[clap(subcommand)]
    pub subcommands: Option<Subcommands>,

    /// File to load into the input editor.
    ///
    /// Its content is submitted once on startup.
    /// The inspector starts with an empty input when not specified.
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,
}

#[test]
fn verify() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
