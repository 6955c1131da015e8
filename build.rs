use std::fs::{create_dir_all, remove_dir_all, write};
use std::path::Path;

use clap::{CommandFactory as _, ValueEnum as _};
use clap_complete::Shell;

include!("src/cli.rs");

fn main() -> anyhow::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/cli.rs");

    let completions = Path::new("target/completions/");
    drop(remove_dir_all(completions));
    create_dir_all(completions)?;
    let mut command = Cli::command();
    for &shell in Shell::value_variants() {
        clap_complete::generate_to(shell, &mut command, env!("CARGO_PKG_NAME"), completions)?;
    }

    let manpages = Path::new("target/manpages/");
    drop(remove_dir_all(manpages));
    create_dir_all(manpages)?;
    let mut buffer = Vec::new();
    clap_mangen::Man::new(Cli::command()).render(&mut buffer)?;
    write(manpages.join(concat!(env!("CARGO_PKG_NAME"), ".1")), buffer)?;

    Ok(())
}
