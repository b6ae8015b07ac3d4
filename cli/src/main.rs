#![deny(missing_docs)]

//! # Setgen CLI
//!
//! Command Line Interface for the string-setter generator.
//!
//! Scans a Rust source file (or every `.rs` file under a directory) for
//! structs whose fields carry `#[serde(rename = "...")]` tags and writes a
//! `<stem>_setters.rs` sibling next to each input that yields metadata.

use clap::Parser;
use setgen_core::sink::FileSaver;
use std::path::PathBuf;

use crate::error::CliResult;

mod error;
mod run;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Generates string setter functions for serde-tagged structs")]
struct Cli {
    /// Source file or directory to scan.
    path: PathBuf,

    /// Only generate for fields whose declared type ends with this suffix
    /// (e.g. `::Base`). Repeatable.
    #[clap(long = "type-suffix")]
    type_suffix: Vec<String>,
}

fn main() -> CliResult<()> {
    env_logger::init();
    let cli = Cli::parse();

    let saver = FileSaver::from_env();
    run::execute(&cli.path, &cli.type_suffix, &saver)
}
