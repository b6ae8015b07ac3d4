#![deny(missing_docs)]

//! # Run Command
//!
//! Drives the generation pipeline over a single file or a directory tree.
//! Directory mode walks every `.rs` file, skipping previously generated
//! `*_setters.rs` siblings so reruns never process their own output.

use crate::error::{CliError, CliResult};
use setgen_core::filter::{AcceptAll, FieldFilter, TypeSuffixFilter};
use setgen_core::pipeline::generate_file;
use setgen_core::sink::{Saver, GENERATED_SUFFIX};
use std::path::Path;
use walkdir::WalkDir;

/// Executes generation for the given path with the given saver.
///
/// # Arguments
///
/// * `path` - Source file or directory to scan.
/// * `type_suffixes` - When non-empty, only fields whose declared type ends
///   with one of these suffixes participate.
/// * `saver` - The output sink (use `FileSaver` for real runs).
pub fn execute(path: &Path, type_suffixes: &[String], saver: &dyn Saver) -> CliResult<()> {
    let filter: Box<dyn FieldFilter> = if type_suffixes.is_empty() {
        Box::new(AcceptAll)
    } else {
        Box::new(TypeSuffixFilter::new(type_suffixes.to_vec()))
    };

    if path.is_dir() {
        execute_dir(path, filter.as_ref(), saver)
    } else if path.is_file() {
        generate_file(path, filter.as_ref(), saver).map_err(CliError::Core)
    } else {
        Err(CliError::General(format!("no such file or directory: {:?}", path)))
    }
}

/// Processes every eligible `.rs` file beneath `dir`, one at a time.
fn execute_dir(dir: &Path, filter: &dyn FieldFilter, saver: &dyn Saver) -> CliResult<()> {
    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "rs") {
            continue;
        }
        if is_generated(path) {
            log::debug!("{}: skipping generated file", path.display());
            continue;
        }
        generate_file(path, filter, saver).map_err(CliError::Core)?;
    }
    Ok(())
}

/// True when the file stem carries the generated-output suffix.
fn is_generated(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(GENERATED_SUFFIX))
}
