//! # Output Sinks
//!
//! The persistence seam of the pipeline. The default sink writes a sibling
//! `<stem>_setters.rs` file; an in-memory sink captures rendered output for
//! tests without touching the filesystem.

use crate::codegen::render_file;
use crate::error::AppResult;
use crate::meta::{ImportEntry, TypeTable};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix inserted before the extension of generated files.
pub const GENERATED_SUFFIX: &str = "_setters";

/// Receives the per-file generation result and decides where and how to
/// persist the generated text.
///
/// The pipeline never calls a saver for a file with zero qualifying fields,
/// so implementations can assume a non-empty table and need no
/// "empty artifact" handling.
pub trait Saver {
    /// Persists the generated code for one source file.
    fn save(
        &self,
        file_name: &Path,
        module_name: &str,
        imports: &[ImportEntry],
        table: &TypeTable,
    ) -> AppResult<()>;
}

/// Derives the generated sibling path: `src/widget.rs` -> `src/widget_setters.rs`.
pub fn output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}.rs", stem, GENERATED_SUFFIX))
}

/// Default sink: renders and writes the sibling file in one step, so no
/// partially-written artifact outlives a failure.
pub struct FileSaver {
    invocation: String,
}

impl FileSaver {
    /// Creates a saver embedding the given command line in banners.
    pub fn new(invocation: impl Into<String>) -> Self {
        Self {
            invocation: invocation.into(),
        }
    }

    /// Creates a saver from the actual process arguments.
    pub fn from_env() -> Self {
        let invocation = std::env::args().collect::<Vec<_>>().join(" ");
        Self::new(invocation)
    }
}

impl Saver for FileSaver {
    fn save(
        &self,
        file_name: &Path,
        module_name: &str,
        imports: &[ImportEntry],
        table: &TypeTable,
    ) -> AppResult<()> {
        let rendered = render_file(&self.invocation, module_name, imports, table);
        fs::write(output_path(file_name), rendered)?;
        Ok(())
    }
}

/// In-memory sink for tests: records every rendered file instead of writing.
#[derive(Default)]
pub struct MemorySaver {
    captured: RefCell<Vec<(PathBuf, String)>>,
}

impl MemorySaver {
    /// Creates an empty capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no save call was made.
    pub fn is_empty(&self) -> bool {
        self.captured.borrow().is_empty()
    }

    /// Takes the captured (target path, rendered text) pairs.
    pub fn take(&self) -> Vec<(PathBuf, String)> {
        self.captured.take()
    }
}

impl Saver for MemorySaver {
    fn save(
        &self,
        file_name: &Path,
        module_name: &str,
        imports: &[ImportEntry],
        table: &TypeTable,
    ) -> AppResult<()> {
        let rendered = render_file("setgen", module_name, imports, table);
        self.captured
            .borrow_mut()
            .push((output_path(file_name), rendered));
        Ok(())
    }
}
