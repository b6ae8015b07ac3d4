#![deny(missing_docs)]

//! # Setgen Core
//!
//! Core library for the string-setter generator: scans Rust source for
//! structs whose fields carry `#[serde(rename = "...")]` tags and renders a
//! sibling file of typed setters, a `boxed` copy helper and a string-keyed
//! `set_string` dispatch per type.

/// Shared error types.
pub mod error;

/// Serialization-tag extraction.
pub mod tag;

/// Intermediate Representation structures.
pub mod meta;

/// AST walking logic.
pub mod walker;

/// Import resolution.
pub mod imports;

/// Code synthesis.
pub mod codegen;

/// Field inclusion predicates.
pub mod filter;

/// Output sinks.
pub mod sink;

/// Per-file pipeline driver.
pub mod pipeline;

pub use codegen::render_file;
pub use error::{AppError, AppResult};
pub use filter::{AcceptAll, FieldFilter, TypeSuffixFilter};
pub use imports::{resolve_imports, REQUIRED_IMPORTS};
pub use meta::{FieldMeta, ImportEntry, ImportTable, TypeTable};
pub use pipeline::generate_file;
pub use sink::{output_path, FileSaver, MemorySaver, Saver, GENERATED_SUFFIX};
pub use tag::tag_name;
pub use walker::walk_source;
