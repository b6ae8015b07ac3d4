//! # Data Models
//!
//! Intermediate Representation (IR) structures shared across the pipeline:
//! per-field metadata collected by the walker and resolved import entries
//! consumed by the synthesizer.

use indexmap::IndexMap;

/// Metadata for a single tagged struct field.
///
/// Immutable once collected; `ty` holds the syntactic type text exactly as
/// written in the source (e.g. `"i64"`, `"geo::Point"`, `"Box<geo::Point>"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMeta {
    /// The field name.
    pub name: String,
    /// The raw Rust type string.
    pub ty: String,
    /// The logical (wire) name extracted from the serialization tag.
    pub tag: String,
}

/// Type name -> fields in declaration order.
///
/// Insertion order drives emission order in the generated file; the table is
/// built once per source file and discarded after synthesis.
pub type TypeTable = IndexMap<String, Vec<FieldMeta>>;

/// Raw import table collected by the walker: alias -> full use path.
///
/// The alias is the explicit `as` rename when present, otherwise the last
/// path segment.
pub type ImportTable = IndexMap<String, String>;

/// A resolved import ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEntry {
    /// Explicit alias, or `None` when the path's own trailing segment already
    /// names it (avoids emitting a redundant `as`).
    pub alias: Option<String>,
    /// The full use path (e.g. `crate::models::geo`).
    pub path: String,
}

impl ImportEntry {
    /// Renders the entry as a `use` statement.
    pub fn to_use_statement(&self) -> String {
        match &self.alias {
            Some(alias) => format!("use {} as {};", self.path, alias),
            None => format!("use {};", self.path),
        }
    }
}
