//! # Field Filters
//!
//! The inclusion predicate injected into the walk. Deciding which fields
//! participate in generation is a capability of the embedding caller, not of
//! the core pipeline.

/// Predicate selecting which fields participate in generation.
///
/// Implemented for closures so callers can pass an ad-hoc
/// `|file, ty, field, field_ty| ...` without a named type.
pub trait FieldFilter {
    /// Returns true when the field should be included.
    fn accept(&self, file_name: &str, type_name: &str, field_name: &str, field_type: &str) -> bool;
}

impl<F> FieldFilter for F
where
    F: Fn(&str, &str, &str, &str) -> bool,
{
    fn accept(&self, file_name: &str, type_name: &str, field_name: &str, field_type: &str) -> bool {
        self(file_name, type_name, field_name, field_type)
    }
}

/// The default filter: rejects nothing.
pub struct AcceptAll;

impl FieldFilter for AcceptAll {
    fn accept(&self, _: &str, _: &str, _: &str, _: &str) -> bool {
        true
    }
}

/// Accepts only fields whose declared type ends with one of the configured
/// suffixes (e.g. `::Base`, `::Error`).
pub struct TypeSuffixFilter {
    suffixes: Vec<String>,
}

impl TypeSuffixFilter {
    /// Creates a filter from the given suffix list.
    pub fn new(suffixes: Vec<String>) -> Self {
        Self { suffixes }
    }
}

impl FieldFilter for TypeSuffixFilter {
    fn accept(&self, _: &str, _: &str, _: &str, field_type: &str) -> bool {
        // Strip a pointer wrapper so `Box<pb::Base>` matches `::Base`.
        let bare = field_type
            .strip_prefix("Box<")
            .and_then(|rest| rest.strip_suffix('>'))
            .unwrap_or(field_type);
        self.suffixes.iter().any(|s| bare.ends_with(s.as_str()))
    }
}
