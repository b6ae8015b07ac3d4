//! # Tag Extraction
//!
//! Pulls the logical (wire) field name out of a serialization attribute's
//! raw token text. A field qualifies for generation only when its attributes
//! carry a `rename = "<ident>"` component, e.g. `#[serde(rename = "count")]`.

use regex::Regex;
use std::sync::OnceLock;

/// Extracts the renamed identifier from raw attribute content.
///
/// Pure function: absence of a usable tag is signaled by `None`, never an
/// error. The identifier shape is `[A-Za-z_][A-Za-z0-9_]*`.
///
/// # Examples
/// ```
/// use setgen_core::tag::tag_name;
///
/// assert_eq!(tag_name(r#"(rename = "count")"#).as_deref(), Some("count"));
/// assert_eq!(tag_name(r#"(default, rename = "label")"#).as_deref(), Some("label"));
/// assert_eq!(tag_name("(skip)"), None);
/// ```
pub fn tag_name(content: &str) -> Option<String> {
    static RENAME_RE: OnceLock<Regex> = OnceLock::new();
    let rename_re = RENAME_RE.get_or_init(|| {
        Regex::new(r#"rename\s*=\s*"([A-Za-z_][A-Za-z0-9_]*)""#).expect("Invalid regex")
    });

    rename_re
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
