//! # Import Resolution
//!
//! Filters the raw import table down to the aliases actually claimed by an
//! externally-qualified field type, appends the fixed imports the generated
//! code itself depends on, and produces a deterministic ordered list.

use crate::meta::{ImportEntry, ImportTable, TypeTable};

/// Use paths every generated file depends on, appended unconditionally.
pub const REQUIRED_IMPORTS: [&str; 3] = ["serde_json", "std::error::Error", "std::str::FromStr"];

/// Resolves the final import list for one source file.
///
/// For every collected field in order, an externally-qualified type
/// (`pkg::Type`, possibly behind `Box<...>`) claims its package alias from
/// the raw table; the first claim wins and later claims no-op. Unclaimed
/// aliases are dropped. Raw entries whose path equals a required path are
/// removed up front so each required import appears exactly once (dedup by
/// resolved path, not alias). The result is sorted ascending by path.
pub fn resolve_imports(mut raw: ImportTable, table: &TypeTable) -> Vec<ImportEntry> {
    raw.retain(|_, path| !REQUIRED_IMPORTS.contains(&path.as_str()));

    let mut resolved = Vec::new();

    for fields in table.values() {
        for field in fields {
            let bare = field
                .ty
                .strip_prefix("Box<")
                .and_then(|rest| rest.strip_suffix('>'))
                .unwrap_or(&field.ty);

            let parts: Vec<&str> = bare.split("::").collect();
            if parts.len() != 2 {
                continue;
            }

            let alias = parts[0].trim();
            if let Some(path) = raw.shift_remove(alias) {
                // Elide the alias when it is just the path's own last segment.
                let explicit = if path.rsplit("::").next() == Some(alias) {
                    None
                } else {
                    Some(alias.to_string())
                };
                resolved.push(ImportEntry { alias: explicit, path });
            }
        }
    }

    for path in REQUIRED_IMPORTS {
        resolved.push(ImportEntry {
            alias: None,
            path: path.to_string(),
        });
    }

    resolved.sort_by(|a, b| a.path.cmp(&b.path));
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::FieldMeta;

    fn field(name: &str, ty: &str) -> FieldMeta {
        FieldMeta {
            name: name.into(),
            ty: ty.into(),
            tag: name.into(),
        }
    }

    fn table_with(fields: Vec<FieldMeta>) -> TypeTable {
        let mut table = TypeTable::new();
        table.insert("Widget".into(), fields);
        table
    }

    #[test]
    fn test_required_imports_always_present_and_sorted() {
        let resolved = resolve_imports(ImportTable::new(), &table_with(vec![field("n", "i64")]));
        let paths: Vec<&str> = resolved.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["serde_json", "std::error::Error", "std::str::FromStr"]);
    }

    #[test]
    fn test_claimed_alias_retained_unclaimed_dropped() {
        let mut raw = ImportTable::new();
        raw.insert("geo".into(), "crate::models::geo".into());
        raw.insert("unused".into(), "crate::models::unused".into());

        let resolved = resolve_imports(raw, &table_with(vec![field("at", "geo::Point")]));

        assert!(resolved.iter().any(|e| e.path == "crate::models::geo"));
        assert!(!resolved.iter().any(|e| e.path == "crate::models::unused"));
    }

    #[test]
    fn test_redundant_alias_elided() {
        let mut raw = ImportTable::new();
        raw.insert("geo".into(), "crate::models::geo".into());

        let resolved = resolve_imports(raw, &table_with(vec![field("at", "geo::Point")]));
        let entry = resolved.iter().find(|e| e.path == "crate::models::geo").unwrap();
        assert_eq!(entry.alias, None);
    }

    #[test]
    fn test_explicit_alias_kept_when_renamed() {
        let mut raw = ImportTable::new();
        raw.insert("g".into(), "crate::models::geo".into());

        let resolved = resolve_imports(raw, &table_with(vec![field("at", "g::Point")]));
        let entry = resolved.iter().find(|e| e.path == "crate::models::geo").unwrap();
        assert_eq!(entry.alias.as_deref(), Some("g"));
    }

    #[test]
    fn test_boxed_type_claims_alias() {
        let mut raw = ImportTable::new();
        raw.insert("geo".into(), "crate::models::geo".into());

        let resolved = resolve_imports(raw, &table_with(vec![field("home", "Box<geo::Point>")]));
        assert!(resolved.iter().any(|e| e.path == "crate::models::geo"));
    }

    #[test]
    fn test_same_alias_claimed_once_across_types() {
        let mut raw = ImportTable::new();
        raw.insert("geo".into(), "crate::models::geo".into());

        let mut table = TypeTable::new();
        table.insert("A".into(), vec![field("a", "geo::Point")]);
        table.insert("B".into(), vec![field("b", "geo::Rect")]);

        let resolved = resolve_imports(raw, &table);
        let count = resolved.iter().filter(|e| e.path == "crate::models::geo").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_source_import_of_required_path_not_duplicated() {
        let mut raw = ImportTable::new();
        raw.insert("json".into(), "serde_json".into());

        // A two-segment field type claiming `json` must not resurrect it.
        let resolved = resolve_imports(raw, &table_with(vec![field("v", "json::Value")]));
        let count = resolved.iter().filter(|e| e.path == "serde_json").count();
        assert_eq!(count, 1);
        assert!(resolved.iter().all(|e| e.alias.is_none()));
    }

    #[test]
    fn test_result_sorted_by_path() {
        let mut raw = ImportTable::new();
        raw.insert("zz".into(), "crate::zz".into());
        raw.insert("aa".into(), "crate::aa".into());

        let table = table_with(vec![field("z", "zz::T"), field("a", "aa::U")]);
        let resolved = resolve_imports(raw, &table);
        let paths: Vec<&str> = resolved.iter().map(|e| e.path.as_str()).collect();
        let mut sorted = paths.clone();
        sorted.sort();
        assert_eq!(paths, sorted);
    }
}
