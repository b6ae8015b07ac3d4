//! # Pipeline Driver
//!
//! Runs the per-file batch pipeline to completion: read, walk, resolve,
//! synthesize via the sink. Single-threaded and synchronous; one source file
//! finishes before the next starts and no state is shared across files.

use crate::error::{AppError, AppResult};
use crate::filter::FieldFilter;
use crate::imports::resolve_imports;
use crate::sink::Saver;
use crate::walker::walk_source;
use std::fs;
use std::path::Path;

/// Generates setter code for one source file.
///
/// Output existence is decided before the sink is involved: when zero fields
/// carry a usable tag, the sink is never invoked and no artifact is created.
/// Syntax-parse failures abort with no output.
pub fn generate_file(path: &Path, filter: &dyn FieldFilter, saver: &dyn Saver) -> AppResult<()> {
    let code = fs::read_to_string(path)?;
    let file_name = path.to_string_lossy();

    let (raw_imports, table) = walk_source(&code, &file_name, filter)?;

    if table.is_empty() {
        log::debug!("{}: no tagged fields, nothing to generate", file_name);
        return Ok(());
    }

    let imports = resolve_imports(raw_imports, &table);

    let module_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| AppError::General(format!("no module name derivable from {:?}", path)))?;

    saver.save(path, &module_name, &imports, &table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{AcceptAll, TypeSuffixFilter};
    use crate::sink::MemorySaver;
    use std::io::Write;

    fn write_source(dir: &tempfile::TempDir, name: &str, code: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(code.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_sink_not_invoked_without_tags() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(&dir, "plain.rs", "pub struct Plain { pub a: i64 }");

        let saver = MemorySaver::new();
        generate_file(&path, &AcceptAll, &saver).unwrap();

        assert!(saver.is_empty());
        assert!(!dir.path().join("plain_setters.rs").exists());
    }

    #[test]
    fn test_end_to_end_widget() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(
            &dir,
            "widget.rs",
            r#"
                pub struct Widget {
                    #[serde(rename = "count")]
                    pub count: i64,
                    #[serde(rename = "label")]
                    pub label: String,
                }
            "#,
        );

        let saver = MemorySaver::new();
        generate_file(&path, &AcceptAll, &saver).unwrap();

        let captured = saver.take();
        assert_eq!(captured.len(), 1);
        let rendered = &captured[0].1;

        assert!(rendered.contains("use super::widget::*;"));
        assert!(rendered.contains("pub fn set_count(&mut self, v: i64)"));
        assert!(rendered.contains("pub fn set_label(&mut self, v: String)"));
        assert!(rendered.contains("pub fn boxed(&self) -> Box<Self>"));
        assert!(rendered.contains("\"count\" => self.count = i64::from_str(value)?"));
        assert!(rendered.contains("\"label\" => self.label = value.to_string()"));
        assert!(rendered.contains("field does not exist"));
    }

    #[test]
    fn test_external_type_import_retained() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(
            &dir,
            "located.rs",
            r#"
                use crate::models::geo;
                use crate::models::unused;

                pub struct Located {
                    #[serde(rename = "home")]
                    pub home: Box<geo::Point>,
                }
            "#,
        );

        let saver = MemorySaver::new();
        generate_file(&path, &AcceptAll, &saver).unwrap();

        let rendered = saver.take().remove(0).1;
        assert!(rendered.contains("use crate::models::geo;\n"));
        assert!(!rendered.contains("crate::models::unused"));
        assert!(rendered.contains("\"home\" => *self.home = serde_json::from_str(value)?"));
    }

    #[test]
    fn test_parse_failure_produces_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(&dir, "broken.rs", "pub struct Broken {");

        let saver = MemorySaver::new();
        let res = generate_file(&path, &AcceptAll, &saver);

        assert!(matches!(res, Err(AppError::Parse(_))));
        assert!(saver.is_empty());
    }

    #[test]
    fn test_suffix_filter_narrows_generation() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(
            &dir,
            "mixed.rs",
            r#"
                use crate::pb;

                pub struct Mixed {
                    #[serde(rename = "base")]
                    pub base: pb::Base,
                    #[serde(rename = "n")]
                    pub n: i64,
                }
            "#,
        );

        let filter = TypeSuffixFilter::new(vec!["::Base".into()]);
        let saver = MemorySaver::new();
        generate_file(&path, &filter, &saver).unwrap();

        let rendered = saver.take().remove(0).1;
        assert!(rendered.contains("pub fn set_base"));
        assert!(!rendered.contains("pub fn set_n"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let saver = MemorySaver::new();
        let res = generate_file(Path::new("/nonexistent/nope.rs"), &AcceptAll, &saver);
        assert!(matches!(res, Err(AppError::Io(_))));
    }
}
