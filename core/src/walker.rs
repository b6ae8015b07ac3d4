//! # Declaration Walker
//!
//! Traverses a parsed Rust source tree using the rust-analyzer syntax
//! library, collecting import aliases and, for each struct, the list of
//! fields carrying a usable serialization tag.
//!
//! Parse errors are fatal for the file. Unsupported field-type shapes are
//! logged and skipped; the walk continues on syntactic information alone.

use crate::error::{AppError, AppResult};
use crate::filter::FieldFilter;
use crate::meta::{FieldMeta, ImportTable, TypeTable};
use crate::tag::tag_name;
use ra_ap_edition::Edition;
use ra_ap_syntax::ast::{self, HasName};
use ra_ap_syntax::{AstNode, SourceFile};

/// Syntactic classification of a field's declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeShape {
    /// Externally-qualified reference: exactly `pkg::Type`.
    External,
    /// Pointer-to-external: `Box<pkg::Type>`.
    BoxedExternal,
    /// Single identifier: built-in scalar or local type name.
    Simple,
    /// `[T; N]`, `[T]` or `Vec<...>`: explicitly unsupported, skipped
    /// without a diagnostic.
    ArrayLike,
    /// Anything else: references, tuples, other generics, deeper paths.
    Unrecognized,
}

/// Walks one source file, producing the raw import table and the per-type
/// field metadata table.
///
/// # Arguments
/// * `code` - Rust source text.
/// * `file_name` - Name used in diagnostics and passed to the filter.
/// * `filter` - Inclusion predicate applied to every candidate field.
pub fn walk_source(
    code: &str,
    file_name: &str,
    filter: &dyn FieldFilter,
) -> AppResult<(ImportTable, TypeTable)> {
    let parse = SourceFile::parse(code, Edition::Edition2021);

    if !parse.errors().is_empty() {
        let errs: Vec<String> = parse.errors().into_iter().map(|e| e.to_string()).collect();
        return Err(AppError::Parse(format!("{}: {}", file_name, errs.join(", "))));
    }

    let file = parse.tree();
    let mut imports = ImportTable::new();
    let mut table = TypeTable::new();

    for node in file.syntax().descendants() {
        if let Some(use_item) = ast::Use::cast(node.clone()) {
            collect_use(&use_item, file_name, &mut imports);
        } else if let Some(struct_def) = ast::Struct::cast(node) {
            collect_struct(&struct_def, file_name, filter, &mut table);
        }
    }

    Ok((imports, table))
}

/// Records one `use` item into the import table.
///
/// The alias is the explicit `as` rename when present, otherwise the last
/// path segment. Brace trees, globs and `as _` renames carry no single
/// claimable alias and are skipped.
fn collect_use(use_item: &ast::Use, file_name: &str, imports: &mut ImportTable) {
    let Some(tree) = use_item.use_tree() else {
        return;
    };

    if tree.use_tree_list().is_some() || tree.star_token().is_some() {
        log::debug!("{}: skipping grouped/glob use item", file_name);
        return;
    }

    let Some(path) = tree.path() else {
        return;
    };
    let path_text = path.syntax().text().to_string();

    let alias = match tree.rename() {
        Some(rename) => match rename.name() {
            Some(name) => name.text().to_string(),
            // `use path as _;` binds no usable alias.
            None => {
                log::debug!("{}: skipping `as _` use item", file_name);
                return;
            }
        },
        None => match path_text.rsplit("::").next() {
            Some(segment) if !segment.is_empty() => segment.to_string(),
            _ => return,
        },
    };

    imports.insert(alias, path_text);
}

/// Collects tagged fields of one struct declaration into the table.
///
/// The struct name comes from the struct node itself, not from positional
/// context. Tuple and unit structs carry no taggable field names and are
/// skipped.
fn collect_struct(
    struct_def: &ast::Struct,
    file_name: &str,
    filter: &dyn FieldFilter,
    table: &mut TypeTable,
) {
    let Some(name) = struct_def.name() else {
        return;
    };
    let struct_name = name.text().to_string();

    let Some(ast::FieldList::RecordFieldList(list)) = struct_def.field_list() else {
        return;
    };

    for field in list.fields() {
        let Some(tag) = field_tag(&field) else {
            continue;
        };
        let (Some(field_name), Some(ty)) = (field.name(), field.ty()) else {
            continue;
        };
        let field_name = field_name.text().to_string();
        let ty_text = ty.syntax().text().to_string();

        match classify_type(&ty, &ty_text) {
            TypeShape::ArrayLike => {
                log::debug!(
                    "{}: array-like field {}.{} skipped",
                    file_name,
                    struct_name,
                    field_name
                );
            }
            TypeShape::Unrecognized => {
                log::warn!(
                    "{}: unsupported type shape `{}` on field {}.{}, skipped",
                    file_name,
                    ty_text,
                    struct_name,
                    field_name
                );
            }
            TypeShape::External | TypeShape::BoxedExternal | TypeShape::Simple => {
                if filter.accept(file_name, &struct_name, &field_name, &ty_text) {
                    table.entry(struct_name.clone()).or_default().push(FieldMeta {
                        name: field_name,
                        ty: ty_text,
                        tag,
                    });
                }
            }
        }
    }
}

/// Extracts the tag name from a field's `#[serde(...)]` attributes, if any.
fn field_tag(field: &ast::RecordField) -> Option<String> {
    let attributes = field.syntax().children().filter_map(ast::Attr::cast);

    for attr in attributes {
        if let Some(meta) = attr.meta() {
            if let Some(path) = meta.path() {
                if path.to_string() == "serde" {
                    if let Some(tt) = meta.token_tree() {
                        if let Some(tag) = tag_name(&tt.to_string()) {
                            return Some(tag);
                        }
                    }
                }
            }
        }
    }

    None
}

/// Classifies a field's declared type node.
fn classify_type(ty: &ast::Type, text: &str) -> TypeShape {
    match ty {
        ast::Type::ArrayType(_) | ast::Type::SliceType(_) => TypeShape::ArrayLike,
        ast::Type::PathType(_) => classify_path(text),
        _ => TypeShape::Unrecognized,
    }
}

/// Classifies a path-type's source text.
pub(crate) fn classify_path(text: &str) -> TypeShape {
    let text = text.trim();

    if let Some(inner) = text.strip_prefix("Box<").and_then(|rest| rest.strip_suffix('>')) {
        return match classify_path(inner) {
            TypeShape::External => TypeShape::BoxedExternal,
            _ => TypeShape::Unrecognized,
        };
    }

    if text.starts_with("Vec<") {
        return TypeShape::ArrayLike;
    }

    if text.contains('<') || text.contains('&') {
        return TypeShape::Unrecognized;
    }

    match text.split("::").count() {
        1 => TypeShape::Simple,
        2 => TypeShape::External,
        _ => TypeShape::Unrecognized,
    }
}
