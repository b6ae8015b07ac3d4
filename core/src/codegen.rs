//! # Code Synthesis
//!
//! Renders the generated sibling file for one source file: a banner, the
//! module-binding clause, the resolved import block, keep-alive references
//! for the required imports, then one `impl` block per discovered type with
//! typed setters, a `boxed` copy helper and the `set_string` dispatch.

use crate::meta::{FieldMeta, ImportEntry, TypeTable};

/// Scalar kinds converted with a typed `from_str` parse.
const PARSED_KINDS: [&str; 8] = ["isize", "i32", "i64", "usize", "u32", "u64", "f32", "f64"];

/// String-to-value conversion strategy for one declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Converter {
    /// Base-10 / floating parse at the declared width.
    Parse,
    /// Raw assignment of the input string.
    RawString,
    /// Structured decode in place through the field.
    Decode,
    /// Structured decode through the `Box` pointer.
    DecodeBoxed,
}

/// Maps a declared-type string to its converter strategy.
///
/// A lookup, not a branch chain: adding a scalar kind is a data change.
fn converter_for(ty: &str) -> Converter {
    if PARSED_KINDS.contains(&ty) {
        Converter::Parse
    } else if ty == "String" {
        Converter::RawString
    } else if ty.starts_with("Box<") {
        Converter::DecodeBoxed
    } else {
        Converter::Decode
    }
}

/// Renders the complete generated file.
///
/// # Arguments
/// * `invocation` - The invoking command line, embedded in the banner.
/// * `module_name` - The source module the generated impls bind to.
/// * `imports` - Resolved import list, already in emission order.
/// * `table` - Per-type field metadata in declaration order.
pub fn render_file(
    invocation: &str,
    module_name: &str,
    imports: &[ImportEntry],
    table: &TypeTable,
) -> String {
    let mut code = String::new();

    code.push_str("//\n");
    code.push_str("// GENERATED FILE -- DO NOT EDIT\n");
    code.push_str("//\n");
    code.push_str(&format!("// command: {}\n", invocation));
    code.push_str("//\n");
    code.push('\n');

    code.push_str(&format!("use super::{}::*;\n", module_name));
    code.push('\n');

    if !imports.is_empty() {
        for entry in imports {
            code.push_str(&entry.to_use_statement());
            code.push('\n');
        }
        code.push('\n');
    }

    code.push_str("// keep required imports alive even when no dispatch arm references them\n");
    code.push_str(
        "const _: fn(&str) -> serde_json::Result<serde_json::Value> = \
         serde_json::from_str::<serde_json::Value>;\n",
    );
    code.push_str(
        "const _: fn(&str) -> Result<i64, std::num::ParseIntError> = <i64 as FromStr>::from_str;\n",
    );
    code.push_str("const _: Option<&dyn Error> = None;\n");
    code.push('\n');

    for (i, (type_name, fields)) in table.iter().enumerate() {
        code.push_str(&render_type(type_name, fields));
        if i < table.len() - 1 {
            code.push('\n');
        }
    }

    code
}

/// Renders one type's `impl` block: setters in field order, then the copy
/// helper, then the dispatch setter. The block structure guarantees the
/// helper and dispatch are emitted exactly once per type.
fn render_type(type_name: &str, fields: &[FieldMeta]) -> String {
    let mut code = String::new();

    code.push_str(&format!("impl {} {{\n", type_name));

    for field in fields {
        code.push_str(&render_setter(field));
        code.push('\n');
    }

    code.push_str(&render_boxed(type_name));
    code.push('\n');
    code.push_str(&render_set_string(fields));

    code.push_str("}\n");
    code
}

/// Renders the typed setter for one field: unconditional assignment, no
/// validation.
fn render_setter(field: &FieldMeta) -> String {
    format!(
        "    /// Sets `{name}`.\n    pub fn set_{name}(&mut self, v: {ty}) {{\n        self.{name} = v;\n    }}\n",
        name = field.name,
        ty = field.ty,
    )
}

/// Renders the pointer-to-copy helper.
fn render_boxed(type_name: &str) -> String {
    format!(
        "    /// Returns a boxed copy of this `{type_name}`.\n    pub fn boxed(&self) -> Box<Self> {{\n        Box::new(self.clone())\n    }}\n",
    )
}

/// Renders the string-dispatch setter: a `match` over tag names, one arm per
/// field, with a default arm producing the unknown-field error. All arms
/// funnel errors through `?`, so the first conversion failure is the
/// returned error and the field is left unmodified on failure.
fn render_set_string(fields: &[FieldMeta]) -> String {
    let mut code = String::new();

    code.push_str("    /// Sets the field tagged `name` from its string representation.\n");
    code.push_str(
        "    pub fn set_string(&mut self, name: &str, value: &str) -> Result<(), Box<dyn Error>> {\n",
    );
    code.push_str("        match name {\n");

    for field in fields {
        code.push_str(&render_dispatch_arm(field));
    }

    code.push_str(
        "            _ => return Err(format!(\"field does not exist: {}\", name).into()),\n",
    );
    code.push_str("        }\n");
    code.push_str("        Ok(())\n");
    code.push_str("    }\n");
    code
}

/// Renders one dispatch arm, annotated with the declared type.
fn render_dispatch_arm(field: &FieldMeta) -> String {
    let assign = match converter_for(&field.ty) {
        Converter::Parse => format!("self.{} = {}::from_str(value)?", field.name, field.ty),
        Converter::RawString => format!("self.{} = value.to_string()", field.name),
        Converter::Decode => format!("self.{} = serde_json::from_str(value)?", field.name),
        Converter::DecodeBoxed => format!("*self.{} = serde_json::from_str(value)?", field.name),
    };
    format!(
        "            \"{tag}\" => {assign}, // ({ty})\n",
        tag = field.tag,
        assign = assign,
        ty = field.ty,
    )
}
