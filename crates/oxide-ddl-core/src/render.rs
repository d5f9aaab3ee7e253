//! Go struct rendering.
//!
//! Rendering is split in two steps: [`render_schema`] resolves names, types
//! and tags, and [`format_struct`] lays the result out in aligned columns:
//!
//! ```text
//! type TestTable struct {
//!     Field1 string      `json:"field_1" db:"field_1" comment:"测试"`
//!     Field2 interface{} `json:"field_2" db:"field_2"`
//! }
//! ```

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::config::GeneratorConfig;
use crate::ident::IdentTransformer;
use crate::schema::TableSchema;
use crate::types::GoType;

/// One struct field, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedField {
    /// Go field name.
    pub name: String,
    /// Go field type.
    pub target_type: GoType,
    /// Backquoted tag block, or empty for none.
    pub tag_block: String,
}

impl RenderedField {
    /// Creates a field.
    #[must_use]
    pub fn new(name: impl Into<String>, target_type: GoType, tag_block: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_type,
            tag_block: tag_block.into(),
        }
    }
}

/// A struct, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedStruct {
    /// Go type name.
    pub struct_name: String,
    /// Fields in column order.
    pub fields: Vec<RenderedField>,
}

/// Resolves the Go names, types and tags for a table.
#[must_use]
pub fn render_schema(schema: &TableSchema, config: &GeneratorConfig) -> RenderedStruct {
    let transformer = IdentTransformer::new(&config.abbreviations).with_case(config.case);

    let fields = schema
        .fields
        .iter()
        .map(|column| {
            let column_name = config.field_affix.strip(&column.name);
            RenderedField {
                name: transformer.transform(&column.name, &config.field_affix),
                target_type: config.type_mapping.resolve(&column.raw_type),
                tag_block: tag_block(
                    column_name,
                    column.comment.as_deref(),
                    &config.tags,
                    &config.comment_tag,
                ),
            }
        })
        .collect();

    RenderedStruct {
        struct_name: transformer.transform(&schema.table_name, &config.table_affix),
        fields,
    }
}

/// Builds `` `json:"name" db:"name" comment:"..."` `` for one column.
///
/// Returns an empty string when there are no tags and no comment.
#[must_use]
pub fn tag_block(column: &str, comment: Option<&str>, tags: &[String], comment_tag: &str) -> String {
    let mut entries: Vec<String> = tags
        .iter()
        .map(|tag| format!("{tag}:\"{}\"", escape_tag_value(column)))
        .collect();
    if let Some(comment) = comment.filter(|c| !c.is_empty()) {
        entries.push(format!("{comment_tag}:\"{}\"", escape_tag_value(comment)));
    }
    if entries.is_empty() {
        return String::new();
    }
    format!("`{}`", entries.join(" "))
}

/// Makes a value safe inside a raw-string struct tag.
fn escape_tag_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '`' => out.push('\''),
            '\n' | '\r' => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

/// Lays out one struct with aligned name and type columns.
#[must_use]
pub fn format_struct(rendered: &RenderedStruct) -> String {
    let name_width = rendered
        .fields
        .iter()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or(0);
    let type_width = rendered
        .fields
        .iter()
        .map(|f| f.target_type.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = format!("type {} struct {{\n", rendered.struct_name);
    for field in &rendered.fields {
        let line = format!(
            "\t{:<name_width$} {:<type_width$} {}",
            field.name,
            field.target_type.as_str(),
            field.tag_block
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.push('}');
    out
}

/// Lays out a whole Go file: package header, imports, then the structs
/// separated by blank lines.
#[must_use]
pub fn format_file(structs: &[RenderedStruct], package: &str) -> String {
    let imports: BTreeSet<&str> = structs
        .iter()
        .flat_map(|s| &s.fields)
        .filter_map(|f| f.target_type.import())
        .collect();

    let mut out = format!("package {package}\n");
    match imports.len() {
        0 => {}
        1 => {
            for import in &imports {
                let _ = write!(out, "\nimport \"{import}\"\n");
            }
        }
        _ => {
            out.push_str("\nimport (\n");
            for import in &imports {
                let _ = writeln!(out, "\t\"{import}\"");
            }
            out.push_str(")\n");
        }
    }
    for rendered in structs {
        out.push('\n');
        out.push_str(&format_struct(rendered));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnInfo;

    fn sample_schema() -> TableSchema {
        TableSchema::new("v_test_table")
            .field(ColumnInfo::new("field_1", "varchar").comment("测试"))
            .field(ColumnInfo::new("field_2", "aaa"))
            .field(ColumnInfo::new("field_suf", "bigint").comment("测试3"))
    }

    #[test]
    fn test_render_schema() {
        let config = GeneratorConfig::new()
            .with_tags(["json", "db"])
            .with_comment_tag("comment")
            .with_table_affix("v_", "")
            .with_field_affix("", "_suf");

        let rendered = render_schema(&sample_schema(), &config);

        assert_eq!(
            rendered,
            RenderedStruct {
                struct_name: String::from("TestTable"),
                fields: vec![
                    RenderedField::new(
                        "Field1",
                        GoType::String,
                        "`json:\"field_1\" db:\"field_1\" comment:\"测试\"`"
                    ),
                    RenderedField::new(
                        "Field2",
                        GoType::Dynamic,
                        "`json:\"field_2\" db:\"field_2\"`"
                    ),
                    RenderedField::new(
                        "Field",
                        GoType::Int64,
                        "`json:\"field\" db:\"field\" comment:\"测试3\"`"
                    ),
                ],
            }
        );
    }

    #[test]
    fn test_format_struct_alignment() {
        let rendered = RenderedStruct {
            struct_name: String::from("TestTable"),
            fields: vec![
                RenderedField::new("Field1", GoType::String, "测试"),
                RenderedField::new("Field2", GoType::Int64, "测试int64"),
            ],
        };
        assert_eq!(
            format_struct(&rendered),
            "type TestTable struct {\n\tField1 string 测试\n\tField2 int64  测试int64\n}"
        );
    }

    #[test]
    fn test_format_struct_pads_names() {
        let rendered = RenderedStruct {
            struct_name: String::from("User"),
            fields: vec![
                RenderedField::new("ID", GoType::Int64, "`json:\"id\"`"),
                RenderedField::new("UserName", GoType::String, "`json:\"user_name\"`"),
            ],
        };
        assert_eq!(
            format_struct(&rendered),
            "type User struct {\n\
             \tID       int64  `json:\"id\"`\n\
             \tUserName string `json:\"user_name\"`\n\
             }"
        );
    }

    #[test]
    fn test_format_struct_without_tags() {
        let rendered = RenderedStruct {
            struct_name: String::from("T"),
            fields: vec![
                RenderedField::new("A", GoType::Int32, ""),
                RenderedField::new("Bb", GoType::Time, ""),
            ],
        };
        assert_eq!(
            format_struct(&rendered),
            "type T struct {\n\tA  int32\n\tBb time.Time\n}"
        );
    }

    #[test]
    fn test_format_empty_struct() {
        let rendered = RenderedStruct {
            struct_name: String::from("Empty"),
            fields: vec![],
        };
        assert_eq!(format_struct(&rendered), "type Empty struct {\n}");
    }

    #[test]
    fn test_tag_block() {
        let tags = vec![String::from("json")];
        assert_eq!(tag_block("a", None, &tags, "comment"), "`json:\"a\"`");
        assert_eq!(tag_block("a", Some(""), &tags, "comment"), "`json:\"a\"`");
        assert_eq!(tag_block("a", Some("x"), &[], "alias"), "`alias:\"x\"`");
        assert_eq!(tag_block("a", None, &[], "alias"), "");
    }

    #[test]
    fn test_tag_values_are_escaped() {
        let tags = vec![String::from("json")];
        assert_eq!(
            tag_block("a", Some("say \"hi\" `now`"), &tags, "comment"),
            "`json:\"a\" comment:\"say \\\"hi\\\" 'now'\"`"
        );
    }

    #[test]
    fn test_format_file() {
        let structs = vec![
            RenderedStruct {
                struct_name: String::from("A"),
                fields: vec![RenderedField::new("X", GoType::Int, "")],
            },
            RenderedStruct {
                struct_name: String::from("B"),
                fields: vec![],
            },
        ];
        assert_eq!(
            format_file(&structs, "main"),
            "package main\n\ntype A struct {\n\tX int\n}\n\ntype B struct {\n}\n"
        );
    }

    #[test]
    fn test_format_file_imports_time() {
        let structs = vec![RenderedStruct {
            struct_name: String::from("A"),
            fields: vec![
                RenderedField::new("At", GoType::Time, ""),
                RenderedField::new("On", GoType::Time, ""),
            ],
        }];
        assert_eq!(
            format_file(&structs, "model"),
            "package model\n\nimport \"time\"\n\ntype A struct {\n\tAt time.Time\n\tOn time.Time\n}\n"
        );
    }

    #[test]
    fn test_format_file_without_structs() {
        assert_eq!(format_file(&[], "main"), "package main\n");
    }
}
