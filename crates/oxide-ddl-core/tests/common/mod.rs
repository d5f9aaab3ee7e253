#![allow(dead_code)]

use oxide_ddl_core::{extract_schema, DdlError, Extractor, TableSchema};

pub fn extract(sql: &str) -> TableSchema {
    extract_schema(&sql.to_lowercase())
        .unwrap_or_else(|e| panic!("Failed to extract: {sql}\nError: {e:?}"))
}

pub fn extract_strict_err(sql: &str) -> DdlError {
    Extractor::new()
        .strict(true)
        .extract(&sql.to_lowercase())
        .expect_err(&format!("Expected extraction error for: {sql}"))
}

pub fn field_names(schema: &TableSchema) -> Vec<&str> {
    schema.fields.iter().map(|f| f.name.as_str()).collect()
}

pub fn field_types(schema: &TableSchema) -> Vec<&str> {
    schema.fields.iter().map(|f| f.raw_type.as_str()).collect()
}
