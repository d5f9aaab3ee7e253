//! Extracted table model.

use serde::{Deserialize, Serialize};

/// A table as read from a `CREATE TABLE` statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Raw table name.
    pub table_name: String,
    /// Columns in declaration order.
    pub fields: Vec<ColumnInfo>,
}

impl TableSchema {
    /// Creates an empty schema for the named table.
    #[must_use]
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a column (builder style).
    #[must_use]
    pub fn field(mut self, column: ColumnInfo) -> Self {
        self.fields.push(column);
        self
    }

    /// Looks up a column by raw name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&ColumnInfo> {
        self.fields.iter().find(|c| c.name == name)
    }
}

/// A single column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Raw column name.
    pub name: String,
    /// Raw SQL type keyword, without size qualifiers.
    pub raw_type: String,
    /// Column comment, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ColumnInfo {
    /// Creates a column without comment.
    #[must_use]
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_type: raw_type.into(),
            comment: None,
        }
    }

    /// Sets the comment.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Returns true when both name and type are known.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.raw_type.is_empty()
    }
}
