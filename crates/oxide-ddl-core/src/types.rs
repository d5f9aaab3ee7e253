//! SQL type keyword to Go type mapping.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A Go field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoType {
    /// `string`
    String,
    /// `int64`
    Int64,
    /// `int32`
    Int32,
    /// `int`
    Int,
    /// `float64`
    Float64,
    /// `float32`
    Float32,
    /// `time.Time`
    Time,
    /// `interface{}`, used when no mapping matches.
    Dynamic,
}

impl GoType {
    /// Returns the Go spelling of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int64 => "int64",
            Self::Int32 => "int32",
            Self::Int => "int",
            Self::Float64 => "float64",
            Self::Float32 => "float32",
            Self::Time => "time.Time",
            Self::Dynamic => "interface{}",
        }
    }

    /// Returns the package the type needs imported, if any.
    #[must_use]
    pub const fn import(self) -> Option<&'static str> {
        match self {
            Self::Time => Some("time"),
            _ => None,
        }
    }
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// MySQL keywords per Go type.
const MYSQL: &[(GoType, &[&str])] = &[
    (
        GoType::String,
        &[
            "CHAR",
            "VARCHAR",
            "BINARY",
            "VARBINARY",
            "TINYBLOB",
            "TINYTEXT",
            "TEXT",
            "BLOB",
            "MEDIUMTEXT",
            "LONGTEXT",
            "LONGBLOB",
            "ENUM",
            "SET",
        ],
    ),
    (GoType::Int64, &["BIGINT", "TIMESTAMP"]),
    (GoType::Int32, &["INT", "INTEGER"]),
    (
        GoType::Int,
        &["BIT", "BOOL", "BOOLEAN", "SMALLINT", "MEDIUMINT"],
    ),
    (GoType::Float64, &["DOUBLE", "DECIMAL", "DEC"]),
    (GoType::Float32, &["FLOAT"]),
    (GoType::Time, &["DATE", "DATETIME", "TIME", "YEAR"]),
];

/// Case-insensitive lookup table from SQL type keywords to Go types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMapping {
    /// Upper-cased keyword to type.
    keywords: HashMap<String, GoType>,
}

impl TypeMapping {
    /// Creates a table with no keywords; everything resolves to
    /// [`GoType::Dynamic`].
    #[must_use]
    pub fn empty() -> Self {
        Self {
            keywords: HashMap::new(),
        }
    }

    /// The MySQL table.
    #[must_use]
    pub fn mysql() -> Self {
        let mut mapping = Self::empty();
        for (go_type, keywords) in MYSQL {
            mapping.insert(*go_type, keywords.iter().copied());
        }
        mapping
    }

    /// Maps each keyword to `go_type`, replacing earlier mappings.
    pub fn insert<'k>(&mut self, go_type: GoType, keywords: impl IntoIterator<Item = &'k str>) {
        for keyword in keywords {
            self.keywords
                .insert(keyword.trim().to_ascii_uppercase(), go_type);
        }
    }

    /// Resolves a bare type keyword.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> GoType {
        self.keywords
            .get(&raw.to_ascii_uppercase())
            .copied()
            .unwrap_or(GoType::Dynamic)
    }

    /// Returns the keywords mapped to `go_type`, sorted.
    #[must_use]
    pub fn keywords_for(&self, go_type: GoType) -> Vec<&str> {
        let mut keywords: Vec<&str> = self
            .keywords
            .iter()
            .filter(|(_, t)| **t == go_type)
            .map(|(k, _)| k.as_str())
            .collect();
        keywords.sort_unstable();
        keywords
    }
}

impl Default for TypeMapping {
    fn default() -> Self {
        Self::mysql()
    }
}

/// Resolves a type keyword with the MySQL table.
#[must_use]
pub fn resolve_type(raw: &str) -> GoType {
    TypeMapping::mysql().resolve(raw)
}
