//! Generator configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::{DdlError, Result};
use crate::ident::{pascal_case, Abbreviations, Affix, CaseFn};
use crate::types::TypeMapping;

/// How the caller persists generated output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WriteMode {
    /// Append to the target file, creating it if needed.
    #[default]
    Append,
    /// Truncate the target file, creating it if needed.
    Overwrite,
}

impl WriteMode {
    /// All accepted modes.
    pub const ALL: [Self; 2] = [Self::Append, Self::Overwrite];

    /// Returns the canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Append => "APPEND",
            Self::Overwrite => "OVERWRITE",
        }
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WriteMode {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| {
                DdlError::InvalidConfiguration(format!(
                    "write mode should be one of [APPEND, OVERWRITE], got '{s}'"
                ))
            })
    }
}

/// Everything the generator needs besides the statements.
///
/// Read-only during a run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Struct tag names; each field gets `name:"column"` per tag.
    pub tags: Vec<String>,
    /// Tag name used for column comments.
    pub comment_tag: String,
    /// Stripped from table names before casing.
    pub table_affix: Affix,
    /// Stripped from column names before casing and tagging.
    pub field_affix: Affix,
    /// Segments rendered fully upper-cased.
    pub abbreviations: Abbreviations,
    /// SQL keyword to Go type table.
    pub type_mapping: TypeMapping,
    /// Identifier casing function.
    pub case: CaseFn,
    /// Report malformed fields and unterminated quotes.
    pub strict: bool,
    /// Keep the statement's original case instead of lower-casing it.
    pub preserve_case: bool,
    /// Package name written in the file header.
    pub package: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tags: vec![String::from("json"), String::from("db")],
            comment_tag: String::from("comment"),
            table_affix: Affix::default(),
            field_affix: Affix::default(),
            abbreviations: Abbreviations::default(),
            type_mapping: TypeMapping::mysql(),
            case: pascal_case,
            strict: false,
            preserve_case: false,
            package: String::from("main"),
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the struct tag names.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the comment tag name.
    #[must_use]
    pub fn with_comment_tag(mut self, tag: impl Into<String>) -> Self {
        self.comment_tag = tag.into();
        self
    }

    /// Sets the table name prefix and suffix.
    #[must_use]
    pub fn with_table_affix(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.table_affix = Affix::new(prefix, suffix);
        self
    }

    /// Sets the field name prefix and suffix.
    #[must_use]
    pub fn with_field_affix(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.field_affix = Affix::new(prefix, suffix);
        self
    }

    /// Adds abbreviations to the set.
    #[must_use]
    pub fn with_abbreviations<'a>(mut self, words: impl IntoIterator<Item = &'a str>) -> Self {
        self.abbreviations.extend(words);
        self
    }

    /// Replaces the type table.
    #[must_use]
    pub fn with_type_mapping(mut self, mapping: TypeMapping) -> Self {
        self.type_mapping = mapping;
        self
    }

    /// Replaces the casing function.
    #[must_use]
    pub fn with_case(mut self, case: CaseFn) -> Self {
        self.case = case;
        self
    }

    /// Enables or disables strict extraction.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Enables or disables keeping the statement's case.
    #[must_use]
    pub const fn preserve_case(mut self, preserve: bool) -> Self {
        self.preserve_case = preserve;
        self
    }

    /// Sets the package name.
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::InvalidConfiguration`] for an empty or malformed
    /// tag name, comment tag or package name.
    pub fn validate(&self) -> Result<()> {
        for tag in &self.tags {
            check_tag("tag", tag)?;
        }
        check_tag("comment tag", &self.comment_tag)?;

        let package_ok = self
            .package
            .chars()
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_')
            && self.package.chars().all(|c| c.is_alphanumeric() || c == '_');
        if !package_ok {
            return Err(DdlError::InvalidConfiguration(format!(
                "invalid package name '{}'",
                self.package
            )));
        }
        Ok(())
    }
}

fn check_tag(what: &str, tag: &str) -> Result<()> {
    if tag.trim().is_empty() {
        return Err(DdlError::InvalidConfiguration(format!("empty {what}")));
    }
    if tag.chars().any(|c| c.is_whitespace() || matches!(c, '"' | '`' | ':')) {
        return Err(DdlError::InvalidConfiguration(format!(
            "invalid {what} '{tag}'"
        )));
    }
    Ok(())
}
