//! Command-line definition.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use oxide_ddl_core::{DdlError, GeneratorConfig, WriteMode};

use crate::output::{OutputTarget, DEFAULT_FILE_NAME};

/// Generate tagged Go structs from MySQL CREATE TABLE statements.
#[derive(Debug, Parser)]
#[command(name = "oxide-ddl")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    oxide-ddl schema.sql
    oxide-ddl schema.sql --tags json,gorm --comment-tag alias --table-prefix t_
    oxide-ddl schema.sql --target ./model --mode overwrite --package model")]
pub struct Cli {
    /// SQL file containing CREATE TABLE statements.
    pub path: PathBuf,

    /// Struct tag names, comma separated.
    #[arg(short, long, value_delimiter = ',', default_value = "json,db")]
    pub tags: Vec<String>,

    /// Tag name used for column comments.
    #[arg(long, default_value = "comment")]
    pub comment_tag: String,

    /// Prefix stripped from table names.
    #[arg(long, value_parser = non_empty)]
    pub table_prefix: Option<String>,

    /// Suffix stripped from table names.
    #[arg(long, value_parser = non_empty)]
    pub table_suffix: Option<String>,

    /// Prefix stripped from column names.
    #[arg(long, value_parser = non_empty)]
    pub field_prefix: Option<String>,

    /// Suffix stripped from column names.
    #[arg(long, value_parser = non_empty)]
    pub field_suffix: Option<String>,

    /// Output directory (defaults to the directory of the SQL file).
    #[arg(long)]
    pub target: Option<PathBuf>,

    /// Output file name.
    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    pub file_name: String,

    /// Append to or overwrite the output file.
    #[arg(short, long, env = "OXIDE_DDL_MODE", default_value = "append", value_parser = parse_write_mode)]
    pub mode: WriteMode,

    /// Extra abbreviations rendered fully upper-cased, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub abbr: Vec<String>,

    /// Package name of the generated file.
    #[arg(long, default_value = "main")]
    pub package: String,

    /// Fail on columns without a type and on unterminated quotes.
    #[arg(long)]
    pub strict: bool,

    /// Keep the statement's case instead of lower-casing it.
    #[arg(long)]
    pub preserve_case: bool,

    /// What to emit.
    #[arg(long, value_enum, default_value = "go")]
    pub format: OutputFormat,

    /// Print to stdout instead of writing the output file.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Go source with one struct per table.
    Go,
    /// The extracted table schemas as JSON.
    Json,
}

impl Cli {
    /// Builds the generator configuration from the flags.
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        let affix = |value: &Option<String>| value.clone().unwrap_or_default();
        GeneratorConfig::new()
            .with_tags(self.tags.iter().map(|t| t.trim().to_string()))
            .with_comment_tag(self.comment_tag.trim())
            .with_table_affix(affix(&self.table_prefix), affix(&self.table_suffix))
            .with_field_affix(affix(&self.field_prefix), affix(&self.field_suffix))
            .with_abbreviations(self.abbr.iter().map(String::as_str))
            .with_package(self.package.trim())
            .strict(self.strict)
            .preserve_case(self.preserve_case)
    }

    /// Resolves where the output goes.
    #[must_use]
    pub fn output_target(&self) -> OutputTarget {
        OutputTarget::resolve(
            &self.path,
            self.target.as_deref(),
            &self.file_name,
            self.mode,
        )
    }
}

fn parse_write_mode(s: &str) -> Result<WriteMode, DdlError> {
    s.parse()
}

fn non_empty(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(String::from("value must not be empty"));
    }
    Ok(trimmed.to_string())
}
