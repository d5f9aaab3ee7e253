//! # oxide-ddl-core
//!
//! Turns MySQL `CREATE TABLE` statements into tagged Go structs.
//!
//! The pipeline has four stages:
//! - a quote-aware [`Lexer`] that splits a statement into bare words,
//!   single-quoted literals and backquoted identifiers;
//! - an [`Extractor`] that classifies those tokens into a [`TableSchema`];
//! - identifier and type resolution ([`transform_identifier`],
//!   [`resolve_type`]);
//! - a renderer that lays out aligned struct definitions.
//!
//! No grammar is enforced. Anything after the first index or key clause is
//! ignored, and size qualifiers such as `(20)` never reach the type mapper.
//!
//! ## Example
//!
//! ```rust
//! use oxide_ddl_core::{Generator, GeneratorConfig};
//!
//! let config = GeneratorConfig::new().with_table_affix("t_", "");
//! let generator = Generator::new(config).unwrap();
//!
//! let structs = generator
//!     .convert(&["CREATE TABLE `t_user` (`id` BIGINT(20) COMMENT 'pk', `name` VARCHAR(64))"])
//!     .unwrap();
//!
//! assert_eq!(
//!     structs[0],
//!     "type User struct {\n\
//!      \tID   int64  `json:\"id\" db:\"id\" comment:\"pk\"`\n\
//!      \tName string `json:\"name\" db:\"name\"`\n\
//!      }"
//! );
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod generator;
pub mod ident;
pub mod lexer;
pub mod render;
pub mod schema;
pub mod statements;
pub mod types;

pub use config::{GeneratorConfig, WriteMode};
pub use error::{DdlError, Result};
pub use extract::{extract_schema, Extractor};
pub use generator::Generator;
pub use ident::{pascal_case, transform_identifier, Abbreviations, Affix, IdentTransformer};
pub use lexer::{Grouping, Lexer, Token};
pub use render::{format_file, format_struct, render_schema, RenderedField, RenderedStruct};
pub use schema::{ColumnInfo, TableSchema};
pub use statements::create_statements;
pub use types::{resolve_type, GoType, TypeMapping};
