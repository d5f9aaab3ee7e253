//! Schema extraction from a token stream.
//!
//! The extractor does not parse SQL. It classifies tokens by looking at the
//! grouping and text of the token before them:
//!
//! ```text
//! create table `users` ( `id` bigint(20) comment 'pk', key `idx` (`id`) )
//!              ───┬───   ─┬── ───┬──             ─┬─       ──┬──
//!                 │       │      │                │          └── stop: follows `key`
//!                 │       │      │                └── comment: follows `comment`
//!                 │       │      └── field type: follows a backquoted token
//!                 │       └── field: backquoted
//!                 └── table: first backquoted token
//! ```

use tracing::{debug, trace};

use crate::error::{DdlError, Result};
use crate::lexer::{Grouping, Lexer, Token};
use crate::schema::{ColumnInfo, TableSchema};

/// The role a token plays in the table definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The table name.
    Table,
    /// A column name; starts a new field.
    Field,
    /// The type of the pending field.
    FieldType,
    /// The comment of the pending field.
    Comment,
}

/// What to do with one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// An index or key clause was reached; discard the rest.
    Stop,
    /// Apply the roles in order (possibly none).
    Classify(Vec<Role>),
}

/// Classification state carried from one token to the next.
#[derive(Debug, Default)]
struct Classifier {
    /// Number of roles assigned so far.
    classified: usize,
    previous_grouping: Option<Grouping>,
    /// Lower-cased text of the previous token.
    previous_text: String,
}

impl Classifier {
    fn decide(&self, token: &Token) -> Decision {
        let previous_backquoted = self.previous_grouping == Some(Grouping::BackQuoted);

        if token.is_backquoted() {
            let index_clause = (previous_backquoted && self.classified > 1)
                || self.previous_text == "key";
            if self.classified > 0 && index_clause {
                return Decision::Stop;
            }
            let role = if self.classified == 0 {
                Role::Table
            } else {
                Role::Field
            };
            return Decision::Classify(vec![role]);
        }

        let mut roles = Vec::new();
        if previous_backquoted {
            roles.push(Role::FieldType);
        }
        if self.previous_text == "comment" {
            roles.push(Role::Comment);
        }
        Decision::Classify(roles)
    }

    fn advance(&mut self, token: &Token, assigned: usize) {
        self.classified += assigned;
        self.previous_grouping = Some(token.grouping);
        self.previous_text = token.text.to_lowercase();
    }
}

/// Builds a [`TableSchema`] from one `CREATE TABLE` statement.
///
/// In lenient mode (the default) a column that never receives a type is
/// dropped and a trailing unclosed quote is ignored. In strict mode both are
/// reported as errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    strict: bool,
}

impl Extractor {
    /// Creates a lenient extractor.
    #[must_use]
    pub const fn new() -> Self {
        Self { strict: false }
    }

    /// Enables or disables strict mode.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Extracts the table schema from a statement.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::EmptyInput`] if no table name is found, and in
    /// strict mode [`DdlError::MalformedField`] or
    /// [`DdlError::UnterminatedQuote`].
    pub fn extract(&self, statement: &str) -> Result<TableSchema> {
        let mut lexer = Lexer::new(statement);
        let mut classifier = Classifier::default();
        let mut schema = TableSchema::default();
        let mut pending: Option<ColumnInfo> = None;
        let mut stopped = false;

        for token in lexer.by_ref() {
            let roles = match classifier.decide(&token) {
                Decision::Stop => {
                    trace!(token = %token.text, "index clause reached");
                    stopped = true;
                    break;
                }
                Decision::Classify(roles) => roles,
            };

            for role in &roles {
                trace!(?role, token = %token.text, "classified");
                match role {
                    Role::Table => schema.table_name.clone_from(&token.text),
                    Role::Field => {
                        self.flush(&mut schema, pending.take())?;
                        pending = Some(ColumnInfo::new(token.text.as_str(), ""));
                    }
                    Role::FieldType => match pending.as_mut() {
                        Some(field) => field.raw_type.clone_from(&token.text),
                        None => trace!(token = %token.text, "type without field ignored"),
                    },
                    Role::Comment => match pending.as_mut() {
                        Some(field) => field.comment = Some(token.text.clone()),
                        None => trace!(token = %token.text, "comment without field ignored"),
                    },
                }
            }
            classifier.advance(&token, roles.len());
        }

        if self.strict && !stopped {
            if let Some(rest) = lexer.unterminated() {
                if rest.grouping.is_quoted() {
                    return Err(DdlError::UnterminatedQuote {
                        grouping: rest.grouping,
                        position: rest.span.start,
                    });
                }
            }
        }

        self.flush(&mut schema, pending.take())?;

        if schema.table_name.is_empty() {
            return Err(DdlError::EmptyInput(String::from(
                "statement has no backquoted table name",
            )));
        }
        debug!(
            table = %schema.table_name,
            fields = schema.fields.len(),
            "extracted table"
        );
        Ok(schema)
    }

    /// Moves a finished field into the schema.
    fn flush(&self, schema: &mut TableSchema, field: Option<ColumnInfo>) -> Result<()> {
        let Some(field) = field else {
            return Ok(());
        };
        if field.is_complete() {
            schema.fields.push(field);
        } else if self.strict {
            return Err(DdlError::MalformedField {
                table: schema.table_name.clone(),
                field: field.name,
            });
        } else {
            debug!(field = %field.name, "dropping field without type");
        }
        Ok(())
    }
}

/// Extracts a table schema with the lenient extractor.
///
/// The statement is used as given; callers that want case-insensitive
/// output lower-case it first.
///
/// # Errors
///
/// Returns [`DdlError::EmptyInput`] if no table name is found.
pub fn extract_schema(statement: &str) -> Result<TableSchema> {
    Extractor::new().extract(statement)
}
