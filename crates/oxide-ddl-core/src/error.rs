//! Error types for DDL extraction and rendering.

use crate::lexer::Grouping;

/// Errors that can occur while turning DDL into structs.
#[derive(Debug, thiserror::Error)]
pub enum DdlError {
    /// A configuration value is outside its allowed set.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Nothing to convert.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A column name was never followed by a type.
    #[error("Field '{field}' of table '{table}' has no type")]
    MalformedField {
        /// Table the field belongs to.
        table: String,
        /// The raw field name.
        field: String,
    },

    /// A quoted token was still open when the statement ended.
    #[error("Unterminated {grouping} token starting at position {position}")]
    UnterminatedQuote {
        /// Which quote was left open.
        grouping: Grouping,
        /// Character offset of the token text.
        position: usize,
    },
}

/// Result type for DDL operations.
pub type Result<T> = std::result::Result<T, DdlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DdlError::MalformedField {
            table: String::from("users"),
            field: String::from("name"),
        };
        assert_eq!(err.to_string(), "Field 'name' of table 'users' has no type");

        let err = DdlError::UnterminatedQuote {
            grouping: Grouping::SingleQuoted,
            position: 14,
        };
        assert_eq!(
            err.to_string(),
            "Unterminated single-quoted token starting at position 14"
        );
    }
}
