//! Token types for the DDL lexer.

use std::fmt;

use super::Span;

/// The delimiter style that opened (and closed) a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grouping {
    /// Delimited by whitespace, parentheses or commas.
    Bare,
    /// Delimited by single quotes (string literals).
    SingleQuoted,
    /// Delimited by backquotes (identifiers).
    BackQuoted,
    /// Not a delimiter.
    Unclassified,
}

impl Grouping {
    /// Classifies a single character.
    #[must_use]
    pub fn of(c: char) -> Self {
        match c {
            '\'' => Self::SingleQuoted,
            '`' => Self::BackQuoted,
            '(' | ')' | ',' => Self::Bare,
            c if c.is_whitespace() => Self::Bare,
            _ => Self::Unclassified,
        }
    }

    /// Returns true for the two quoting styles.
    #[must_use]
    pub const fn is_quoted(self) -> bool {
        matches!(self, Self::SingleQuoted | Self::BackQuoted)
    }

    /// Returns a human readable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bare => "bare",
            Self::SingleQuoted => "single-quoted",
            Self::BackQuoted => "backquoted",
            Self::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if `c` separates tokens.
#[must_use]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | ',' | '\'' | '`')
}

/// A token with its grouping and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// How the token was delimited.
    pub grouping: Grouping,
    /// The token text, without delimiters.
    pub text: String,
    /// Location of the text in the statement.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(grouping: Grouping, text: impl Into<String>, span: Span) -> Self {
        Self {
            grouping,
            text: text.into(),
            span,
        }
    }

    /// Returns true if the token was backquoted.
    #[must_use]
    pub fn is_backquoted(&self) -> bool {
        self.grouping == Grouping::BackQuoted
    }

    /// Compares the token text against a lower-case keyword, ignoring case.
    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.text.eq_ignore_ascii_case(keyword)
    }
}
