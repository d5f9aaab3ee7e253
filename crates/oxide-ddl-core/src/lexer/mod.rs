//! Quote-aware DDL tokenizer.
//!
//! The lexer does not know SQL grammar. It only tracks which delimiter opened
//! the current token (whitespace, a single quote or a backquote) and closes
//! the token at the next matching delimiter.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Grouping, Token};
pub use tokenizer::Lexer;
