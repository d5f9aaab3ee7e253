//! DDL tokenizer implementation.

use super::token::is_separator;
use super::{Grouping, Span, Token};

/// A lexer that splits a DDL statement into quote-aware tokens.
///
/// The lexer never fails. Characters left over when the input runs out are
/// kept aside and can be inspected with [`Lexer::unterminated`].
pub struct Lexer {
    /// The input, as characters.
    chars: Vec<char>,
    /// The current character position.
    pos: usize,
    /// The character seen before `current`.
    previous: char,
    /// The character under the cursor on the last step.
    current: char,
    /// The grouping of the delimiter that opened the current token.
    active: Grouping,
    /// Partial token left when the input ended.
    unterminated: Option<Token>,
}

impl Lexer {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            previous: ' ',
            current: ' ',
            active: Grouping::Bare,
            unterminated: None,
        }
    }

    /// Returns the partial token left over at end of input, if any.
    ///
    /// A bare trailing word (`... ENGINE=InnoDB` with no closing separator)
    /// and an unclosed quote both end up here.
    #[must_use]
    pub const fn unterminated(&self) -> Option<&Token> {
        self.unterminated.as_ref()
    }

    /// Returns true once the input has been fully consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Scans the next token.
    pub fn next_token(&mut self) -> Option<Token> {
        let mut text = String::new();
        let mut start: Option<usize> = None;

        while self.pos < self.chars.len() {
            self.previous = self.current;
            self.current = self.chars[self.pos];

            let previous_is_sep = is_separator(self.previous);
            let current_is_sep = is_separator(self.current);
            let grouping = Grouping::of(self.current);

            // Collapse runs of separators between tokens.
            if start.is_none() && previous_is_sep && current_is_sep {
                self.pos += 1;
                continue;
            }

            let closes_bare = !previous_is_sep && current_is_sep && grouping == self.active;
            let closes_quoted = grouping.is_quoted() && grouping == self.active;
            if closes_bare || closes_quoted {
                if closes_quoted && self.chars.get(self.pos + 1) == Some(&self.current) {
                    // Doubled delimiter inside a quoted token.
                    text.push(self.current);
                    self.pos += 2;
                    continue;
                }
                let begin = start.unwrap_or(self.pos);
                let token = Token::new(self.active, text, Span::new(begin, self.pos));
                self.active = Grouping::Unclassified;
                self.pos += 1;
                return Some(token);
            }

            if start.is_none() && previous_is_sep && !current_is_sep {
                self.active = Grouping::of(self.previous);
                start = Some(self.pos);
            }

            text.push(self.current);
            self.pos += 1;
        }

        if !text.is_empty() {
            let begin = start.unwrap_or(self.pos);
            self.unterminated = Some(Token::new(
                self.active,
                text,
                Span::new(begin, self.chars.len()),
            ));
        }
        None
    }

    /// Tokenizes the entire input and returns all complete tokens.
    pub fn tokenize(&mut self) -> Vec<Token> {
        self.by_ref().collect()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
